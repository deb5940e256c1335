//! List configured buckets. Works offline.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};

pub fn cmd(config: &Config) -> anyhow::Result<()> {
    let path = DataStorage::new().get_path(CONFIG_FILE_NAME).display().to_string();
    if config.buckets.is_empty() {
        msg_info!(Message::NoBucketsConfigured(path));
        return Ok(());
    }

    msg_print!(Message::BucketsHeader(path));
    View::buckets(config).printstd();
    Ok(())
}
