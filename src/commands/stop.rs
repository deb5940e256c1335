//! Stop the running time entry.

use crate::api::TimeTracker;
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::tracker::{StopOutcome, Tracker};
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use chrono::{DateTime, TimeZone};

pub fn run<T: TimeTracker, Tz: TimeZone>(api: &T, config: &Config, now: &DateTime<Tz>) -> Result<StopOutcome> {
    Tracker::new(api, config).stop(now)
}

/// Stopping with nothing running succeeds with "Nothing to stop".
pub fn cmd<T: TimeTracker, Tz: TimeZone>(api: &T, config: &Config, now: &DateTime<Tz>) -> anyhow::Result<()> {
    match run(api, config, now)? {
        StopOutcome::Stopped(entry) => msg_success!(Message::StoppedTracking(View::entry_label(&entry, config))),
        StopOutcome::NothingRunning => msg_info!(Message::NothingToStop),
    }
    Ok(())
}
