//! Show the running time entry.

use crate::api::{TimeEntry, TimeTracker};
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

pub fn run<T: TimeTracker>(api: &T, config: &Config) -> Result<Option<TimeEntry>> {
    Tracker::new(api, config).status()
}

pub fn cmd<T: TimeTracker>(api: &T, config: &Config) -> anyhow::Result<()> {
    match run(api, config)? {
        Some(entry) => {
            let start = local_start(&entry.time_interval.start, &Local);
            msg_print!(Message::RunningEntry(View::entry_label(&entry, config), start));
        }
        None => msg_info!(Message::NothingRunning),
    }
    Ok(())
}

/// Shows a Clockify start timestamp as `HH:MM` in `zone`, or as-is if it
/// does not parse.
fn local_start<Tz: TimeZone>(start: &str, zone: &Tz) -> String
where
    Tz::Offset: Display,
{
    DateTime::parse_from_rfc3339(start)
        .map(|moment| moment.with_timezone(zone).format("%H:%M").to_string())
        .unwrap_or_else(|_| start.to_string())
}
