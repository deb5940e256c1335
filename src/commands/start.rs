//! Start tracking a bucket.

use crate::api::TimeTracker;
use crate::libs::clock::resolve_since;
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::tracker::{StartOutcome, Tracker};
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use chrono::{DateTime, TimeZone};

/// Validates the bucket and `--since`, then starts the entry.
///
/// Both checks happen before any request is sent, so an unknown bucket or a
/// malformed time never touches the network.
///
/// # Errors
///
/// - [`UnknownBucket`](crate::libs::error::DclError::UnknownBucket)
/// - [`InvalidTimeFormat`](crate::libs::error::DclError::InvalidTimeFormat) /
///   [`SinceInFuture`](crate::libs::error::DclError::SinceInFuture)
/// - any API error from the stop or create calls
pub fn run<T: TimeTracker, Tz: TimeZone>(
    api: &T,
    config: &Config,
    bucket: &str,
    since: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<StartOutcome> {
    let bucket = config.bucket(bucket)?;
    let start = match since {
        Some(value) => resolve_since(value, now)?,
        None => now.clone(),
    };

    Tracker::new(api, config).start(bucket, &start)
}

pub fn cmd<T: TimeTracker, Tz: TimeZone>(
    api: &T,
    config: &Config,
    bucket: &str,
    since: Option<&str>,
    now: &DateTime<Tz>,
) -> anyhow::Result<()> {
    let outcome = run(api, config, bucket, since, now)?;

    if let Some(stopped) = &outcome.stopped {
        msg_info!(Message::StoppedPrevious(View::entry_label(stopped, config)));
    }
    match since {
        Some(value) => msg_success!(Message::StartedTrackingSince(bucket.to_string(), value.trim().to_string())),
        None => msg_success!(Message::StartedTracking(bucket.to_string())),
    }
    Ok(())
}
