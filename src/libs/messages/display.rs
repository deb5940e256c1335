//! Display text for [`Message`].
//!
//! All user-facing wording is kept here so commands only deal with variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TRACKING MESSAGES ===
            Message::StartedTracking(bucket) => format!("Started tracking {}", bucket),
            Message::StartedTrackingSince(bucket, since) => format!("Started tracking {} since {}", bucket, since),
            Message::StoppedPrevious(label) => format!("Stopped {}", label),
            Message::StoppedTracking(label) => format!("Stopped tracking {}", label),
            Message::NothingToStop => "Nothing to stop".to_string(),

            // === STATUS MESSAGES ===
            Message::RunningEntry(label, start) => format!("Tracking {} since {}", label, start),
            Message::NothingRunning => "Nothing is being tracked".to_string(),

            // === BUCKET MESSAGES ===
            Message::BucketsHeader(path) => format!("Buckets in {}", path),
            Message::NoBucketsConfigured(path) => format!("No buckets configured in {}", path),

            // === ARGUMENT MESSAGES ===
            Message::SinceIgnored(command) => format!("--since has no effect on \"{}\" and was ignored", command),

            // === ERRORS ===
            Message::CommandFailed(error) => error.clone(),
        };
        write!(f, "{}", text)
    }
}
