/// Every user-facing line dcl prints.
///
/// Text lives in the `Display` implementation in `display.rs`; callers pass
/// variants to the `msg_*!` macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TRACKING MESSAGES ===
    StartedTracking(String),              // bucket
    StartedTrackingSince(String, String), // bucket, HH:MM
    StoppedPrevious(String),              // entry label
    StoppedTracking(String),              // entry label
    NothingToStop,

    // === STATUS MESSAGES ===
    RunningEntry(String, String), // entry label, start
    NothingRunning,

    // === BUCKET MESSAGES ===
    BucketsHeader(String), // config path
    NoBucketsConfigured(String),

    // === ARGUMENT MESSAGES ===
    SinceIgnored(String), // command

    // === ERRORS ===
    CommandFailed(String), // error text
}
