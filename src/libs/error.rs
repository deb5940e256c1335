//! Error taxonomy for dcl.
//!
//! Every failure the tool can report is one of the variants below. Library
//! code returns [`Result<T>`]; the command dispatcher turns the error into a
//! single line on stderr and a non-zero exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading configuration, validating input or talking
/// to Clockify.
#[derive(Debug, Error)]
pub enum DclError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file could not be read or is not valid YAML.
    #[error("Failed to parse configuration {}: {reason}", .path.display())]
    ConfigParseError { path: PathBuf, reason: String },

    /// The configuration parsed but is missing or has invalid values.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The requested bucket is not defined in the configuration.
    #[error("Unknown bucket \"{name}\". Valid buckets: {}", format_bucket_names(.valid))]
    UnknownBucket { name: String, valid: Vec<String> },

    /// `--since` is not a valid `HH:MM` time of day.
    #[error("Invalid time \"{0}\". Expected HH:MM (24-hour clock)")]
    InvalidTimeFormat(String),

    /// `--since` points to a time later than now.
    #[error("Start time {0} is in the future")]
    SinceInFuture(String),

    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Clockify answered with a non-success status.
    #[error("Clockify API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, DclError>;

fn format_bucket_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none configured)".to_string()
    } else {
        names.join(", ")
    }
}

impl From<reqwest::Error> for DclError {
    fn from(err: reqwest::Error) -> Self {
        DclError::NetworkError(err.to_string())
    }
}
