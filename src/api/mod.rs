//! Clockify API access.
//!
//! The [`TimeTracker`] trait is the seam between the tracking logic and the
//! network. [`Clockify`] implements it over HTTPS; tests substitute an
//! in-memory recorder.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dcl::api::{Clockify, TimeTracker};
//! use dcl::libs::config::Config;
//!
//! let config = Config::read()?;
//! let clockify = Clockify::new(&config)?;
//! let user = clockify.current_user()?;
//! let running = clockify.running_entry(&config.workspace_id, &user.id)?;
//! # Ok::<(), dcl::libs::error::DclError>(())
//! ```

use crate::libs::error::Result;
use serde::{Deserialize, Serialize};

pub mod clockify;

pub use clockify::Clockify;

/// The authenticated Clockify user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default_workspace: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// A time entry as returned by Clockify.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    pub time_interval: TimeInterval,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.time_interval.end.is_none()
    }
}

/// Request body for creating a time entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub start: String,
    pub billable: bool,
    pub description: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub tag_ids: Vec<String>,
}

/// Remote time-tracking operations used by dcl.
///
/// All calls are blocking and issued one after another.
pub trait TimeTracker {
    /// Returns the user owning the API key.
    fn current_user(&self) -> Result<User>;

    /// Returns the user's running entry in `workspace_id`, if any.
    fn running_entry(&self, workspace_id: &str, user_id: &str) -> Result<Option<TimeEntry>>;

    /// Ends the user's running entry at `end` (a Zulu timestamp).
    ///
    /// Returns `false` when no entry was running.
    fn stop_running(&self, workspace_id: &str, user_id: &str, end: &str) -> Result<bool>;

    /// Creates a new entry and returns it as stored by Clockify.
    fn create_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry>;
}
