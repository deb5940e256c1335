//! Start, stop and status semantics on top of a [`TimeTracker`].
//!
//! Clockify keeps at most one running entry per user, so switching buckets
//! is "stop whatever runs, then create". Each operation is a short sequence
//! of blocking calls with no retry and no compensation: if the stop succeeds
//! and the create fails, nothing is left running.

use super::clock::zulu;
use super::config::{Bucket, Config};
use super::error::Result;
use crate::api::{NewTimeEntry, TimeEntry, TimeTracker};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Result of [`Tracker::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOutcome {
    /// Entry that was running before and got stopped.
    pub stopped: Option<TimeEntry>,
    pub started: TimeEntry,
}

/// Result of [`Tracker::stop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped(TimeEntry),
    NothingRunning,
}

pub struct Tracker<'a, T: TimeTracker> {
    api: &'a T,
    config: &'a Config,
}

impl<'a, T: TimeTracker> Tracker<'a, T> {
    pub fn new(api: &'a T, config: &'a Config) -> Self {
        Self { api, config }
    }

    fn user_id(&self) -> Result<String> {
        match &self.config.user_id {
            Some(user_id) => Ok(user_id.clone()),
            None => Ok(self.api.current_user()?.id),
        }
    }

    /// Starts tracking `bucket` at `since`, stopping the running entry first.
    ///
    /// The previous entry ends one minute before `since` so the two entries
    /// never overlap, but never before its own start.
    pub fn start<Tz: TimeZone>(&self, bucket: &Bucket, since: &DateTime<Tz>) -> Result<StartOutcome> {
        let workspace_id = &self.config.workspace_id;
        let user_id = self.user_id()?;

        let stopped = match self.api.running_entry(workspace_id, &user_id)? {
            Some(running) => {
                let end = end_before(&running, since);
                tracing::debug!(entry = %running.id, %end, "stopping running entry before switching");
                self.api.stop_running(workspace_id, &user_id, &end)?.then_some(running)
            }
            None => None,
        };

        let entry = new_entry(bucket, since);
        tracing::debug!(bucket = %bucket.name, start = %entry.start, "creating time entry");
        let started = self.api.create_entry(workspace_id, &entry)?;

        Ok(StartOutcome { stopped, started })
    }

    /// Stops the running entry one minute before `now`, never before its
    /// own start.
    ///
    /// Nothing running is not an error; only the status check is issued.
    pub fn stop<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<StopOutcome> {
        let workspace_id = &self.config.workspace_id;
        let user_id = self.user_id()?;

        let Some(running) = self.api.running_entry(workspace_id, &user_id)? else {
            return Ok(StopOutcome::NothingRunning);
        };

        let end = end_before(&running, now);
        if self.api.stop_running(workspace_id, &user_id, &end)? {
            Ok(StopOutcome::Stopped(running))
        } else {
            Ok(StopOutcome::NothingRunning)
        }
    }

    /// Returns the running entry, if any.
    pub fn status(&self) -> Result<Option<TimeEntry>> {
        let user_id = self.user_id()?;
        self.api.running_entry(&self.config.workspace_id, &user_id)
    }
}

/// Builds the create request for `bucket` starting at `start`.
pub fn new_entry<Tz: TimeZone>(bucket: &Bucket, start: &DateTime<Tz>) -> NewTimeEntry {
    NewTimeEntry {
        start: zulu(start),
        billable: bucket.billable,
        description: bucket.description.clone(),
        project_id: bucket.project_id.clone(),
        task_id: bucket.task_id.clone(),
        tag_ids: bucket.tag_ids.clone(),
    }
}

/// End time for `running` when something else takes over at `moment`.
fn end_before<Tz: TimeZone>(running: &TimeEntry, moment: &DateTime<Tz>) -> String {
    let end = moment.with_timezone(&Utc) - TimeDelta::minutes(1);
    let end = match DateTime::parse_from_rfc3339(&running.time_interval.start) {
        Ok(start) => end.max(start.with_timezone(&Utc)),
        Err(_) => end,
    };
    zulu(&end)
}
