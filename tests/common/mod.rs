#![allow(dead_code)]

use dcl::api::{NewTimeEntry, TimeEntry, TimeInterval, TimeTracker, User};
use dcl::libs::config::Config;
use dcl::libs::error::{DclError, Result};
use std::cell::{Cell, RefCell};

pub const SAMPLE_CONFIG: &str = r#"
workspace_id: ws1
api_key: key1
buckets:
  gtd_meeting:
    project_id: p1
    task_id: t1
    description: GTD meeting
  jamaica:
    project_id: p2
  overhead:
    project_id: p3
    task_id: t3
    tag_ids: [tag1, tag2]
    billable: false
"#;

pub fn sample_config() -> Config {
    Config::parse(SAMPLE_CONFIG).unwrap()
}

/// One call made against the [`RecordingTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    RunningEntry { workspace_id: String, user_id: String },
    StopRunning { workspace_id: String, user_id: String, end: String },
    CreateEntry { workspace_id: String, entry: NewTimeEntry },
}

/// In-memory Clockify stand-in that records every call.
pub struct RecordingTracker {
    pub calls: RefCell<Vec<Call>>,
    running: RefCell<Option<TimeEntry>>,
    create_error: Option<(u16, String)>,
    next_id: Cell<u32>,
}

impl RecordingTracker {
    pub fn idle() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            running: RefCell::new(None),
            create_error: None,
            next_id: Cell::new(1),
        }
    }

    pub fn running(entry: TimeEntry) -> Self {
        let tracker = Self::idle();
        *tracker.running.borrow_mut() = Some(entry);
        tracker
    }

    pub fn failing_create(mut self, status: u16, message: &str) -> Self {
        self.create_error = Some((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn current(&self) -> Option<TimeEntry> {
        self.running.borrow().clone()
    }

    pub fn created(&self) -> Vec<NewTimeEntry> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateEntry { entry, .. } => Some(entry),
                _ => None,
            })
            .collect()
    }
}

impl TimeTracker for RecordingTracker {
    fn current_user(&self) -> Result<User> {
        self.calls.borrow_mut().push(Call::CurrentUser);
        Ok(User {
            id: "u1".to_string(),
            name: Some("Nicola".to_string()),
            default_workspace: Some("ws1".to_string()),
        })
    }

    fn running_entry(&self, workspace_id: &str, user_id: &str) -> Result<Option<TimeEntry>> {
        self.calls.borrow_mut().push(Call::RunningEntry {
            workspace_id: workspace_id.to_string(),
            user_id: user_id.to_string(),
        });
        Ok(self.current())
    }

    fn stop_running(&self, workspace_id: &str, user_id: &str, end: &str) -> Result<bool> {
        self.calls.borrow_mut().push(Call::StopRunning {
            workspace_id: workspace_id.to_string(),
            user_id: user_id.to_string(),
            end: end.to_string(),
        });
        Ok(self.running.borrow_mut().take().is_some())
    }

    fn create_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry> {
        self.calls.borrow_mut().push(Call::CreateEntry {
            workspace_id: workspace_id.to_string(),
            entry: entry.clone(),
        });
        if let Some((status, message)) = &self.create_error {
            return Err(DclError::ApiError {
                status: *status,
                message: message.clone(),
            });
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = TimeEntry {
            id: format!("new{}", id),
            description: Some(entry.description.clone()),
            project_id: Some(entry.project_id.clone()),
            task_id: entry.task_id.clone(),
            time_interval: TimeInterval {
                start: entry.start.clone(),
                end: None,
            },
        };
        *self.running.borrow_mut() = Some(created.clone());
        Ok(created)
    }
}

pub fn entry(id: &str, project_id: &str, task_id: Option<&str>, start: &str) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        description: None,
        project_id: Some(project_id.to_string()),
        task_id: task_id.map(str::to_string),
        time_interval: TimeInterval {
            start: start.to_string(),
            end: None,
        },
    }
}
