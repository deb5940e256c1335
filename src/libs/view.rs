use super::config::Config;
use crate::api::TimeEntry;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Table of configured buckets, sorted by name.
    pub fn buckets(config: &Config) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["BUCKET", "PROJECT", "TASK", "DESCRIPTION"]);
        for bucket in config.buckets.values() {
            table.add_row(row![
                bucket.name,
                bucket.project_id,
                bucket.task_id.as_deref().unwrap_or("-"),
                bucket.description
            ]);
        }

        table
    }

    /// Short human label for an entry: the bucket it belongs to, else its
    /// description, else its id.
    pub fn entry_label(entry: &TimeEntry, config: &Config) -> String {
        let project_id = entry.project_id.as_deref();
        let task_id = entry.task_id.as_deref();
        let description = entry.description.as_deref().unwrap_or_default();

        let mut matching = config
            .buckets
            .values()
            .filter(|bucket| Some(bucket.project_id.as_str()) == project_id && bucket.task_id.as_deref() == task_id)
            .peekable();
        let first = matching.peek().cloned();
        if let Some(bucket) = matching.find(|bucket| bucket.description == description).or(first) {
            return bucket.name.clone();
        }

        if !description.trim().is_empty() {
            return description.to_string();
        }
        format!("entry {}", entry.id)
    }
}
