//! Configuration loading for dcl.
//!
//! The configuration is a user-edited YAML file, `config.yaml`, stored in the
//! directory resolved by [`DataStorage`]. It holds the Clockify credentials
//! and the set of buckets:
//!
//! ```yaml
//! workspace_id: 5f1c0ffee0ddba11c0ffee00
//! api_key: XXXXXXXXXXXXXXXX
//! buckets:
//!   gtd_meeting:
//!     project_id: 5f1c0ffee0ddba11c0ffee01
//!     task_id: 5f1c0ffee0ddba11c0ffee02
//!     description: Weekly planning
//! ```
//!
//! Loading is two-phase. The YAML document is first deserialized into
//! [`RawConfig`], where every field is optional, so that syntax problems and
//! schema problems produce different errors. [`RawConfig::validate`] then
//! builds the fully typed [`Config`], failing on the first missing or invalid
//! value.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dcl::libs::config::Config;
//!
//! let config = Config::read()?;
//! let bucket = config.bucket("gtd_meeting")?;
//! println!("{}", bucket.project_id);
//! # Ok::<(), dcl::libs::error::DclError>(())
//! ```

use super::data_storage::DataStorage;
use super::error::{DclError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Configuration file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Clockify REST API root used when `base_url` is not configured.
pub const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";

/// Names taken by subcommands; a bucket with one of these names could never
/// be started.
pub const RESERVED_NAMES: [&str; 3] = ["stop", "list", "status"];

/// A named alias for a Clockify project and optional task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub project_id: String,
    pub task_id: Option<String>,
    /// Description put on every entry started for this bucket.
    pub description: String,
    pub tag_ids: Vec<String>,
    pub billable: bool,
}

/// Validated configuration for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub workspace_id: String,
    pub api_key: String,
    /// Clockify user id. Looked up through the API when not configured.
    pub user_id: Option<String>,
    pub base_url: String,
    pub buckets: BTreeMap<String, Bucket>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("workspace_id", &self.workspace_id)
            .field("api_key", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("base_url", &self.base_url)
            .field("buckets", &self.buckets.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Bucket entry as written in YAML, before validation.
#[derive(Deserialize, Debug, Default)]
pub struct RawBucket {
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    pub billable: Option<bool>,
}

/// Configuration document as written in YAML, before validation.
#[derive(Deserialize, Debug, Default)]
pub struct RawConfig {
    pub workspace_id: Option<String>,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub buckets: BTreeMap<String, RawBucket>,
}

impl RawConfig {
    /// Checks required keys and builds the typed [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`DclError::ConfigInvalid`] when `workspace_id` or `api_key` is
    /// missing or blank, when a bucket has no `project_id`, or when a bucket
    /// is named after a subcommand.
    pub fn validate(self) -> Result<Config> {
        let workspace_id = required(self.workspace_id, "workspace_id")?;
        let api_key = required(self.api_key, "api_key")?;
        let user_id = non_blank(self.user_id);
        let base_url = non_blank(self.base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut buckets = BTreeMap::new();
        for (name, raw) in self.buckets {
            if RESERVED_NAMES.contains(&name.as_str()) {
                return Err(DclError::ConfigInvalid(format!("bucket name \"{}\" is reserved for a command", name)));
            }
            let project_id = required(raw.project_id, &format!("buckets.{}.project_id", name))?;
            let bucket = Bucket {
                name: name.clone(),
                project_id,
                task_id: non_blank(raw.task_id),
                description: raw.description.unwrap_or_default(),
                tag_ids: raw.tag_ids,
                billable: raw.billable.unwrap_or(true),
            };
            buckets.insert(name, bucket);
        }

        Ok(Config {
            workspace_id,
            api_key,
            user_id,
            base_url,
            buckets,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    non_blank(value).ok_or_else(|| DclError::ConfigInvalid(format!("missing required key \"{}\"", key)))
}

impl Config {
    /// Reads `config.yaml` from the configuration directory.
    ///
    /// # Errors
    ///
    /// See [`Config::read_from`].
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME);
        Self::read_from(&config_file_path)
    }

    /// Reads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// - [`DclError::ConfigNotFound`] when the file does not exist
    /// - [`DclError::ConfigParseError`] when it cannot be read or is not valid YAML
    /// - [`DclError::ConfigInvalid`] when required keys are missing
    pub fn read_from(path: &Path) -> Result<Config> {
        let config_str = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => DclError::ConfigNotFound(path.to_path_buf()),
            _ => DclError::ConfigParseError {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        })?;
        tracing::debug!(path = %path.display(), "read configuration file");

        Self::parse(&config_str).map_err(|err| match err {
            DclError::ConfigParseError { reason, .. } => DclError::ConfigParseError {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parses a YAML document into a validated configuration.
    ///
    /// An empty document is treated as an empty mapping, so it fails on the
    /// first missing key rather than as a parse error.
    pub fn parse(yaml: &str) -> Result<Config> {
        let raw: RawConfig = if yaml.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str::<Option<RawConfig>>(yaml)
                .map_err(|err| DclError::ConfigParseError {
                    path: CONFIG_FILE_NAME.into(),
                    reason: err.to_string(),
                })?
                .unwrap_or_default()
        };
        raw.validate()
    }

    /// Looks up a bucket by name.
    ///
    /// # Errors
    ///
    /// Returns [`DclError::UnknownBucket`] listing every configured name.
    pub fn bucket(&self, name: &str) -> Result<&Bucket> {
        self.buckets.get(name).ok_or_else(|| DclError::UnknownBucket {
            name: name.to_string(),
            valid: self.bucket_names(),
        })
    }

    /// Bucket names in sorted order.
    pub fn bucket_names(&self) -> Vec<String> {
        self.buckets.keys().cloned().collect()
    }
}
