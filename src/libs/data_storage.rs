use std::env::var_os;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "dimagi-clockify-cli";
pub const CONFIG_DIR_ENV: &str = "DCL_CONFIG_DIR";

/// Locates the directory holding `config.yaml`.
///
/// `DCL_CONFIG_DIR` wins when set and non-empty, otherwise the directory is
/// `$HOME/.config/dimagi-clockify-cli`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self::resolve(var_os(CONFIG_DIR_ENV), var_os("HOME"))
    }

    pub fn resolve(config_dir: Option<OsString>, home: Option<OsString>) -> Self {
        let base_path = match config_dir.filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = home.unwrap_or_else(|| ".".into());
                Path::new(&home).join(".config").join(APP_NAME)
            }
        };

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
