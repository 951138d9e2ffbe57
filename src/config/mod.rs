use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Date stored when neither an override nor a `date` column provides one.
pub const DEFAULT_DATE: &str = "25.10.2025";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_date")]
    pub default_date: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_log_imports")]
    pub log_imports: bool,
}

fn default_date() -> String {
    DEFAULT_DATE.to_string()
}
fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}
fn default_log_imports() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_date: default_date(),
            date_format: default_date_format(),
            log_imports: default_log_imports(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rseatimport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rseatimport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rseatimport.conf")
    }

    /// Load configuration from `custom` (or the standard location).
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to `null`, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }
}
