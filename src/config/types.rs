use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ctas configuration, read from `config.toml` in the install root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File locations
    #[serde(rename = "Paths")]
    pub paths: Paths,

    /// Per-user settings
    #[serde(rename = "User")]
    pub user: User,
}

/// File locations, relative to the install root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    /// Stamp catalog (JSON)
    #[serde(rename = "StampsPath")]
    pub stamps_path: PathBuf,

    /// Stamp database (SQLite)
    #[serde(rename = "DBPath")]
    pub db_path: PathBuf,
}

/// Per-user settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stamper name used when `--stamper` is not given
    #[serde(rename = "Stamper")]
    pub stamper: String,

    /// Target working hours per day
    #[serde(rename = "DailyHours")]
    pub daily_hours: f64,
}

impl Config {
    /// Absolute path of the stamp catalog
    pub fn stamps_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.stamps_path)
    }

    /// Absolute path of the stamp database
    pub fn db_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.db_path)
    }

    /// Daily target as a duration
    pub fn daily_target(&self) -> Duration {
        Duration::milliseconds((self.user.daily_hours * 3_600_000.0).round() as i64)
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            stamps_path: PathBuf::from("stamps.json"),
            db_path: PathBuf::from("stamps.db"),
        }
    }
}

impl Default for User {
    fn default() -> Self {
        let stamper = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "me".to_string());
        Self {
            stamper,
            daily_hours: 8.0,
        }
    }
}
