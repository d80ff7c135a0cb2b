//! Configuration module
//!
//! Resolves the install root from `CTAS_PATH` and handles loading and
//! saving of its `config.toml`.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Paths, User};

use crate::error::{CtasError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the install root
pub const ROOT_ENV: &str = "CTAS_PATH";

/// Config file name inside the install root
pub const CONFIG_FILE: &str = "config.toml";

/// Install root from the environment, if set
pub fn install_root() -> Option<PathBuf> {
    std::env::var_os(ROOT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        CtasError::Config(format!(
            "Cannot read config from '{}': {}. Run 'ctas config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    tracing::debug!(
        path = %path.display(),
        stamper = %config.user.stamper,
        daily_hours = config.user.daily_hours,
        "loaded config"
    );
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| CtasError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    let hours = config.user.daily_hours;
    if !hours.is_finite() || hours <= 0.0 {
        return Err(CtasError::Config(format!(
            "DailyHours must be a positive number, got {}",
            hours
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_install_root_from_env() {
        std::env::set_var(ROOT_ENV, "/opt/ctas");
        assert_eq!(install_root(), Some(PathBuf::from("/opt/ctas")));
        std::env::remove_var(ROOT_ENV);
    }

    #[test]
    #[serial]
    fn test_install_root_unset_or_empty() {
        std::env::remove_var(ROOT_ENV);
        assert_eq!(install_root(), None);

        std::env::set_var(ROOT_ENV, "");
        assert_eq!(install_root(), None);
        std::env::remove_var(ROOT_ENV);
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);

        let config = Config::default();
        save(&config, &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.user.daily_hours, 8.0);
        assert_eq!(loaded.paths.db_path, PathBuf::from("stamps.db"));
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Run 'ctas config init'"));
    }

    #[test]
    fn test_load_rejects_non_positive_hours() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.user.daily_hours = 0.0;
        save(&config, &config_path).unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(matches!(err, CtasError::Config(_)));
        assert!(err.to_string().contains("DailyHours"));
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "[Paths]\nStampsPath = ").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(matches!(err, CtasError::TomlParse(_)));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/config.toml");

        let config = Config::default();
        save(&config, &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.user.stamper = "alice".to_string();
        config.user.daily_hours = 6.5;
        config.paths.db_path = PathBuf::from("data/work.db");

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.user.stamper, "alice");
        assert_eq!(loaded.user.daily_hours, 6.5);
        assert_eq!(loaded.paths.db_path, PathBuf::from("data/work.db"));
    }
}
