use crate::error::{AppError, Result};
use crate::model::list_view::DEFAULT_PAGE_SIZE;
use crate::model::SortPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON data set to load; the bundled data set when unset
    pub data_path: Option<String>,
    pub page_size: usize,
    pub sort_policy: SortPolicy,
    /// Destination of the CSV export
    pub export_path: String,
    /// Tracing filter directive, e.g. "info" or "college_tui=debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            sort_policy: SortPolicy::Page,
            export_path: "colleges-export.csv".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".college-tui"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user's config. Defaults when there is no config file.
    pub fn load() -> Result<Config> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };
        Ok(Self::load_from(&path)?.unwrap_or_default())
    }

    /// Read a config file; `None` if it does not exist
    pub fn load_from(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| AppError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Save the config to the user's config directory
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path().ok_or(AppError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self).map_err(AppError::ConfigWrite)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            data_path: Some("/srv/colleges.json".to_string()),
            page_size: 25,
            sort_policy: SortPolicy::Global,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"sort_policy": "global"}"#).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.sort_policy, SortPolicy::Global);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn test_missing_or_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_from(&path).unwrap(), None);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::ConfigParse { .. })
        ));
    }
}
