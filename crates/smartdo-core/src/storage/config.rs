//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Which priority classifier to build and how to train it
//! - Display settings for task tables and the calendar
//!
//! Configuration is stored at `~/.config/smartdo/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::data_dir;
use crate::classifier::ClassifierKind;
use crate::error::ConfigError;

/// Classifier selection and training.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub kind: ClassifierKind,
    /// Votes per query for the nearest-neighbour classifier.
    #[serde(default = "default_neighbours")]
    pub neighbours: usize,
    /// JSON training set. Created from the built-in samples when missing.
    #[serde(default)]
    pub training_file: Option<PathBuf>,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Highlight today in the calendar view.
    #[serde(default = "default_true")]
    pub mark_today: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/smartdo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_neighbours() -> usize {
    1
}
fn default_date_format() -> String {
    "%Y-%m-%d".into()
}
fn default_true() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::default(),
            neighbours: default_neighbours(),
            training_file: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            mark_today: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::Null if value.is_empty() => serde_json::Value::Null,
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults there if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, holds an
    /// invalid value, or the defaults cannot be written. Only a missing file
    /// is replaced with defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Self = toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(load_failed(e.to_string())),
        }
    }

    /// Check values that deserialize fine but cannot be used.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier.neighbours == 0 {
            return Err(ConfigError::InvalidValue {
                key: "classifier.neighbours".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "using default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.classifier.kind, ClassifierKind::NearestNeighbour);
        assert_eq!(parsed.classifier.neighbours, 1);
        assert_eq!(parsed.display.date_format, "%Y-%m-%d");
        assert!(parsed.display.mark_today);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("classifier.kind").as_deref(), Some("nearest_neighbour"));
        assert_eq!(cfg.get("classifier.neighbours").as_deref(), Some("1"));
        assert_eq!(cfg.get("display.mark_today").as_deref(), Some("true"));
        assert!(cfg.get("display.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_enum_number_and_bool() {
        let mut cfg = Config::default();
        cfg.set("classifier.kind", "rules").unwrap();
        cfg.set("classifier.neighbours", "3").unwrap();
        cfg.set("display.mark_today", "false").unwrap();
        assert_eq!(cfg.classifier.kind, ClassifierKind::Rules);
        assert_eq!(cfg.classifier.neighbours, 3);
        assert!(!cfg.display.mark_today);
    }

    #[test]
    fn set_optional_path() {
        let mut cfg = Config::default();
        cfg.set("classifier.training_file", "/tmp/training.json").unwrap();
        assert_eq!(cfg.classifier.training_file, Some(PathBuf::from("/tmp/training.json")));
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("display.nonexistent_key", "value"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.set("", "value").is_err());
    }

    #[test]
    fn set_rejects_invalid_values() {
        let mut cfg = Config::default();
        assert!(cfg.set("display.mark_today", "not_a_bool").is_err());
        assert!(cfg.set("classifier.neighbours", "-1").is_err());
        assert!(matches!(
            cfg.set("classifier.neighbours", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(cfg.set("classifier.kind", "random_forest").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_rejects_zero_neighbours() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[classifier]\nneighbours = 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn load_from_keeps_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let bytes = b"[display]\ndate_format = \"%d\xff%m\"\n";
        std::fs::write(&path, bytes).unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::LoadFailed { .. })));
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("classifier.kind", "rules").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "classifier = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::LoadFailed { .. })));
    }
}
