//! TOML-based application configuration.
//!
//! Stores user preferences only:
//! - Default mood for the affirmation card
//! - Plan pre-selected on the paywall
//! - Whether dev controls (activate/reset entitlement) are available
//!
//! Entitlement itself is never written here; it resets on every run.
//!
//! Configuration is stored at `~/.config/zenpulse/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::affirmation::Mood;
use crate::error::ConfigError;
use crate::paywall::PlanId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffirmationConfig {
    #[serde(default)]
    pub default_mood: Mood,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallConfig {
    #[serde(default)]
    pub default_plan: PlanId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevConfig {
    /// Enables the activate/reset entitlement controls.
    #[serde(default)]
    pub controls_enabled: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/zenpulse/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub affirmation: AffirmationConfig,
    #[serde(default)]
    pub paywall: PaywallConfig,
    #[serde(default)]
    pub dev: DevConfig,
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
        if parts.peek().map_or(true, |p| p.is_empty()) {
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
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Location of `config.toml`, creating its directory if needed.
    pub fn file_path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/zenpulse"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = self.to_toml().map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// The config rendered exactly as it is written to disk.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Like [`Config::get`], but an unknown or non-leaf key is an error.
    pub fn value(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory by dot-separated key.
    ///
    /// The whole config is re-validated, so `affirmation.default_mood = "sad"`
    /// is rejected and leaves `self` untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
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
        assert_eq!(parsed.affirmation.default_mood, Mood::Neutral);
        assert_eq!(parsed.paywall.default_plan, PlanId::Yearly);
        assert!(!parsed.dev.controls_enabled);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[dev]\ncontrols_enabled = true\n").unwrap();
        assert!(parsed.dev.controls_enabled);
        assert_eq!(parsed.paywall.default_plan, PlanId::Yearly);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("affirmation.default_mood").as_deref(), Some("neutral"));
        assert_eq!(cfg.get("paywall.default_plan").as_deref(), Some("yearly"));
        assert_eq!(cfg.get("dev.controls_enabled").as_deref(), Some("false"));
        assert!(cfg.get("dev").is_none());
        assert!(cfg.get("ui.missing_key").is_none());
    }

    #[test]
    fn set_updates_enum_and_bool() {
        let mut cfg = Config::default();
        cfg.set("affirmation.default_mood", "positive").unwrap();
        cfg.set("paywall.default_plan", "monthly").unwrap();
        cfg.set("dev.controls_enabled", "true").unwrap();
        assert_eq!(cfg.affirmation.default_mood, Mood::Positive);
        assert_eq!(cfg.paywall.default_plan, PlanId::Monthly);
        assert!(cfg.dev.controls_enabled);
    }

    #[test]
    fn set_rejects_invalid_mood() {
        let mut cfg = Config::default();
        let err = cfg.set("affirmation.default_mood", "sad").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("dev.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.set("", "1"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(cfg.set("dev", "1"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn value_reports_unknown_key() {
        let cfg = Config::default();
        assert_eq!(cfg.value("paywall.default_plan").unwrap(), "yearly");
        assert!(matches!(
            cfg.value("paywall"),
            Err(ConfigError::UnknownKey(key)) if key == "paywall"
        ));
    }

    #[test]
    fn to_toml_matches_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::default();
        cfg.save_to(&path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(cfg.to_toml().unwrap(), on_disk);
        assert!(on_disk.contains("[affirmation]"));
        assert!(on_disk.contains("default_mood = \"neutral\""));
    }

    #[test]
    fn set_treats_non_bool_leaves_as_strings() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("paywall.default_plan", "12"),
            Err(ConfigError::InvalidValue { .. })
        ));
        cfg.set("paywall.default_plan", "Monthly").unwrap_err();
        cfg.set("paywall.default_plan", "monthly").unwrap();
        assert_eq!(cfg.paywall.default_plan, PlanId::Monthly);
    }

    #[test]
    fn set_rejects_bad_bool() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("dev.controls_enabled", "yes"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
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
        cfg.set("affirmation.default_mood", "negative").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "affirmation = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
