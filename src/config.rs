//! Configuration handling for the TUI

use crate::state::SubmitTouchPolicy;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "signup_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Which fields a submit forces into view
    pub submit_touch_policy: Option<SubmitTouchPolicy>,
    /// Render password fields as bullets
    pub mask_passwords: Option<bool>,
    /// `tracing` filter directive
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn submit_touch_policy(&self) -> SubmitTouchPolicy {
        self.submit_touch_policy.unwrap_or_default()
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("signup-tui-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.submit_touch_policy.is_none());
        assert!(config.mask_passwords.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert_eq!(config.submit_touch_policy(), SubmitTouchPolicy::AllFields);
        assert!(config.mask_passwords());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            submit_touch_policy: Some(SubmitTouchPolicy::Legacy),
            mask_passwords: Some(false),
            log_filter: Some("signup_tui=trace".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.submit_touch_policy(), SubmitTouchPolicy::Legacy);
        assert!(!parsed.mask_passwords());
        assert_eq!(parsed.log_filter(), "signup_tui=trace");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_touch_policy": "legacy", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_touch_policy(), SubmitTouchPolicy::Legacy);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let json = r#"{"submit_touch_policy": "some_fields"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let config = TuiConfig::load_from(&temp_path("missing/config.json")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_load_written_file() {
        let path = temp_path("roundtrip/config.json");
        let config = TuiConfig {
            mask_passwords: Some(false),
            ..Default::default()
        };

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let path = temp_path("malformed/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = TuiConfig::load_from(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }
}
