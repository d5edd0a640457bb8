//! TUI configuration persistence
//!
//! Saves and loads user preferences: the profile shown in the list header,
//! the masked phone hint on the verification screen, and the theme choice.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "medibook";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Name greeted on the doctor list header
    #[serde(default = "default_profile_name")]
    pub profile_name: String,

    /// Location line under the greeting
    #[serde(default = "default_location")]
    pub location: String,

    /// Masked phone number shown on the verification screen
    #[serde(default = "default_phone_hint")]
    pub phone_hint: String,

    /// Use the high-contrast theme variant
    #[serde(default)]
    pub high_contrast: bool,
}

fn default_profile_name() -> String {
    "Priya".to_string()
}

fn default_location() -> String {
    "Dombivali, Mumbai".to_string()
}

fn default_phone_hint() -> String {
    "+91 111 ******99".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            profile_name: default_profile_name(),
            location: default_location(),
            phone_hint: default_phone_hint(),
            high_contrast: false,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(&config_file, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", config_file);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.profile_name, "Priya");
        assert_eq!(config.location, "Dombivali, Mumbai");
        assert_eq!(config.phone_hint, "+91 111 ******99");
        assert!(!config.high_contrast);
    }

    #[test]
    fn test_config_serialization() {
        let config = TuiConfig {
            profile_name: "Asha".to_string(),
            location: "Thane".to_string(),
            phone_hint: "+91 98* ***** 11".to_string(),
            high_contrast: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.profile_name, "Asha");
        assert_eq!(parsed.location, "Thane");
        assert!(parsed.high_contrast);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: TuiConfig = serde_json::from_str(r#"{"profile_name":"Asha"}"#).unwrap();
        assert_eq!(parsed.profile_name, "Asha");
        assert_eq!(parsed.location, "Dombivali, Mumbai");
        assert!(!parsed.high_contrast);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        // The loader checks XDG_CONFIG_HOME before the platform dir.
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let config = TuiConfig {
            profile_name: "Meera".to_string(),
            ..TuiConfig::default()
        };
        config.save().unwrap();

        let loaded = TuiConfig::load();
        assert_eq!(loaded.profile_name, "Meera");

        std::env::remove_var("XDG_CONFIG_HOME");
    }
}
