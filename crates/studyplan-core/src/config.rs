//! TOML-based engine configuration.
//!
//! Stores the summarizer collaborator settings; the allocation engine
//! itself has no tunables. Configuration lives at
//! `~/.config/studyplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summarizer collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Whether to ask the summarizer for prose after every plan.
    #[serde(default)]
    pub enabled: bool,
    /// Text-generation endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Model identifier passed with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token, if the endpoint requires one.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    "text-summarizer-1".to_string()
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            model: default_model(),
            api_key: None,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyplan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// Returns `~/.config/studyplan[-dev]/` based on STUDYPLAN_ENV.
///
/// Set STUDYPLAN_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studyplan-dev")
    } else {
        base_dir.join("studyplan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk or return default.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.summarizer.enabled);
        assert_eq!(config.summarizer.model, "text-summarizer-1");
        assert_eq!(config.summarizer.endpoint, None);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [summarizer]
            enabled = true
            endpoint = "https://text.example/v1/generate"
            "#,
        )
        .unwrap();

        assert!(config.summarizer.enabled);
        assert_eq!(
            config.summarizer.endpoint.as_deref(),
            Some("https://text.example/v1/generate")
        );
        assert_eq!(config.summarizer.model, "text-summarizer-1");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.summarizer.enabled = true;
        config.summarizer.api_key = Some("secret".to_string());

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert!(parsed.summarizer.enabled);
        assert_eq!(parsed.summarizer.api_key.as_deref(), Some("secret"));
    }
}
