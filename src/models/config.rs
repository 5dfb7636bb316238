//! Configuration model.
//!
//! Settings are read from `config.toml` under the user's config directory,
//! with environment variables taking precedence for the credential and model
//! selection:
//! - `GEMINI_API_KEY`: API key for both text and image generation (required)
//! - `GEMINI_MODEL`: text model (default: gemini-2.5-pro)
//! - `IMAGEN_MODEL`: image model (default: imagen-4.0-generate-001)
//! - `GEMINI_TIMEOUT`: request timeout in seconds (default: 120)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_PACING_SECS: u64 = 5;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini text API configuration.
    pub gemini: GeminiConfig,
    /// Imagen image API configuration.
    pub imagen: ImagenConfig,
    /// Scenario pipeline configuration.
    pub scenario: ScenarioConfig,
    /// Path of the persistent state file.
    pub state_file: PathBuf,
}

/// Gemini text API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key. Falls back to the `GEMINI_API_KEY` environment variable.
    pub api_key: Option<String>,
    /// Model to use.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Imagen image API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagenConfig {
    /// Model to use.
    pub model: String,
    /// Aspect ratio requested for generated images.
    pub aspect_ratio: String,
}

/// Scenario pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Pacing interval between successive image requests, in seconds.
    pub pacing_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            imagen: ImagenConfig::default(),
            scenario: ScenarioConfig::default(),
            state_file: dirs_data_path().join("state.json"),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            timeout: std::env::var("GEMINI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for ImagenConfig {
    fn default() -> Self {
        Self {
            model: std::env::var("IMAGEN_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            aspect_ratio: "9:16".to_string(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            pacing_secs: DEFAULT_PACING_SECS,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marketing-studio")
}

/// Get the data directory path.
fn dirs_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marketing-studio")
}

/// Load configuration from file, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config file: {}", e);
                }
            }
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.imagen.aspect_ratio, "9:16");
        assert_eq!(config.scenario.pacing_secs, 5);
        assert!(config.state_file.ends_with("state.json"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scenario]
            pacing_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.scenario.pacing_secs, 2);
        assert_eq!(config.imagen.aspect_ratio, "9:16");
    }
}
