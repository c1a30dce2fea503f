//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sprout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SproutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Settings for the identity-toolkit session broker. All optional: with no
/// `api_key` the app runs sign-in-free and mints a local session id.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub use crate::session::broker::DEFAULT_SESSION_BASE_URL;
pub use crate::suggest::providers::gemini::DEFAULT_GEMINI_BASE_URL;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

// ============================================================================
// Resolved Config (concrete values, no Options where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub model_name: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub session_api_key: Option<String>,
    pub session_base_url: String,
    pub session_auth_token: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sprout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sprout").join("config.toml"))
}

/// Load config from `~/.sprout/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SproutConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SproutConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SproutConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SproutConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SproutConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Sprout Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# model = "gemini-2.0-flash"

# [gemini]
# api_key = "AIza..."                # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com"

# [session]
# api_key = "AIza..."                # Or set SESSION_API_KEY env var
# base_url = "https://identitytoolkit.googleapis.com"
# auth_token = "eyJhb..."            # Custom sign-in token, or SESSION_AUTH_TOKEN
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_model` is from the `--model` flag (None = not specified).
pub fn resolve(config: &SproutConfig, cli_model: Option<&str>) -> ResolvedConfig {
    // Model: CLI → env → config → default
    let model_name = cli_model
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SPROUT_MODEL").ok())
        .or_else(|| config.general.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Gemini API key: env → config
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .or_else(|| config.gemini.api_key.clone());

    // Gemini base URL: env → config → default
    let gemini_base_url = std::env::var("GEMINI_BASE_URL")
        .ok()
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

    // Session broker key: env → config
    let session_api_key = std::env::var("SESSION_API_KEY")
        .ok()
        .or_else(|| config.session.api_key.clone());

    // Session base URL: env → config → default
    let session_base_url = std::env::var("SESSION_BASE_URL")
        .ok()
        .or_else(|| config.session.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SESSION_BASE_URL.to_string());

    // Custom sign-in token: env → config
    let session_auth_token = std::env::var("SESSION_AUTH_TOKEN")
        .ok()
        .or_else(|| config.session.auth_token.clone());

    ResolvedConfig {
        model_name,
        gemini_api_key,
        gemini_base_url,
        session_api_key,
        session_base_url,
        session_auth_token,
    }
}
