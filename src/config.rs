//! Configuration file parser for ~/.config/newsdeck/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`,
//! which runs against the built-in demo source. Unknown keys are silently
//! ignored by serde (with `deny_unknown_fields` off), though we log a
//! warning when the file contains potential typos.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::source::Category;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// NewsAPI allows page sizes of 1..=100; out-of-range values are clamped.
const MAX_PAGE_SIZE: u32 = 100;

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified. Missing keys fall back to `Default::default()`.
///
/// Custom Debug impl masks `api_key` to prevent secret leakage in logs,
/// error messages, and debug output.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Articles per page for both headlines and search requests.
    pub page_size: u32,

    /// Category loaded on startup.
    pub default_category: Category,

    /// Country code passed through to the headlines endpoint. Not
    /// interpreted locally.
    pub country: String,

    /// NewsAPI key (alternative to the NEWSDECK_API_KEY env var; the env
    /// var takes precedence). Absent → the demo source is used.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            page_size: 12,
            default_category: Category::General,
            country: "us".to_string(),
            api_key: None,
        }
    }
}

/// Mask api_key in Debug output to prevent secret leakage.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("theme", &self.theme)
            .field("page_size", &self.page_size)
            .field("default_category", &self.default_category)
            .field("country", &self.country)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML or wrong types → `Err(ConfigError::Parse)`
    /// - Unknown keys → silently accepted, logged as warning
    /// - Out-of-range `page_size` → clamped, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading to avoid slurping a corrupted or
        // maliciously large config file.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {} // Size is within limits, proceed
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "theme",
                "page_size",
                "default_category",
                "country",
                "api_key",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let mut config: Config = toml::from_str(&content)?;

        if config.page_size == 0 || config.page_size > MAX_PAGE_SIZE {
            tracing::warn!(
                page_size = config.page_size,
                "page_size out of range (1..={}), clamping",
                MAX_PAGE_SIZE
            );
            config.page_size = config.page_size.clamp(1, MAX_PAGE_SIZE);
        }

        tracing::info!(
            path = %path.display(),
            country = %config.country,
            page_size = config.page_size,
            "Loaded configuration"
        );
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
