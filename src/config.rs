//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`WARDEN_*`)
//! 2. Config file (`~/.warden/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Approval gate configuration.
    pub gate: GateConfig,
}

/// Approval gate configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Tool patterns (glob syntax) permitted without a prompt even when
    /// the policy is `approve-all`. Empty by default: every tool asks.
    pub auto_allow: Vec<String>,
}

/// Get the default warden home directory.
fn default_warden_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".warden"), |h| h.join(".warden"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = load_config_from(&get_config_path())?;
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from an explicit file path; missing files yield
/// defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path).map_err(Error::Io)?;
    toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("WARDEN_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("WARDEN_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_warden_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    // Comma-separated glob patterns.
    if let Ok(val) = env::var("WARDEN_AUTO_ALLOW") {
        config.gate.auto_allow = val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
}
