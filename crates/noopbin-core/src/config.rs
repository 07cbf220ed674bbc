//! Configuration for noopbin.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $NOOPBIN_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/noopbin/config.toml
//!   3. ~/.config/noopbin/config.toml
//!
//! The file is only ever read. Size, byte order and output path are never
//! configured here; they must be given on each invocation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::platform::{Platform, PlatformError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoopbinConfig {
    pub defaults: DefaultsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Platform assumed when --platform is not given.
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing-subscriber filter directive used when RUST_LOG is unset.
    pub filter: String,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default().name().to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_or_home().join(".config"))
        .join("noopbin")
}

fn dirs_or_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
    #[error("invalid default platform: {0}")]
    Platform(#[from] PlatformError),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl NoopbinConfig {
    /// Load config: env vars → file → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file(&Self::file_path())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read one config file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var("NOOPBIN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Apply NOOPBIN_* overrides. `lookup` stands in for the process
    /// environment so tests need not mutate it.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("NOOPBIN_DEFAULTS__PLATFORM") {
            self.defaults.platform = v;
        }
        if let Some(v) = lookup("NOOPBIN_LOG__FILTER") {
            self.log.filter = v;
        }
    }

    /// The configured default platform, checked against the table.
    pub fn default_platform(&self) -> Result<Platform, ConfigError> {
        Ok(Platform::from_name(&self.defaults.platform)?)
    }
}
