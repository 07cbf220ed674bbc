//! Known target platforms.
//!
//! The table is informational. Every platform currently fills with the same
//! [`NOOP_PATTERN`]; the `noop` field records the word but the filler never
//! consults it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pattern::NOOP_PATTERN;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    X86,
}

/// One row of the platform table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub name: &'static str,
    pub description: &'static str,
    /// Filler word for this platform. Unused by the fill logic.
    pub noop: u32,
}

pub static PLATFORMS: &[PlatformInfo] = &[PlatformInfo {
    platform: Platform::X86,
    name: "x86",
    description: "Intel x86 and compatible processors",
    noop: NOOP_PATTERN,
}];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown platform {0:?} (try --list-platforms)")]
    Unknown(String),
}

impl Platform {
    pub fn info(self) -> &'static PlatformInfo {
        PLATFORMS
            .iter()
            .find(|p| p.platform == self)
            .unwrap_or(&PLATFORMS[0])
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Look a platform up by table name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, PlatformError> {
        PLATFORMS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.platform)
            .ok_or_else(|| PlatformError::Unknown(name.to_string()))
    }

    pub fn all() -> impl Iterator<Item = &'static PlatformInfo> {
        PLATFORMS.iter()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
