//=========================================================================
// User Definitions
//=========================================================================
//
// Engine configuration loaded from TOML. Every key is optional; missing
// keys fall back to defaults, so an empty file is a valid configuration.
//
// Example:
// ```toml
// tick_rate = 60
// anim_speed = 25.0
// resources = "resources.toml"
//
// [window]
// title = "Momo"
// width = 1024
// height = 768
//
// [log]
// verbose = true
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::tick::TickRate;

//=== ConfigError =========================================================

/// Failure to read or parse a TOML file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn parse(path: &Path, source: toml::de::Error) -> Self {
        Self::Parse { path: path.to_path_buf(), source }
    }
}

/// Reads `path` and deserialises it as TOML.
pub(crate) fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    toml::from_str(&text).map_err(|e| ConfigError::parse(path, e))
}

//=== UserDefs ============================================================

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDefs {
    /// Requested simulation rate; clamped to [25, 90] on use.
    pub tick_rate: u32,

    /// Animation playback rate in frames per second.
    pub anim_speed: f32,

    /// Optional resource-location manifest.
    pub resources: Option<PathBuf>,

    pub window: WindowDefs,
    pub log: LogDefs,
    pub stats: StatsDefs,
}

impl UserDefs {
    /// Loads definitions from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_toml(path.as_ref())
    }

    /// Parses definitions from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn clamped_tick_rate(&self) -> TickRate {
        TickRate::new(self.tick_rate)
    }
}

impl Default for UserDefs {
    fn default() -> Self {
        Self {
            tick_rate: TickRate::DEFAULT.get(),
            anim_speed: 25.0,
            resources: None,
            window: WindowDefs::default(),
            log: LogDefs::default(),
            stats: StatsDefs::default(),
        }
    }
}

//=== WindowDefs ==========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDefs {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowDefs {
    fn default() -> Self {
        Self {
            title: "momokit".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
        }
    }
}

//=== LogDefs =============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogDefs {
    /// Install the logger during engine initialisation.
    pub enabled: bool,

    /// Debug level instead of info.
    pub verbose: bool,
}

impl Default for LogDefs {
    fn default() -> Self {
        Self { enabled: true, verbose: false }
    }
}

//=== StatsDefs ===========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsDefs {
    /// Frame statistics logging period in milliseconds.
    pub period_ms: u64,
}

impl Default for StatsDefs {
    fn default() -> Self {
        Self { period_ms: 1000 }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
