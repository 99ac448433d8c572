//! ComposerConfig - Validation Limits and Classification Rules
//!
//! Defaults come from `constants`; a TOML file under the platform config
//! directory can override them for non-standard fleets.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BASIC_SERVER_THRESHOLD, HIGH_DENSITY_THRESHOLD, MAX_MEMORY_SIZE, MEMORY_SIZE_MULTIPLE,
    MIN_MEMORY_SIZE, RACK_SERVER_THRESHOLD,
};
use crate::error::{Error, Result};

/// Config file name inside the platform config directory
const CONFIG_FILE: &str = "composer.toml";

/// Numeric envelope for the memory field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryLimits {
    /// Smallest accepted value in MB (inclusive)
    pub min: i64,
    /// Largest accepted value in MB (inclusive)
    pub max: i64,
    /// Values must be exact multiples of this granularity
    pub multiple: i64,
}

impl Default for MemoryLimits {
    fn default() -> Self {
        Self {
            min: MIN_MEMORY_SIZE,
            max: MAX_MEMORY_SIZE,
            multiple: MEMORY_SIZE_MULTIPLE,
        }
    }
}

/// Memory thresholds for the server model categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRules {
    /// Minimum memory for High Density Server (GPU branch)
    pub high_density_threshold: i64,
    /// Minimum memory for 4U Rack Server
    pub rack_threshold: i64,
    /// Minimum memory for Tower Server and Mainframe
    pub basic_threshold: i64,
}

impl Default for ClassifyRules {
    fn default() -> Self {
        Self {
            high_density_threshold: HIGH_DENSITY_THRESHOLD,
            rack_threshold: RACK_SERVER_THRESHOLD,
            basic_threshold: BASIC_SERVER_THRESHOLD,
        }
    }
}

/// Top-level composer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComposerConfig {
    /// Memory field envelope
    pub memory: MemoryLimits,
    /// Classification thresholds
    pub rules: ClassifyRules,
}

impl ComposerConfig {
    /// Path of the config file under the platform config directory
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "goldwind", "server-composer").ok_or_else(|| {
            Error::Invalid {
                message: "Could not determine platform config directory".to_string(),
            }
        })?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the configuration, returning defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration as TOML
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Load the configuration, falling back to defaults on any error.
    ///
    /// A malformed file is advisory, not fatal: the occurrence is logged
    /// and the defaults apply.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to load composer config, using defaults: {err}");
                Self::default()
            }
        }
    }
}
