//! Configuration file parsing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ds::error::{Error, Result};
use crate::trigger::Direction;

/// Kernel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// Use the process-wide kernel with its built-ins. When off, evaluations
    /// fall back to a fresh, empty kernel.
    pub builtins: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig { builtins: true }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbiontConfig {
    /// Direction used when a call does not give one.
    pub default_direction: Direction,
    pub kernel: KernelConfig,
}

impl SymbiontConfig {
    pub fn new() -> Self {
        SymbiontConfig {
            default_direction: Direction::IOK,
            kernel: KernelConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// Expected format:
    /// ```toml
    /// default_direction = "KOI"
    ///
    /// [kernel]
    /// builtins = true
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. The default direction must be
    /// one of the six permutations.
    pub fn parse(content: &str) -> Result<Self> {
        let config: SymbiontConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        if !config.default_direction.is_valid() {
            return Err(Error::Config(format!(
                "default_direction `{}` is not one of OIK, OKI, IOK, IKO, KOI, KIO",
                config.default_direction
            )));
        }
        Ok(config)
    }
}

impl Default for SymbiontConfig {
    fn default() -> Self {
        Self::new()
    }
}
