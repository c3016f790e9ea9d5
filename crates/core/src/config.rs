//! Generator parameters, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cave::CaveGrid;
use crate::error::{CaveError, ConfigError};

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 50;
pub const DEFAULT_FILL_PROBABILITY: u8 = 40;
pub const DEFAULT_CONSERVATIVE_STEPS: u32 = 4;
pub const DEFAULT_SMOOTH_STEPS: u32 = 2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// Percentage of seeded interior cells that start as walls.
    pub fill_probability: u8,
    pub conservative_steps: u32,
    pub smooth_steps: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            conservative_steps: DEFAULT_CONSERVATIVE_STEPS,
            smooth_steps: DEFAULT_SMOOTH_STEPS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), CaveError> {
        CaveGrid::validate_parameters(self.width, self.height, self.fill_probability)
    }
}
