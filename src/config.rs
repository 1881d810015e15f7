use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{CasegraphError, ConfigError},
    layout::LayoutEngine,
};

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Layout engine for network diagrams
    #[serde(default)]
    pub engine: LayoutEngine,

    /// Iteration count for the force simulation
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Cooling factor for the force simulation
    #[serde(default = "default_cooling_factor")]
    pub cooling_factor: f32,
}

fn default_iterations() -> usize {
    100
}

fn default_cooling_factor() -> f32 {
    0.1
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engine: LayoutEngine::default(),
            iterations: default_iterations(),
            cooling_factor: default_cooling_factor(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CasegraphError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CasegraphError::Config(ConfigError::MissingFile(
                path.to_path_buf(),
            )));
        }

        let content = fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(ConfigError::from)
            .map_err(CasegraphError::Config)?;

        Ok(config)
    }
}
