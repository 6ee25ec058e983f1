//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ApiServerCapabilities, OutputConfig, PathsConfig, SyndesisConfig};

/// Operator being packaged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Operator version, becomes the CSV version
    pub version: String,

    /// Build the productized (Fuse Online) CSV instead of the community one
    #[serde(default)]
    pub productized: bool,

    /// Operator container image
    pub image: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            version: "1.11.0".to_string(),
            productized: false,
            image: "docker.io/syndesis/syndesis-operator:latest".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Operator version, target and image
    pub operator: OperatorConfig,

    /// Platform component images
    pub syndesis: SyndesisConfig,

    /// API server capability flags
    #[serde(default)]
    pub api_server: ApiServerCapabilities,

    /// Template and asset locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read configuration {:?}: {}", path, e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Make relative template, asset and output paths relative to `base_dir`,
    /// the directory of the configuration file. `~` and environment
    /// variables are expanded first.
    pub fn resolve_paths(&mut self, base_dir: &Path) -> Result<()> {
        for path in [
            &mut self.paths.templates,
            &mut self.paths.assets,
            &mut self.output.base_path,
        ] {
            let expanded = crate::utils::expand_path(path)?;
            *path = if expanded.is_relative() {
                base_dir.join(expanded)
            } else {
                expanded
            };
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.operator.version.trim().is_empty() {
            return Err(anyhow!("Operator version cannot be empty"));
        }

        if self.operator.image.trim().is_empty() {
            return Err(anyhow!("Operator image cannot be empty"));
        }

        self.syndesis.validate()?;
        self.output.validate()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            operator: OperatorConfig::default(),
            syndesis: SyndesisConfig::default(),
            api_server: ApiServerCapabilities::default(),
            paths: PathsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
