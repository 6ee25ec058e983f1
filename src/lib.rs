//! OLM ClusterServiceVersion Generator Library
//!
//! Builds the `ClusterServiceVersion` manifest that Operator Lifecycle
//! Manager uses to install the Syndesis (or Fuse Online) operator. Image
//! references come from the configuration, RBAC rules and the operator
//! deployment come from the same templates used for plain installs, and the
//! icon, examples and long description are static assets.

pub mod assets;
pub mod cli;
pub mod config;
pub mod install;
pub mod utils;

pub use config::Config;
pub use install::DeploymentContext;
pub use olm_manifest::{Branding, ClusterServiceVersion, CsvAssets, CsvBuilder, Image};
pub use olm_render::{RenderError, Resource, TemplateRenderer};

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Main application context that coordinates all components
pub struct CsvGen {
    config: Config,
    branding: Branding,
    renderer: TemplateRenderer,
    assets_dir: PathBuf,
    output_dir: PathBuf,
}

impl CsvGen {
    /// Create a new CsvGen instance with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let template_dir = utils::expand_path(&config.paths.templates)?;
        let assets_dir = utils::expand_path(&config.paths.assets)?;
        let output_dir = utils::expand_path(&config.output.base_path)?;
        let branding = Branding::for_target(config.operator.productized);

        Ok(Self {
            config,
            branding,
            renderer: TemplateRenderer::new(template_dir),
            assets_dir,
            output_dir,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Build the CSV, stamped with the configured `created_at` or the
    /// current time
    pub fn build(&self) -> Result<ClusterServiceVersion> {
        let created_at = self.config.output.created_at.unwrap_or_else(Utc::now);
        self.build_at(created_at)
    }

    /// Build the CSV with a fixed creation timestamp
    pub fn build_at(&self, created_at: DateTime<Utc>) -> Result<ClusterServiceVersion> {
        info!(
            "Building {} CSV for version {}",
            self.branding.target(),
            self.config.operator.version
        );

        let assets = assets::load_assets(&self.assets_dir, self.branding.target())?;
        let role_rules = install::load_role_rules(&self.renderer)?;
        let cluster_rules = install::load_cluster_role_rules(&self.renderer)?;
        let deployment_spec = install::load_deployment_spec(
            &self.renderer,
            &DeploymentContext::from_config(&self.config),
        )?;
        let related_images = self
            .config
            .syndesis
            .related_images(&self.config.operator.image)
            .to_images();

        let csv = CsvBuilder::new(
            self.branding.clone(),
            self.config.operator.version.clone(),
            self.config.operator.image.clone(),
        )
        .assets(assets)
        .role_rules(role_rules)
        .cluster_rules(cluster_rules)
        .deployment_spec(deployment_spec)
        .related_images(related_images)
        .created_at(created_at)
        .build()
        .map_err(CsvGenError::from)?;

        info!("Built CSV {}", csv.name());
        Ok(csv)
    }

    /// Serialize the CSV to YAML
    pub fn render_yaml(&self) -> Result<String> {
        let csv = self.build()?;
        Ok(csv.to_yaml().map_err(CsvGenError::from)?)
    }

    /// Path the CSV is written to
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(olm_manifest::file_name_for(
            &self.branding.csv_name(&self.config.operator.version),
        ))
    }

    /// Build the CSV and write it to the output directory
    pub async fn generate(&self) -> Result<GenerationResult> {
        let start_time = Instant::now();

        let csv = self.build()?;
        let yaml = csv.to_yaml().map_err(CsvGenError::from)?;

        utils::ensure_directory(&self.output_dir)?;
        let output_path = self.output_dir.join(csv.file_name());
        tokio::fs::write(&output_path, &yaml).await?;

        info!("Wrote CSV to {:?}", output_path);

        Ok(GenerationResult::new(
            &csv,
            output_path,
            yaml.len(),
            start_time.elapsed().as_millis() as u64,
        ))
    }

    /// Build the CSV without writing anything
    pub async fn dry_run(&self) -> Result<GenerationResult> {
        let start_time = Instant::now();

        let csv = self.build()?;
        let yaml = csv.to_yaml().map_err(CsvGenError::from)?;

        Ok(GenerationResult::new(
            &csv,
            self.output_path(),
            yaml.len(),
            start_time.elapsed().as_millis() as u64,
        ))
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum CsvGenError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] olm_render::RenderError),

    #[error("Template {0} rendered no resources")]
    EmptyRender(String),

    #[error("Field '{field}' not found in {resource}")]
    MissingField {
        field: &'static str,
        resource: String,
    },

    #[error("Cannot validate 'rules' in {0}")]
    MissingRules(String),

    #[error("Cannot validate rule maps in {0}")]
    InvalidRuleMaps(String),

    #[error("Cannot validate 'rule map' in {0}")]
    InvalidRuleMap(String),

    #[error("Invalid asset {path:?}: {message}")]
    InvalidAsset { path: PathBuf, message: String },

    #[error("Manifest error: {0}")]
    Manifest(#[from] olm_manifest::ManifestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the main application
pub type CsvGenResult<T> = Result<T, CsvGenError>;

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub csv_name: String,
    pub output_path: PathBuf,
    pub bytes: usize,
    pub cluster_rules: usize,
    pub role_rules: usize,
    pub related_images: usize,
    pub processing_time_ms: u64,
}

impl GenerationResult {
    fn new(
        csv: &ClusterServiceVersion,
        output_path: PathBuf,
        bytes: usize,
        processing_time_ms: u64,
    ) -> Self {
        let install = &csv.spec.install.spec;
        let rule_count = |permissions: &[olm_manifest::types::Permission]| -> usize {
            permissions
                .iter()
                .map(|p| p.rules.as_sequence().map_or(0, |rules| rules.len()))
                .sum()
        };

        Self {
            csv_name: csv.name().to_string(),
            output_path,
            bytes,
            cluster_rules: rule_count(&install.cluster_permissions),
            role_rules: rule_count(&install.permissions),
            related_images: csv.spec.related_images.len(),
            processing_time_ms,
        }
    }
}
