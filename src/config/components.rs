//! Component and addon image configuration

use anyhow::{anyhow, Result};
use olm_manifest::RelatedImages;
use serde::{Deserialize, Serialize};

/// Image reference for a single component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub image: String,
}

impl ImageConfig {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }

    fn validate(&self, component: &str) -> Result<()> {
        require_image(&self.image, component)
    }
}

fn require_image(image: &str, component: &str) -> Result<()> {
    if image.trim().is_empty() {
        return Err(anyhow!("Image for component '{}' cannot be empty", component));
    }
    Ok(())
}

/// Database image plus its metrics exporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub image: String,
    pub exporter: ImageConfig,
}

/// Syndesis platform images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyndesisConfig {
    pub components: ComponentsConfig,
    pub addons: AddonsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentsConfig {
    pub database: DatabaseConfig,
    pub amq: ImageConfig,
    pub oauth: ImageConfig,
    pub ui: ImageConfig,
    pub meta: ImageConfig,
    pub server: ImageConfig,
    pub s2i: ImageConfig,
    pub prometheus: ImageConfig,
    pub upgrade: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonsConfig {
    pub camelk: ImageConfig,
    pub todo: ImageConfig,
}

impl SyndesisConfig {
    pub fn validate(&self) -> Result<()> {
        let components = &self.components;
        require_image(&components.database.image, "database")?;
        components.database.exporter.validate("database exporter")?;
        components.amq.validate("amq")?;
        components.oauth.validate("oauth")?;
        components.ui.validate("ui")?;
        components.meta.validate("meta")?;
        components.server.validate("server")?;
        components.s2i.validate("s2i")?;
        components.prometheus.validate("prometheus")?;
        components.upgrade.validate("upgrade")?;
        self.addons.camelk.validate("camel-k")?;
        self.addons.todo.validate("todo")?;
        Ok(())
    }

    /// Images listed under `relatedImages` in the CSV
    pub fn related_images(&self, operator_image: &str) -> RelatedImages {
        let components = &self.components;
        RelatedImages {
            operator: operator_image.to_string(),
            database: components.database.image.clone(),
            database_exporter: components.database.exporter.image.clone(),
            todo: self.addons.todo.image.clone(),
            oauth: components.oauth.image.clone(),
            ui: components.ui.image.clone(),
            s2i: components.s2i.image.clone(),
            prometheus: components.prometheus.image.clone(),
            upgrade: components.upgrade.image.clone(),
            meta: components.meta.image.clone(),
            server: components.server.image.clone(),
            amq: components.amq.image.clone(),
        }
    }
}

impl Default for SyndesisConfig {
    fn default() -> Self {
        Self {
            components: ComponentsConfig {
                database: DatabaseConfig {
                    image: "centos/postgresql-10-centos7:latest".to_string(),
                    exporter: ImageConfig::new("docker.io/wrouesnel/postgres_exporter:v0.4.7"),
                },
                amq: ImageConfig::new("registry.access.redhat.com/jboss-amq-6/amq63-openshift:1.3"),
                oauth: ImageConfig::new("quay.io/openshift/origin-oauth-proxy:v4.0.0"),
                ui: ImageConfig::new("docker.io/syndesis/syndesis-ui:latest"),
                meta: ImageConfig::new("docker.io/syndesis/syndesis-meta:latest"),
                server: ImageConfig::new("docker.io/syndesis/syndesis-server:latest"),
                s2i: ImageConfig::new("docker.io/syndesis/syndesis-s2i:latest"),
                prometheus: ImageConfig::new("docker.io/prom/prometheus:v2.1.0"),
                upgrade: ImageConfig::new("docker.io/syndesis/syndesis-upgrade:latest"),
            },
            addons: AddonsConfig {
                camelk: ImageConfig::new("docker.io/apache/camel-k:1.0.0"),
                todo: ImageConfig::new("docker.io/centos/php-71-centos7"),
            },
        }
    }
}
