//! CSV assembly

use crate::branding::Branding;
use crate::images::Image;
use crate::types::*;
use crate::{ManifestError, ManifestResult};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

const SERVICE_ACCOUNT: &str = "syndesis-operator";
const REPOSITORY: &str = "https://github.com/syndesisio/syndesis/";
const KEYWORDS: [&str; 5] = ["camel", "integration", "syndesis", "fuse", "online"];

/// Static files embedded in the CSV
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvAssets {
    /// JSON array of example custom resources
    pub alm_examples: String,
    /// Long markdown description
    pub description: String,
    /// Base64 encoded SVG icon
    pub icon: String,
}

/// Collects the computed pieces of a CSV and assembles the document
#[derive(Debug, Clone)]
pub struct CsvBuilder {
    branding: Branding,
    version: String,
    operator_image: String,
    assets: CsvAssets,
    role_rules: Option<serde_yaml::Value>,
    cluster_rules: Vec<serde_yaml::Mapping>,
    deployment_spec: Option<serde_yaml::Value>,
    related_images: Vec<Image>,
    created_at: Option<DateTime<Utc>>,
}

impl CsvBuilder {
    pub fn new(
        branding: Branding,
        version: impl Into<String>,
        operator_image: impl Into<String>,
    ) -> Self {
        Self {
            branding,
            version: version.into(),
            operator_image: operator_image.into(),
            assets: CsvAssets::default(),
            role_rules: None,
            cluster_rules: Vec::new(),
            deployment_spec: None,
            related_images: Vec::new(),
            created_at: None,
        }
    }

    pub fn assets(mut self, assets: CsvAssets) -> Self {
        self.assets = assets;
        self
    }

    /// Namespaced rules bound to the operator service account
    pub fn role_rules(mut self, rules: serde_yaml::Value) -> Self {
        self.role_rules = Some(rules);
        self
    }

    /// Cluster-wide rules bound to the operator service account
    pub fn cluster_rules(mut self, rules: Vec<serde_yaml::Mapping>) -> Self {
        self.cluster_rules = rules;
        self
    }

    pub fn deployment_spec(mut self, spec: serde_yaml::Value) -> Self {
        self.deployment_spec = Some(spec);
        self
    }

    pub fn related_images(mut self, images: Vec<Image>) -> Self {
        self.related_images = images;
        self
    }

    /// Pin the `createdAt` annotation. Defaults to the current time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> ManifestResult<ClusterServiceVersion> {
        if self.version.is_empty() {
            return Err(ManifestError::MissingField("version"));
        }
        if self.operator_image.is_empty() {
            return Err(ManifestError::MissingField("operator image"));
        }
        let role_rules = self
            .role_rules
            .ok_or(ManifestError::MissingField("role rules"))?;
        let deployment_spec = self
            .deployment_spec
            .ok_or(ManifestError::MissingField("deployment spec"))?;

        let created_at = self
            .created_at
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let branding = self.branding;
        let name = branding.csv_name(&self.version);
        debug!("Assembling CSV {}", name);

        let cluster_rules = serde_yaml::Value::Sequence(
            self.cluster_rules
                .into_iter()
                .map(serde_yaml::Value::Mapping)
                .collect(),
        );

        Ok(ClusterServiceVersion {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: Metadata {
                name,
                namespace: "placeholder".to_string(),
                annotations: Annotations {
                    capabilities: "Seamless Upgrades".to_string(),
                    categories: "Integration & Delivery".to_string(),
                    certified: "false".to_string(),
                    created_at,
                    container_image: self.operator_image,
                    support: branding.support.clone(),
                    description: branding.description.clone(),
                    repository: REPOSITORY.to_string(),
                    alm_examples: self.assets.alm_examples,
                },
            },
            spec: Spec {
                display_name: branding.display_name.clone(),
                description: self.assets.description,
                keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
                version: self.version,
                maturity: "alpha".to_string(),
                maintainers: vec![Maintainer {
                    name: branding.maintainer_name.clone(),
                    email: branding.maintainer_email.clone(),
                }],
                provider: Provider {
                    name: branding.provider.clone(),
                },
                labels: NameLabel {
                    name: branding.name.clone(),
                },
                selector: Selector {
                    match_labels: NameLabel {
                        name: branding.name.clone(),
                    },
                },
                icon: vec![Icon {
                    base64data: self.assets.icon,
                    mediatype: "image/svg+xml".to_string(),
                }],
                links: default_links(),
                install_modes: default_install_modes(),
                install: Install {
                    strategy: "deployment".to_string(),
                    spec: InstallSpec {
                        cluster_permissions: vec![Permission {
                            service_account_name: SERVICE_ACCOUNT.to_string(),
                            rules: cluster_rules,
                        }],
                        permissions: vec![Permission {
                            service_account_name: SERVICE_ACCOUNT.to_string(),
                            rules: role_rules,
                        }],
                        deployments: vec![Deployment {
                            name: branding.name.clone(),
                            spec: deployment_spec,
                        }],
                    },
                },
                custom_resource_definitions: CustomResourceDefinitions {
                    owned: vec![CustomResourceDefinition {
                        name: "syndesises.syndesis.io".to_string(),
                        version: "v1beta2".to_string(),
                        kind: "Syndesis".to_string(),
                        display_name: "Syndesis CRD".to_string(),
                        description: "Syndesis CRD".to_string(),
                    }],
                },
                related_images: self.related_images,
            },
        })
    }
}

fn default_links() -> Vec<Link> {
    [
        (
            "Red Hat Fuse Online Documentation",
            "https://access.redhat.com/documentation/en-us/red-hat-fuse",
        ),
        (
            "Upstream project Syndesis",
            "https://github.com/syndesisio/syndesis",
        ),
        (
            "Upstream Syndesis Operator",
            "https://github.com/syndesisio/syndesis/tree/master/install/operator",
        ),
    ]
    .into_iter()
    .map(|(name, url)| Link {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn default_install_modes() -> Vec<InstallMode> {
    [
        ("OwnNamespace", true),
        ("SingleNamespace", true),
        ("MultiNamespace", false),
        ("AllNamespaces", false),
    ]
    .into_iter()
    .map(|(mode, supported)| InstallMode {
        mode: mode.to_string(),
        supported,
    })
    .collect()
}
