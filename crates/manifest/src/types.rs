//! ClusterServiceVersion document types
//!
//! Field order in these structs is the key order of the serialized YAML.

use crate::images::Image;
use crate::ManifestResult;
use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "operators.coreos.com/v1alpha1";
pub const KIND: &str = "ClusterServiceVersion";

/// Bundle file name for a CSV name
pub fn file_name_for(csv_name: &str) -> String {
    format!("{}.clusterserviceversion.yaml", csv_name)
}

/// Top-level CSV document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceVersion {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: Spec,
}

impl ClusterServiceVersion {
    /// CSV name, `<operator>.v<version>`
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Bundle file name for this CSV
    pub fn file_name(&self) -> String {
        file_name_for(&self.metadata.name)
    }

    pub fn to_yaml(&self) -> ManifestResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
    pub annotations: Annotations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotations {
    pub capabilities: String,
    pub categories: String,
    pub certified: String,
    pub created_at: String,
    pub container_image: String,
    pub support: String,
    pub description: String,
    pub repository: String,
    #[serde(rename = "alm-examples")]
    pub alm_examples: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    pub display_name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub version: String,
    pub maturity: String,
    pub maintainers: Vec<Maintainer>,
    pub provider: Provider,
    pub labels: NameLabel,
    pub selector: Selector,
    pub icon: Vec<Icon>,
    pub links: Vec<Link>,
    pub install_modes: Vec<InstallMode>,
    pub install: Install,
    #[serde(rename = "customresourcedefinitions")]
    pub custom_resource_definitions: CustomResourceDefinitions,
    pub related_images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameLabel {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub match_labels: NameLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub base64data: String,
    pub mediatype: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallMode {
    #[serde(rename = "type")]
    pub mode: String,
    pub supported: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Install {
    pub strategy: String,
    pub spec: InstallSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallSpec {
    pub cluster_permissions: Vec<Permission>,
    pub permissions: Vec<Permission>,
    pub deployments: Vec<Deployment>,
}

/// RBAC rules granted to a service account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub service_account_name: String,
    pub rules: serde_yaml::Value,
}

/// Operator deployment; `spec` is the rendered Deployment spec, verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub name: String,
    pub spec: serde_yaml::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomResourceDefinitions {
    pub owned: Vec<CustomResourceDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceDefinition {
    pub name: String,
    pub version: String,
    pub kind: String,
    pub display_name: String,
    pub description: String,
}
