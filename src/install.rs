//! Install strategy loaders
//!
//! The operator's RBAC rules and deployment are maintained as templates that
//! are also used for plain (non-OLM) installs. These loaders render them and
//! pull out the pieces OLM wants inside the CSV install strategy.

use crate::config::{ApiServerCapabilities, Config};
use crate::{CsvGenError, CsvGenResult};
use olm_render::{Resource, TemplateRenderer};
use serde::Serialize;
use tracing::{debug, info};

pub const ROLE_TEMPLATE: &str = "role.yml.tera";
pub const CLUSTER_ROLE_TEMPLATES: [&str; 3] = [
    "cluster_role_kafka.yml.tera",
    "cluster_role_olm.yml.tera",
    "cluster_role_public_api.yml.tera",
];
pub const DEPLOYMENT_TEMPLATE: &str = "deployment.yml.tera";

/// Role templates pick their own kind and name when these are empty
#[derive(Debug, Serialize)]
struct RoleContext<'a> {
    kind: &'a str,
    role: &'a str,
}

#[derive(Debug, Serialize)]
struct ClusterRoleContext<'a> {
    kind: &'a str,
    role: &'a str,
    api_server: &'a ApiServerCapabilities,
}

/// Values substituted into the operator deployment template
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentContext {
    pub related_images: bool,
    pub operator_image: String,
    pub database_image: String,
    pub exporter_image: String,
    pub amq_image: String,
    pub camel_k_image: String,
    pub todo_image: String,
    pub oauth_image: String,
    pub ui_image: String,
    pub s2i_image: String,
    pub prometheus_image: String,
    pub upgrade_image: String,
    pub meta_image: String,
    pub server_image: String,
}

impl DeploymentContext {
    pub fn from_config(config: &Config) -> Self {
        let components = &config.syndesis.components;
        let addons = &config.syndesis.addons;
        Self {
            related_images: true,
            operator_image: config.operator.image.clone(),
            database_image: components.database.image.clone(),
            exporter_image: components.database.exporter.image.clone(),
            amq_image: components.amq.image.clone(),
            camel_k_image: addons.camelk.image.clone(),
            todo_image: addons.todo.image.clone(),
            oauth_image: components.oauth.image.clone(),
            ui_image: components.ui.image.clone(),
            s2i_image: components.s2i.image.clone(),
            prometheus_image: components.prometheus.image.clone(),
            upgrade_image: components.upgrade.image.clone(),
            meta_image: components.meta.image.clone(),
            server_image: components.server.image.clone(),
        }
    }
}

/// Namespaced rules for the operator service account, taken from the first
/// resource of the role template
pub fn load_role_rules(renderer: &TemplateRenderer) -> CsvGenResult<serde_yaml::Value> {
    let context = RoleContext { kind: "", role: "" };
    let resource = first_resource(renderer, ROLE_TEMPLATE, &context)?;

    let rules = rules_of(&resource)
        .cloned()
        .ok_or_else(|| CsvGenError::MissingField {
            field: "rules",
            resource: resource.name().to_string(),
        })?;

    debug!("Loaded role rules from {}", resource.name());
    Ok(rules)
}

/// Cluster-wide rules for the operator service account, flattened from every
/// resource of the cluster role templates.
///
/// All API server capabilities are enabled for rendering, whatever the
/// configured flags, so the CSV requests every permission the operator may
/// need.
pub fn load_cluster_role_rules(
    renderer: &TemplateRenderer,
) -> CsvGenResult<Vec<serde_yaml::Mapping>> {
    let api_server = ApiServerCapabilities::all();
    let context = ClusterRoleContext {
        kind: "",
        role: "",
        api_server: &api_server,
    };

    let mut resources = Vec::new();
    for template in CLUSTER_ROLE_TEMPLATES {
        resources.extend(renderer.render(template, &context)?);
    }

    let rules = collect_rules(&resources)?;
    info!(
        "Loaded {} cluster rule(s) from {} resource(s)",
        rules.len(),
        resources.len()
    );
    Ok(rules)
}

/// Flatten the `rules` of each resource. Every resource must carry a
/// non-empty list of rule mappings.
pub fn collect_rules(resources: &[Resource]) -> CsvGenResult<Vec<serde_yaml::Mapping>> {
    let mut collected = Vec::new();

    for resource in resources {
        let rules = rules_of(resource)
            .ok_or_else(|| CsvGenError::MissingRules(resource.name().to_string()))?;

        let rule_maps = match rules.as_sequence() {
            Some(seq) if !seq.is_empty() => seq,
            _ => return Err(CsvGenError::InvalidRuleMaps(resource.name().to_string())),
        };

        for rule in rule_maps {
            let rule = rule
                .as_mapping()
                .ok_or_else(|| CsvGenError::InvalidRuleMap(resource.name().to_string()))?;
            collected.push(rule.clone());
        }
    }

    Ok(collected)
}

/// Deployment spec for the operator, taken from the first resource of the
/// deployment template
pub fn load_deployment_spec(
    renderer: &TemplateRenderer,
    context: &DeploymentContext,
) -> CsvGenResult<serde_yaml::Value> {
    let resource = first_resource(renderer, DEPLOYMENT_TEMPLATE, context)?;

    resource
        .field("spec")
        .cloned()
        .ok_or_else(|| CsvGenError::MissingField {
            field: "spec",
            resource: resource.name().to_string(),
        })
}

/// `rules` of a resource; an explicit null counts as missing
fn rules_of(resource: &Resource) -> Option<&serde_yaml::Value> {
    resource
        .nested_field(&["rules"])
        .filter(|rules| !rules.is_null())
}

fn first_resource<C: Serialize>(
    renderer: &TemplateRenderer,
    template: &str,
    context: &C,
) -> CsvGenResult<Resource> {
    renderer
        .render(template, context)?
        .into_iter()
        .next()
        .ok_or_else(|| CsvGenError::EmptyRender(template.to_string()))
}
