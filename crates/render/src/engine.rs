//! Tera-backed template renderer

use crate::error::RenderError;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::debug;

/// Renders resource templates from a directory
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template_dir: PathBuf,
}

impl TemplateRenderer {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Render `template` with `context` and parse every non-empty YAML
    /// document of the output into a [`Resource`]
    pub fn render<C: Serialize>(
        &self,
        template: &str,
        context: &C,
    ) -> Result<Vec<Resource>, RenderError> {
        let path = self.template_dir.join(template);
        let source = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;

        let rendered = self.render_str(template, &source, context)?;
        let resources = parse_documents(template, &rendered)?;

        debug!(
            "Rendered {} resource(s) from template {:?}",
            resources.len(),
            path
        );
        Ok(resources)
    }

    /// Render template source text without touching the filesystem
    pub fn render_str<C: Serialize>(
        &self,
        template: &str,
        source: &str,
        context: &C,
    ) -> Result<String, RenderError> {
        let context = Context::from_serialize(context).map_err(|source| RenderError::Context {
            template: template.to_string(),
            source,
        })?;

        let mut tera = Tera::default();
        // Output is YAML, never HTML
        tera.autoescape_on(vec![]);
        tera.add_raw_template(template, source)
            .map_err(|source| RenderError::Template {
                template: template.to_string(),
                source,
            })?;

        tera.render(template, &context)
            .map_err(|source| RenderError::Template {
                template: template.to_string(),
                source,
            })
    }
}

/// Split a multi-document YAML stream into resources, skipping empty documents
pub fn parse_documents(template: &str, rendered: &str) -> Result<Vec<Resource>, RenderError> {
    let mut resources = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(rendered).enumerate() {
        let value = serde_yaml::Value::deserialize(document).map_err(|source| {
            RenderError::Yaml {
                template: template.to_string(),
                source,
            }
        })?;

        if value.is_null() {
            continue;
        }

        let resource = Resource::from_value(value).ok_or_else(|| RenderError::NotAnObject {
            template: template.to_string(),
            index,
        })?;
        resources.push(resource);
    }

    Ok(resources)
}
