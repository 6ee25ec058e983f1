//! Rendering errors

use std::path::PathBuf;

/// Errors raised while rendering a template into Kubernetes resources
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Failed to read template {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template context for {template}: {source}")]
    Context {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to render template {template}: {source}")]
    Template {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Rendered template {template} is not valid YAML: {source}")]
    Yaml {
        template: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Document {index} rendered from {template} is not an object")]
    NotAnObject { template: String, index: usize },
}
