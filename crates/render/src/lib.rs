//! Template rendering for Kubernetes resource manifests

pub mod engine;
pub mod error;
pub mod resource;

pub use engine::TemplateRenderer;
pub use error::RenderError;
pub use resource::Resource;
