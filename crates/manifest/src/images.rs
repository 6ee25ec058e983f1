//! Related image list

use serde::{Deserialize, Serialize};

/// An image the operator may deploy, listed so disconnected installs can
/// mirror it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub image: String,
}

impl Image {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// Image references for every component listed under `relatedImages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedImages {
    pub operator: String,
    pub database: String,
    pub database_exporter: String,
    pub todo: String,
    pub oauth: String,
    pub ui: String,
    pub s2i: String,
    pub prometheus: String,
    pub upgrade: String,
    pub meta: String,
    pub server: String,
    pub amq: String,
}

impl RelatedImages {
    /// Images in the order OLM bundles list them. The database image appears
    /// twice, once as `postgres-version`.
    pub fn to_images(&self) -> Vec<Image> {
        vec![
            Image::new("syndesis-operator", &self.operator),
            Image::new("postgres-version", &self.database),
            Image::new("todo", &self.todo),
            Image::new("oauth", &self.oauth),
            Image::new("ui", &self.ui),
            Image::new("s2i", &self.s2i),
            Image::new("prometheus", &self.prometheus),
            Image::new("upgrade", &self.upgrade),
            Image::new("meta", &self.meta),
            Image::new("database", &self.database),
            Image::new("psql_exporter", &self.database_exporter),
            Image::new("server", &self.server),
            Image::new("amq", &self.amq),
        ]
    }
}
