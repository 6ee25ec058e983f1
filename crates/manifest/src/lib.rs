//! OLM ClusterServiceVersion schema and assembly

pub mod branding;
pub mod builder;
pub mod images;
pub mod types;

pub use branding::Branding;
pub use builder::{CsvAssets, CsvBuilder};
pub use images::{Image, RelatedImages};
pub use types::{file_name_for, ClusterServiceVersion};

/// Errors raised while assembling or serializing a CSV
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
