//! Configuration management for olm-csvgen

pub mod capabilities;
pub mod components;
pub mod config;
pub mod output;


// Re-export main types for convenience
pub use capabilities::ApiServerCapabilities;
pub use components::{AddonsConfig, ComponentsConfig, DatabaseConfig, ImageConfig, SyndesisConfig};
pub use config::{Config, OperatorConfig};
pub use output::{OutputConfig, PathsConfig};
