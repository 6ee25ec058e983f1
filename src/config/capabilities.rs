//! API server capability flags

use serde::{Deserialize, Serialize};

/// Platform capabilities detected on the target cluster. The cluster-role
/// templates use these to decide which permissions to request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiServerCapabilities {
    pub image_streams: bool,
    pub routes: bool,
    pub embedded_provider: bool,
    pub olm_support: bool,
    pub console_link: bool,
}

impl ApiServerCapabilities {
    /// Every capability enabled. A CSV must request the permissions for all
    /// of them since the target cluster is unknown when the bundle is built.
    pub fn all() -> Self {
        Self {
            image_streams: true,
            routes: true,
            embedded_provider: true,
            olm_support: true,
            console_link: true,
        }
    }
}
