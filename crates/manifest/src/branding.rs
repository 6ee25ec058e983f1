//! Community and productized branding

use serde::{Deserialize, Serialize};

/// Naming and ownership details that differ between the community
/// (Syndesis) and productized (Fuse Online) operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub productized: bool,
    pub name: String,
    pub display_name: String,
    pub support: String,
    pub description: String,
    pub maintainer_name: String,
    pub maintainer_email: String,
    pub provider: String,
}

impl Branding {
    pub fn for_target(productized: bool) -> Self {
        if productized {
            Self::productized()
        } else {
            Self::community()
        }
    }

    pub fn productized() -> Self {
        Self {
            productized: true,
            name: "fuse-online-operator".to_string(),
            display_name: "Red Hat Integration - Fuse Online".to_string(),
            support: "Fuse Online".to_string(),
            description: "Manages the installation of Fuse Online, a flexible and customizable open source platform that provides core integration capabilities as a service.".to_string(),
            maintainer_name: "Jon Anstey".to_string(),
            maintainer_email: "janstey@redhat.com".to_string(),
            provider: "Red Hat".to_string(),
        }
    }

    pub fn community() -> Self {
        Self {
            productized: false,
            name: "syndesis-operator".to_string(),
            display_name: "Syndesis".to_string(),
            support: "Syndesis".to_string(),
            description: "Manages the installation of Syndesis, a flexible and customizable open source platform that provides core integration capabilities as a service.".to_string(),
            maintainer_name: "Syndesis team".to_string(),
            maintainer_email: "syndesis@googlegroups.com".to_string(),
            provider: "Syndesis team".to_string(),
        }
    }

    /// Asset subdirectory holding the target-specific description
    pub fn target(&self) -> &'static str {
        if self.productized {
            "productized"
        } else {
            "community"
        }
    }

    /// CSV name for an operator version
    pub fn csv_name(&self, version: &str) -> String {
        format!("{}.v{}", self.name, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, "fuse-online-operator", "productized", "Red Hat")]
    #[case(false, "syndesis-operator", "community", "Syndesis team")]
    fn test_for_target(
        #[case] productized: bool,
        #[case] name: &str,
        #[case] target: &str,
        #[case] provider: &str,
    ) {
        let branding = Branding::for_target(productized);
        assert_eq!(branding.name, name);
        assert_eq!(branding.target(), target);
        assert_eq!(branding.provider, provider);
    }

    #[test]
    fn test_csv_name() {
        assert_eq!(
            Branding::community().csv_name("1.11.0"),
            "syndesis-operator.v1.11.0"
        );
    }
}
