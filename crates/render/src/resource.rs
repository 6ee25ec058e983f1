//! Rendered Kubernetes resource

use serde::{Deserialize, Serialize};

/// A single Kubernetes object produced by rendering a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    value: serde_yaml::Value,
}

impl Resource {
    /// Wrap a YAML document. Returns `None` unless the document is a mapping.
    pub fn from_value(value: serde_yaml::Value) -> Option<Self> {
        if value.is_mapping() {
            Some(Self { value })
        } else {
            None
        }
    }

    /// Resource name from `metadata.name`
    pub fn name(&self) -> &str {
        self.nested_field(&["metadata", "name"])
            .and_then(|n| n.as_str())
            .unwrap_or("<unnamed>")
    }

    /// Resource kind
    pub fn kind(&self) -> Option<&str> {
        self.value.get("kind").and_then(|k| k.as_str())
    }

    /// Top-level field lookup
    pub fn field(&self, name: &str) -> Option<&serde_yaml::Value> {
        self.value.get(name)
    }

    /// Walk a path of mapping keys. Returns `None` as soon as a segment is
    /// missing or an intermediate value is not a mapping.
    pub fn nested_field(&self, path: &[&str]) -> Option<&serde_yaml::Value> {
        let mut current = &self.value;
        for segment in path {
            current = current.as_mapping()?.get(*segment)?;
        }
        Some(current)
    }

    pub fn as_value(&self) -> &serde_yaml::Value {
        &self.value
    }

    pub fn into_value(self) -> serde_yaml::Value {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role() -> Resource {
        let value: serde_yaml::Value = serde_yaml::from_str(
            r#"
            kind: Role
            apiVersion: rbac.authorization.k8s.io/v1
            metadata:
              name: syndesis-operator
            rules:
              - apiGroups: [""]
                resources: ["pods"]
                verbs: ["get"]
        "#,
        )
        .unwrap();
        Resource::from_value(value).unwrap()
    }

    #[test]
    fn test_name_and_kind() {
        let resource = role();
        assert_eq!(resource.name(), "syndesis-operator");
        assert_eq!(resource.kind(), Some("Role"));
    }

    #[test]
    fn test_nested_field() {
        let resource = role();
        assert!(resource.nested_field(&["rules"]).unwrap().is_sequence());
        assert!(resource.nested_field(&["metadata", "namespace"]).is_none());
        // kind is a string, not a mapping
        assert!(resource.nested_field(&["kind", "name"]).is_none());
    }

    #[test]
    fn test_rejects_non_mapping() {
        assert!(Resource::from_value(serde_yaml::Value::String("x".into())).is_none());
        assert!(Resource::from_value(serde_yaml::Value::Null).is_none());
    }

    #[test]
    fn test_unnamed_resource() {
        let value: serde_yaml::Value = serde_yaml::from_str("kind: ClusterRole").unwrap();
        let resource = Resource::from_value(value).unwrap();
        assert_eq!(resource.name(), "<unnamed>");
    }
}
