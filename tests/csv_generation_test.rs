use chrono::{DateTime, TimeZone, Utc};
use olm_csvgen::config::{ImageConfig, PathsConfig};
use olm_csvgen::{Config, CsvGen};
use rstest::rstest;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 5, 4, 12, 30, 0).unwrap()
}

fn fixture_config(output: &Path) -> Config {
    let mut config = Config::default();
    config.operator.version = "1.0.0".to_string();
    config.operator.image = "syndesis/operator:1.0".to_string();

    let components = &mut config.syndesis.components;
    components.database.image = "db:10".to_string();
    components.database.exporter = ImageConfig::new("exporter:1");
    components.amq = ImageConfig::new("amq:6");
    components.oauth = ImageConfig::new("oauth:4");
    components.ui = ImageConfig::new("ui:1");
    components.meta = ImageConfig::new("meta:1");
    components.server = ImageConfig::new("server:1");
    components.s2i = ImageConfig::new("s2i:1");
    components.prometheus = ImageConfig::new("prometheus:2");
    components.upgrade = ImageConfig::new("upgrade:1");
    config.syndesis.addons.camelk = ImageConfig::new("camel-k:1");
    config.syndesis.addons.todo = ImageConfig::new("todo:1");

    config.paths = PathsConfig {
        templates: fixtures().join("templates"),
        assets: fixtures().join("assets"),
    };
    config.output.base_path = output.to_path_buf();
    config.output.created_at = Some(created_at());
    config
}

/// Repository templates and assets with default images
fn shipped_config(output: &Path) -> Config {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut config = Config::default();
    config.paths = PathsConfig {
        templates: root.join("templates"),
        assets: root.join("assets"),
    };
    config.output.base_path = output.to_path_buf();
    config.output.created_at = Some(created_at());
    config
}

fn expected_csv_path() -> PathBuf {
    fixtures().join("expected/syndesis-operator.v1.0.0.clusterserviceversion.yaml")
}

/// Exact output, key order included. Set `UPDATE_EXPECTED=1` to rewrite the
/// fixture after an intended output change.
#[test]
fn test_matches_expected_csv() {
    let temp_dir = TempDir::new().unwrap();
    let app = CsvGen::new(fixture_config(temp_dir.path())).unwrap();
    let rendered = app.render_yaml().unwrap();

    if std::env::var_os("UPDATE_EXPECTED").is_some() {
        std::fs::write(expected_csv_path(), &rendered).unwrap();
    }
    let expected = std::fs::read_to_string(expected_csv_path()).unwrap();

    assert_eq!(rendered, expected);
}

#[test]
fn test_top_level_key_order() {
    let temp_dir = TempDir::new().unwrap();
    let app = CsvGen::new(fixture_config(temp_dir.path())).unwrap();

    let rendered: serde_yaml::Value = serde_yaml::from_str(&app.render_yaml().unwrap()).unwrap();
    let keys = |value: &serde_yaml::Value| -> Vec<String> {
        value
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(keys(&rendered), ["apiVersion", "kind", "metadata", "spec"]);
    assert_eq!(keys(&rendered["metadata"]), ["name", "namespace", "annotations"]);
    assert_eq!(
        keys(&rendered["spec"]),
        [
            "displayName",
            "description",
            "keywords",
            "version",
            "maturity",
            "maintainers",
            "provider",
            "labels",
            "selector",
            "icon",
            "links",
            "installModes",
            "install",
            "customresourcedefinitions",
            "relatedImages",
        ]
    );
}

#[test]
fn test_output_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let app = CsvGen::new(fixture_config(temp_dir.path())).unwrap();

    let first = app.render_yaml().unwrap();
    let second = app.render_yaml().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generate_writes_bundle_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("bundle");
    let app = CsvGen::new(fixture_config(&output)).unwrap();

    let result = app.generate().await.unwrap();

    assert_eq!(result.csv_name, "syndesis-operator.v1.0.0");
    assert_eq!(
        result.output_path,
        output.join("syndesis-operator.v1.0.0.clusterserviceversion.yaml")
    );
    assert_eq!(result.output_path, app.output_path());
    assert_eq!(result.cluster_rules, 4);
    assert_eq!(result.role_rules, 1);
    assert_eq!(result.related_images, 13);

    let written = std::fs::read_to_string(&result.output_path).unwrap();
    assert_eq!(written.len(), result.bytes);
    assert_eq!(written, app.render_yaml().unwrap());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("bundle");
    let app = CsvGen::new(fixture_config(&output)).unwrap();

    let result = app.dry_run().await.unwrap();

    assert_eq!(result.output_path, app.output_path());
    assert!(!output.exists());
}

#[test]
fn test_build_does_not_touch_capabilities() {
    let temp_dir = TempDir::new().unwrap();
    let config = fixture_config(temp_dir.path());
    let app = CsvGen::new(config.clone()).unwrap();

    let csv = app.build().unwrap();

    // olm rules are present even though the flag is off in the config
    assert!(!app.config().api_server.olm_support);
    assert_eq!(app.config(), &config);
    let rules = csv.spec.install.spec.cluster_permissions[0]
        .rules
        .as_sequence()
        .unwrap();
    assert!(rules
        .iter()
        .any(|r| r["apiGroups"][0].as_str() == Some("operators.coreos.com")));
}

#[rstest]
#[case(false, "syndesis-operator.v1.11.0", "Syndesis", "### Syndesis operator")]
#[case(
    true,
    "fuse-online-operator.v1.11.0",
    "Red Hat Integration - Fuse Online",
    "### Fuse Online operator"
)]
fn test_shipped_templates(
    #[case] productized: bool,
    #[case] name: &str,
    #[case] display_name: &str,
    #[case] description_heading: &str,
) {
    let temp_dir = TempDir::new().unwrap();
    let mut config = shipped_config(temp_dir.path());
    config.operator.productized = productized;
    let app = CsvGen::new(config).unwrap();

    let csv = app.build().unwrap();

    assert_eq!(csv.name(), name);
    assert_eq!(csv.spec.display_name, display_name);
    assert!(csv.spec.description.starts_with(description_heading));
    assert_eq!(csv.spec.install.spec.deployments[0].name, app.branding().name);

    let alm: serde_json::Value =
        serde_json::from_str(&csv.metadata.annotations.alm_examples).unwrap();
    assert_eq!(alm[0]["kind"], "Syndesis");

    let container = &csv.spec.install.spec.deployments[0].spec["template"]["spec"]["containers"][0];
    assert_eq!(
        container["image"].as_str(),
        Some("docker.io/syndesis/syndesis-operator:latest")
    );
    let env = container["env"].as_sequence().unwrap();
    assert!(env
        .iter()
        .any(|e| e["name"].as_str() == Some("RELATED_IMAGE_CAMELK")
            && e["value"].as_str() == Some("docker.io/apache/camel-k:1.0.0")));
}

#[test]
fn test_shipped_cluster_rules_include_every_capability() {
    let temp_dir = TempDir::new().unwrap();
    let app = CsvGen::new(shipped_config(temp_dir.path())).unwrap();

    let csv = app.build().unwrap();
    let rules = csv.spec.install.spec.cluster_permissions[0]
        .rules
        .as_sequence()
        .unwrap();

    let groups: Vec<&str> = rules
        .iter()
        .filter_map(|r| r["apiGroups"][0].as_str())
        .collect();
    assert_eq!(groups.first(), Some(&"kafka.strimzi.io"));
    assert!(groups.contains(&"operators.coreos.com"));
    assert!(groups.contains(&"console.openshift.io"));
    assert!(groups.contains(&"config.openshift.io"));
}

#[test]
fn test_missing_template_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = fixture_config(temp_dir.path());
    config.paths.templates = temp_dir.path().join("no-templates");
    let app = CsvGen::new(config).unwrap();

    let err = app.build().unwrap_err();
    assert!(err.to_string().contains("Template rendering failed"));
}

#[test]
fn test_missing_assets_still_build() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = fixture_config(temp_dir.path());
    config.paths.assets = temp_dir.path().join("no-assets");
    let app = CsvGen::new(config).unwrap();

    let csv = app.build().unwrap();
    assert!(csv.metadata.annotations.alm_examples.is_empty());
    assert!(csv.spec.icon[0].base64data.is_empty());
}

#[test]
fn test_created_at_defaults_to_now() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = fixture_config(temp_dir.path());
    config.output.created_at = None;
    let app = CsvGen::new(config).unwrap();

    let before = Utc::now() - chrono::Duration::seconds(1);
    let csv = app.build().unwrap();

    let stamped = DateTime::parse_from_rfc3339(&csv.metadata.annotations.created_at)
        .unwrap()
        .with_timezone(&Utc);
    assert!(stamped >= before);
}
