//! Integration tests for manifest loading and decoding

use form_fs::NormalizedPath;
use form_meta::{ConfigurationError, Error, FieldOverride, FormConfig, FormManifest, LayoutEntry};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn write_manifest(temp: &TempDir, name: &str, content: &str) -> NormalizedPath {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    NormalizedPath::new(path)
}

const TOML_MANIFEST: &str = r#"
[[pages]]
section = "page-1"
children = ["titles"]

[sections.titles]
component = "CombinedTitlesComponent"

[labels]
dataset = { "metadata.title" = "Dataset title" }
"#;

const JSON_MANIFEST: &str = r#"{
    "pages": [{"section": "page-1", "children": ["titles"]}],
    "sections": {"titles": {"component": "CombinedTitlesComponent"}},
    "labels": {"dataset": {"metadata.title": "Dataset title"}}
}"#;

const YAML_MANIFEST: &str = r#"
pages:
  - section: page-1
    children: [titles]
sections:
  titles:
    component: CombinedTitlesComponent
labels:
  dataset:
    metadata.title: Dataset title
"#;

#[rstest]
#[case("deposit_form.toml", TOML_MANIFEST)]
#[case("deposit_form.json", JSON_MANIFEST)]
#[case("deposit_form.yaml", YAML_MANIFEST)]
fn test_load_manifest_in_every_format(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, name, content);

    let manifest = FormManifest::load(&path).unwrap();

    assert_eq!(manifest.pages.len(), 1);
    assert_eq!(
        manifest.labels["dataset"].as_ref().unwrap()["metadata.title"],
        FieldOverride::Set("Dataset title".into())
    );
}

#[test]
fn test_formats_decode_to_the_same_config() {
    let toml = FormConfig::from_manifest(&FormManifest::parse(TOML_MANIFEST).unwrap()).unwrap();
    let json: FormManifest = serde_json::from_str(JSON_MANIFEST).unwrap();
    let yaml: FormManifest = serde_yaml::from_str(YAML_MANIFEST).unwrap();

    assert_eq!(FormConfig::from_manifest(&json).unwrap(), toml);
    assert_eq!(FormConfig::from_manifest(&yaml).unwrap(), toml);
}

#[test]
fn test_yaml_null_unsets_a_label() {
    let manifest: FormManifest = serde_yaml::from_str(
        r#"
labels:
  audiovisual:
    metadata.title: null
"#,
    )
    .unwrap();

    assert_eq!(
        manifest.labels["audiovisual"].as_ref().unwrap()["metadata.title"],
        FieldOverride::Unset
    );
}

#[test]
fn test_load_reports_parse_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "deposit_form.toml", "[labels\n");

    let err = FormManifest::load(&path).unwrap_err();

    assert!(matches!(err, Error::Fs(_)));
    assert!(err.to_string().contains("deposit_form.toml"));
}

#[test]
fn test_true_label_is_rejected() {
    let err = FormManifest::parse(
        r#"
[labels]
dataset = { "metadata.title" = true }
"#,
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn test_inline_override_sections() {
    let config = FormConfig::parse(
        r#"
[[pages]]
section = "page-4"

[fields_by_type]
"textDocument-thesis" = { page-4 = [{ section = "thesis", title = "Thesis", component = "ThesisDetailsComponent" }] }
"#,
    )
    .unwrap();

    let page = config
        .page_override(&"textDocument-thesis".into(), "page-4")
        .unwrap();
    match &page.entries[..] {
        [LayoutEntry::Literal(node)] => {
            assert_eq!(node.section, "thesis");
            assert_eq!(node.title.as_deref(), Some("Thesis"));
        }
        other => panic!("unexpected entries: {other:?}"),
    }
}

#[test]
fn test_alias_in_catalog_is_rejected() {
    let err = FormConfig::parse(
        r#"
[sections.detail]
children = [{ same_as = "textDocument-book" }]
"#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::AliasOutsideOverride { .. })
    ));
}

#[test]
fn test_null_type_layout_is_configured_without_overrides() {
    let manifest: FormManifest = serde_json::from_str(
        r#"{"pages": [{"section": "page-1"}], "fields_by_type": {"dataset": null}}"#,
    )
    .unwrap();
    let config = FormConfig::from_manifest(&manifest).unwrap();
    let dataset = "dataset".into();

    assert!(config.has_type_layout(&dataset));
    assert!(config.type_layout(&dataset).is_none());
    assert!(config.is_configured(&dataset));
}

#[rstest]
#[case::misspelled_catalog_key("[sections.series]\ncomponet = \"SeriesComponent\"\n")]
#[case::alias_with_section_key(
    "[[pages]]\nsection = \"page-4\"\n\n[fields_by_type]\n\"textDocument-essay\" = { page-4 = [{ same_as = \"textDocument-book\", section = \"book\" }] }\n"
)]
fn test_unknown_section_keys_are_rejected(#[case] content: &str) {
    let err = FormConfig::parse(content).unwrap_err();

    assert!(matches!(err, Error::InvalidConfig { .. }), "got {err:?}");
}
