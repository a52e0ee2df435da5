use form_fs::{ConfigFormat, ConfigStore, Error, NormalizedPath};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct LabelTable {
    default_resource_type: String,
    labels: BTreeMap<String, String>,
}

fn expected_table() -> LabelTable {
    LabelTable {
        default_resource_type: "dataset".into(),
        labels: BTreeMap::from([("metadata.title".to_string(), "Dataset title".to_string())]),
    }
}

#[rstest]
#[case(
    "deposit_form.toml",
    "default_resource_type = \"dataset\"\n\n[labels]\n\"metadata.title\" = \"Dataset title\"\n"
)]
#[case(
    "deposit_form.json",
    r#"{"default_resource_type": "dataset", "labels": {"metadata.title": "Dataset title"}}"#
)]
#[case(
    "deposit_form.yaml",
    "default_resource_type: dataset\nlabels:\n  metadata.title: Dataset title\n"
)]
#[case(
    "deposit_form.yml",
    "default_resource_type: dataset\nlabels:\n  metadata.title: Dataset title\n"
)]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file_name);
    fs::write(&file_path, content).unwrap();

    let table: LabelTable = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(table, expected_table());
}

#[test]
fn test_save_json_then_load() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("export.json"));
    let store = ConfigStore::new();

    store.save(&path, &expected_table()).unwrap();
    let content = fs::read_to_string(path.to_native()).unwrap();
    assert!(content.contains("\"metadata.title\""));

    let loaded: LabelTable = store.load(&path).unwrap();
    assert_eq!(loaded, expected_table());
}

#[test]
fn test_save_toml_quotes_dotted_keys() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("export.toml"));

    ConfigStore::new().save(&path, &expected_table()).unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert!(content.contains("default_resource_type = \"dataset\""));
    assert!(content.contains("\"metadata.title\" = \"Dataset title\""));
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("deposit_form.ini");
    fs::write(&file_path, "labels=").unwrap();

    let result: form_fs::Result<LabelTable> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn test_parse_error_names_format_and_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("broken.toml");
    fs::write(&file_path, "labels = [unterminated").unwrap();

    let err = ConfigStore::new()
        .load::<LabelTable>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("TOML"), "got: {message}");
    assert!(message.contains("broken.toml"), "got: {message}");
}

#[test]
fn test_locate_prefers_toml_over_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("deposit_form.json"), "{}").unwrap();
    fs::write(temp.path().join("deposit_form.toml"), "").unwrap();

    let dir = NormalizedPath::new(temp.path());
    let found = ConfigStore::new().locate(&dir, "deposit_form").unwrap();

    assert_eq!(found.extension(), Some("toml"));
}

#[test]
fn test_locate_missing_returns_none() {
    let temp = TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path());

    assert!(ConfigStore::new().locate(&dir, "deposit_form").is_none());
}

#[test]
fn test_format_from_extension_is_case_insensitive() {
    assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_extension("Toml"), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_extension("xml"), None);
}
