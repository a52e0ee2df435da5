//! Export command: write one type's resolved layout to disk

use std::path::Path;

use colored::Colorize;
use form_core::{ConfigResolver, ResolvedLayout};
use form_fs::{ConfigFormat, ConfigStore, NormalizedPath};
use form_meta::ResourceType;
use serde_json::Value;

use super::resolve::resolve_layout;
use crate::error::{CliError, Result};

/// Run the export command
pub fn run_export(resolver: &ConfigResolver, resource_type: &str, output: &Path) -> Result<()> {
    let path = NormalizedPath::new(output);
    let Some(format) = path.extension().and_then(ConfigFormat::from_extension) else {
        return Err(CliError::user(format!(
            "Cannot export to {}: use a .toml, .json, .yaml or .yml file",
            path
        )));
    };

    let config = resolver.resolve()?;
    let layout = resolve_layout(&config, &ResourceType::new(resource_type))?;
    if format == ConfigFormat::Toml {
        if let Some(field) = null_prefill(&layout) {
            return Err(CliError::user(format!(
                "Cannot export {resource_type} to TOML: the prefill of {field} contains null. \
                 Use a .json, .yaml or .yml file"
            )));
        }
    }
    ConfigStore::new().save(&path, &layout)?;

    println!(
        "{} Wrote {} layout to {}",
        "OK".green().bold(),
        resource_type.cyan(),
        path
    );
    Ok(())
}

/// First field whose prefill holds a null, which TOML cannot represent.
fn null_prefill(layout: &ResolvedLayout) -> Option<&str> {
    layout
        .fields()
        .into_iter()
        .find(|field| field.prefill.as_ref().is_some_and(|p| contains_null(p.value())))
        .map(|field| field.path.as_str())
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_test_utils::TestConfigDir;

    fn resolver(dir: &TestConfigDir) -> ConfigResolver {
        ConfigResolver::with_global_config_dir(NormalizedPath::new(dir.root()), dir.global_dir())
    }

    #[test]
    fn writes_json_layout() {
        let dir = TestConfigDir::new();
        let output = dir.root().join("article.json");

        run_export(&resolver(&dir), "textDocument-journalArticle", &output).unwrap();

        dir.assert_file_contains("article.json", "\"resource_type\": \"textDocument-journalArticle\"");
        dir.assert_file_contains("article.json", "custom_fields.journal:journal.title");
    }

    #[test]
    fn null_prefill_cannot_go_to_toml() {
        let dir = TestConfigDir::new();
        dir.write_local(
            "json",
            r#"{"priority_values": {"dataset": {"metadata.languages": [null]}}}"#,
        );
        let toml_output = dir.root().join("dataset.toml");
        let json_output = dir.root().join("dataset.json");

        let err = run_export(&resolver(&dir), "dataset", &toml_output).unwrap_err();

        assert!(matches!(err, CliError::User { .. }));
        assert!(err.to_string().contains("metadata.languages"));
        assert!(!toml_output.exists());

        run_export(&resolver(&dir), "dataset", &json_output).unwrap();
        dir.assert_file_contains("dataset.json", "\"source\": \"priority\"");
    }

    #[test]
    fn null_detection_looks_inside_containers() {
        assert!(contains_null(&serde_json::json!({"a": [1, null]})));
        assert!(!contains_null(&serde_json::json!({"a": [1, "b"]})));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TestConfigDir::new();
        let output = dir.root().join("article.txt");

        let err = run_export(&resolver(&dir), "dataset", &output).unwrap_err();

        assert!(matches!(err, CliError::User { .. }));
        assert!(!output.exists());
    }
}
