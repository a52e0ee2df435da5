//! The manifest: one configuration file, possibly partial
//!
//! Manifests from several layers (built-in defaults, global, instance,
//! local) are merged with [`FormManifest::merge`], later layers winning
//! key by key, before the result is decoded and validated.

use std::collections::BTreeMap;

use form_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::{FieldDefinition, FieldOverride};
use super::section::{CatalogSection, PageOverrideDefinition, SectionDefinition};
use crate::{Error, ResourceType, Result};

/// Page overrides of one resource type, keyed by page identifier.
pub type TypeLayoutDefinition = BTreeMap<String, PageOverrideDefinition>;

/// Resource type → field path → override. A `null` type entry applies nothing.
pub type ModificationTable = BTreeMap<ResourceType, Option<BTreeMap<String, FieldOverride>>>;

/// Resource type → field path → prefill value.
pub type ValueTable = BTreeMap<ResourceType, Option<BTreeMap<String, Value>>>;

/// Field paths edited by a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Deposit form configuration as written in one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormManifest {
    /// Type pre-selected when a form opens without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_resource_type: Option<ResourceType>,

    /// Base layout shared by every resource type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<SectionDefinition>,

    /// Reusable sections referenced by slug
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sections: BTreeMap<String, CatalogSection>,

    /// Components in addition to the built-in registry
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, ComponentDefinition>,

    /// Base field attributes keyed by field path
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldDefinition>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields_by_type: BTreeMap<ResourceType, Option<TypeLayoutDefinition>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: ModificationTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub placeholders: ModificationTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub descriptions: ModificationTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub help_texts: ModificationTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: ModificationTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_values: ValueTable,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub priority_values: ValueTable,

    /// Field paths that become mandatory for a type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_required: BTreeMap<ResourceType, Vec<String>>,
}

impl FormManifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use form_meta::FormManifest;
    ///
    /// let manifest = FormManifest::parse(r#"
    /// default_resource_type = "dataset"
    ///
    /// [labels]
    /// dataset = { "metadata.title" = "Dataset title" }
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.default_resource_type.unwrap().as_str(), "dataset");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }

    /// Load a manifest from a TOML, JSON or YAML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Create an empty manifest; merging it changes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge another manifest into this one
    ///
    /// The `other` manifest takes precedence:
    /// - `default_resource_type`: replaced when set
    /// - `pages`: replaced wholesale when `other` defines any
    /// - `sections`, `components`, `fields`: overlaid per key
    /// - `fields_by_type`: overlaid per type, then per page
    /// - modification and value tables: overlaid per type, then per field path
    /// - `extra_required`: union, keeping first-seen order
    ///
    /// A `null` type entry in `other` replaces the base entry, so a layer
    /// can switch off a type's overrides entirely.
    pub fn merge(&mut self, other: &FormManifest) {
        if other.default_resource_type.is_some() {
            self.default_resource_type = other.default_resource_type.clone();
        }

        if !other.pages.is_empty() {
            self.pages = other.pages.clone();
        }

        overlay(&mut self.sections, &other.sections);
        overlay(&mut self.components, &other.components);
        overlay(&mut self.fields, &other.fields);

        merge_per_type(&mut self.fields_by_type, &other.fields_by_type);
        merge_per_type(&mut self.labels, &other.labels);
        merge_per_type(&mut self.placeholders, &other.placeholders);
        merge_per_type(&mut self.descriptions, &other.descriptions);
        merge_per_type(&mut self.help_texts, &other.help_texts);
        merge_per_type(&mut self.icons, &other.icons);
        merge_per_type(&mut self.default_values, &other.default_values);
        merge_per_type(&mut self.priority_values, &other.priority_values);

        for (resource_type, fields) in &other.extra_required {
            let base = self.extra_required.entry(resource_type.clone()).or_default();
            for field in fields {
                if !base.contains(field) {
                    base.push(field.clone());
                }
            }
        }
    }
}

fn overlay<V: Clone>(base: &mut BTreeMap<String, V>, other: &BTreeMap<String, V>) {
    for (key, value) in other {
        base.insert(key.clone(), value.clone());
    }
}

fn merge_per_type<V: Clone>(
    base: &mut BTreeMap<ResourceType, Option<BTreeMap<String, V>>>,
    other: &BTreeMap<ResourceType, Option<BTreeMap<String, V>>>,
) {
    for (resource_type, other_entry) in other {
        match (base.get_mut(resource_type), other_entry) {
            (Some(Some(base_map)), Some(other_map)) => overlay(base_map, other_map),
            _ => {
                base.insert(resource_type.clone(), other_entry.clone());
            }
        }
    }
}
