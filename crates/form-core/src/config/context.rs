//! Host context export
//!
//! The `FormContext` is the JSON document a host page embeds so the form
//! front end can resolve layouts itself. Keys are camelCase, matching what
//! the front end reads from its data attributes.

use std::collections::BTreeMap;

use form_meta::schema::{ModificationTable, ValueTable};
use form_meta::{FormConfig, ResourceType, SectionNode, TextAttribute, TypeLayout};
use serde::Serialize;
use serde_json::Value;

/// Configuration tables as handed to the host page.
///
/// # Example
///
/// ```
/// use form_core::config::FormContext;
/// use form_meta::defaults::builtin_config;
///
/// let config = builtin_config().unwrap();
/// let json = FormContext::from_config(&config).to_json();
///
/// assert_eq!(json["defaultResourceType"], "textDocument-journalArticle");
/// assert_eq!(
///     json["fieldsByType"]["textDocument-essay"]["page-4"]["sections"][0]["same_as"],
///     "textDocument-bookSection"
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormContext<'a> {
    pub common_fields: &'a [SectionNode],
    pub fields_by_type: &'a BTreeMap<ResourceType, Option<TypeLayout>>,
    pub label_modifications: &'a ModificationTable,
    pub placeholder_modifications: &'a ModificationTable,
    pub description_modifications: &'a ModificationTable,
    pub help_text_modifications: &'a ModificationTable,
    pub icon_modifications: &'a ModificationTable,
    pub default_field_values: &'a ValueTable,
    pub priority_field_values: &'a ValueTable,
    pub extra_required_fields: &'a BTreeMap<ResourceType, Vec<String>>,
    pub default_resource_type: Option<&'a ResourceType>,
}

impl<'a> FormContext<'a> {
    pub fn from_config(config: &'a FormConfig) -> Self {
        Self {
            common_fields: config.pages(),
            fields_by_type: config.fields_by_type(),
            label_modifications: config.text_table(TextAttribute::Label),
            placeholder_modifications: config.text_table(TextAttribute::Placeholder),
            description_modifications: config.text_table(TextAttribute::Description),
            help_text_modifications: config.text_table(TextAttribute::HelpText),
            icon_modifications: config.text_table(TextAttribute::Icon),
            default_field_values: config.default_values(),
            priority_field_values: config.priority_values(),
            extra_required_fields: config.extra_required_table(),
            default_resource_type: config.default_resource_type(),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
