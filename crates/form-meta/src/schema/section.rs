//! Section definitions as written in a manifest
//!
//! # Example TOML
//!
//! ```toml
//! [[pages]]
//! section = "page-4"
//! title = "Details"
//! children = ["alternate_identifiers", "related_works"]
//!
//! [sections.journal_detail]
//! title = "Journal details"
//! component = "JournalDetailComponent"
//!
//! [fields_by_type]
//! "textDocument-journalArticle" = { page-4 = ["journal_detail"] }
//! "textDocument-essay" = { page-4 = [{ same_as = "textDocument-bookSection" }] }
//! "textDocument-thesis" = { page-4 = { placement = "prepend", sections = ["thesis_detail"] } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ResourceType;

/// A section written inline, with its own identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDefinition {
    /// Identifier, unique among siblings
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// UI component mounted for this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Free-form options passed through to the component
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntryDefinition>,
}

/// A reusable section in the `[sections]` catalog.
///
/// The catalog key is the section identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntryDefinition>,
}

/// `{ same_as = "<resource type>" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasDefinition {
    pub same_as: ResourceType,
}

/// One child entry: a catalog slug, an alias directive or an inline section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDefinition {
    Ref(String),
    Alias(AliasDefinition),
    Inline(SectionDefinition),
}

/// Where a per-type override puts its sections on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// After the base sections of the page
    #[default]
    Append,
    /// Before the base sections of the page
    Prepend,
    /// Instead of the base sections of the page
    Replace,
}

/// The long form of a page override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacedEntries {
    #[serde(default)]
    pub placement: Placement,
    /// Insert right after this base section instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    pub sections: Vec<EntryDefinition>,
}

/// Value of `fields_by_type.<type>.<page>`.
///
/// A bare list is shorthand for `{ placement = "append", sections = [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageOverrideDefinition {
    Entries(Vec<EntryDefinition>),
    Placed(PlacedEntries),
}

impl PageOverrideDefinition {
    pub fn entries(&self) -> &[EntryDefinition] {
        match self {
            Self::Entries(entries) => entries,
            Self::Placed(placed) => &placed.sections,
        }
    }
}
