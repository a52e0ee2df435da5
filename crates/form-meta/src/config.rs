//! The validated, immutable form configuration
//!
//! [`FormConfig`] is decoded once from a merged [`FormManifest`]: catalog
//! references are expanded, alias directives become [`LayoutEntry::Alias`],
//! and every table is checked against the base layout. After that the
//! configuration is read-only and can be shared between threads.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::schema::{
    CatalogSection, EntryDefinition, FieldDefinition, FieldOverride, FormManifest,
    ModificationTable, PageOverrideDefinition, Placement, SectionDefinition, ValueTable,
};
use crate::{ComponentRegistry, ConfigurationError, ResourceType, Result};

/// A section of the form after catalog expansion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionNode {
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SectionNode>,
}

impl SectionNode {
    /// A bare section with no component or children.
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            title: None,
            component: None,
            props: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SectionNode>) -> Self {
        self.children = children;
        self
    }
}

/// One entry of a per-type page override.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEntry {
    Literal(SectionNode),
    /// Entries the named type receives for the same page
    Alias(ResourceType),
}

impl Serialize for LayoutEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Literal(node) => node.serialize(serializer),
            Self::Alias(target) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("same_as", target)?;
                map.end()
            }
        }
    }
}

/// Where override entries land among the base sections of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    Append,
    Prepend,
    Replace,
    /// Right after the named base section
    After(String),
}

/// The decoded value of `fields_by_type.<type>.<page>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOverride {
    pub splice: Splice,
    pub entries: Vec<LayoutEntry>,
}

impl Serialize for PageOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.splice == Splice::Append {
            return self.entries.serialize(serializer);
        }

        let mut map = serializer.serialize_map(Some(2))?;
        match &self.splice {
            Splice::Append => {}
            Splice::Prepend => map.serialize_entry("placement", "prepend")?,
            Splice::Replace => map.serialize_entry("placement", "replace")?,
            Splice::After(anchor) => map.serialize_entry("after", anchor)?,
        }
        map.serialize_entry("sections", &self.entries)?;
        map.end()
    }
}

/// Page overrides of one resource type, keyed by page identifier.
pub type TypeLayout = BTreeMap<String, PageOverride>;

/// The five text axes a modification table can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextAttribute {
    Label,
    Placeholder,
    Description,
    HelpText,
    Icon,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 5] = [
        Self::Label,
        Self::Placeholder,
        Self::Description,
        Self::HelpText,
        Self::Icon,
    ];

    /// The attribute's base value in a field definition.
    pub fn base_value(self, field: &FieldDefinition) -> Option<&str> {
        match self {
            Self::Label => field.label.as_deref(),
            Self::Placeholder => field.placeholder.as_deref(),
            Self::Description => field.description.as_deref(),
            Self::HelpText => field.help_text.as_deref(),
            Self::Icon => field.icon.as_deref(),
        }
    }
}

/// Validated deposit form configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    default_resource_type: Option<ResourceType>,
    pages: Vec<SectionNode>,
    components: ComponentRegistry,
    fields: BTreeMap<String, FieldDefinition>,
    fields_by_type: BTreeMap<ResourceType, Option<TypeLayout>>,
    labels: ModificationTable,
    placeholders: ModificationTable,
    descriptions: ModificationTable,
    help_texts: ModificationTable,
    icons: ModificationTable,
    default_values: ValueTable,
    priority_values: ValueTable,
    extra_required: BTreeMap<ResourceType, Vec<String>>,
}

impl FormConfig {
    /// Parse and validate a TOML manifest.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest = FormManifest::parse(content)?;
        Ok(Self::from_manifest(&manifest)?)
    }

    /// Decode a manifest against the built-in component registry.
    pub fn from_manifest(manifest: &FormManifest) -> std::result::Result<Self, ConfigurationError> {
        Self::from_manifest_with(manifest, ComponentRegistry::with_builtins())
    }

    /// Decode a manifest, registering its `[components]` on top of `registry`.
    pub fn from_manifest_with(
        manifest: &FormManifest,
        mut registry: ComponentRegistry,
    ) -> std::result::Result<Self, ConfigurationError> {
        for (name, component) in &manifest.components {
            registry.register(name.clone(), component.fields.iter().cloned());
        }

        let decoder = Decoder {
            catalog: &manifest.sections,
            registry: &registry,
        };

        let pages = decoder.pages(&manifest.pages)?;
        for (slug, entry) in &manifest.sections {
            decoder.catalog_node(slug, entry, &mut Vec::new())?;
        }

        let mut fields_by_type = BTreeMap::new();
        for (resource_type, layout) in &manifest.fields_by_type {
            let decoded = match layout {
                Some(layout) => Some(decoder.type_layout(resource_type, layout, &pages)?),
                None => None,
            };
            fields_by_type.insert(resource_type.clone(), decoded);
        }

        let config = Self {
            default_resource_type: manifest.default_resource_type.clone(),
            pages,
            components: registry,
            fields: manifest.fields.clone(),
            fields_by_type,
            labels: manifest.labels.clone(),
            placeholders: manifest.placeholders.clone(),
            descriptions: manifest.descriptions.clone(),
            help_texts: manifest.help_texts.clone(),
            icons: manifest.icons.clone(),
            default_values: manifest.default_values.clone(),
            priority_values: manifest.priority_values.clone(),
            extra_required: manifest.extra_required.clone(),
        };

        config.check_alias_targets()?;

        if let Some(resource_type) = &config.default_resource_type {
            if !config.is_configured(resource_type) {
                return Err(ConfigurationError::UnknownDefaultType {
                    resource_type: resource_type.clone(),
                });
            }
        }

        tracing::debug!(
            pages = config.pages.len(),
            resource_types = config.resource_types().len(),
            "Decoded form configuration"
        );
        Ok(config)
    }

    /// Every alias must name a type some table mentions.
    fn check_alias_targets(&self) -> std::result::Result<(), ConfigurationError> {
        for (resource_type, layout) in &self.fields_by_type {
            for entry in layout.iter().flat_map(|l| l.values()).flat_map(|p| &p.entries) {
                if let LayoutEntry::Alias(target) = entry {
                    if !self.is_configured(target) {
                        return Err(ConfigurationError::DanglingAlias {
                            resource_type: resource_type.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn default_resource_type(&self) -> Option<&ResourceType> {
        self.default_resource_type.as_ref()
    }

    /// The base layout: top-level sections are pages.
    pub fn pages(&self) -> &[SectionNode] {
        &self.pages
    }

    pub fn page(&self, id: &str) -> Option<&SectionNode> {
        self.pages.iter().find(|page| page.section == id)
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn field(&self, path: &str) -> Option<&FieldDefinition> {
        self.fields.get(path)
    }

    /// Field paths the base record schema requires, sorted.
    pub fn base_required(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(path, _)| path.as_str())
    }

    pub fn fields_by_type(&self) -> &BTreeMap<ResourceType, Option<TypeLayout>> {
        &self.fields_by_type
    }

    /// Whether `fields_by_type` has an entry for the type, even a `null` one.
    pub fn has_type_layout(&self, resource_type: &ResourceType) -> bool {
        self.fields_by_type.contains_key(resource_type)
    }

    pub fn type_layout(&self, resource_type: &ResourceType) -> Option<&TypeLayout> {
        self.fields_by_type.get(resource_type)?.as_ref()
    }

    pub fn page_override(&self, resource_type: &ResourceType, page: &str) -> Option<&PageOverride> {
        self.type_layout(resource_type)?.get(page)
    }

    pub fn text_table(&self, attribute: TextAttribute) -> &ModificationTable {
        match attribute {
            TextAttribute::Label => &self.labels,
            TextAttribute::Placeholder => &self.placeholders,
            TextAttribute::Description => &self.descriptions,
            TextAttribute::HelpText => &self.help_texts,
            TextAttribute::Icon => &self.icons,
        }
    }

    pub fn text_override(
        &self,
        attribute: TextAttribute,
        resource_type: &ResourceType,
        path: &str,
    ) -> Option<&FieldOverride> {
        self.text_table(attribute)
            .get(resource_type)?
            .as_ref()?
            .get(path)
    }

    pub fn default_values(&self) -> &ValueTable {
        &self.default_values
    }

    pub fn priority_values(&self) -> &ValueTable {
        &self.priority_values
    }

    pub fn default_value(&self, resource_type: &ResourceType, path: &str) -> Option<&Value> {
        lookup_value(&self.default_values, resource_type, path)
    }

    pub fn priority_value(&self, resource_type: &ResourceType, path: &str) -> Option<&Value> {
        lookup_value(&self.priority_values, resource_type, path)
    }

    pub fn extra_required_table(&self) -> &BTreeMap<ResourceType, Vec<String>> {
        &self.extra_required
    }

    pub fn extra_required(&self, resource_type: &ResourceType) -> &[String] {
        self.extra_required
            .get(resource_type)
            .map_or(&[], Vec::as_slice)
    }

    /// Every type named by any table, sorted.
    pub fn resource_types(&self) -> BTreeSet<&ResourceType> {
        let text_keys = TextAttribute::ALL
            .into_iter()
            .flat_map(|attribute| self.text_table(attribute).keys());

        self.fields_by_type
            .keys()
            .chain(text_keys)
            .chain(self.default_values.keys())
            .chain(self.priority_values.keys())
            .chain(self.extra_required.keys())
            .collect()
    }

    pub fn is_configured(&self, resource_type: &ResourceType) -> bool {
        self.resource_types().contains(resource_type)
    }
}

fn lookup_value<'a>(table: &'a ValueTable, resource_type: &ResourceType, path: &str) -> Option<&'a Value> {
    table.get(resource_type)?.as_ref()?.get(path)
}

struct Decoder<'a> {
    catalog: &'a BTreeMap<String, CatalogSection>,
    registry: &'a ComponentRegistry,
}

impl Decoder<'_> {
    fn pages(
        &self,
        pages: &[SectionDefinition],
    ) -> std::result::Result<Vec<SectionNode>, ConfigurationError> {
        let entries: Vec<_> = pages.iter().cloned().map(EntryDefinition::Inline).collect();
        self.nodes_in(&entries, "the base layout", &mut Vec::new())
    }

    /// Decode a child list, rejecting aliases and duplicate identifiers.
    fn nodes_in(
        &self,
        entries: &[EntryDefinition],
        parent: &str,
        visiting: &mut Vec<String>,
    ) -> std::result::Result<Vec<SectionNode>, ConfigurationError> {
        let mut nodes: Vec<SectionNode> = Vec::with_capacity(entries.len());
        for entry in entries {
            let node = self.node(entry, parent, visiting)?;
            if nodes.iter().any(|sibling| sibling.section == node.section) {
                return Err(ConfigurationError::DuplicateSection {
                    parent: parent.to_string(),
                    section: node.section,
                });
            }
            nodes.push(node);
        }
        Ok(nodes)
    }

    fn node(
        &self,
        entry: &EntryDefinition,
        parent: &str,
        visiting: &mut Vec<String>,
    ) -> std::result::Result<SectionNode, ConfigurationError> {
        match entry {
            EntryDefinition::Ref(slug) => {
                let section = self.catalog.get(slug).ok_or_else(|| ConfigurationError::UnknownSection {
                    parent: parent.to_string(),
                    section: slug.clone(),
                })?;
                self.catalog_node(slug, section, visiting)
            }
            EntryDefinition::Alias(alias) => Err(ConfigurationError::AliasOutsideOverride {
                parent: parent.to_string(),
                target: alias.same_as.clone(),
            }),
            EntryDefinition::Inline(def) => self.inline_node(def, visiting),
        }
    }

    fn catalog_node(
        &self,
        slug: &str,
        section: &CatalogSection,
        visiting: &mut Vec<String>,
    ) -> std::result::Result<SectionNode, ConfigurationError> {
        if visiting.iter().any(|s| s == slug) {
            return Err(ConfigurationError::CyclicSection {
                section: slug.to_string(),
            });
        }

        visiting.push(slug.to_string());
        let node = self.build(slug, &section.title, &section.component, &section.props, &section.children, visiting);
        visiting.pop();
        node
    }

    fn inline_node(
        &self,
        def: &SectionDefinition,
        visiting: &mut Vec<String>,
    ) -> std::result::Result<SectionNode, ConfigurationError> {
        self.build(&def.section, &def.title, &def.component, &def.props, &def.children, visiting)
    }

    fn build(
        &self,
        section: &str,
        title: &Option<String>,
        component: &Option<String>,
        props: &BTreeMap<String, Value>,
        children: &[EntryDefinition],
        visiting: &mut Vec<String>,
    ) -> std::result::Result<SectionNode, ConfigurationError> {
        if let Some(component) = component {
            if !self.registry.contains(component) {
                return Err(ConfigurationError::UnknownComponent {
                    section: section.to_string(),
                    component: component.clone(),
                });
            }
        }

        Ok(SectionNode {
            section: section.to_string(),
            title: title.clone(),
            component: component.clone(),
            props: props.clone(),
            children: self.nodes_in(children, section, visiting)?,
        })
    }

    fn type_layout(
        &self,
        resource_type: &ResourceType,
        layout: &BTreeMap<String, PageOverrideDefinition>,
        pages: &[SectionNode],
    ) -> std::result::Result<TypeLayout, ConfigurationError> {
        let mut decoded = TypeLayout::new();
        for (page_id, definition) in layout {
            let page = pages.iter().find(|p| &p.section == page_id).ok_or_else(|| {
                ConfigurationError::UnknownPage {
                    resource_type: resource_type.clone(),
                    page: page_id.clone(),
                }
            })?;

            let splice = match definition {
                PageOverrideDefinition::Entries(_) => Splice::Append,
                PageOverrideDefinition::Placed(placed) => match (&placed.after, placed.placement) {
                    (None, Placement::Append) => Splice::Append,
                    (None, Placement::Prepend) => Splice::Prepend,
                    (None, Placement::Replace) => Splice::Replace,
                    (Some(anchor), Placement::Append) => {
                        if !page.children.iter().any(|s| &s.section == anchor) {
                            return Err(ConfigurationError::UnknownAnchor {
                                resource_type: resource_type.clone(),
                                page: page_id.clone(),
                                anchor: anchor.clone(),
                            });
                        }
                        Splice::After(anchor.clone())
                    }
                    (Some(_), _) => {
                        return Err(ConfigurationError::InvalidOverride {
                            resource_type: resource_type.clone(),
                            page: page_id.clone(),
                            message: "`after` cannot be combined with prepend or replace".into(),
                        });
                    }
                },
            };

            let parent = format!("{resource_type} on page '{page_id}'");
            let mut entries = Vec::with_capacity(definition.entries().len());
            for entry in definition.entries() {
                match entry {
                    EntryDefinition::Alias(alias) => {
                        entries.push(LayoutEntry::Alias(alias.same_as.clone()));
                    }
                    other => {
                        let node = self.node(other, &parent, &mut Vec::new())?;
                        entries.push(LayoutEntry::Literal(node));
                    }
                }
            }

            decoded.insert(page_id.clone(), PageOverride { splice, entries });
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = r#"
[[pages]]
section = "page-1"
children = ["titles"]

[[pages]]
section = "page-4"
children = ["identifiers", "related"]

[sections.titles]
component = "TitleComponent"

[sections.identifiers]
component = "AlternateIdentifiersComponent"

[sections.related]
component = "RelatedWorksComponent"

[sections.journal]
component = "JournalDetailComponent"
"#;

    fn with_base(extra: &str) -> std::result::Result<FormConfig, crate::Error> {
        FormConfig::parse(&format!("{BASE}\n{extra}"))
    }

    #[test]
    fn test_catalog_refs_are_expanded() {
        let config = with_base("").unwrap();
        let page = config.page("page-4").unwrap();
        let ids: Vec<_> = page.children.iter().map(|c| c.section.as_str()).collect();
        assert_eq!(ids, vec!["identifiers", "related"]);
        assert_eq!(
            page.children[0].component.as_deref(),
            Some("AlternateIdentifiersComponent")
        );
    }

    #[test]
    fn test_unknown_section_slug() {
        let err = FormConfig::parse(
            r#"
[[pages]]
section = "page-1"
children = ["missing"]
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_unknown_component() {
        let err = FormConfig::parse(
            r#"
[[pages]]
section = "page-1"
component = "NopeComponent"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("NopeComponent"));
    }

    #[test]
    fn test_manifest_components_extend_registry() {
        let config = FormConfig::parse(
            r#"
[components.SeriesComponent]
fields = ["custom_fields.kcr:series"]

[[pages]]
section = "page-1"
component = "SeriesComponent"
"#,
        )
        .unwrap();
        assert!(config.components().contains("SeriesComponent"));
        assert!(config.components().contains("TitleComponent"));
    }

    #[test]
    fn test_duplicate_sibling_in_base_layout() {
        let err = FormConfig::parse(
            r#"
[[pages]]
section = "page-1"

[[pages]]
section = "page-1"
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::DuplicateSection { .. })
        ));
    }

    #[test]
    fn test_cyclic_catalog() {
        let err = FormConfig::parse(
            r#"
[sections.a]
children = ["b"]

[sections.b]
children = ["a"]
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::CyclicSection { .. })
        ));
    }

    #[test]
    fn test_alias_in_base_layout_is_rejected() {
        let err = FormConfig::parse(
            r#"
[[pages]]
section = "page-1"
children = [{ same_as = "dataset" }]
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::AliasOutsideOverride { .. })
        ));
    }

    #[test]
    fn test_override_on_unknown_page() {
        let err = with_base(
            r#"
[fields_by_type]
"textDocument-thesis" = { page-9 = ["journal"] }
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::UnknownPage { .. })
        ));
    }

    #[test]
    fn test_placements_decode_to_splices() {
        let config = with_base(
            r#"
[fields_by_type]
a = { page-4 = ["journal"] }
b = { page-4 = { placement = "prepend", sections = ["journal"] } }
c = { page-4 = { placement = "replace", sections = ["journal"] } }
d = { page-4 = { after = "identifiers", sections = ["journal"] } }
"#,
        )
        .unwrap();

        let splice = |rt: &str| config.page_override(&rt.into(), "page-4").unwrap().splice.clone();
        assert_eq!(splice("a"), Splice::Append);
        assert_eq!(splice("b"), Splice::Prepend);
        assert_eq!(splice("c"), Splice::Replace);
        assert_eq!(splice("d"), Splice::After("identifiers".into()));
    }

    #[test]
    fn test_unknown_anchor() {
        let err = with_base(
            r#"
[fields_by_type]
a = { page-4 = { after = "nowhere", sections = ["journal"] } }
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::UnknownAnchor { .. })
        ));
    }

    #[test]
    fn test_after_with_replace_is_invalid() {
        let err = with_base(
            r#"
[fields_by_type]
a = { page-4 = { placement = "replace", after = "related", sections = ["journal"] } }
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::InvalidOverride { .. })
        ));
    }

    #[test]
    fn test_dangling_alias() {
        let err = with_base(
            r#"
[fields_by_type]
"textDocument-essay" = { page-4 = [{ same_as = "textDocument-bookSection" }] }
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::DanglingAlias { .. })
        ));
    }

    #[test]
    fn test_alias_to_null_entry_is_not_dangling() {
        let manifest: FormManifest = serde_json::from_str(
            r#"{
                "pages": [{"section": "page-4"}],
                "fields_by_type": {
                    "textDocument-essay": {"page-4": [{"same_as": "textDocument"}]},
                    "textDocument": null
                }
            }"#,
        )
        .unwrap();
        assert!(FormConfig::from_manifest(&manifest).is_ok());
    }

    #[test]
    fn test_alias_to_type_known_only_by_labels() {
        let config = with_base(
            r#"
[fields_by_type]
"textDocument-essay" = { page-4 = [{ same_as = "textDocument-bookSection" }] }

[labels]
"textDocument-bookSection" = { "metadata.title" = "Chapter title" }
"#,
        )
        .unwrap();
        assert!(!config.has_type_layout(&"textDocument-bookSection".into()));
        assert!(config.is_configured(&"textDocument-bookSection".into()));
    }

    #[test]
    fn test_unknown_default_type() {
        let err = with_base(r#"default_resource_type = "nope""#).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Configuration(ConfigurationError::UnknownDefaultType { .. })
        ));
    }

    #[test]
    fn test_lookups() {
        let config = with_base(
            r#"
[fields."metadata.title"]
label = "Title"
required = true

[labels]
dataset = { "metadata.title" = "Dataset title" }

[priority_values]
dataset = { "metadata.languages" = ["eng"] }

[extra_required]
dataset = ["metadata.languages"]
"#,
        )
        .unwrap();
        let dataset = ResourceType::new("dataset");

        assert_eq!(
            config.text_override(TextAttribute::Label, &dataset, "metadata.title"),
            Some(&FieldOverride::Set("Dataset title".into()))
        );
        assert_eq!(
            config.text_override(TextAttribute::Icon, &dataset, "metadata.title"),
            None
        );
        assert_eq!(
            config.priority_value(&dataset, "metadata.languages"),
            Some(&serde_json::json!(["eng"]))
        );
        assert_eq!(config.extra_required(&dataset), &["metadata.languages".to_string()]);
        assert!(config.extra_required(&"image".into()).is_empty());
        assert_eq!(config.base_required().collect::<Vec<_>>(), vec!["metadata.title"]);
        assert!(config.is_configured(&dataset));
    }

    #[test]
    fn test_page_override_serialization() {
        let placed = PageOverride {
            splice: Splice::After("related".into()),
            entries: vec![LayoutEntry::Alias("textDocument-book".into())],
        };
        assert_eq!(
            serde_json::to_value(&placed).unwrap(),
            serde_json::json!({"after": "related", "sections": [{"same_as": "textDocument-book"}]})
        );

        let bare = PageOverride {
            splice: Splice::Append,
            entries: vec![LayoutEntry::Literal(SectionNode::new("series"))],
        };
        assert_eq!(
            serde_json::to_value(&bare).unwrap(),
            serde_json::json!([{"section": "series"}])
        );
    }
}
