//! Layout resolution
//!
//! Merges the base layout with one resource type's overrides and annotates
//! every leaf field with its resolved text, prefill and required flag.

use form_meta::{
    ConfigurationError, FieldOverride, FormConfig, LayoutEntry, ResourceType, SectionNode, Splice,
    TextAttribute,
};

use super::resolved::{Prefill, ResolvedField, ResolvedLayout, ResolvedSection};

type Result<T> = std::result::Result<T, ConfigurationError>;

/// Resolves layouts against one configuration.
///
/// The resolver only borrows the configuration; resolving is pure and can
/// run from several threads at once.
///
/// # Example
///
/// ```
/// use form_core::layout::LayoutResolver;
/// use form_meta::FormConfig;
///
/// let config = FormConfig::parse(r#"
/// [[pages]]
/// section = "page-1"
/// children = [{ section = "titles", component = "TitleComponent" }]
///
/// [labels]
/// dataset = { "metadata.title" = "Dataset title" }
/// "#).unwrap();
///
/// let layout = LayoutResolver::new(&config).resolve(&"dataset".into()).unwrap();
/// let title = layout.field("metadata.title").unwrap();
/// assert_eq!(title.label.as_deref(), Some("Dataset title"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutResolver<'a> {
    config: &'a FormConfig,
}

impl<'a> LayoutResolver<'a> {
    pub fn new(config: &'a FormConfig) -> Self {
        Self { config }
    }

    /// Resolve the layout for a resource type.
    ///
    /// A type without overrides gets the base layout; only inconsistent
    /// alias tables are errors.
    pub fn resolve(&self, resource_type: &ResourceType) -> Result<ResolvedLayout> {
        tracing::debug!(resource_type = %resource_type, "Resolving layout");

        let required_fields = self.required_fields(resource_type);
        let mut pages = Vec::with_capacity(self.config.pages().len());
        for page in self.config.pages() {
            let children = self.page_children(resource_type, page)?;
            pages.push(self.section(resource_type, page, &children, &required_fields));
        }

        Ok(ResolvedLayout {
            resource_type: resource_type.clone(),
            pages,
            required_fields,
        })
    }

    /// Resolve every configured type, stopping at the first error.
    pub fn check_all(&self) -> Result<()> {
        for resource_type in self.config.resource_types() {
            self.resolve(resource_type)?;
        }
        Ok(())
    }

    fn page_children(
        &self,
        resource_type: &ResourceType,
        page: &'a SectionNode,
    ) -> Result<Vec<&'a SectionNode>> {
        let base = page.children.iter();
        let Some(page_override) = self.config.page_override(resource_type, &page.section) else {
            return Ok(base.collect());
        };

        let mut stack = vec![resource_type.clone()];
        let added = self.expand(&page.section, &page_override.entries, &mut stack)?;

        let children: Vec<&SectionNode> = match &page_override.splice {
            Splice::Append => base.chain(added).collect(),
            Splice::Prepend => added.into_iter().chain(base).collect(),
            Splice::Replace => added,
            Splice::After(anchor) => {
                let position = page
                    .children
                    .iter()
                    .position(|child| &child.section == anchor)
                    .ok_or_else(|| ConfigurationError::UnknownAnchor {
                        resource_type: resource_type.clone(),
                        page: page.section.clone(),
                        anchor: anchor.clone(),
                    })?;
                let (before, after) = page.children.split_at(position + 1);
                before.iter().chain(added).chain(after).collect()
            }
        };

        for (index, child) in children.iter().enumerate() {
            if children[..index].iter().any(|c| c.section == child.section) {
                return Err(ConfigurationError::DuplicateSection {
                    parent: page.section.clone(),
                    section: child.section.clone(),
                });
            }
        }
        Ok(children)
    }

    /// Expand override entries, substituting aliases with the target's
    /// entries for the same page. `stack` holds the types being expanded.
    fn expand(
        &self,
        page: &str,
        entries: &'a [LayoutEntry],
        stack: &mut Vec<ResourceType>,
    ) -> Result<Vec<&'a SectionNode>> {
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                LayoutEntry::Literal(node) => out.push(node),
                LayoutEntry::Alias(target) => {
                    if let Some(start) = stack.iter().position(|t| t == target) {
                        let mut cycle = stack[start..].to_vec();
                        cycle.push(target.clone());
                        return Err(ConfigurationError::AliasCycle {
                            page: page.to_string(),
                            cycle,
                        });
                    }

                    let source = stack.last().cloned().unwrap_or_else(|| target.clone());
                    if !self.config.is_configured(target) {
                        return Err(ConfigurationError::DanglingAlias {
                            resource_type: source,
                            target: target.clone(),
                        });
                    }

                    tracing::debug!(from = %source, to = %target, page, "Expanding alias");
                    if let Some(aliased) = self.config.page_override(target, page) {
                        stack.push(target.clone());
                        out.extend(self.expand(page, &aliased.entries, stack)?);
                        stack.pop();
                    }
                }
            }
        }
        Ok(out)
    }

    fn section(
        &self,
        resource_type: &ResourceType,
        node: &SectionNode,
        children: &[&SectionNode],
        required: &[String],
    ) -> ResolvedSection {
        let fields = node
            .component
            .as_deref()
            .and_then(|component| self.config.components().fields(component))
            .unwrap_or_default()
            .iter()
            .filter_map(|path| self.field(resource_type, path, required))
            .collect();

        let children = children
            .iter()
            .map(|child| {
                let grandchildren: Vec<&SectionNode> = child.children.iter().collect();
                self.section(resource_type, child, &grandchildren, required)
            })
            .collect();

        ResolvedSection {
            section: node.section.clone(),
            title: node.title.clone(),
            component: node.component.clone(),
            props: node.props.clone(),
            fields,
            children,
        }
    }

    /// `None` when the label table hides the field for this type.
    fn field(&self, resource_type: &ResourceType, path: &str, required: &[String]) -> Option<ResolvedField> {
        let label = match self.config.text_override(TextAttribute::Label, resource_type, path) {
            Some(FieldOverride::Unset) => return None,
            Some(FieldOverride::Set(text)) => Some(text.clone()),
            None => self.base_text(TextAttribute::Label, path),
        };

        let prefill = self
            .config
            .priority_value(resource_type, path)
            .map(|value| Prefill::Priority(value.clone()))
            .or_else(|| {
                self.config
                    .default_value(resource_type, path)
                    .map(|value| Prefill::Default(value.clone()))
            });

        Some(ResolvedField {
            path: path.to_string(),
            label,
            placeholder: self.text(TextAttribute::Placeholder, resource_type, path),
            description: self.text(TextAttribute::Description, resource_type, path),
            help_text: self.text(TextAttribute::HelpText, resource_type, path),
            icon: self.text(TextAttribute::Icon, resource_type, path),
            prefill,
            required: required.iter().any(|r| r == path),
        })
    }

    fn text(&self, attribute: TextAttribute, resource_type: &ResourceType, path: &str) -> Option<String> {
        match self.config.text_override(attribute, resource_type, path) {
            Some(FieldOverride::Set(text)) => Some(text.clone()),
            Some(FieldOverride::Unset) | None => self.base_text(attribute, path),
        }
    }

    fn base_text(&self, attribute: TextAttribute, path: &str) -> Option<String> {
        self.config
            .field(path)
            .and_then(|field| attribute.base_value(field))
            .map(str::to_string)
    }

    fn required_fields(&self, resource_type: &ResourceType) -> Vec<String> {
        let mut required: Vec<String> = Vec::new();
        let extras = self.config.extra_required(resource_type).iter().map(String::as_str);
        for path in self.config.base_required().chain(extras) {
            if !required.iter().any(|r| r == path) {
                required.push(path.to_string());
            }
        }
        required
    }
}

/// Resolve the layout of `resource_type` against `config`.
pub fn resolve(resource_type: &ResourceType, config: &FormConfig) -> Result<ResolvedLayout> {
    LayoutResolver::new(config).resolve(resource_type)
}
