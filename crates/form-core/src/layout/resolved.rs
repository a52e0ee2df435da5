//! The resolved layout handed to the form renderer

use std::collections::BTreeMap;
use std::fmt::Write as _;

use form_meta::ResourceType;
use serde::Serialize;
use serde_json::Value;

/// Initial value of a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Prefill {
    /// Overrides whatever the record already holds
    Priority(Value),
    /// Used when the record has no value
    Default(Value),
}

impl Prefill {
    pub fn value(&self) -> &Value {
        match self {
            Self::Priority(value) | Self::Default(value) => value,
        }
    }
}

/// A leaf field with every text axis resolved for one resource type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField {
    pub path: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub help_text: Option<String>,
    pub icon: Option<String>,
    pub prefill: Option<Prefill>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSection {
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Value>,
    /// Fields edited by this section's own component
    pub fields: Vec<ResolvedField>,
    pub children: Vec<ResolvedSection>,
}

impl ResolvedSection {
    /// Fields of this section and its descendants, depth first.
    pub fn all_fields(&self) -> Vec<&ResolvedField> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a ResolvedField>) {
        out.extend(&self.fields);
        for child in &self.children {
            child.collect_fields(out);
        }
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{}", self.section);
        if let Some(component) = &self.component {
            let _ = write!(out, " [{component}]");
        }
        if let Some(title) = &self.title {
            let _ = write!(out, " \"{title}\"");
        }
        out.push('\n');

        for field in &self.fields {
            let _ = write!(out, "{indent}  - {}", field.path);
            if let Some(label) = &field.label {
                let _ = write!(out, ": {label}");
            }
            if field.required {
                out.push_str(" (required)");
            }
            match &field.prefill {
                Some(Prefill::Priority(value)) => {
                    let _ = write!(out, " = {value} (priority)");
                }
                Some(Prefill::Default(value)) => {
                    let _ = write!(out, " = {value}");
                }
                None => {}
            }
            out.push('\n');
        }

        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}

/// The page/section tree and required fields for one resource type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLayout {
    pub resource_type: ResourceType,
    /// Top-level sections, in page order
    pub pages: Vec<ResolvedSection>,
    /// Base-required paths followed by the type's extra required paths
    pub required_fields: Vec<String>,
}

impl ResolvedLayout {
    /// Every leaf field in rendering order.
    pub fn fields(&self) -> Vec<&ResolvedField> {
        self.pages.iter().flat_map(ResolvedSection::all_fields).collect()
    }

    pub fn field(&self, path: &str) -> Option<&ResolvedField> {
        self.fields().into_iter().find(|field| field.path == path)
    }

    pub fn is_required(&self, path: &str) -> bool {
        self.required_fields.iter().any(|required| required == path)
    }

    /// Required paths that no field in the tree edits.
    ///
    /// A label set to Unset hides a field without lifting its required flag,
    /// and an extra required path may belong to no component at all.
    pub fn unrendered_required(&self) -> Vec<&str> {
        let fields = self.fields();
        self.required_fields
            .iter()
            .map(String::as_str)
            .filter(|path| !fields.iter().any(|field| field.path == *path))
            .collect()
    }

    /// For each page, the field paths it edits in rendering order.
    pub fn page_fields(&self) -> Vec<(&str, Vec<&str>)> {
        self.pages
            .iter()
            .map(|page| {
                let paths = page
                    .all_fields()
                    .into_iter()
                    .map(|field| field.path.as_str())
                    .collect();
                (page.section.as_str(), paths)
            })
            .collect()
    }

    /// The page editing `path`, or a field `path` lies under.
    ///
    /// ```
    /// # use form_core::layout::resolve;
    /// # let config = form_meta::defaults::builtin_config().unwrap();
    /// let layout = resolve(&"dataset".into(), &config).unwrap();
    /// assert_eq!(layout.page_of("metadata.creators.0.person_or_org.name"), Some("page-2"));
    /// ```
    pub fn page_of(&self, path: &str) -> Option<&str> {
        self.pages.iter().find_map(|page| {
            page.all_fields()
                .iter()
                .any(|field| covers(&field.path, path))
                .then_some(page.section.as_str())
        })
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Indented text rendering, one line per section and field.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.resource_type);
        for page in &self.pages {
            page.write_outline(&mut out, 1);
        }
        out
    }
}

fn covers(field: &str, path: &str) -> bool {
    path.strip_prefix(field)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}
