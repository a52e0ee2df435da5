//! Field attributes and per-type field overrides
//!
//! # Example TOML
//!
//! ```toml
//! [fields."metadata.title"]
//! label = "Title"
//! required = true
//!
//! [labels]
//! dataset = { "metadata.title" = "Dataset title" }
//! audiovisual = { "metadata.title" = false }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Base attributes of a field path, used when no override applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Required by the base record schema
    #[serde(default)]
    pub required: bool,
}

/// One entry of a modification table.
///
/// `Unset` is written as `null`, `false` or an empty string. In the label
/// table it hides the field; in every other table it drops the override so
/// the base value shows through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOverride {
    Set(String),
    Unset,
}

impl FieldOverride {
    pub fn as_set(&self) -> Option<&str> {
        match self {
            Self::Set(text) => Some(text),
            Self::Unset => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OverrideValue {
    Text(String),
    Flag(bool),
}

impl<'de> Deserialize<'de> for FieldOverride {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<OverrideValue>::deserialize(deserializer)? {
            Some(OverrideValue::Text(text)) if !text.is_empty() => Ok(Self::Set(text)),
            Some(OverrideValue::Text(_)) | Some(OverrideValue::Flag(false)) | None => {
                Ok(Self::Unset)
            }
            Some(OverrideValue::Flag(true)) => Err(serde::de::Error::custom(
                "`true` is not a field override; use a string, or false/null to unset",
            )),
        }
    }
}

impl Serialize for FieldOverride {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Set(text) => serializer.serialize_str(text),
            Self::Unset => serializer.serialize_none(),
        }
    }
}
