//! Resource type keys

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag of a deposited work, e.g. `textDocument-journalArticle`.
///
/// Keys follow a `family-subtype` naming convention, but nothing enforces
/// it: any string is a valid key, and a key the tables do not mention
/// simply receives no overrides.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `-`, or the whole key.
    ///
    /// ```
    /// use form_meta::ResourceType;
    ///
    /// assert_eq!(ResourceType::new("textDocument-book").family(), "textDocument");
    /// assert_eq!(ResourceType::new("dataset").family(), "dataset");
    /// ```
    pub fn family(&self) -> &str {
        self.0.split_once('-').map_or(&self.0, |(family, _)| family)
    }

    /// The part after the first `-`, if any.
    pub fn subtype(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, subtype)| subtype)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ResourceType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceType {
    fn from(s: String) -> Self {
        Self(s)
    }
}
