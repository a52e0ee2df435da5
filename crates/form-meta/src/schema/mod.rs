//! Manifest schema - the serde view of a deposit form configuration file
//!
//! A manifest is loaded from `deposit_form.toml` (or `.json`/`.yaml`) and
//! may be partial: several manifests are merged layer by layer before the
//! result is decoded into a validated [`FormConfig`](crate::FormConfig).
//!
//! - [`section`] - base layout pages, the section catalog and per-type page overrides
//! - [`field`] - base field attributes and per-type field overrides
//! - [`manifest`] - the whole file and the layer merge

pub mod field;
pub mod manifest;
pub mod section;

pub use field::{FieldDefinition, FieldOverride};
pub use manifest::{
    ComponentDefinition, FormManifest, ModificationTable, TypeLayoutDefinition, ValueTable,
};
pub use section::{
    AliasDefinition, CatalogSection, EntryDefinition, PageOverrideDefinition, Placement,
    PlacedEntries, SectionDefinition,
};
