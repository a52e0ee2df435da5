//! Deposit form configuration schema
//!
//! Raw manifest tables ([`FormManifest`]), the component registry, and the
//! validated [`FormConfig`] the layout resolver reads.

pub mod config;
pub mod defaults;
pub mod error;
pub mod registry;
pub mod resource_type;
pub mod schema;

pub use config::{
    FormConfig, LayoutEntry, PageOverride, SectionNode, Splice, TextAttribute, TypeLayout,
};
pub use error::{ConfigurationError, Error, Result};
pub use registry::ComponentRegistry;
pub use resource_type::ResourceType;
pub use schema::{FieldDefinition, FieldOverride, FormManifest};
