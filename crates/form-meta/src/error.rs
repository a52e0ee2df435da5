//! Error types for form-meta

use std::path::PathBuf;

use crate::ResourceType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] form_fs::Error),

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// A mistake in the configuration tables.
///
/// Always an authoring bug: callers should fail fast rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Resource type {resource_type} aliases {target}, which has no entry in fields_by_type")]
    DanglingAlias {
        resource_type: ResourceType,
        target: ResourceType,
    },

    #[error("Alias cycle on page '{page}': {}", join_cycle(.cycle))]
    AliasCycle {
        page: String,
        cycle: Vec<ResourceType>,
    },

    #[error("Duplicate section '{section}' under {parent}")]
    DuplicateSection { parent: String, section: String },

    #[error("Unknown section '{section}' referenced from {parent}")]
    UnknownSection { parent: String, section: String },

    #[error("Section '{section}' contains itself through the section catalog")]
    CyclicSection { section: String },

    #[error("Unknown component '{component}' in section '{section}'")]
    UnknownComponent { section: String, component: String },

    #[error("Resource type {resource_type} overrides unknown page '{page}'")]
    UnknownPage {
        resource_type: ResourceType,
        page: String,
    },

    #[error("Resource type {resource_type} inserts after unknown section '{anchor}' on page '{page}'")]
    UnknownAnchor {
        resource_type: ResourceType,
        page: String,
        anchor: String,
    },

    #[error("Alias to {target} found in {parent}; aliases are only allowed in per-type overrides")]
    AliasOutsideOverride {
        parent: String,
        target: ResourceType,
    },

    #[error("Default resource type {resource_type} is not configured in any table")]
    UnknownDefaultType { resource_type: ResourceType },

    #[error("Invalid override for {resource_type} on page '{page}': {message}")]
    InvalidOverride {
        resource_type: ResourceType,
        page: String,
        message: String,
    },
}

fn join_cycle(cycle: &[ResourceType]) -> String {
    cycle
        .iter()
        .map(ResourceType::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
