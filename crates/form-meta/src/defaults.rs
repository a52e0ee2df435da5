//! Built-in configuration shipped with the crate

use crate::{FormConfig, FormManifest, Result};

/// The embedded `deposit_form.toml`, the lowest configuration layer.
pub const BUILTIN_MANIFEST: &str = include_str!("../defaults/deposit_form.toml");

pub fn builtin_manifest() -> Result<FormManifest> {
    FormManifest::parse(BUILTIN_MANIFEST)
}

/// Decode the built-in manifest on its own, without any user layers.
pub fn builtin_config() -> Result<FormConfig> {
    Ok(FormConfig::from_manifest(&builtin_manifest()?)?)
}
