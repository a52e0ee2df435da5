//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` loads manifests from several layers, merges them
//! with later layers overriding earlier ones, then decodes and checks the
//! result once.

use std::path::PathBuf;

use form_fs::{ConfigStore, NormalizedPath};
use form_meta::defaults::builtin_manifest;
use form_meta::{FormConfig, FormManifest};

use crate::Result;
use crate::layout::LayoutResolver;

/// File stem of the instance configuration
pub const CONFIG_STEM: &str = "deposit_form";

/// File stem of the local overrides
pub const LOCAL_CONFIG_STEM: &str = "deposit_form.local";

const GLOBAL_DIR_NAME: &str = "deposit-form";

/// Resolves configuration by merging multiple sources
///
/// Configuration is loaded from a hierarchy of sources:
/// 1. Built-in defaults compiled into `form-meta`
/// 2. Global config (`<config_dir>/deposit-form/deposit_form.*`)
/// 3. Instance config (`<root>/deposit_form.*`)
/// 4. Local overrides (`<root>/deposit_form.local.*`)
///
/// Each file may be TOML, JSON or YAML. Later sources override earlier
/// ones table by table, see [`FormManifest::merge`].
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Directory holding the instance config
    root: NormalizedPath,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,

    use_builtins: bool,
    use_global: bool,
}

impl ConfigResolver {
    /// Create a resolver for the config files in `root`
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/deposit-form/`
    /// - macOS: `~/Library/Application Support/deposit-form/`
    /// - Windows: `%APPDATA%\deposit-form\`
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            global_config_dir_override: None,
            use_builtins: true,
            use_global: true,
        }
    }

    /// Create a resolver with a custom global config directory.
    ///
    /// This is primarily useful for testing, where you need to control
    /// the global config path without affecting the real user config.
    pub fn with_global_config_dir(root: NormalizedPath, global_config_dir: PathBuf) -> Self {
        Self {
            global_config_dir_override: Some(global_config_dir),
            ..Self::new(root)
        }
    }

    /// Skip the built-in defaults layer.
    pub fn without_builtins(mut self) -> Self {
        self.use_builtins = false;
        self
    }

    /// Skip the global config layer.
    pub fn without_global(mut self) -> Self {
        self.use_global = false;
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(GLOBAL_DIR_NAME))
    }

    /// Load and merge every layer without decoding the result.
    ///
    /// Missing layers are skipped. A file that fails to parse is an error.
    pub fn load_manifest(&self) -> Result<FormManifest> {
        let mut manifest = if self.use_builtins {
            tracing::debug!("Loading built-in defaults (layer 1)");
            builtin_manifest()?
        } else {
            tracing::debug!("Built-in defaults disabled (layer 1) - skipping");
            FormManifest::empty()
        };

        for (layer, path) in self.layer_paths() {
            match path {
                Some(path) => {
                    tracing::debug!(%path, layer, "Loading config layer");
                    manifest.merge(&FormManifest::load(&path)?);
                }
                None => tracing::debug!(layer, "No config found - skipping"),
            }
        }

        Ok(manifest)
    }

    /// Load, merge, decode and check the configuration.
    ///
    /// Every configured resource type is resolved once, so alias cycles
    /// surface here rather than on the first request.
    pub fn resolve(&self) -> Result<FormConfig> {
        let manifest = self.load_manifest()?;
        let config = FormConfig::from_manifest(&manifest)?;
        LayoutResolver::new(&config).check_all()?;
        Ok(config)
    }

    /// The file for each user layer, `None` where absent.
    pub fn layer_paths(&self) -> Vec<(&'static str, Option<NormalizedPath>)> {
        let store = ConfigStore::new();
        let mut layers = Vec::with_capacity(3);

        if self.use_global {
            let global = self
                .global_config_dir()
                .and_then(|dir| store.locate(&NormalizedPath::new(dir), CONFIG_STEM));
            layers.push(("global", global));
        }
        layers.push(("instance", store.locate(&self.root, CONFIG_STEM)));
        layers.push(("local", store.locate(&self.root, LOCAL_CONFIG_STEM)));
        layers
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Check if an instance configuration exists
    pub fn has_config(&self) -> bool {
        ConfigStore::new().locate(&self.root, CONFIG_STEM).is_some()
    }

    /// Check if local overrides exist
    pub fn has_local_overrides(&self) -> bool {
        ConfigStore::new()
            .locate(&self.root, LOCAL_CONFIG_STEM)
            .is_some()
    }
}
