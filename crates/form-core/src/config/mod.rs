//! Configuration resolution and host context
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged from these sources (later sources override earlier):
//!
//! 1. **Built-in defaults** - the tables shipped in `form-meta`
//! 2. **Global config** - `~/.config/deposit-form/deposit_form.toml`
//! 3. **Instance config** - `<root>/deposit_form.toml`
//! 4. **Local overrides** - `<root>/deposit_form.local.toml`
//!
//! Any layer may use `.json`, `.yaml` or `.yml` instead of `.toml`.
//!
//! # Example
//!
//! ```ignore
//! use form_core::config::{ConfigResolver, FormContext};
//! use form_fs::NormalizedPath;
//!
//! let config = ConfigResolver::new(NormalizedPath::new("/srv/deposit")).resolve()?;
//! let json = FormContext::from_config(&config).to_json();
//! ```

mod context;
mod resolver;

pub use context::FormContext;
pub use resolver::{CONFIG_STEM, ConfigResolver, LOCAL_CONFIG_STEM};
