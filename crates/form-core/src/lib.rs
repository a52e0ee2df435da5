//! Layout resolution for the modular deposit form
//!
//! This crate sits between the configuration schema and the CLI/host:
//!
//! - **Layout resolution**: merge the base layout with a resource type's overrides
//! - **Configuration resolution**: layered loading of built-in, global, instance and local tables
//! - **Host context**: the JSON tables embedded in the form page
//! - **Feedback**: mapping nested validation errors to form pages
//!
//! # Architecture
//!
//! ```text
//!            CLI / host
//!                |
//!            form-core
//!                |
//!         +------+------+
//!         |             |
//!      form-fs      form-meta
//! ```
//!
//! # Example
//!
//! ```
//! use form_core::layout::resolve;
//! use form_meta::defaults::builtin_config;
//!
//! let config = builtin_config().unwrap();
//! let layout = resolve(&"textDocument-journalArticle".into(), &config).unwrap();
//! assert!(layout.is_required("custom_fields.journal:journal.title"));
//! ```

pub mod config;
pub mod error;
pub mod feedback;
pub mod layout;

pub use config::{ConfigResolver, FormContext};
pub use error::{Error, Result};
pub use layout::{
    LayoutResolver, Prefill, ResolvedField, ResolvedLayout, ResolvedSection, resolve,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_displays_transparently() {
        let error: Error = form_meta::ConfigurationError::DanglingAlias {
            resource_type: "textDocument-essay".into(),
            target: "textDocument-bookSection".into(),
        }
        .into();

        let display = error.to_string();
        assert!(
            display.contains("textDocument-bookSection"),
            "Error display should name the alias target, got: {}",
            display
        );
    }
}
