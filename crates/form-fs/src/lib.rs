//! Configuration file I/O for the modular deposit form
//!
//! Provides normalized paths, format-agnostic loading and saving of
//! configuration tables, and atomic writes for exported layouts.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
