//! Command implementations for form-cli

pub mod check;
pub mod context;
pub mod export;
pub mod list_types;
pub mod resolve;

pub use check::run_check;
pub use context::run_context;
pub use export::run_export;
pub use list_types::run_list_types;
pub use resolve::run_resolve;
