//! Layout resolution
//!
//! Given a resource type, [`LayoutResolver`] merges the base page layout
//! with that type's overrides:
//!
//! 1. Page overrides are spliced into their page (append, prepend, replace,
//!    or after a named section).
//! 2. `same_as` aliases are replaced by the target type's entries for the
//!    same page, recursively. Revisiting a type is an alias cycle.
//! 3. Each section's component determines its leaf fields, whose text,
//!    prefill and required flag are resolved for the type.

mod resolved;
mod resolver;

pub use resolved::{Prefill, ResolvedField, ResolvedLayout, ResolvedSection};
pub use resolver::{LayoutResolver, resolve};
