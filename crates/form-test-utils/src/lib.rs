//! Shared test utilities for the deposit-form workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`dir`] - [`TestConfigDir`](dir::TestConfigDir) for layered config setups
//! - [`fixtures`] - canned manifests exercising the resolver

pub mod dir;
pub mod fixtures;

pub use dir::TestConfigDir;
