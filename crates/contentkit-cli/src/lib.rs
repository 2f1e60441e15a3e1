//! Command-line inspector for contentkit registries.
//!
//! This library backs the `ckit` binary: it resolves which manifest to
//! load, builds the registry through the core crate, and renders JSON
//! reports about types and their actions.

pub mod config;
pub mod report;

pub use config::{load_registry, resolve_manifest_path};
