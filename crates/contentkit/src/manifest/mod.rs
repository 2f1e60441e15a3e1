//! TOML manifest wiring: declare resource types, build a registry.

pub mod loader;

pub use loader::{ActionEntry, Manifest, TypeEntry};
