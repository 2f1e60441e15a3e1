//! Manifest path resolution and registry loading.

pub mod loader;

pub use loader::{load_registry, resolve_manifest_path, DEFAULT_MANIFEST_FILE, MANIFEST_ENV};
