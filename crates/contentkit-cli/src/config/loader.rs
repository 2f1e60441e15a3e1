//! Decides which manifest file the CLI operates on.

use std::path::{Path, PathBuf};

use anyhow::Context;
use contentkit::manifest::Manifest;
use contentkit::TypeRegistry;

/// Environment variable overriding the manifest location.
pub const MANIFEST_ENV: &str = "CONTENTKIT_MANIFEST";

/// Manifest file name looked up in the config directory and the cwd.
pub const DEFAULT_MANIFEST_FILE: &str = "contentkit.toml";

/// Resolve the manifest path from, in order: an explicit flag, the
/// `CONTENTKIT_MANIFEST` environment variable, a per-user config file
/// under the platform config directory, and finally `contentkit.toml`
/// in the current directory.
pub fn resolve_manifest_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var(MANIFEST_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("contentkit").join(DEFAULT_MANIFEST_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(DEFAULT_MANIFEST_FILE)
}

/// Load a manifest file and build the registry it declares.
pub fn load_registry(path: &Path) -> anyhow::Result<TypeRegistry> {
    tracing::debug!("loading manifest from {}", path.display());
    let manifest = Manifest::from_path(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let registry = manifest
        .into_registry()
        .with_context(|| format!("invalid manifest {}", path.display()))?;
    tracing::info!(
        "loaded {} resource types from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}
