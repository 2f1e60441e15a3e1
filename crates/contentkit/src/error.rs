//! Error types for registry construction and manifest loading.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors from registry construction and manifest wiring.
///
/// Descriptor queries never produce these: a missing action, kind, or
/// localizer is an absent value, not a failure.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A second resource type was registered under an id already taken.
    #[error("resource type '{0}' is already registered")]
    DuplicateType(String),

    /// A lookup named a resource type the registry does not know.
    #[error("unknown resource type '{0}'")]
    UnknownType(String),

    /// A manifest action used a kind name outside the closed set.
    #[error("unknown action kind '{0}'")]
    UnknownKind(String),

    /// The manifest could not be parsed.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Underlying I/O failure while reading a manifest.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
