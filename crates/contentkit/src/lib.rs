//! Resource type registry for content management UIs.
//!
//! A content-management framework registers one [`ResourceType`] per kind
//! of content item (folder, document, upload). Each type carries the UI
//! actions that apply to its items, the property dialogs the UI should
//! offer, an icon location, and an optional [`Localizer`] supplying
//! display text. The [`TypeRegistry`] owns the types and enforces id
//! uniqueness.
//!
//! Types are wired during startup, in code or from a TOML manifest (the
//! default-on `manifest` feature), and read for the rest of the process
//! lifetime.

pub mod action;
pub mod dialogs;
pub mod entity;
pub mod error;
pub mod localizer;
#[cfg(feature = "manifest")]
pub mod manifest;
pub mod registry;
pub mod resource_type;

pub use action::{ActionKind, ResourceAction, StandardAction};
pub use dialogs::DialogSupport;
pub use entity::ContentEntity;
pub use error::{RegistryError, RegistryResult};
pub use localizer::{Localizer, StaticLabels};
#[cfg(feature = "manifest")]
pub use manifest::Manifest;
pub use registry::TypeRegistry;
pub use resource_type::ResourceType;
