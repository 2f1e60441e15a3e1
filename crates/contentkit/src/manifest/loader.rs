//! Manifest schema and registry construction.
//!
//! A manifest declares resource types the way startup code would wire
//! them by hand:
//!
//! ```toml
//! [[type]]
//! id = "folder"
//! icon = "icons/folder.svg"
//! label = "Folder"
//! hover = "Folder {name}"
//!
//! [type.dialogs]
//! rights = false
//!
//! [[type.action]]
//! id = "create"
//! kind = "create"
//! label = "New Folder"
//! ```
//!
//! Dialog flags left out stay true. Declaration order becomes
//! registration order for actions within a type.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::action::{ActionKind, StandardAction};
use crate::dialogs::DialogSupport;
use crate::error::{RegistryError, RegistryResult};
use crate::localizer::StaticLabels;
use crate::registry::TypeRegistry;
use crate::resource_type::ResourceType;

/// Root of a registry manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Declared resource types, in declaration order.
    #[serde(default, rename = "type")]
    pub types: Vec<TypeEntry>,
}

/// One `[[type]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    /// Resource type id, unique within the manifest.
    pub id: String,
    /// Icon path or URL.
    #[serde(default)]
    pub icon: Option<String>,
    /// Fixed display label; setting it installs a [`StaticLabels`]
    /// localizer on the built type.
    #[serde(default)]
    pub label: Option<String>,
    /// Hover text template; `{id}` and `{name}` are substituted per
    /// entity. Only honored together with `label`.
    #[serde(default)]
    pub hover: Option<String>,
    /// Dialog flags; unspecified flags stay true.
    #[serde(default)]
    pub dialogs: DialogSupport,
    /// Declared actions, in declaration order.
    #[serde(default, rename = "action")]
    pub actions: Vec<ActionEntry>,
}

/// One `[[type.action]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionEntry {
    /// Action id, unique within the type; a repeat overwrites.
    pub id: String,
    /// Action kind name, one of [`ActionKind`]'s stable names.
    pub kind: String,
    /// Optional menu label.
    #[serde(default)]
    pub label: Option<String>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml(text: &str) -> RegistryResult<Self> {
        toml::from_str(text).map_err(|e| RegistryError::Manifest(e.to_string()))
    }

    /// Read and parse a manifest file. Errors name the file.
    pub fn from_path(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text)
            .map_err(|e| RegistryError::Manifest(format!("{}: {e}", path.display())))
    }

    /// Build a registry from the declared types.
    ///
    /// Fails on a duplicate type id or an unknown action kind; a failure
    /// discards the partial registry.
    pub fn into_registry(self) -> RegistryResult<TypeRegistry> {
        let mut registry = TypeRegistry::new();
        for entry in self.types {
            registry.register(entry.into_resource_type()?)?;
        }
        log::info!("built registry with {} resource types", registry.len());
        Ok(registry)
    }
}

impl TypeEntry {
    /// Build the runtime descriptor for this entry.
    pub fn into_resource_type(self) -> RegistryResult<ResourceType> {
        let mut resource_type = ResourceType::new(&self.id);
        resource_type.set_icon_location(self.icon);
        *resource_type.dialogs_mut() = self.dialogs;

        match (self.label, self.hover) {
            (Some(label), hover) => {
                let mut labels = StaticLabels::new(label);
                if let Some(template) = hover {
                    labels = labels.with_hover_template(template);
                }
                resource_type.set_localizer(Some(Arc::new(labels)));
            }
            (None, Some(_)) => {
                log::warn!(
                    "type '{}' declares hover text without a label; ignored",
                    self.id
                );
            }
            (None, None) => {}
        }

        for action in self.actions {
            let kind = ActionKind::from_name(&action.kind)
                .ok_or_else(|| RegistryError::UnknownKind(action.kind.clone()))?;
            let mut standard = StandardAction::new(action.id, kind);
            if let Some(label) = action.label {
                standard = standard.with_label(label);
            }
            resource_type.add_action(Arc::new(standard));
        }

        Ok(resource_type)
    }
}
