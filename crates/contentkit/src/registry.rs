//! The owning registry: resource types keyed by unique id.

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::ResourceAction;
use crate::error::{RegistryError, RegistryResult};
use crate::resource_type::ResourceType;

/// Registry of every resource type known to the framework.
///
/// Ids are unique here: registration rejects a second type under an id
/// already taken. Configure during single-threaded startup, then share
/// behind `Arc` for reads; mutation after publication needs external
/// synchronization.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ResourceType>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register a resource type under its id.
    ///
    /// Fails with [`RegistryError::DuplicateType`] when the id is taken,
    /// leaving the registry unchanged.
    pub fn register(&mut self, resource_type: ResourceType) -> RegistryResult<()> {
        let id = resource_type.id().to_string();
        if self.types.contains_key(&id) {
            return Err(RegistryError::DuplicateType(id));
        }
        log::debug!(
            "registered resource type '{}' with {} actions",
            id,
            resource_type.action_count()
        );
        self.types.insert(id, resource_type);
        Ok(())
    }

    /// Look up a type by id.
    pub fn get(&self, id: &str) -> Option<&ResourceType> {
        self.types.get(id)
    }

    /// Mutable lookup, for configuration-phase adjustments.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut ResourceType> {
        self.types.get_mut(id)
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> RegistryResult<&ResourceType> {
        self.types
            .get(id)
            .ok_or_else(|| RegistryError::UnknownType(id.to_string()))
    }

    /// Whether a type with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.types.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over the registered types (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &ResourceType> {
        self.types.values()
    }

    /// Look up an action on a type in one step.
    pub fn action(&self, type_id: &str, action_id: &str) -> Option<Arc<dyn ResourceAction>> {
        self.get(type_id)?.action(action_id)
    }
}
