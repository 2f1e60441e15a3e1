//! Content item handle passed through to localizers.

use serde::{Deserialize, Serialize};

/// A reference to one concrete content item.
///
/// The registry never examines this beyond handing it to a
/// [`Localizer`](crate::Localizer) for per-item hover text; the fields
/// exist for the framework and for localizer implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntity {
    /// Item identifier within the content store.
    pub id: String,
    /// Id of the resource type this item belongs to.
    pub type_id: String,
    /// Display name, when the store tracks one separately from the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ContentEntity {
    /// Create an entity handle.
    pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            display_name: None,
        }
    }

    /// Attach a display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The name to show for this item: the display name, or the id.
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}
