//! Action contract: what a resource type knows about its registered actions.

use serde::{Deserialize, Serialize};

/// Classification of an action, used to group actions in UI menus.
///
/// The set is closed: the surrounding framework decides where each kind is
/// surfaced (toolbar, context menu, paste targets), the registry only
/// groups by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Create a new item of this type.
    Create,
    /// Delete an item.
    Delete,
    /// Edit an item's content.
    Revise,
    /// Edit an item's properties without touching content.
    ReviseMetadata,
    /// Copy an item.
    Copy,
    /// Move an item.
    Move,
    /// Duplicate an item in place.
    Duplicate,
    /// Open an item's content read-only.
    ViewContent,
    /// Inspect an item's properties read-only.
    ViewMetadata,
    /// Tool-defined action outside the standard set.
    Custom,
}

impl ActionKind {
    /// Every kind, in menu presentation order.
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Create,
        ActionKind::ViewContent,
        ActionKind::ViewMetadata,
        ActionKind::Revise,
        ActionKind::ReviseMetadata,
        ActionKind::Copy,
        ActionKind::Move,
        ActionKind::Duplicate,
        ActionKind::Delete,
        ActionKind::Custom,
    ];

    /// Stable lowercase name, the form manifests and reports use.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Delete => "delete",
            ActionKind::Revise => "revise",
            ActionKind::ReviseMetadata => "revise_metadata",
            ActionKind::Copy => "copy",
            ActionKind::Move => "move",
            ActionKind::Duplicate => "duplicate",
            ActionKind::ViewContent => "view_content",
            ActionKind::ViewMetadata => "view_metadata",
            ActionKind::Custom => "custom",
        }
    }

    /// Parse a kind from its stable name.
    pub fn from_name(name: &str) -> Option<ActionKind> {
        match name {
            "create" => Some(ActionKind::Create),
            "delete" => Some(ActionKind::Delete),
            "revise" => Some(ActionKind::Revise),
            "revise_metadata" => Some(ActionKind::ReviseMetadata),
            "copy" => Some(ActionKind::Copy),
            "move" => Some(ActionKind::Move),
            "duplicate" => Some(ActionKind::Duplicate),
            "view_content" => Some(ActionKind::ViewContent),
            "view_metadata" => Some(ActionKind::ViewMetadata),
            "custom" => Some(ActionKind::Custom),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An action a tool registers against a resource type.
///
/// The descriptor treats actions as opaque beyond identity and kind; the
/// framework downcasts or wraps them for execution. Stored as
/// `Arc<dyn ResourceAction>` in the descriptor's indexes.
pub trait ResourceAction: Send + Sync + 'static {
    /// Identifier of this action, unique within its resource type.
    fn id(&self) -> &str;

    /// Classification used to group the action.
    fn kind(&self) -> ActionKind;

    /// Optional human-readable label for menus and buttons.
    fn label(&self) -> Option<String> {
        None
    }
}

/// Plain data implementation of [`ResourceAction`].
///
/// Sufficient for most registrations; tools with richer needs implement
/// the trait on their own types.
#[derive(Debug, Clone)]
pub struct StandardAction {
    id: String,
    kind: ActionKind,
    label: Option<String>,
}

impl StandardAction {
    /// Create an action with the given id and kind.
    pub fn new(id: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
        }
    }

    /// Attach a menu label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl ResourceAction for StandardAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ActionKind {
        self.kind
    }

    fn label(&self) -> Option<String> {
        self.label.clone()
    }
}
