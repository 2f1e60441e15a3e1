//! The resource type descriptor: per-type actions, dialogs, icon, labels.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::action::{ActionKind, ResourceAction};
use crate::dialogs::DialogSupport;
use crate::entity::ContentEntity;
use crate::localizer::Localizer;

/// UI-facing description of one resource type.
///
/// Carries the actions that apply to content of this type (indexed both by
/// action id and by kind), the property dialogs the UI should offer, an
/// icon location, and an optional [`Localizer`] for display text. Built
/// once during startup wiring, then read for the lifetime of the owning
/// [`TypeRegistry`](crate::TypeRegistry).
///
/// Queries never fail: a missing action, kind, or localizer answers with
/// `None` or an empty vec.
pub struct ResourceType {
    id: String,
    icon_location: Option<String>,
    localizer: Option<Arc<dyn Localizer>>,
    actions_by_id: HashMap<String, Arc<dyn ResourceAction>>,
    actions_by_kind: HashMap<ActionKind, Vec<Arc<dyn ResourceAction>>>,
    dialogs: DialogSupport,
}

impl ResourceType {
    /// Create a descriptor with the given id, no actions, no icon, no
    /// localizer, and every dialog flag true.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon_location: None,
            localizer: None,
            actions_by_id: HashMap::new(),
            actions_by_kind: HashMap::new(),
            dialogs: DialogSupport::default(),
        }
    }

    /// Register an action under its own id and kind.
    ///
    /// A repeated id overwrites the previous registration: the old entry
    /// leaves its kind sequence in the same call, so the two indexes stay
    /// coherent and the replacement sits at the end of its kind's
    /// sequence.
    pub fn add_action(&mut self, action: Arc<dyn ResourceAction>) {
        let id = action.id().to_string();
        if let Some(previous) = self.actions_by_id.remove(&id) {
            if let Some(list) = self.actions_by_kind.get_mut(&previous.kind()) {
                list.retain(|a| a.id() != id);
            }
        }
        self.actions_by_kind
            .entry(action.kind())
            .or_default()
            .push(Arc::clone(&action));
        self.actions_by_id.insert(id, action);
    }

    /// Look up an action by id.
    pub fn action(&self, action_id: &str) -> Option<Arc<dyn ResourceAction>> {
        self.actions_by_id.get(action_id).cloned()
    }

    /// All actions of one kind, in registration order.
    ///
    /// Returns a copy; mutating the result does not touch the descriptor.
    /// An unregistered kind answers an empty vec.
    pub fn actions(&self, kind: ActionKind) -> Vec<Arc<dyn ResourceAction>> {
        self.actions_by_kind.get(&kind).cloned().unwrap_or_default()
    }

    /// Actions of several kinds, concatenated in the order given.
    ///
    /// An empty slice answers an empty vec.
    pub fn actions_for(&self, kinds: &[ActionKind]) -> Vec<Arc<dyn ResourceAction>> {
        let mut out = Vec::new();
        for kind in kinds {
            out.extend(self.actions(*kind));
        }
        out
    }

    /// Number of registered actions.
    pub fn action_count(&self) -> usize {
        self.actions_by_id.len()
    }

    /// Ids of all registered actions, sorted.
    pub fn action_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.actions_by_id.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// The resource type id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Change the id.
    ///
    /// A registry that indexed this type under the old id is not updated;
    /// re-register if the type is already owned.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Icon path or URL, if one is set.
    pub fn icon_location(&self) -> Option<&str> {
        self.icon_location.as_deref()
    }

    /// Set or clear the icon location. Not validated.
    pub fn set_icon_location(&mut self, icon: Option<String>) {
        self.icon_location = icon;
    }

    /// Display label from the localizer, `None` when no localizer is set.
    pub fn label(&self) -> Option<String> {
        self.localizer.as_ref().map(|l| l.label())
    }

    /// Hover text for one content item, `None` when no localizer is set.
    ///
    /// The entity is passed through unexamined.
    pub fn hover_text(&self, entity: &ContentEntity) -> Option<String> {
        self.localizer.as_ref().map(|l| l.hover_text(entity))
    }

    /// Install or clear the localizer.
    pub fn set_localizer(&mut self, localizer: Option<Arc<dyn Localizer>>) {
        self.localizer = localizer;
    }

    /// The dialog flag set.
    pub fn dialogs(&self) -> &DialogSupport {
        &self.dialogs
    }

    /// Mutable access to the dialog flag set.
    pub fn dialogs_mut(&mut self) -> &mut DialogSupport {
        &mut self.dialogs
    }

    /// Whether the availability dialog applies to this type.
    pub fn has_availability_dialog(&self) -> bool {
        self.dialogs.availability
    }

    /// Set the availability dialog flag.
    pub fn set_has_availability_dialog(&mut self, value: bool) {
        self.dialogs.availability = value;
    }

    /// Whether the description field applies to this type.
    pub fn has_description(&self) -> bool {
        self.dialogs.description
    }

    /// Set the description flag.
    pub fn set_has_description(&mut self, value: bool) {
        self.dialogs.description = value;
    }

    /// Whether the groups dialog applies to this type.
    pub fn has_groups_dialog(&self) -> bool {
        self.dialogs.groups
    }

    /// Set the groups dialog flag.
    pub fn set_has_groups_dialog(&mut self, value: bool) {
        self.dialogs.groups = value;
    }

    /// Whether the notification dialog applies to this type.
    pub fn has_notification_dialog(&self) -> bool {
        self.dialogs.notification
    }

    /// Set the notification dialog flag.
    pub fn set_has_notification_dialog(&mut self, value: bool) {
        self.dialogs.notification = value;
    }

    /// Whether the optional-properties dialog applies to this type.
    pub fn has_optional_properties_dialog(&self) -> bool {
        self.dialogs.optional_properties
    }

    /// Set the optional-properties dialog flag.
    pub fn set_has_optional_properties_dialog(&mut self, value: bool) {
        self.dialogs.optional_properties = value;
    }

    /// Whether the public-access dialog applies to this type.
    pub fn has_public_dialog(&self) -> bool {
        self.dialogs.public
    }

    /// Set the public-access dialog flag.
    pub fn set_has_public_dialog(&mut self, value: bool) {
        self.dialogs.public = value;
    }

    /// Whether the rights dialog applies to this type.
    pub fn has_rights_dialog(&self) -> bool {
        self.dialogs.rights
    }

    /// Set the rights dialog flag.
    pub fn set_has_rights_dialog(&mut self, value: bool) {
        self.dialogs.rights = value;
    }
}

impl fmt::Debug for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceType")
            .field("id", &self.id)
            .field("icon_location", &self.icon_location)
            .field("actions", &self.actions_by_id.len())
            .field("has_localizer", &self.localizer.is_some())
            .field("dialogs", &self.dialogs)
            .finish()
    }
}
