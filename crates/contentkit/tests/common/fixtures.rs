//! Builders shared by the descriptor and registry tests.

use std::sync::Arc;

use contentkit::{ActionKind, ContentEntity, Localizer, ResourceAction, ResourceType, StandardAction};

/// Creates an unlabeled action ready for `add_action`.
pub fn action(id: &str, kind: ActionKind) -> Arc<dyn ResourceAction> {
    Arc::new(StandardAction::new(id, kind))
}

/// Creates an action carrying a fixed menu label.
pub fn labeled_action(id: &str, kind: ActionKind, label: &str) -> Arc<dyn ResourceAction> {
    Arc::new(StandardAction::new(id, kind).with_label(label))
}

/// A folder descriptor with a create action and a revise action.
pub fn folder_type() -> ResourceType {
    let mut folder = ResourceType::new("folder");
    folder.add_action(action("new", ActionKind::Create));
    folder.add_action(action("rename", ActionKind::Revise));
    folder
}

/// An entity belonging to the folder type, with a display name set.
pub fn sample_entity() -> ContentEntity {
    ContentEntity::new("/docs/reports", "folder").with_display_name("Reports")
}

/// Localizer whose answers are derived from its inputs, so tests can
/// verify the descriptor forwards calls without reshaping anything.
pub struct EchoLabels;

impl Localizer for EchoLabels {
    fn label(&self) -> String {
        "Folder".to_string()
    }

    fn hover_text(&self, entity: &ContentEntity) -> String {
        format!("{} ({})", entity.display(), entity.type_id)
    }
}
