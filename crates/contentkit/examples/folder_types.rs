//! Example: wiring a type registry in code.
//!
//! Builds the registry a content tool would assemble at startup, with a
//! folder type carrying a custom localizer and an upload type declared
//! from a manifest string, then runs the queries a UI menu would make.
//!
//! Usage:
//!   cargo run --example folder_types

use std::sync::Arc;

use contentkit::manifest::Manifest;
use contentkit::{ActionKind, ContentEntity, Localizer, ResourceType, StandardAction};

/// Localizer that appends the entity path to a fixed label.
struct FolderLabels;

impl Localizer for FolderLabels {
    fn label(&self) -> String {
        "Folder".to_string()
    }

    fn hover_text(&self, entity: &ContentEntity) -> String {
        format!("Folder {} at {}", entity.display(), entity.id)
    }
}

fn main() {
    // 1. Build the folder type by hand.
    println!("1. Building the folder type...");
    let mut folder = ResourceType::new("folder");
    folder.set_icon_location(Some("icons/folder.svg".to_string()));
    folder.set_localizer(Some(Arc::new(FolderLabels)));
    folder.set_has_rights_dialog(false);
    folder.add_action(Arc::new(
        StandardAction::new("create", ActionKind::Create).with_label("New Folder"),
    ));
    folder.add_action(Arc::new(
        StandardAction::new("rename", ActionKind::Revise).with_label("Rename"),
    ));
    folder.add_action(Arc::new(StandardAction::new("trash", ActionKind::Delete)));
    println!("   {} actions registered", folder.action_count());

    // 2. Declare the upload type from manifest text.
    println!("\n2. Loading the upload type from a manifest...");
    let manifest = Manifest::from_toml(
        r#"
        [[type]]
        id = "upload"
        label = "File Upload"
        hover = "File {name}"

        [[type.action]]
        id = "replace"
        kind = "revise"
        "#,
    )
    .unwrap();

    let mut registry = manifest.into_registry().unwrap();
    registry.register(folder).unwrap();
    println!("   registry holds: {:?}", registry.ids());

    // 3. Answer the queries a context menu would make.
    println!("\n3. Context menu for a folder...");
    let folder = registry.require("folder").unwrap();
    for action in folder.actions_for(&[ActionKind::Create, ActionKind::Revise]) {
        let label = action.label().unwrap_or_else(|| action.id().to_string());
        println!("   [{}] {}", action.kind(), label);
    }

    // 4. Hover text for a specific entity.
    let docs = ContentEntity::new("/sites/demo/docs", "folder").with_display_name("Documents");
    println!("\n4. Hover: {}", folder.hover_text(&docs).unwrap());

    // 5. Dialog flags drive which property panes the UI offers.
    println!("\n5. Folder dialogs:");
    println!("   availability: {}", folder.has_availability_dialog());
    println!("   rights:       {}", folder.has_rights_dialog());

    println!("\n=== Example complete ===");
}
