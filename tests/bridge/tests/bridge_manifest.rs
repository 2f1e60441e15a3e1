//! Manifest pipeline: file on disk through registry to CLI reports.
//!
//! Tests cover the path the `ckit` binary takes: resolve a manifest
//! file, build the registry through the core crate, and render the JSON
//! the subcommands print.

use contentkit::{ActionKind, ContentEntity};
use contentkit_cli::{load_registry, report};
use tempfile::tempdir;

// ─── Helpers ───────────────────────────────────────────────────────────────

const SITE_MANIFEST: &str = r#"
[[type]]
id = "folder"
icon = "icons/folder.svg"
label = "Folder"
hover = "Folder {name}"

[type.dialogs]
rights = false

[[type.action]]
id = "create"
kind = "create"
label = "New Folder"

[[type.action]]
id = "rename"
kind = "revise"

[[type]]
id = "upload"
label = "File Upload"

[[type.action]]
id = "replace"
kind = "revise"

[[type.action]]
id = "open"
kind = "view_content"
"#;

fn write_manifest(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("contentkit.toml");
    std::fs::write(&path, SITE_MANIFEST).expect("Failed to write manifest");
    path
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn test_file_to_registry() {
    let dir = tempdir().unwrap();
    let registry = load_registry(&write_manifest(&dir)).unwrap();

    assert_eq!(registry.ids(), vec!["folder", "upload"]);
    assert_eq!(registry.action("folder", "create").unwrap().kind(), ActionKind::Create);
    assert_eq!(registry.action("upload", "open").unwrap().kind(), ActionKind::ViewContent);
}

#[test]
fn test_registry_queries_after_load() {
    let dir = tempdir().unwrap();
    let registry = load_registry(&write_manifest(&dir)).unwrap();
    let folder = registry.get("folder").unwrap();

    assert_eq!(folder.label().as_deref(), Some("Folder"));
    assert!(!folder.has_rights_dialog());
    assert!(folder.has_groups_dialog());

    let entity = ContentEntity::new("/sites/demo/docs", "folder").with_display_name("Documents");
    assert_eq!(folder.hover_text(&entity).as_deref(), Some("Folder Documents"));
}

#[test]
fn test_registry_report_over_loaded_manifest() {
    let dir = tempdir().unwrap();
    let registry = load_registry(&write_manifest(&dir)).unwrap();

    let info = report::registry_report(&registry);
    assert_eq!(info["type_count"], 2);
    assert_eq!(info["types"][0]["id"], "folder");
    assert_eq!(info["types"][0]["dialogs"]["rights"], false);
    assert_eq!(info["types"][1]["actions"][0]["kind"], "view_content");
    assert_eq!(info["types"][1]["actions"][1]["actions"][0]["id"], "replace");
}

#[test]
fn test_actions_report_over_loaded_manifest() {
    let dir = tempdir().unwrap();
    let registry = load_registry(&write_manifest(&dir)).unwrap();
    let upload = registry.get("upload").unwrap();

    let listed = report::actions_report(upload, &[ActionKind::Revise, ActionKind::ViewContent]);
    let groups = listed["groups"].as_array().unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["actions"][0]["id"], "replace");
    assert_eq!(groups[1]["actions"][0]["id"], "open");

    let sequence = listed["sequence"].as_array().unwrap();
    assert_eq!(sequence[0]["id"], "replace");
    assert_eq!(sequence[1]["id"], "open");
}

#[test]
fn test_report_survives_json_round_trip() {
    let dir = tempdir().unwrap();
    let registry = load_registry(&write_manifest(&dir)).unwrap();

    let info = report::registry_report(&registry);
    let text = serde_json::to_string_pretty(&info).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["type_count"], 2);
    assert_eq!(parsed["types"][0]["action_count"], 2);
}

#[test]
fn test_load_rejects_partial_manifest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contentkit.toml");
    std::fs::write(
        &path,
        "[[type]]\nid = \"folder\"\n\n[[type]]\nid = \"folder\"\n",
    )
    .unwrap();

    assert!(load_registry(&path).is_err());
}
