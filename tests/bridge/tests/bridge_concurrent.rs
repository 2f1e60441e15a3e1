//! Concurrent access: a published registry shared across threads.
//!
//! Tests verify that a registry built during startup and published
//! behind `Arc` answers consistently from many reader threads, and that
//! ownership handoffs between configuration phases keep both action
//! indexes coherent.

use std::sync::{Arc, Barrier};
use std::thread;

use contentkit::manifest::Manifest;
use contentkit::{ActionKind, ContentEntity, StandardAction, TypeRegistry};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn build_registry() -> TypeRegistry {
    let manifest = r#"
[[type]]
id = "folder"
label = "Folder"
hover = "Folder {name}"

[[type.action]]
id = "create"
kind = "create"

[[type.action]]
id = "rename"
kind = "revise"

[[type]]
id = "upload"
label = "File Upload"

[[type.action]]
id = "replace"
kind = "revise"
"#;
    Manifest::from_toml(manifest)
        .expect("Failed to parse manifest")
        .into_registry()
        .expect("Failed to build registry")
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn test_parallel_readers_agree() {
    let registry = Arc::new(build_registry());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|reader| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for round in 0..200 {
                    let folder = registry.get("folder").expect("folder missing");
                    assert_eq!(folder.actions(ActionKind::Revise).len(), 1);
                    assert_eq!(folder.action("create").unwrap().kind(), ActionKind::Create);

                    let entity = ContentEntity::new(
                        format!("/sites/{reader}/docs/{round}"),
                        "folder",
                    );
                    let hover = folder.hover_text(&entity).expect("hover missing");
                    assert!(hover.contains(&format!("/sites/{reader}/docs/{round}")));

                    assert!(registry.action("upload", "replace").is_some());
                    assert!(registry.action("upload", "create").is_none());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}

#[test]
fn test_configuration_handoff_between_threads() {
    let mut registry = build_registry();

    // Second configuration phase on a different thread.
    let registry = thread::spawn(move || {
        let folder = registry.get_mut("folder").expect("folder missing");
        folder.add_action(Arc::new(StandardAction::new("trash", ActionKind::Delete)));
        folder.add_action(Arc::new(StandardAction::new(
            "rename",
            ActionKind::ReviseMetadata,
        )));
        registry
    })
    .join()
    .expect("configuration thread panicked");

    let folder = registry.get("folder").unwrap();
    assert_eq!(folder.action_count(), 3);
    assert!(folder.actions(ActionKind::Revise).is_empty());
    assert_eq!(folder.actions(ActionKind::ReviseMetadata).len(), 1);
    assert_eq!(folder.actions(ActionKind::Delete)[0].id(), "trash");
}

#[test]
fn test_shared_actions_outlive_the_registry() {
    let registry = build_registry();
    let create = registry.action("folder", "create").unwrap();
    drop(registry);

    assert_eq!(create.id(), "create");
    assert_eq!(create.kind(), ActionKind::Create);
}

#[test]
fn test_readers_see_every_type() {
    let registry = Arc::new(build_registry());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut seen: Vec<String> =
                    registry.iter().map(|t| t.id().to_string()).collect();
                seen.sort();
                seen
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().expect("reader thread panicked"),
            vec!["folder".to_string(), "upload".to_string()]
        );
    }
}
