//! JSON reports rendered by the `ckit` subcommands.

use serde_json::{json, Value};

use contentkit::{ActionKind, ResourceAction, ResourceType, TypeRegistry};

/// Summary of a whole registry: every type, sorted by id.
pub fn registry_report(registry: &TypeRegistry) -> Value {
    let types: Vec<Value> = registry
        .ids()
        .into_iter()
        .filter_map(|id| registry.get(id))
        .map(type_report)
        .collect();

    json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "type_count": registry.len(),
        "types": types,
    })
}

/// Full description of one resource type, actions grouped by kind.
///
/// Groups follow kind presentation order, registration order within a
/// group; kinds with no registered actions are left out of the card.
pub fn type_report(resource_type: &ResourceType) -> Value {
    let actions: Vec<Value> = ActionKind::ALL
        .iter()
        .filter_map(|kind| {
            let listed = resource_type.actions(*kind);
            if listed.is_empty() {
                return None;
            }
            let entries: Vec<Value> = listed
                .iter()
                .map(|action| action_json(action.as_ref()))
                .collect();
            Some(json!({
                "kind": kind.name(),
                "actions": entries,
            }))
        })
        .collect();

    json!({
        "id": resource_type.id(),
        "icon": resource_type.icon_location(),
        "label": resource_type.label(),
        "dialogs": resource_type.dialogs(),
        "action_count": resource_type.action_count(),
        "actions": actions,
    })
}

/// Actions of one type for the requested kinds: the flat menu sequence
/// plus a per-kind breakdown.
///
/// An empty kind list reports every kind in presentation order.
pub fn actions_report(resource_type: &ResourceType, kinds: &[ActionKind]) -> Value {
    let kinds: Vec<ActionKind> = if kinds.is_empty() {
        ActionKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    };

    let sequence: Vec<Value> = resource_type
        .actions_for(&kinds)
        .iter()
        .map(|action| action_json(action.as_ref()))
        .collect();

    let groups: Vec<Value> = kinds
        .iter()
        .map(|kind| {
            let actions: Vec<Value> = resource_type
                .actions(*kind)
                .iter()
                .map(|action| action_json(action.as_ref()))
                .collect();
            json!({
                "kind": kind.name(),
                "actions": actions,
            })
        })
        .collect();

    json!({
        "type": resource_type.id(),
        "sequence": sequence,
        "groups": groups,
    })
}

fn action_json(action: &dyn ResourceAction) -> Value {
    json!({
        "id": action.id(),
        "kind": action.kind().name(),
        "label": action.label(),
    })
}
