use fv_core::{EntityType, IdScope};
use serde_json::json;

use crate::error::{DocumentKind, TranslateError};
use crate::legacy;
use crate::remap::{IdRemapTable, TranslateState};
use crate::upgrade::{upgrade_history, upgrade_snapshot, EmbedUpgraders};

fn embed() -> EmbedUpgraders {
    EmbedUpgraders {
        snapshot: upgrade_snapshot,
    }
}

fn legacy_module(id: i64) -> legacy::Module {
    legacy::Module {
        id,
        name: "Reader".to_string(),
        package: "org.flowvault.basic".to_string(),
        tag: "read input".to_string(),
        pos_x: 12.5,
        pos_y: -3.0,
        cache: true,
        annotations: Vec::new(),
    }
}

fn empty_snapshot() -> legacy::SnapshotDocument {
    legacy::SnapshotDocument {
        version: legacy::SCHEMA_VERSION.to_string(),
        name: String::new(),
        modules: Vec::new(),
        groups: Vec::new(),
        abstractions: Vec::new(),
        connections: Vec::new(),
        annotations: Vec::new(),
    }
}

#[test]
fn remap_is_memoized_and_injective_per_type() {
    let mut scope = IdScope::new();
    let mut remap = IdRemapTable::new();

    let first = remap.resolve(&mut scope, EntityType::Action, 41);
    let again = remap.resolve(&mut scope, EntityType::Action, 41);
    let other = remap.resolve(&mut scope, EntityType::Action, 7);
    assert_eq!(first, again);
    assert_ne!(first, other);

    let mut seen = std::collections::HashSet::new();
    for (entity, _, new_id) in remap.iter() {
        assert!(seen.insert((entity, new_id)), "duplicate new id per type");
    }
}

#[test]
fn remap_folds_module_family_onto_one_key() {
    let mut scope = IdScope::new();
    let mut remap = IdRemapTable::new();

    let as_group = remap.resolve(&mut scope, EntityType::Group, 9);
    let as_module = remap.resolve(&mut scope, EntityType::Module, 9);
    assert_eq!(as_group, as_module);
    assert_eq!(remap.len(), 1);
}

#[test]
fn filter_shared_strips_document_private_namespaces() {
    let mut scope = IdScope::new();
    let mut remap = IdRemapTable::new();
    remap.resolve(&mut scope, EntityType::Action, 1);
    remap.resolve(&mut scope, EntityType::Module, 4);
    remap.resolve(&mut scope, EntityType::Annotation, 5);
    remap.resolve(&mut scope, EntityType::Operation, 6);

    let shared = remap.filter_shared();
    assert_eq!(shared.get(EntityType::Action, 1), Some(0));
    assert_eq!(shared.get(EntityType::Module, 4), Some(0));
    assert_eq!(shared.get(EntityType::Annotation, 5), None);
    assert_eq!(shared.get(EntityType::Operation, 6), None);
}

#[test]
fn seeding_raises_the_scope_floor_past_seeded_ids() {
    let mut sibling = TranslateState::new();
    sibling
        .remap
        .resolve(&mut sibling.scope, EntityType::Action, 10);
    sibling
        .remap
        .resolve(&mut sibling.scope, EntityType::Action, 11);

    let mut state = TranslateState::new();
    state.seed_from(&sibling);

    // A reference unseen by the sibling must not collide with seeded ids.
    let fresh = state.remap.resolve(&mut state.scope, EntityType::Action, 99);
    assert_eq!(fresh, 2);
    assert_eq!(state.remap.get(EntityType::Action, 10), Some(0));
    assert_eq!(state.remap.get(EntityType::Action, 11), Some(1));
}

#[test]
fn pin_keeps_the_first_entry() {
    let mut remap = IdRemapTable::new();
    remap.pin(EntityType::Action, 0, 0);
    remap.pin(EntityType::Action, 0, 17);
    assert_eq!(remap.get(EntityType::Action, 0), Some(0));
}

#[test]
fn module_rules_rename_restructure_and_drop() {
    let upgraded = match upgrade_snapshot(&legacy::SnapshotDocument {
        modules: vec![legacy_module(3)],
        ..empty_snapshot()
    }) {
        Ok(doc) => doc,
        Err(err) => panic!("upgrade failed: {err}"),
    };

    let module = &upgraded.modules[0];
    assert_eq!(module.id, 3, "upgrade must not renumber");
    assert_eq!(module.label, "read input");
    assert_eq!(module.position.x, 12.5);
    assert_eq!(module.position.y, -3.0);
}

#[test]
fn annotation_key_rename() {
    let upgraded = upgrade_snapshot(&legacy::SnapshotDocument {
        annotations: vec![legacy::Annotation {
            id: 2,
            akey: "color".to_string(),
            value: "blue".to_string(),
        }],
        ..empty_snapshot()
    })
    .unwrap();
    assert_eq!(upgraded.annotations[0].key, "color");
    assert_eq!(upgraded.annotations[0].id, 2);
}

#[test]
fn group_pipeline_upgrades_through_the_snapshot_path() {
    let upgraded = upgrade_snapshot(&legacy::SnapshotDocument {
        groups: vec![legacy::Group {
            id: 8,
            pos_x: 0.0,
            pos_y: 0.0,
            pipeline: legacy::SnapshotDocument {
                modules: vec![legacy_module(1)],
                ..empty_snapshot()
            },
        }],
        ..empty_snapshot()
    })
    .unwrap();

    let group = &upgraded.groups[0];
    assert_eq!(group.id, 8);
    assert_eq!(group.pipeline.modules[0].label, "read input");
}

#[test]
fn unknown_version_is_a_missing_schema_rule() {
    let err = upgrade_snapshot(&legacy::SnapshotDocument {
        version: "0.9".to_string(),
        ..empty_snapshot()
    })
    .unwrap_err();
    assert_eq!(
        err,
        TranslateError::SchemaRuleMissing {
            kind: DocumentKind::Snapshot,
            version: "0.9".to_string(),
        }
    );
}

#[test]
fn unknown_operation_entity_tag_is_rejected() {
    let doc = legacy::HistoryDocument {
        version: legacy::SCHEMA_VERSION.to_string(),
        actions: vec![legacy::Action {
            id: 1,
            prev_id: 0,
            session: 1,
            user: String::new(),
            date: String::new(),
            operations: vec![legacy::Operation {
                id: 0,
                kind: legacy::OpKind::Delete {
                    what: "pipeline".to_string(),
                    object_id: 4,
                },
            }],
            annotations: Vec::new(),
        }],
        annotations: Vec::new(),
        action_annotations: Vec::new(),
        parameter_explorations: Vec::new(),
    };

    let err = upgrade_history(&doc, &embed()).unwrap_err();
    assert!(matches!(err, TranslateError::InvalidInput(_)));
}

#[test]
fn exploration_data_collapses_to_canonical_json() {
    let doc = legacy::HistoryDocument {
        version: legacy::SCHEMA_VERSION.to_string(),
        actions: Vec::new(),
        annotations: Vec::new(),
        action_annotations: Vec::new(),
        parameter_explorations: vec![legacy::ParameterExploration {
            id: 0,
            action_id: 1,
            data: json!({"dims": [2, 3]}),
        }],
    };

    let upgraded = upgrade_history(&doc, &embed()).unwrap();
    assert_eq!(
        upgraded.parameter_explorations[0].data_json,
        "{\"dims\":[2,3]}"
    );
}

#[test]
fn legacy_operation_wire_shape_round_trips() {
    let raw = r#"{
        "id": 4,
        "op": "add",
        "what": "module",
        "object_id": 7,
        "payload": {"entity": "module", "id": 7, "name": "Reader",
                    "package": "org.flowvault.basic", "tag": "r"}
    }"#;
    let operation: legacy::Operation = serde_json::from_str(raw).unwrap();
    match &operation.kind {
        legacy::OpKind::Add {
            what,
            object_id,
            payload,
        } => {
            assert_eq!(what, "module");
            assert_eq!(*object_id, 7);
            assert!(matches!(payload, legacy::Payload::Module(m) if m.id == 7));
        }
        other => panic!("unexpected operation: {other:?}"),
    }

    let encoded = serde_json::to_value(&operation).unwrap();
    assert_eq!(encoded["op"], "add");
    assert_eq!(encoded["payload"]["entity"], "module");
}
