use fv_core::EntityType;
use fv_translate::{legacy, OpenCatalog, TranslateError, TranslateOptions, TranslateState, Translator};

fn translator() -> Translator<'static> {
    Translator::new(TranslateOptions::default(), &OpenCatalog)
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

fn module(id: i64, name: &str) -> legacy::Module {
    legacy::Module {
        id,
        name: name.to_string(),
        package: "org.flowvault.basic".to_string(),
        tag: String::new(),
        pos_x: 0.0,
        pos_y: 0.0,
        cache: false,
        annotations: Vec::new(),
    }
}

fn connection(id: i64, source_id: i64, target_id: i64) -> legacy::Connection {
    legacy::Connection {
        id,
        source_id,
        source_port: "out".to_string(),
        target_id,
        target_port: "in".to_string(),
    }
}

fn group(id: i64, pipeline: legacy::SnapshotDocument) -> legacy::Group {
    legacy::Group {
        id,
        pos_x: 0.0,
        pos_y: 0.0,
        pipeline,
    }
}

#[test]
fn scenario_b_inner_pipelines_get_their_own_namespace() {
    let doc = legacy::SnapshotDocument {
        modules: vec![module(1, "Reader"), module(2, "Filter")],
        groups: vec![group(
            3,
            legacy::SnapshotDocument {
                modules: vec![module(1, "Scale"), module(2, "Render")],
                connections: vec![connection(1, 1, 2)],
                ..empty_snapshot()
            },
        )],
        connections: vec![connection(1, 1, 2)],
        ..empty_snapshot()
    };

    let mut state = TranslateState::new();
    let mut warnings = Vec::new();
    let out = translator()
        .translate_snapshot(&doc, &mut state, &mut warnings)
        .unwrap();

    assert_eq!(out.modules[0].id, 0);
    assert_eq!(out.modules[1].id, 1);
    assert_eq!(out.groups[0].id, 2, "groups share the module counter");

    // Old ids 1 and 2 appear in both layers yet map independently.
    let inner = &out.groups[0].pipeline;
    assert_eq!(inner.modules[0].id, 0);
    assert_eq!(inner.modules[1].id, 1);
    assert_eq!(inner.connections[0].source_id, 0);
    assert_eq!(inner.connections[0].target_id, 1);
    assert_eq!(inner.version, "2.0");

    assert_eq!(out.connections[0].source_id, 0);
    assert_eq!(out.connections[0].target_id, 1);

    // The nested state is kept under the old group id.
    let nested = state.group_remaps.get(3).unwrap();
    assert_eq!(nested.remap.get(EntityType::Module, 1), Some(0));
    assert_eq!(nested.remap.get(EntityType::Module, 2), Some(1));
    assert_eq!(state.remap.get(EntityType::Group, 3), Some(2));
}

#[test]
fn repeated_group_ids_reproduce_the_same_pipeline() {
    let pipeline = legacy::SnapshotDocument {
        modules: vec![module(4, "Scale")],
        ..empty_snapshot()
    };
    let doc = legacy::SnapshotDocument {
        groups: vec![group(5, pipeline.clone()), group(5, pipeline)],
        ..empty_snapshot()
    };

    let mut state = TranslateState::new();
    let mut warnings = Vec::new();
    let out = translator()
        .translate_snapshot(&doc, &mut state, &mut warnings)
        .unwrap();

    assert_eq!(out.groups[0].id, out.groups[1].id);
    assert_eq!(out.groups[0].pipeline, out.groups[1].pipeline);
    assert_eq!(state.group_remaps.len(), 1);
}

#[test]
fn groups_nest_with_isolated_namespaces_at_each_level() {
    let doc = legacy::SnapshotDocument {
        modules: vec![module(1, "Reader")],
        groups: vec![group(
            2,
            legacy::SnapshotDocument {
                modules: vec![module(1, "Scale")],
                groups: vec![group(
                    2,
                    legacy::SnapshotDocument {
                        modules: vec![module(1, "Render")],
                        ..empty_snapshot()
                    },
                )],
                ..empty_snapshot()
            },
        )],
        ..empty_snapshot()
    };

    let mut state = TranslateState::new();
    let mut warnings = Vec::new();
    let out = translator()
        .translate_snapshot(&doc, &mut state, &mut warnings)
        .unwrap();

    assert_eq!(out.modules[0].id, 0);
    assert_eq!(out.groups[0].id, 1);
    let middle = &out.groups[0].pipeline;
    assert_eq!(middle.modules[0].id, 0);
    assert_eq!(middle.groups[0].id, 1);
    let innermost = &middle.groups[0].pipeline;
    assert_eq!(innermost.modules[0].id, 0);
    assert_eq!(innermost.version, "2.0");
}

#[test]
fn nesting_past_the_depth_cap_is_a_cycle() {
    let doc = legacy::SnapshotDocument {
        groups: vec![group(
            1,
            legacy::SnapshotDocument {
                groups: vec![group(
                    2,
                    legacy::SnapshotDocument {
                        groups: vec![group(3, empty_snapshot())],
                        ..empty_snapshot()
                    },
                )],
                ..empty_snapshot()
            },
        )],
        ..empty_snapshot()
    };

    let options = TranslateOptions { max_group_depth: 2 };
    let translator = Translator::new(options, &OpenCatalog);
    let mut state = TranslateState::new();
    let mut warnings = Vec::new();
    let err = translator
        .translate_snapshot(&doc, &mut state, &mut warnings)
        .unwrap_err();

    assert_eq!(
        err,
        TranslateError::CycleDetected {
            group_id: 3,
            depth: 3,
        }
    );
}
