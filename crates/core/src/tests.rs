use super::*;

#[test]
fn entity_type_names_round_trip() {
    let all = [
        EntityType::Action,
        EntityType::Operation,
        EntityType::Annotation,
        EntityType::ActionAnnotation,
        EntityType::ParameterExploration,
        EntityType::Module,
        EntityType::Group,
        EntityType::Abstraction,
        EntityType::Connection,
        EntityType::WorkflowExec,
        EntityType::ModuleExec,
        EntityType::GroupExec,
        EntityType::Descriptor,
    ];
    for entity in all {
        assert_eq!(EntityType::parse(entity.as_str()), Some(entity));
    }
    assert_eq!(EntityType::parse("pipeline"), None);
}

#[test]
fn module_family_shares_one_scope_slot() {
    assert_eq!(EntityType::Group.scope_slot(), EntityType::Module);
    assert_eq!(EntityType::Abstraction.scope_slot(), EntityType::Module);
    assert_eq!(EntityType::Module.scope_slot(), EntityType::Module);
    assert_eq!(EntityType::Action.scope_slot(), EntityType::Action);

    let mut scope = IdScope::new();
    assert_eq!(scope.next(EntityType::Module), 0);
    assert_eq!(scope.next(EntityType::Group), 1);
    assert_eq!(scope.next(EntityType::Abstraction), 2);
    assert_eq!(scope.next(EntityType::Module), 3);
}

#[test]
fn scope_counters_are_independent_per_type() {
    let mut scope = IdScope::new();
    assert_eq!(scope.next(EntityType::Action), 0);
    assert_eq!(scope.next(EntityType::Annotation), 0);
    assert_eq!(scope.next(EntityType::Action), 1);
    assert_eq!(scope.next(EntityType::Annotation), 1);
}

#[test]
fn observe_raises_the_floor_without_lowering_it() {
    let mut scope = IdScope::new();
    scope.observe(EntityType::Action, 99);
    assert_eq!(scope.next(EntityType::Action), 100);

    scope.observe(EntityType::Action, 5);
    assert_eq!(scope.next(EntityType::Action), 101);
}

#[test]
fn private_namespaces_never_cross_documents() {
    assert!(EntityType::Action.shared_across_documents());
    assert!(EntityType::Module.shared_across_documents());
    assert!(EntityType::Connection.shared_across_documents());
    assert!(EntityType::Descriptor.shared_across_documents());

    assert!(!EntityType::Annotation.shared_across_documents());
    assert!(!EntityType::ActionAnnotation.shared_across_documents());
    assert!(!EntityType::Operation.shared_across_documents());
    assert!(!EntityType::ModuleExec.shared_across_documents());
}

#[test]
fn payload_reports_its_entity_type_and_id() {
    let payload = Payload::Module(Module {
        id: 7,
        name: "Reader".to_string(),
        package: "org.flowvault.basic".to_string(),
        label: String::new(),
        position: Position::default(),
        annotations: Vec::new(),
    });
    assert_eq!(payload.entity_type(), EntityType::Module);
    assert_eq!(payload.id(), 7);

    let payload = Payload::Annotation(Annotation {
        id: 3,
        key: "note".to_string(),
        value: "checked".to_string(),
    });
    assert_eq!(payload.entity_type(), EntityType::Annotation);
    assert_eq!(payload.id(), 3);
}
