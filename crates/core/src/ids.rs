#![forbid(unsafe_code)]

use std::collections::HashMap;

/// Schema version stamped on every current-model document.
pub const SCHEMA_VERSION: &str = "2.0";

/// Virtual root of the action tree. No stored action carries this id; an
/// action hanging directly off the root has `prev_id == ROOT_ACTION_ID`.
pub const ROOT_ACTION_ID: i64 = 0;

/// Action-annotation key whose value holds an action id (upgrade provenance).
pub const UPGRADE_ANNOTATION_KEY: &str = "__upgrade__";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityType {
    Action,
    Operation,
    Annotation,
    ActionAnnotation,
    ParameterExploration,
    Module,
    Group,
    Abstraction,
    Connection,
    WorkflowExec,
    ModuleExec,
    GroupExec,
    Descriptor,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Operation => "operation",
            Self::Annotation => "annotation",
            Self::ActionAnnotation => "action_annotation",
            Self::ParameterExploration => "parameter_exploration",
            Self::Module => "module",
            Self::Group => "group",
            Self::Abstraction => "abstraction",
            Self::Connection => "connection",
            Self::WorkflowExec => "workflow_exec",
            Self::ModuleExec => "module_exec",
            Self::GroupExec => "group_exec",
            Self::Descriptor => "descriptor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "action" => Some(Self::Action),
            "operation" => Some(Self::Operation),
            "annotation" => Some(Self::Annotation),
            "action_annotation" => Some(Self::ActionAnnotation),
            "parameter_exploration" => Some(Self::ParameterExploration),
            "module" => Some(Self::Module),
            "group" => Some(Self::Group),
            "abstraction" => Some(Self::Abstraction),
            "connection" => Some(Self::Connection),
            "workflow_exec" => Some(Self::WorkflowExec),
            "module_exec" => Some(Self::ModuleExec),
            "group_exec" => Some(Self::GroupExec),
            "descriptor" => Some(Self::Descriptor),
            _ => None,
        }
    }

    /// Groups and abstractions allocate from the module counter; the three
    /// kinds share one id namespace so connection endpoints referencing any
    /// of them stay unambiguous.
    pub fn scope_slot(&self) -> EntityType {
        match self {
            Self::Group | Self::Abstraction => Self::Module,
            other => *other,
        }
    }

    /// Whether ids of this type may seed a sibling document's translation.
    /// Everything else is private to one document kind.
    pub fn shared_across_documents(&self) -> bool {
        matches!(
            self,
            Self::Action
                | Self::Module
                | Self::Group
                | Self::Abstraction
                | Self::Connection
                | Self::Descriptor
        )
    }
}

/// Per-entity-type id allocator for one document namespace. Counters only
/// move forward; ids are never recycled after a delete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdScope {
    counters: HashMap<EntityType, i64>,
}

impl IdScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id for `entity`.
    pub fn next(&mut self, entity: EntityType) -> i64 {
        let counter = self.counters.entry(entity.scope_slot()).or_insert(0);
        let id = *counter;
        *counter += 1;
        id
    }

    /// Raises the floor for `entity` so `next` returns at least `id + 1`.
    pub fn observe(&mut self, entity: EntityType, id: i64) {
        let counter = self.counters.entry(entity.scope_slot()).or_insert(0);
        if *counter <= id {
            *counter = id + 1;
        }
    }
}
