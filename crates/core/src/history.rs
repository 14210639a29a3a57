#![forbid(unsafe_code)]

use crate::ids::{EntityType, IdScope};
use crate::snapshot::{Annotation, Connection, Group, Module};

/// Append-only action history. Actions form a tree through `prev_id`; the
/// root is the virtual id 0 and never appears as a stored action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryDocument {
    pub version: String,
    pub actions: Vec<Action>,
    pub annotations: Vec<Annotation>,
    pub action_annotations: Vec<ActionAnnotation>,
    pub parameter_explorations: Vec<ParameterExploration>,
    /// Allocator for appending new entities to this document.
    pub scope: IdScope,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub id: i64,
    pub prev_id: i64,
    pub session: i64,
    pub user: String,
    pub date: String,
    pub operations: Vec<Operation>,
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub id: i64,
    pub kind: OpKind,
}

/// One edit within an action. `what` must match the payload's entity type
/// and the object id must equal the payload's own id.
#[derive(Clone, Debug, PartialEq)]
pub enum OpKind {
    Add {
        what: EntityType,
        object_id: i64,
        payload: Payload,
    },
    Change {
        what: EntityType,
        old_object_id: i64,
        new_object_id: i64,
        payload: Payload,
    },
    Delete {
        what: EntityType,
        object_id: i64,
    },
}

/// Entity carried by an Add/Change operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Module(Module),
    Group(Box<Group>),
    Connection(Connection),
    Annotation(Annotation),
}

impl Payload {
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Module(_) => EntityType::Module,
            Self::Group(_) => EntityType::Group,
            Self::Connection(_) => EntityType::Connection,
            Self::Annotation(_) => EntityType::Annotation,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Module(module) => module.id,
            Self::Group(group) => group.id,
            Self::Connection(connection) => connection.id,
            Self::Annotation(annotation) => annotation.id,
        }
    }
}

/// Keyed metadata attached to an action by id. Values are opaque except for
/// the upgrade-provenance key, whose value holds an action id.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionAnnotation {
    pub id: i64,
    pub action_id: i64,
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterExploration {
    pub id: i64,
    pub action_id: i64,
    pub data_json: String,
}
