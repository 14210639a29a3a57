#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::snapshot::{Annotation, Connection, Group, Module};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub version: String,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub action_annotations: Vec<ActionAnnotation>,
    #[serde(default)]
    pub parameter_explorations: Vec<ParameterExploration>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    pub prev_id: i64,
    pub session: i64,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Operation {
    pub id: i64,
    #[serde(flatten)]
    pub kind: OpKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpKind {
    Add {
        what: String,
        object_id: i64,
        payload: Payload,
    },
    Change {
        what: String,
        old_object_id: i64,
        new_object_id: i64,
        payload: Payload,
    },
    Delete {
        what: String,
        object_id: i64,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum Payload {
    Module(Module),
    Group(Box<Group>),
    Connection(Connection),
    Annotation(Annotation),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionAnnotation {
    pub id: i64,
    pub action_id: i64,
    pub akey: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterExploration {
    pub id: i64,
    pub action_id: i64,
    #[serde(default)]
    pub data: JsonValue,
}
