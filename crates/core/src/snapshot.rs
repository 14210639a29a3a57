#![forbid(unsafe_code)]

/// Materialized workflow graph. A `Group` embeds an entire nested snapshot
/// with its own id namespace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotDocument {
    pub version: String,
    pub name: String,
    pub modules: Vec<Module>,
    pub groups: Vec<Group>,
    pub abstractions: Vec<AbstractionRef>,
    pub connections: Vec<Connection>,
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub id: i64,
    pub name: String,
    pub package: String,
    pub label: String,
    pub position: Position,
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub id: i64,
    pub position: Position,
    pub pipeline: SnapshotDocument,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AbstractionRef {
    pub id: i64,
    pub name: String,
    pub position: Position,
}

/// Connection endpoints live in the module-family id namespace; either end
/// may be a plain module, a group, or an abstraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub id: i64,
    pub source_id: i64,
    pub source_port: String,
    pub target_id: i64,
    pub target_port: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub id: i64,
    pub key: String,
    pub value: String,
}
