#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub abstractions: Vec<AbstractionRef>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub name: String,
    pub package: String,
    /// Renamed to `label` in the current schema.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    /// Obsolete caching hint; dropped by the upgrade.
    #[serde(default)]
    pub cache: bool,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    pub pipeline: SnapshotDocument,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AbstractionRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Connection {
    pub id: i64,
    pub source_id: i64,
    pub source_port: String,
    pub target_id: i64,
    pub target_port: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub id: i64,
    /// Renamed to `key` in the current schema.
    pub akey: String,
    #[serde(default)]
    pub value: String,
}
