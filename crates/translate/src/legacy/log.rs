#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use super::snapshot::Annotation;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogDocument {
    pub version: String,
    #[serde(default)]
    pub workflow_execs: Vec<WorkflowExec>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowExec {
    pub id: i64,
    /// History action that produced the executed workflow.
    pub action_id: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub items: Vec<ExecItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum ExecItem {
    Module(ModuleExec),
    Group(GroupExec),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleExec {
    pub id: i64,
    pub module_id: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupExec {
    pub id: i64,
    pub module_id: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub items: Vec<ExecItem>,
}
