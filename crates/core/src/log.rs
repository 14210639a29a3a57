#![forbid(unsafe_code)]

use crate::snapshot::Annotation;

/// Execution records. `action_id` fields refer into the history namespace
/// without owning it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogDocument {
    pub version: String,
    pub workflow_execs: Vec<WorkflowExec>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowExec {
    pub id: i64,
    pub action_id: i64,
    pub completed: bool,
    pub annotations: Vec<Annotation>,
    pub items: Vec<ExecItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExecItem {
    Module(ModuleExec),
    Group(GroupExec),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleExec {
    pub id: i64,
    pub module_id: i64,
    pub completed: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupExec {
    pub id: i64,
    pub module_id: i64,
    pub completed: bool,
    pub items: Vec<ExecItem>,
}
