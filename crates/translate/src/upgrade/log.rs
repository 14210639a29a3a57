#![forbid(unsafe_code)]

use fv_core::{ExecItem, GroupExec, LogDocument, ModuleExec, WorkflowExec};

use super::entities;
use crate::error::{DocumentKind, TranslateError};
use crate::legacy;

pub(crate) fn upgrade_log(doc: &legacy::LogDocument) -> Result<LogDocument, TranslateError> {
    if doc.version != legacy::SCHEMA_VERSION {
        return Err(TranslateError::SchemaRuleMissing {
            kind: DocumentKind::Log,
            version: doc.version.clone(),
        });
    }

    Ok(LogDocument {
        version: doc.version.clone(),
        workflow_execs: doc.workflow_execs.iter().map(upgrade_workflow_exec).collect(),
    })
}

fn upgrade_workflow_exec(exec: &legacy::WorkflowExec) -> WorkflowExec {
    WorkflowExec {
        id: exec.id,
        action_id: exec.action_id,
        completed: exec.completed,
        annotations: entities::upgrade_annotations(&exec.annotations),
        items: exec.items.iter().map(upgrade_exec_item).collect(),
    }
}

fn upgrade_exec_item(item: &legacy::ExecItem) -> ExecItem {
    match item {
        legacy::ExecItem::Module(exec) => ExecItem::Module(ModuleExec {
            id: exec.id,
            module_id: exec.module_id,
            completed: exec.completed,
            error: exec.error.clone(),
        }),
        legacy::ExecItem::Group(exec) => ExecItem::Group(GroupExec {
            id: exec.id,
            module_id: exec.module_id,
            completed: exec.completed,
            items: exec.items.iter().map(upgrade_exec_item).collect(),
        }),
    }
}
