#![forbid(unsafe_code)]

use fv_core::{EntityType, ExecItem, GroupExec, LogDocument, ModuleExec, WorkflowExec};

use super::Copier;

impl Copier<'_> {
    pub(crate) fn copy_log(&mut self, doc: &LogDocument) -> LogDocument {
        let mut workflow_execs = Vec::with_capacity(doc.workflow_execs.len());
        for exec in &doc.workflow_execs {
            workflow_execs.push(WorkflowExec {
                id: self.resolve(EntityType::WorkflowExec, exec.id),
                // Non-owning reference into the history namespace; a seeded
                // remap keeps it pointing at the same renumbered action.
                action_id: self.resolve(EntityType::Action, exec.action_id),
                completed: exec.completed,
                annotations: self.copy_annotations(&exec.annotations),
                items: self.copy_exec_items(&exec.items),
            });
        }
        LogDocument {
            version: doc.version.clone(),
            workflow_execs,
        }
    }

    fn copy_exec_items(&mut self, items: &[ExecItem]) -> Vec<ExecItem> {
        items.iter().map(|item| self.copy_exec_item(item)).collect()
    }

    fn copy_exec_item(&mut self, item: &ExecItem) -> ExecItem {
        match item {
            ExecItem::Module(exec) => ExecItem::Module(ModuleExec {
                id: self.resolve(EntityType::ModuleExec, exec.id),
                module_id: self.resolve(EntityType::Module, exec.module_id),
                completed: exec.completed,
                error: exec.error.clone(),
            }),
            ExecItem::Group(exec) => ExecItem::Group(GroupExec {
                id: self.resolve(EntityType::GroupExec, exec.id),
                module_id: self.resolve(EntityType::Module, exec.module_id),
                completed: exec.completed,
                items: self.copy_exec_items(&exec.items),
            }),
        }
    }
}
