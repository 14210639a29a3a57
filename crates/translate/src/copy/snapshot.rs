#![forbid(unsafe_code)]

use fv_core::{
    AbstractionRef, Annotation, Connection, EntityType, Group, Module, SnapshotDocument,
    SCHEMA_VERSION,
};

use super::Copier;
use crate::error::TranslateError;

impl Copier<'_> {
    pub(crate) fn copy_snapshot(
        &mut self,
        doc: &SnapshotDocument,
    ) -> Result<SnapshotDocument, TranslateError> {
        let mut modules = Vec::with_capacity(doc.modules.len());
        for module in &doc.modules {
            modules.push(self.copy_module(module));
        }

        let mut groups = Vec::with_capacity(doc.groups.len());
        for group in &doc.groups {
            groups.push(self.copy_group(group)?);
        }

        let mut abstractions = Vec::with_capacity(doc.abstractions.len());
        for abstraction in &doc.abstractions {
            abstractions.push(AbstractionRef {
                id: self.resolve(EntityType::Abstraction, abstraction.id),
                name: abstraction.name.clone(),
                position: abstraction.position,
            });
        }

        let mut connections = Vec::with_capacity(doc.connections.len());
        for connection in &doc.connections {
            connections.push(self.copy_connection(connection));
        }

        Ok(SnapshotDocument {
            version: doc.version.clone(),
            name: doc.name.clone(),
            modules,
            groups,
            abstractions,
            connections,
            annotations: self.copy_annotations(&doc.annotations),
        })
    }

    pub(crate) fn copy_module(&mut self, module: &Module) -> Module {
        Module {
            id: self.resolve(EntityType::Module, module.id),
            name: module.name.clone(),
            package: module.package.clone(),
            label: module.label.clone(),
            position: module.position,
            annotations: self.copy_annotations(&module.annotations),
        }
    }

    pub(crate) fn copy_group(&mut self, group: &Group) -> Result<Group, TranslateError> {
        let id = self.resolve(EntityType::Group, group.id);
        let pipeline = self.expand_group(group.id, &group.pipeline)?;
        Ok(Group {
            id,
            position: group.position,
            pipeline,
        })
    }

    /// Translates the embedded snapshot under the nested state keyed by the
    /// old group id. The nested scope and remap persist across sibling
    /// groups, so revisiting the same old group id reproduces the same
    /// embedded document.
    fn expand_group(
        &mut self,
        old_group_id: i64,
        pipeline: &SnapshotDocument,
    ) -> Result<SnapshotDocument, TranslateError> {
        let depth = self.depth + 1;
        if depth > self.options.max_group_depth {
            return Err(TranslateError::CycleDetected {
                group_id: old_group_id,
                depth,
            });
        }

        let mut inner_state = self.state.group_remaps.take(old_group_id);
        let mut inner = Copier {
            state: &mut inner_state,
            options: self.options,
            depth,
        };
        let copied = inner.copy_snapshot(pipeline);
        self.state.group_remaps.put(old_group_id, inner_state);

        let mut pipeline = copied?;
        pipeline.version = SCHEMA_VERSION.to_string();
        Ok(pipeline)
    }

    pub(crate) fn copy_connection(&mut self, connection: &Connection) -> Connection {
        Connection {
            id: self.resolve(EntityType::Connection, connection.id),
            source_id: self.resolve(EntityType::Module, connection.source_id),
            source_port: connection.source_port.clone(),
            target_id: self.resolve(EntityType::Module, connection.target_id),
            target_port: connection.target_port.clone(),
        }
    }

    pub(crate) fn copy_annotation(&mut self, annotation: &Annotation) -> Annotation {
        Annotation {
            id: self.resolve(EntityType::Annotation, annotation.id),
            key: annotation.key.clone(),
            value: annotation.value.clone(),
        }
    }

    pub(crate) fn copy_annotations(&mut self, annotations: &[Annotation]) -> Vec<Annotation> {
        annotations
            .iter()
            .map(|annotation| self.copy_annotation(annotation))
            .collect()
    }
}
