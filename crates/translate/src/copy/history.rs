#![forbid(unsafe_code)]

use fv_core::{
    Action, ActionAnnotation, EntityType, HistoryDocument, IdScope, OpKind, Operation,
    ParameterExploration, Payload,
};

use super::Copier;
use crate::error::TranslateError;

impl Copier<'_> {
    pub(crate) fn copy_history(
        &mut self,
        doc: &HistoryDocument,
    ) -> Result<HistoryDocument, TranslateError> {
        let mut actions = Vec::with_capacity(doc.actions.len());
        for action in &doc.actions {
            actions.push(self.copy_action(action)?);
        }

        let annotations = self.copy_annotations(&doc.annotations);

        let mut action_annotations = Vec::with_capacity(doc.action_annotations.len());
        for annotation in &doc.action_annotations {
            action_annotations.push(ActionAnnotation {
                id: self.resolve(EntityType::ActionAnnotation, annotation.id),
                action_id: self.resolve(EntityType::Action, annotation.action_id),
                key: annotation.key.clone(),
                value: annotation.value.clone(),
            });
        }

        let mut parameter_explorations = Vec::with_capacity(doc.parameter_explorations.len());
        for exploration in &doc.parameter_explorations {
            parameter_explorations.push(ParameterExploration {
                id: self.resolve(EntityType::ParameterExploration, exploration.id),
                action_id: self.resolve(EntityType::Action, exploration.action_id),
                data_json: exploration.data_json.clone(),
            });
        }

        Ok(HistoryDocument {
            version: doc.version.clone(),
            actions,
            annotations,
            action_annotations,
            parameter_explorations,
            scope: IdScope::new(),
        })
    }

    fn copy_action(&mut self, action: &Action) -> Result<Action, TranslateError> {
        let id = self.resolve(EntityType::Action, action.id);
        let prev_id = self.resolve(EntityType::Action, action.prev_id);

        let mut operations = Vec::with_capacity(action.operations.len());
        for operation in &action.operations {
            operations.push(self.copy_operation(operation)?);
        }

        Ok(Action {
            id,
            prev_id,
            session: action.session,
            user: action.user.clone(),
            date: action.date.clone(),
            operations,
            annotations: self.copy_annotations(&action.annotations),
        })
    }

    fn copy_operation(&mut self, operation: &Operation) -> Result<Operation, TranslateError> {
        let id = self.resolve(EntityType::Operation, operation.id);
        let kind = match &operation.kind {
            OpKind::Add {
                what,
                object_id,
                payload,
            } => {
                check_payload(*what, *object_id, payload)?;
                OpKind::Add {
                    what: *what,
                    object_id: self.resolve(*what, *object_id),
                    payload: self.copy_payload(payload)?,
                }
            }
            OpKind::Change {
                what,
                old_object_id,
                new_object_id,
                payload,
            } => {
                check_payload(*what, *new_object_id, payload)?;
                OpKind::Change {
                    what: *what,
                    old_object_id: self.resolve(*what, *old_object_id),
                    new_object_id: self.resolve(*what, *new_object_id),
                    payload: self.copy_payload(payload)?,
                }
            }
            OpKind::Delete { what, object_id } => OpKind::Delete {
                what: *what,
                object_id: self.resolve(*what, *object_id),
            },
        };
        Ok(Operation { id, kind })
    }

    fn copy_payload(&mut self, payload: &Payload) -> Result<Payload, TranslateError> {
        Ok(match payload {
            Payload::Module(module) => Payload::Module(self.copy_module(module)),
            Payload::Group(group) => Payload::Group(Box::new(self.copy_group(group)?)),
            Payload::Connection(connection) => {
                Payload::Connection(self.copy_connection(connection))
            }
            Payload::Annotation(annotation) => {
                Payload::Annotation(self.copy_annotation(annotation))
            }
        })
    }
}

fn check_payload(
    what: EntityType,
    object_id: i64,
    payload: &Payload,
) -> Result<(), TranslateError> {
    if payload.entity_type() != what {
        return Err(TranslateError::IdentifierTypeMismatch {
            entity: what,
            old_id: object_id,
            message: "operation payload carries a different entity type",
        });
    }
    if payload.id() != object_id {
        return Err(TranslateError::IdentifierTypeMismatch {
            entity: what,
            old_id: object_id,
            message: "operation object id does not match its payload id",
        });
    }
    Ok(())
}
