#![forbid(unsafe_code)]

use fv_core::{
    Action, ActionAnnotation, EntityType, HistoryDocument, IdScope, OpKind, Operation,
    ParameterExploration, Payload,
};

use super::entities;
use super::EmbedUpgraders;
use crate::error::{DocumentKind, TranslateError};
use crate::legacy;

pub(crate) fn upgrade_history(
    doc: &legacy::HistoryDocument,
    embed: &EmbedUpgraders,
) -> Result<HistoryDocument, TranslateError> {
    if doc.version != legacy::SCHEMA_VERSION {
        return Err(TranslateError::SchemaRuleMissing {
            kind: DocumentKind::History,
            version: doc.version.clone(),
        });
    }

    let mut actions = Vec::with_capacity(doc.actions.len());
    for action in &doc.actions {
        actions.push(upgrade_action(action, embed)?);
    }

    Ok(HistoryDocument {
        version: doc.version.clone(),
        actions,
        annotations: entities::upgrade_annotations(&doc.annotations),
        action_annotations: doc
            .action_annotations
            .iter()
            .map(upgrade_action_annotation)
            .collect(),
        parameter_explorations: doc
            .parameter_explorations
            .iter()
            .map(upgrade_parameter_exploration)
            .collect(),
        scope: IdScope::new(),
    })
}

fn upgrade_action(action: &legacy::Action, embed: &EmbedUpgraders) -> Result<Action, TranslateError> {
    let mut operations = Vec::with_capacity(action.operations.len());
    for operation in &action.operations {
        operations.push(upgrade_operation(operation, embed)?);
    }

    Ok(Action {
        id: action.id,
        prev_id: action.prev_id,
        session: action.session,
        user: action.user.clone(),
        date: action.date.clone(),
        operations,
        annotations: entities::upgrade_annotations(&action.annotations),
    })
}

fn upgrade_operation(
    operation: &legacy::Operation,
    embed: &EmbedUpgraders,
) -> Result<Operation, TranslateError> {
    let kind = match &operation.kind {
        legacy::OpKind::Add {
            what,
            object_id,
            payload,
        } => OpKind::Add {
            what: parse_entity(what)?,
            object_id: *object_id,
            payload: upgrade_payload(payload, embed)?,
        },
        legacy::OpKind::Change {
            what,
            old_object_id,
            new_object_id,
            payload,
        } => OpKind::Change {
            what: parse_entity(what)?,
            old_object_id: *old_object_id,
            new_object_id: *new_object_id,
            payload: upgrade_payload(payload, embed)?,
        },
        legacy::OpKind::Delete { what, object_id } => OpKind::Delete {
            what: parse_entity(what)?,
            object_id: *object_id,
        },
    };
    Ok(Operation {
        id: operation.id,
        kind,
    })
}

fn upgrade_payload(
    payload: &legacy::Payload,
    embed: &EmbedUpgraders,
) -> Result<Payload, TranslateError> {
    Ok(match payload {
        legacy::Payload::Module(module) => Payload::Module(entities::upgrade_module(module)),
        legacy::Payload::Group(group) => {
            Payload::Group(Box::new(entities::upgrade_group(group, embed)?))
        }
        legacy::Payload::Connection(connection) => {
            Payload::Connection(entities::upgrade_connection(connection))
        }
        legacy::Payload::Annotation(annotation) => {
            Payload::Annotation(entities::upgrade_annotation(annotation))
        }
    })
}

fn upgrade_action_annotation(annotation: &legacy::ActionAnnotation) -> ActionAnnotation {
    ActionAnnotation {
        id: annotation.id,
        action_id: annotation.action_id,
        key: annotation.akey.clone(),
        value: annotation.value.clone(),
    }
}

fn upgrade_parameter_exploration(
    exploration: &legacy::ParameterExploration,
) -> ParameterExploration {
    ParameterExploration {
        id: exploration.id,
        action_id: exploration.action_id,
        // The source stored exploration data as a structured value; the
        // current schema keeps it as one canonical JSON string.
        data_json: exploration.data.to_string(),
    }
}

fn parse_entity(raw: &str) -> Result<EntityType, TranslateError> {
    EntityType::parse(raw).ok_or(TranslateError::InvalidInput(
        "unknown entity type tag on an operation",
    ))
}
