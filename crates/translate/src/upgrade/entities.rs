#![forbid(unsafe_code)]

//! Rules for entities shared between the history and snapshot paths.

use fv_core::{AbstractionRef, Annotation, Connection, Group, Module, Position};

use super::EmbedUpgraders;
use crate::error::TranslateError;
use crate::legacy;

pub(super) fn upgrade_module(module: &legacy::Module) -> Module {
    Module {
        id: module.id,
        name: module.name.clone(),
        package: module.package.clone(),
        // `tag` became `label`; the `cache` hint has no current counterpart.
        label: module.tag.clone(),
        position: Position {
            x: module.pos_x,
            y: module.pos_y,
        },
        annotations: upgrade_annotations(&module.annotations),
    }
}

pub(super) fn upgrade_group(
    group: &legacy::Group,
    embed: &EmbedUpgraders,
) -> Result<Group, TranslateError> {
    Ok(Group {
        id: group.id,
        position: Position {
            x: group.pos_x,
            y: group.pos_y,
        },
        pipeline: (embed.snapshot)(&group.pipeline)?,
    })
}

pub(super) fn upgrade_abstraction(abstraction: &legacy::AbstractionRef) -> AbstractionRef {
    AbstractionRef {
        id: abstraction.id,
        name: abstraction.name.clone(),
        position: Position {
            x: abstraction.pos_x,
            y: abstraction.pos_y,
        },
    }
}

pub(super) fn upgrade_connection(connection: &legacy::Connection) -> Connection {
    Connection {
        id: connection.id,
        source_id: connection.source_id,
        source_port: connection.source_port.clone(),
        target_id: connection.target_id,
        target_port: connection.target_port.clone(),
    }
}

pub(super) fn upgrade_annotation(annotation: &legacy::Annotation) -> Annotation {
    Annotation {
        id: annotation.id,
        key: annotation.akey.clone(),
        value: annotation.value.clone(),
    }
}

pub(super) fn upgrade_annotations(annotations: &[legacy::Annotation]) -> Vec<Annotation> {
    annotations.iter().map(upgrade_annotation).collect()
}
