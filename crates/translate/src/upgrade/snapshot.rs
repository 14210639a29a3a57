#![forbid(unsafe_code)]

use fv_core::SnapshotDocument;

use super::entities;
use super::EmbedUpgraders;
use crate::error::{DocumentKind, TranslateError};
use crate::legacy;

pub(crate) fn upgrade_snapshot(
    doc: &legacy::SnapshotDocument,
) -> Result<SnapshotDocument, TranslateError> {
    if doc.version != legacy::SCHEMA_VERSION {
        return Err(TranslateError::SchemaRuleMissing {
            kind: DocumentKind::Snapshot,
            version: doc.version.clone(),
        });
    }

    let embed = EmbedUpgraders {
        snapshot: upgrade_snapshot,
    };
    let mut groups = Vec::with_capacity(doc.groups.len());
    for group in &doc.groups {
        groups.push(entities::upgrade_group(group, &embed)?);
    }

    Ok(SnapshotDocument {
        version: doc.version.clone(),
        name: doc.name.clone(),
        modules: doc.modules.iter().map(entities::upgrade_module).collect(),
        groups,
        abstractions: doc
            .abstractions
            .iter()
            .map(entities::upgrade_abstraction)
            .collect(),
        connections: doc
            .connections
            .iter()
            .map(entities::upgrade_connection)
            .collect(),
        annotations: entities::upgrade_annotations(&doc.annotations),
    })
}
