#![forbid(unsafe_code)]

use fv_core::{Descriptor, RegistryDocument};

use crate::error::{DocumentKind, TranslateError};
use crate::legacy;

pub(crate) fn upgrade_registry(
    doc: &legacy::RegistryDocument,
) -> Result<RegistryDocument, TranslateError> {
    if doc.version != legacy::SCHEMA_VERSION {
        return Err(TranslateError::SchemaRuleMissing {
            kind: DocumentKind::Registry,
            version: doc.version.clone(),
        });
    }

    Ok(RegistryDocument {
        version: doc.version.clone(),
        descriptors: doc
            .descriptors
            .iter()
            .map(|descriptor| Descriptor {
                id: descriptor.id,
                package: descriptor.package.clone(),
                name: descriptor.name.clone(),
                namespace: descriptor.namespace.clone(),
            })
            .collect(),
    })
}
