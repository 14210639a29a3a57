#![forbid(unsafe_code)]

use fv_core::{Descriptor, EntityType, RegistryDocument};

use super::Copier;

impl Copier<'_> {
    pub(crate) fn copy_registry(&mut self, doc: &RegistryDocument) -> RegistryDocument {
        let mut descriptors = Vec::with_capacity(doc.descriptors.len());
        for descriptor in &doc.descriptors {
            descriptors.push(Descriptor {
                id: self.resolve(EntityType::Descriptor, descriptor.id),
                package: descriptor.package.clone(),
                name: descriptor.name.clone(),
                namespace: descriptor.namespace.clone(),
            });
        }
        RegistryDocument {
            version: doc.version.clone(),
            descriptors,
        }
    }
}
