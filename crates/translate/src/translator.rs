#![forbid(unsafe_code)]

use fv_core::{
    EntityType, HistoryDocument, LogDocument, RegistryDocument, SnapshotDocument,
    ROOT_ACTION_ID, SCHEMA_VERSION, UPGRADE_ANNOTATION_KEY,
};

use crate::catalog::DescriptorCatalog;
use crate::copy::{Copier, TranslateOptions};
use crate::error::{TranslateError, TranslateWarning};
use crate::legacy;
use crate::remap::TranslateState;
use crate::upgrade;

/// Rewrites source-schema documents into the current schema. One instance
/// may serve many passes; all per-pass state lives in the caller-owned
/// `TranslateState`.
pub struct Translator<'a> {
    options: TranslateOptions,
    catalog: &'a dyn DescriptorCatalog,
}

impl<'a> Translator<'a> {
    pub fn new(options: TranslateOptions, catalog: &'a dyn DescriptorCatalog) -> Self {
        Self { options, catalog }
    }

    /// Upgrade, renumber, repair upgrade-provenance values, stamp. The root
    /// sentinel is pinned first so `prev_id == 0` keeps anchoring every
    /// translated history at id 0.
    pub fn translate_history(
        &self,
        doc: &legacy::HistoryDocument,
        state: &mut TranslateState,
    ) -> Result<HistoryDocument, TranslateError> {
        state.remap.pin(EntityType::Action, ROOT_ACTION_ID, ROOT_ACTION_ID);
        state.scope.observe(EntityType::Action, ROOT_ACTION_ID);

        let upgraded = upgrade::upgrade_history(
            doc,
            &upgrade::EmbedUpgraders {
                snapshot: upgrade::upgrade_snapshot,
            },
        )?;

        let mut translated = Copier::new(state, &self.options).copy_history(&upgraded)?;
        rewrite_upgrade_annotations(&mut translated, state)?;

        translated.version = SCHEMA_VERSION.to_string();
        translated.scope = state.scope.clone();
        Ok(translated)
    }

    pub fn translate_snapshot(
        &self,
        doc: &legacy::SnapshotDocument,
        state: &mut TranslateState,
        warnings: &mut Vec<TranslateWarning>,
    ) -> Result<SnapshotDocument, TranslateError> {
        let upgraded = upgrade::upgrade_snapshot(doc)?;
        self.check_modules(&upgraded, warnings);

        let mut translated = Copier::new(state, &self.options).copy_snapshot(&upgraded)?;
        translated.version = SCHEMA_VERSION.to_string();
        Ok(translated)
    }

    pub fn translate_log(
        &self,
        doc: &legacy::LogDocument,
        state: &mut TranslateState,
    ) -> Result<LogDocument, TranslateError> {
        // Execs reference history actions, so the root sentinel holds here
        // too even when no history seeded this pass.
        state.remap.pin(EntityType::Action, ROOT_ACTION_ID, ROOT_ACTION_ID);
        state.scope.observe(EntityType::Action, ROOT_ACTION_ID);

        let upgraded = upgrade::upgrade_log(doc)?;
        let mut translated = Copier::new(state, &self.options).copy_log(&upgraded);
        translated.version = SCHEMA_VERSION.to_string();
        Ok(translated)
    }

    pub fn translate_registry(
        &self,
        doc: &legacy::RegistryDocument,
        state: &mut TranslateState,
        warnings: &mut Vec<TranslateWarning>,
    ) -> Result<RegistryDocument, TranslateError> {
        let upgraded = upgrade::upgrade_registry(doc)?;
        for descriptor in &upgraded.descriptors {
            if !self.catalog.has_descriptor(&descriptor.package, &descriptor.name) {
                warnings.push(TranslateWarning::MissingDescriptor {
                    package: descriptor.package.clone(),
                    name: descriptor.name.clone(),
                });
            }
        }

        let mut translated = Copier::new(state, &self.options).copy_registry(&upgraded);
        translated.version = SCHEMA_VERSION.to_string();
        Ok(translated)
    }

    fn check_modules(&self, doc: &SnapshotDocument, warnings: &mut Vec<TranslateWarning>) {
        for module in &doc.modules {
            if !self.catalog.has_descriptor(&module.package, &module.name) {
                warnings.push(TranslateWarning::MissingDescriptor {
                    package: module.package.clone(),
                    name: module.name.clone(),
                });
            }
        }
        for group in &doc.groups {
            self.check_modules(&group.pipeline, warnings);
        }
    }
}

/// Upgrade-provenance annotations store an action id in their value rather
/// than in a structural position, and the referenced action may only get
/// renumbered late in the walk. Values are therefore repaired in a second
/// pass over the completed output tree.
fn rewrite_upgrade_annotations(
    doc: &mut HistoryDocument,
    state: &mut TranslateState,
) -> Result<(), TranslateError> {
    let TranslateState { scope, remap, .. } = state;
    for annotation in &mut doc.action_annotations {
        if annotation.key != UPGRADE_ANNOTATION_KEY {
            continue;
        }
        let old_id: i64 = annotation.value.trim().parse().map_err(|_| {
            TranslateError::InvalidInput("upgrade annotation value is not an action id")
        })?;
        let new_id = remap.resolve(scope, EntityType::Action, old_id);
        annotation.value = new_id.to_string();
    }
    Ok(())
}
