#![forbid(unsafe_code)]

use fv_core::Bundle;

use crate::error::{DocumentKind, TranslateError, TranslateWarning};
use crate::legacy;
use crate::remap::TranslateState;
use crate::translator::Translator;

/// Result of one bundle pass. Documents that failed or were skipped are
/// absent from `bundle` and listed in `failures`; non-fatal findings land
/// in `warnings`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BundleOutcome {
    pub bundle: Bundle,
    pub warnings: Vec<TranslateWarning>,
    pub failures: Vec<DocumentFailure>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DocumentFailure {
    Failed {
        kind: DocumentKind,
        error: TranslateError,
    },
    /// Not attempted because the document it takes remap state from failed.
    Skipped {
        kind: DocumentKind,
        after: DocumentKind,
    },
}

impl Translator<'_> {
    /// Translates a bundle's documents in fixed order: history, snapshot,
    /// log, then the independent registry. Finished remap state seeds the
    /// next dependent document with document-private namespaces stripped.
    pub fn translate_bundle(&self, bundle: &legacy::Bundle) -> BundleOutcome {
        let mut out = Bundle::default();
        let mut warnings = Vec::new();
        let mut failures = Vec::new();

        let mut history_state: Option<TranslateState> = None;
        let mut history_failed = false;
        if let Some(doc) = &bundle.history {
            let mut state = TranslateState::new();
            match self.translate_history(doc, &mut state) {
                Ok(translated) => {
                    out.history = Some(translated);
                    history_state = Some(state);
                }
                Err(error) => {
                    history_failed = true;
                    failures.push(DocumentFailure::Failed {
                        kind: DocumentKind::History,
                        error,
                    });
                }
            }
        }

        let mut snapshot_state: Option<TranslateState> = None;
        let mut snapshot_failed = false;
        if let Some(doc) = &bundle.snapshot {
            if history_failed {
                failures.push(DocumentFailure::Skipped {
                    kind: DocumentKind::Snapshot,
                    after: DocumentKind::History,
                });
            } else {
                let mut state = TranslateState::new();
                if let Some(seed) = &history_state {
                    state.seed_from(seed);
                }
                match self.translate_snapshot(doc, &mut state, &mut warnings) {
                    Ok(translated) => {
                        out.snapshot = Some(translated);
                        snapshot_state = Some(state);
                    }
                    Err(error) => {
                        snapshot_failed = true;
                        failures.push(DocumentFailure::Failed {
                            kind: DocumentKind::Snapshot,
                            error,
                        });
                    }
                }
            }
        }

        for name in &bundle.abstractions {
            warnings.push(TranslateWarning::UnsupportedEntity {
                kind: DocumentKind::Abstraction,
                name: name.clone(),
            });
        }
        for name in &bundle.mashups {
            warnings.push(TranslateWarning::UnsupportedEntity {
                kind: DocumentKind::Mashup,
                name: name.clone(),
            });
        }

        if let Some(doc) = &bundle.log {
            // The log takes its seed from history when present, otherwise
            // from the snapshot; it is only skipped when its seeder failed.
            if history_failed {
                failures.push(DocumentFailure::Skipped {
                    kind: DocumentKind::Log,
                    after: DocumentKind::History,
                });
            } else if history_state.is_none() && snapshot_failed {
                failures.push(DocumentFailure::Skipped {
                    kind: DocumentKind::Log,
                    after: DocumentKind::Snapshot,
                });
            } else {
                let mut state = TranslateState::new();
                if let Some(seed) = history_state.as_ref().or(snapshot_state.as_ref()) {
                    state.seed_from(seed);
                }
                match self.translate_log(doc, &mut state) {
                    Ok(translated) => out.log = Some(translated),
                    Err(error) => failures.push(DocumentFailure::Failed {
                        kind: DocumentKind::Log,
                        error,
                    }),
                }
            }
        }

        if let Some(doc) = &bundle.registry {
            // Independent namespace; translated even when siblings failed.
            let mut state = TranslateState::new();
            match self.translate_registry(doc, &mut state, &mut warnings) {
                Ok(translated) => out.registry = Some(translated),
                Err(error) => failures.push(DocumentFailure::Failed {
                    kind: DocumentKind::Registry,
                    error,
                }),
            }
        }

        BundleOutcome {
            bundle: out,
            warnings,
            failures,
        }
    }
}
