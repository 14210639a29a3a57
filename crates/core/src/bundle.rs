#![forbid(unsafe_code)]

use crate::history::HistoryDocument;
use crate::log::LogDocument;
use crate::registry::RegistryDocument;
use crate::snapshot::SnapshotDocument;

/// Related documents persisted together, at most one per kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bundle {
    pub history: Option<HistoryDocument>,
    pub snapshot: Option<SnapshotDocument>,
    pub log: Option<LogDocument>,
    pub registry: Option<RegistryDocument>,
}
