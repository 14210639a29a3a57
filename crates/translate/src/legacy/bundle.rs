#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use super::history::HistoryDocument;
use super::log::LogDocument;
use super::registry::RegistryDocument;
use super::snapshot::SnapshotDocument;

/// Source bundle as persisted. `abstractions` and `mashups` are attachment
/// names with no defined translation; they surface as warnings and are left
/// out of the translated bundle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub history: Option<HistoryDocument>,
    #[serde(default)]
    pub snapshot: Option<SnapshotDocument>,
    #[serde(default)]
    pub log: Option<LogDocument>,
    #[serde(default)]
    pub registry: Option<RegistryDocument>,
    #[serde(default)]
    pub abstractions: Vec<String>,
    #[serde(default)]
    pub mashups: Vec<String>,
}
