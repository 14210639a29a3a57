#![forbid(unsafe_code)]

//! Per-entity-type rules reshaping source-schema values into the current
//! shape. Ids are left untouched here; renumbering happens in the copy
//! phase. The rules are closed functions over closed enums, so a missing
//! rule is a compile error rather than a runtime lookup miss.

mod entities;
mod history;
mod log;
mod registry;
mod snapshot;

pub(crate) use history::upgrade_history;
pub(crate) use log::upgrade_log;
pub(crate) use registry::upgrade_registry;
pub(crate) use snapshot::upgrade_snapshot;

use crate::error::TranslateError;
use crate::legacy;
use fv_core::SnapshotDocument;

/// Upgraders for documents embedded inside another document kind. The
/// caller passes these in, so the history rules never name the snapshot
/// module and no dependency cycle forms between document kinds.
pub(crate) struct EmbedUpgraders {
    pub snapshot: fn(&legacy::SnapshotDocument) -> Result<SnapshotDocument, TranslateError>,
}
