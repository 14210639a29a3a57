#![forbid(unsafe_code)]

//! Source-schema ("1.1") document shapes, exactly as the persistence layer
//! hands them over. Translation consumes these values and produces the
//! current model from `fv_core`; it never mutates them.

mod bundle;
mod history;
mod log;
mod registry;
mod snapshot;

pub use bundle::*;
pub use history::*;
pub use log::*;
pub use registry::*;
pub use snapshot::*;

/// Version tag every translatable source document must carry.
pub const SCHEMA_VERSION: &str = "1.1";
