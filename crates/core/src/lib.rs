#![forbid(unsafe_code)]

mod bundle;
mod history;
mod ids;
mod log;
mod registry;
mod snapshot;

pub use bundle::*;
pub use history::*;
pub use ids::*;
pub use log::*;
pub use registry::*;
pub use snapshot::*;

#[cfg(test)]
mod tests;
