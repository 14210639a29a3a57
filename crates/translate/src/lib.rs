#![forbid(unsafe_code)]

mod bundle;
mod catalog;
mod copy;
mod error;
pub mod legacy;
mod remap;
mod translator;
mod upgrade;

pub use bundle::*;
pub use catalog::*;
pub use copy::TranslateOptions;
pub use error::*;
pub use remap::*;
pub use translator::*;

#[cfg(test)]
mod tests;
