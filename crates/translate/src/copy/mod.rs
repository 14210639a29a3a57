#![forbid(unsafe_code)]

//! Deep copy of an upgraded document, renumbering every id through the pass
//! state. Walk order is document order, so identical inputs and seeds give
//! identical outputs.

mod history;
mod log;
mod registry;
mod snapshot;

use fv_core::EntityType;

use crate::remap::TranslateState;

/// Knobs for one translation pass.
#[derive(Clone, Debug)]
pub struct TranslateOptions {
    /// Hard bound on group nesting. Producers guarantee acyclic embedding;
    /// crossing this bound is treated as a cycle instead of overflowing the
    /// stack.
    pub max_group_depth: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self { max_group_depth: 32 }
    }
}

pub(crate) struct Copier<'a> {
    state: &'a mut TranslateState,
    options: &'a TranslateOptions,
    depth: usize,
}

impl<'a> Copier<'a> {
    pub(crate) fn new(state: &'a mut TranslateState, options: &'a TranslateOptions) -> Self {
        Self {
            state,
            options,
            depth: 0,
        }
    }

    fn resolve(&mut self, entity: EntityType, old_id: i64) -> i64 {
        let TranslateState { scope, remap, .. } = &mut *self.state;
        remap.resolve(scope, entity, old_id)
    }
}
