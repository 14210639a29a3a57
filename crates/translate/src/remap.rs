#![forbid(unsafe_code)]

use std::collections::HashMap;

use fv_core::{EntityType, IdScope};

/// Old-to-new id mapping for one translation pass. Keys fold onto the scope
/// slot, so a connection endpoint naming a group id resolves to the same new
/// id the group itself received.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdRemapTable {
    map: HashMap<(EntityType, i64), i64>,
}

impl IdRemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mapping for `(entity, old_id)`, allocating a fresh id
    /// from `scope` on first sight. Memoized; idempotent within a pass.
    pub fn resolve(&mut self, scope: &mut IdScope, entity: EntityType, old_id: i64) -> i64 {
        let key = (entity.scope_slot(), old_id);
        if let Some(new_id) = self.map.get(&key) {
            return *new_id;
        }
        let new_id = scope.next(entity);
        self.map.insert(key, new_id);
        new_id
    }

    pub fn get(&self, entity: EntityType, old_id: i64) -> Option<i64> {
        self.map.get(&(entity.scope_slot(), old_id)).copied()
    }

    /// Records a known mapping without touching the scope. Existing entries
    /// win, so pinning the same sentinel twice is harmless.
    pub fn pin(&mut self, entity: EntityType, old_id: i64, new_id: i64) {
        self.map.entry((entity.scope_slot(), old_id)).or_insert(new_id);
    }

    /// Copy with document-private namespaces stripped; only entries safe to
    /// seed a sibling document's pass survive.
    pub fn filter_shared(&self) -> Self {
        let map = self
            .map
            .iter()
            .filter(|((entity, _), _)| entity.shared_across_documents())
            .map(|(key, new_id)| (*key, *new_id))
            .collect();
        Self { map }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityType, i64, i64)> + '_ {
        self.map
            .iter()
            .map(|((entity, old_id), new_id)| (*entity, *old_id, *new_id))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Nested remap state per embedded group, keyed by the **old** group id so
/// a group's sub-scope survives the outer renumbering and is found again by
/// sibling occurrences of the same group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupRemaps {
    map: HashMap<i64, TranslateState>,
}

impl GroupRemaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the state for `old_group_id`, handing out a fresh one on
    /// first encounter. Callers put the state back when the sub-pass ends.
    pub fn take(&mut self, old_group_id: i64) -> TranslateState {
        self.map.remove(&old_group_id).unwrap_or_default()
    }

    pub fn put(&mut self, old_group_id: i64, state: TranslateState) {
        self.map.insert(old_group_id, state);
    }

    pub fn get(&self, old_group_id: i64) -> Option<&TranslateState> {
        self.map.get(&old_group_id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Everything one document pass owns. Callers must not share one state
/// across concurrent unrelated translations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslateState {
    pub scope: IdScope,
    pub remap: IdRemapTable,
    pub group_remaps: GroupRemaps,
}

impl TranslateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds this pass from a finished sibling pass. Shared-namespace remap
    /// entries and group sub-states carry over (incoming entries win), and
    /// the scope floor is raised past every seeded id so later allocations
    /// in this pass cannot collide with seeded ones.
    pub fn seed_from(&mut self, sibling: &TranslateState) {
        for (entity, old_id, new_id) in sibling.remap.filter_shared().iter() {
            self.remap.map.insert((entity, old_id), new_id);
            self.scope.observe(entity, new_id);
        }
        for (old_group_id, state) in &sibling.group_remaps.map {
            self.group_remaps.map.insert(*old_group_id, state.clone());
        }
    }
}
