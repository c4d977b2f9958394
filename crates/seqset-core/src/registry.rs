//! # Set Registry
//!
//! The single owner of every `SequenceSet`. Callers address sets only
//! through the `SetId` returned by `create`.
//!
//! ## Two Surfaces
//!
//! - **Strict** (`try_*`): returns `Result<T, SeqSetError>` so callers can
//!   tell validation failures from legitimate negative answers.
//! - **Sentinel** (`create`, `delete`, `size`, `insert`, `remove`, `clear`,
//!   `contains`): never fails loudly. Errors become `SetId::INVALID`,
//!   `false`, `0` or a no-op, and are recorded in the audit trail.
//!
//! ## Identifier Allocation
//!
//! - Identifiers start at 1 and strictly increase.
//! - A failed create never advances the counter.
//! - Deleted identifiers are never reused.

use crate::audit::{self, Operation};
use crate::hasher::{HashFunction, SequenceHasher};
use crate::primitives::FIRST_SET_ID;
use crate::set::SequenceSet;
use crate::stats::RegistryStats;
use crate::types::{SeqSetError, Sequence, SetId};
use std::collections::BTreeMap;

/// Mapping from identifier to set, plus the identifier counter.
///
/// A fresh registry is empty with its counter at 0. Dropping the registry
/// releases every set and every stored sequence.
#[derive(Debug)]
pub struct SetRegistry<H = HashFunction> {
    /// Live sets: SetId -> SequenceSet
    sets: BTreeMap<SetId, SequenceSet<H>>,

    /// Last identifier handed out (the sentinel before the first create)
    last_id: u64,
}

impl<H> Default for SetRegistry<H> {
    fn default() -> Self {
        Self {
            sets: BTreeMap::new(),
            last_id: FIRST_SET_ID - 1,
        }
    }
}

impl<H: SequenceHasher> SetRegistry<H> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // STRICT SURFACE
    // =========================================================================

    /// Register a new empty set bound to `hasher`.
    pub fn try_create(&mut self, hasher: Option<H>) -> Result<SetId, SeqSetError> {
        let hasher = hasher.ok_or(SeqSetError::InvalidHashFunction)?;
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(SeqSetError::IdentifiersExhausted)?;

        self.last_id = id;
        let id = SetId(id);
        self.sets.insert(id, SequenceSet::new(hasher));
        Ok(id)
    }

    /// Remove a set and all of its sequences.
    pub fn try_delete(&mut self, id: SetId) -> Result<(), SeqSetError> {
        self.sets
            .remove(&id)
            .map(|_| ())
            .ok_or(SeqSetError::UnknownSet(id))
    }

    /// Number of sequences in a set.
    pub fn try_size(&self, id: SetId) -> Result<usize, SeqSetError> {
        self.get(id).map(SequenceSet::len)
    }

    /// Insert a copy of `data` into a set.
    ///
    /// Checks run in order: data present, data non-empty, set exists,
    /// sequence not already a member.
    pub fn try_insert(&mut self, id: SetId, data: Option<&[u64]>) -> Result<(), SeqSetError> {
        let data = Sequence::check(data)?;
        let set = self.get_mut(id)?;
        if set.insert(data) {
            Ok(())
        } else {
            Err(SeqSetError::DuplicateSequence(id))
        }
    }

    /// Remove the sequence equal to `data` from a set.
    pub fn try_remove(&mut self, id: SetId, data: Option<&[u64]>) -> Result<(), SeqSetError> {
        let data = Sequence::check(data)?;
        let set = self.get_mut(id)?;
        if set.remove(data) {
            Ok(())
        } else {
            Err(SeqSetError::NotFound(id))
        }
    }

    /// Empty a set, keeping it registered.
    pub fn try_clear(&mut self, id: SetId) -> Result<(), SeqSetError> {
        self.get_mut(id).map(SequenceSet::clear)
    }

    /// Membership test that reports invalid input and unknown sets as errors.
    ///
    /// `Ok(false)` means the set exists and the input was valid, but no
    /// content-equal sequence is stored.
    pub fn try_contains(&self, id: SetId, data: Option<&[u64]>) -> Result<bool, SeqSetError> {
        let data = Sequence::check(data)?;
        self.get(id).map(|set| set.contains(data))
    }

    // =========================================================================
    // SENTINEL SURFACE
    // =========================================================================

    /// Register a new set. Returns `SetId::INVALID` when `hasher` is absent.
    pub fn create(&mut self, hasher: Option<H>) -> SetId {
        match self.try_create(hasher) {
            Ok(id) => {
                audit::accepted(Operation::Create, id, None, "created");
                id
            }
            Err(e) => {
                audit::rejected(Operation::Create, SetId::INVALID, None, &e);
                SetId::INVALID
            }
        }
    }

    /// Delete a set. Unknown identifiers are ignored.
    pub fn delete(&mut self, id: SetId) {
        match self.try_delete(id) {
            Ok(()) => audit::accepted(Operation::Delete, id, None, "deleted"),
            Err(e) => audit::rejected(Operation::Delete, id, None, &e),
        }
    }

    /// Number of sequences in a set, or 0 if the set does not exist.
    pub fn size(&self, id: SetId) -> usize {
        match self.try_size(id) {
            Ok(size) => {
                audit::accepted(Operation::Size, id, None, if size == 0 { "empty" } else { "ok" });
                size
            }
            Err(e) => {
                audit::rejected(Operation::Size, id, None, &e);
                0
            }
        }
    }

    /// Insert a sequence. Returns whether the set changed.
    pub fn insert(&mut self, id: SetId, data: Option<&[u64]>) -> bool {
        let result = self.try_insert(id, data);
        Self::settle(Operation::Insert, id, data, result, "inserted")
    }

    /// Remove a sequence. Returns whether the set changed.
    pub fn remove(&mut self, id: SetId, data: Option<&[u64]>) -> bool {
        let result = self.try_remove(id, data);
        Self::settle(Operation::Remove, id, data, result, "removed")
    }

    /// Empty a set. Unknown identifiers are ignored.
    pub fn clear(&mut self, id: SetId) {
        match self.try_clear(id) {
            Ok(()) => audit::accepted(Operation::Clear, id, None, "cleared"),
            Err(e) => audit::rejected(Operation::Clear, id, None, &e),
        }
    }

    /// Whether the set holds a content-equal sequence.
    ///
    /// Invalid input and unknown sets both answer `false`.
    pub fn contains(&self, id: SetId, data: Option<&[u64]>) -> bool {
        match self.try_contains(id, data) {
            Ok(found) => {
                audit::accepted(
                    Operation::Contains,
                    id,
                    data,
                    if found { "member" } else { "not_member" },
                );
                found
            }
            Err(e) => {
                audit::rejected(Operation::Contains, id, data, &e);
                false
            }
        }
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    /// Number of live sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no set is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Whether `id` names a live set.
    #[must_use]
    pub fn exists(&self, id: SetId) -> bool {
        self.sets.contains_key(&id)
    }

    /// The identifier the next successful create will return.
    ///
    /// Returns `SetId::INVALID` once the identifier space is exhausted.
    #[must_use]
    pub fn next_id(&self) -> SetId {
        self.last_id.checked_add(1).map_or(SetId::INVALID, SetId)
    }

    /// Snapshot of registry-wide counters.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats::empty();
        stats.sets = self.sets.len();
        stats.next_id = self.next_id();
        for set in self.sets.values() {
            stats.sequences = stats.sequences.saturating_add(set.len());
            if set.is_empty() {
                stats.empty_sets += 1;
            }
        }
        stats
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn get(&self, id: SetId) -> Result<&SequenceSet<H>, SeqSetError> {
        self.sets.get(&id).ok_or(SeqSetError::UnknownSet(id))
    }

    fn get_mut(&mut self, id: SetId) -> Result<&mut SequenceSet<H>, SeqSetError> {
        self.sets.get_mut(&id).ok_or(SeqSetError::UnknownSet(id))
    }

    fn settle(
        op: Operation,
        id: SetId,
        data: Option<&[u64]>,
        result: Result<(), SeqSetError>,
        outcome: &str,
    ) -> bool {
        match result {
            Ok(()) => {
                audit::accepted(op, id, data, outcome);
                true
            }
            Err(e) => {
                audit::rejected(op, id, data, &e);
                false
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::BoxedHashFunction;

    fn fnv(data: &[u64]) -> u64 {
        data.iter().fold(0xcbf2_9ce4_8422_2325, |h, v| {
            (h ^ v).wrapping_mul(0x0000_0100_0000_01b3)
        })
    }

    fn registry() -> SetRegistry {
        SetRegistry::new()
    }

    #[test]
    fn fresh_registry_is_empty() {
        let reg = registry();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert_eq!(reg.next_id(), SetId(1));
    }

    #[test]
    fn create_allocates_from_one() {
        let mut reg = registry();
        assert_eq!(reg.create(Some(fnv)), SetId(1));
        assert_eq!(reg.create(Some(fnv)), SetId(2));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn create_without_hasher_returns_sentinel() {
        let mut reg = registry();
        assert_eq!(reg.create(None), SetId::INVALID);
        assert_eq!(reg.try_create(None), Err(SeqSetError::InvalidHashFunction));
        assert!(reg.is_empty());
        assert_eq!(reg.create(Some(fnv)), SetId(1));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut reg = registry();
        let a = reg.create(Some(fnv));
        reg.delete(a);
        let b = reg.create(Some(fnv));
        assert!(b > a);
        assert!(!reg.exists(a));
        assert!(reg.exists(b));
    }

    #[test]
    fn exhausted_counter_fails_create() {
        let mut reg = SetRegistry::<HashFunction> {
            sets: BTreeMap::new(),
            last_id: u64::MAX,
        };
        assert_eq!(reg.next_id(), SetId::INVALID);
        assert_eq!(
            reg.try_create(Some(fnv)),
            Err(SeqSetError::IdentifiersExhausted)
        );
        assert_eq!(reg.create(Some(fnv)), SetId::INVALID);
        assert_eq!(reg.last_id, u64::MAX);
    }

    #[test]
    fn insert_checks_run_in_order() {
        let mut reg = registry();
        let missing = SetId(5);

        // Invalid input is reported before the missing set.
        assert_eq!(reg.try_insert(missing, None), Err(SeqSetError::InvalidSequence));
        assert_eq!(
            reg.try_insert(missing, Some(&[])),
            Err(SeqSetError::InvalidSequence)
        );
        assert_eq!(
            reg.try_insert(missing, Some(&[1])),
            Err(SeqSetError::UnknownSet(missing))
        );

        let id = reg.create(Some(fnv));
        assert_eq!(reg.try_insert(id, Some(&[1])), Ok(()));
        assert_eq!(
            reg.try_insert(id, Some(&[1])),
            Err(SeqSetError::DuplicateSequence(id))
        );
    }

    #[test]
    fn remove_reports_not_found() {
        let mut reg = registry();
        let id = reg.create(Some(fnv));
        assert_eq!(reg.try_remove(id, Some(&[3])), Err(SeqSetError::NotFound(id)));
        assert!(reg.insert(id, Some(&[3])));
        assert_eq!(reg.try_remove(id, Some(&[3])), Ok(()));
        assert!(!reg.remove(id, Some(&[3])));
    }

    #[test]
    fn contains_collapses_errors_to_false() {
        let mut reg = registry();
        let id = reg.create(Some(fnv));
        reg.insert(id, Some(&[1, 2]));

        assert!(reg.contains(id, Some(&[1, 2])));
        assert!(!reg.contains(id, None));
        assert!(!reg.contains(id, Some(&[])));
        assert!(!reg.contains(SetId(99), Some(&[1, 2])));

        assert_eq!(reg.try_contains(id, None), Err(SeqSetError::InvalidSequence));
        assert_eq!(
            reg.try_contains(SetId(99), Some(&[1, 2])),
            Err(SeqSetError::UnknownSet(SetId(99)))
        );
        assert_eq!(reg.try_contains(id, Some(&[2, 1])), Ok(false));
    }

    #[test]
    fn size_of_unknown_set_is_zero() {
        let reg = registry();
        assert_eq!(reg.size(SetId(1)), 0);
        assert_eq!(reg.try_size(SetId(1)), Err(SeqSetError::UnknownSet(SetId(1))));
    }

    #[test]
    fn clear_keeps_set_registered() {
        let mut reg = registry();
        let id = reg.create(Some(fnv));
        reg.insert(id, Some(&[1]));
        reg.insert(id, Some(&[2]));

        reg.clear(id);
        assert_eq!(reg.size(id), 0);
        assert!(reg.exists(id));
        assert!(reg.insert(id, Some(&[1])));

        // Unknown set: no-op.
        reg.clear(SetId(42));
        assert_eq!(reg.try_clear(SetId(42)), Err(SeqSetError::UnknownSet(SetId(42))));
    }

    #[test]
    fn sets_are_independent() {
        let mut reg = registry();
        let a = reg.create(Some(fnv));
        let b = reg.create(Some(fnv));

        assert!(reg.insert(a, Some(&[1])));
        assert!(!reg.contains(b, Some(&[1])));
        assert!(reg.insert(b, Some(&[1])));

        reg.delete(a);
        assert!(reg.contains(b, Some(&[1])));
    }

    #[test]
    fn boxed_hashers_can_differ_per_set() {
        let mut reg: SetRegistry<BoxedHashFunction> = SetRegistry::new();
        let salt = 17u64;
        let plain: BoxedHashFunction = Box::new(fnv);
        let salted: BoxedHashFunction = Box::new(move |data: &[u64]| fnv(data) ^ salt);
        let a = reg.create(Some(plain));
        let b = reg.create(Some(salted));

        assert!(reg.insert(a, Some(&[4, 5])));
        assert!(reg.insert(b, Some(&[4, 5])));
        assert!(reg.contains(a, Some(&[4, 5])));
        assert!(reg.contains(b, Some(&[4, 5])));
    }

    #[test]
    fn stats_distinguish_empty_sets() {
        let mut reg = registry();
        let a = reg.create(Some(fnv));
        let _b = reg.create(Some(fnv));
        reg.insert(a, Some(&[1]));
        reg.insert(a, Some(&[2]));

        let stats = reg.stats();
        assert_eq!(stats.sets, 2);
        assert_eq!(stats.sequences, 2);
        assert_eq!(stats.empty_sets, 1);
        assert_eq!(stats.next_id, SetId(3));
    }
}
