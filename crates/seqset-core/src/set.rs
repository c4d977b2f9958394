//! # Sequence Set
//!
//! A single hash set of `Sequence` values bound to one `SequenceHasher`.
//!
//! Lookups are two-stage:
//! 1. The bound hasher picks the bucket (`hash_sequence`).
//! 2. Candidates in that bucket are compared element-wise.
//!
//! A hash collision between different sequences is therefore harmless,
//! and a hash value is never treated as proof of equality.

use crate::hasher::SequenceHasher;
use crate::types::Sequence;
use hashbrown::HashTable;
use hashbrown::hash_table::Entry;

/// Stored entry: the cached bucket hash plus the owned sequence.
///
/// The hash is cached so the table can grow without calling
/// the external hasher again.
#[derive(Debug, Clone)]
struct Slot {
    hash: u64,
    sequence: Sequence,
}

/// An unordered collection of distinct sequences.
pub struct SequenceSet<H> {
    table: HashTable<Slot>,
    hasher: H,
}

impl<H: SequenceHasher> SequenceSet<H> {
    /// Create an empty set bound to `hasher`.
    #[must_use]
    pub fn new(hasher: H) -> Self {
        Self {
            table: HashTable::new(),
            hasher,
        }
    }

    /// Number of distinct sequences stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the set holds no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether a content-equal sequence is stored.
    #[must_use]
    pub fn contains(&self, data: &[u64]) -> bool {
        let hash = self.hasher.hash_sequence(data);
        self.table
            .find(hash, |slot| slot.sequence.as_slice() == data)
            .is_some()
    }

    /// Store a copy of `data`. Returns false if an equal sequence is present.
    ///
    /// Empty `data` is never stored and also answers false. Callers that
    /// need to tell the two apart validate with `Sequence::check` first.
    pub fn insert(&mut self, data: &[u64]) -> bool {
        let hash = self.hasher.hash_sequence(data);
        match self.table.entry(
            hash,
            |slot| slot.sequence.as_slice() == data,
            |slot| slot.hash,
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => match Sequence::new(data) {
                Ok(sequence) => {
                    vacant.insert(Slot { hash, sequence });
                    true
                }
                Err(_) => false,
            },
        }
    }

    /// Remove the sequence equal to `data`. Returns false if absent.
    pub fn remove(&mut self, data: &[u64]) -> bool {
        let hash = self.hasher.hash_sequence(data);
        match self
            .table
            .find_entry(hash, |slot| slot.sequence.as_slice() == data)
        {
            Ok(occupied) => {
                let _ = occupied.remove();
                true
            }
            Err(_) => false,
        }
    }

    /// Drop every stored sequence. The bound hasher is kept.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<H> std::fmt::Debug for SequenceSet<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceSet")
            .field("len", &self.table.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
