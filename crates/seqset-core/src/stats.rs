//! # Registry Statistics
//!
//! A point-in-time snapshot of registry-wide counters, produced by
//! `SetRegistry::stats`. Integer-only; computing it never mutates the registry.

use crate::types::SetId;
use serde::{Deserialize, Serialize};

/// Registry-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of live sets.
    pub sets: usize,
    /// Total sequences stored across all sets.
    pub sequences: usize,
    /// Live sets holding no sequences.
    pub empty_sets: usize,
    /// Identifier the next successful create will return.
    pub next_id: SetId,
}

impl RegistryStats {
    /// Stats of a fresh registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sets: 0,
            sequences: 0,
            empty_sets: 0,
            next_id: SetId(crate::primitives::FIRST_SET_ID),
        }
    }

    /// Number of sets currently holding at least one sequence.
    #[must_use]
    pub fn populated_sets(&self) -> usize {
        self.sets.saturating_sub(self.empty_sets)
    }
}
