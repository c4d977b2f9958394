//! # Shared Registry
//!
//! A cloneable, thread-safe handle over one `SetRegistry`.
//!
//! Every call holds the registry lock for its whole duration, so:
//! - identifier allocation and map insertion in `create` are atomic
//!   with respect to concurrent `create`/`delete`;
//! - operations on the same set are serialized.

use crate::hasher::{HashFunction, SequenceHasher};
use crate::registry::SetRegistry;
use crate::stats::RegistryStats;
use crate::types::SetId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe handle to a registry. Clones share the same registry.
#[derive(Debug)]
pub struct SharedRegistry<H = HashFunction> {
    inner: Arc<Mutex<SetRegistry<H>>>,
}

impl<H> Clone for SharedRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H> Default for SharedRegistry<H> {
    fn default() -> Self {
        Self::from_registry(SetRegistry::default())
    }
}

impl<H> SharedRegistry<H> {
    /// Wrap an existing registry.
    #[must_use]
    pub fn from_registry(registry: SetRegistry<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}

impl<H: SequenceHasher> SharedRegistry<H> {
    /// Create a handle over an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the registry.
    ///
    /// Use this to group several operations atomically, or to reach the
    /// strict `try_*` surface.
    pub fn with<R>(&self, f: impl FnOnce(&mut SetRegistry<H>) -> R) -> R {
        let mut registry = self.inner.lock();
        f(&mut *registry)
    }

    /// Register a new set. See `SetRegistry::create`.
    pub fn create(&self, hasher: Option<H>) -> SetId {
        self.inner.lock().create(hasher)
    }

    /// Delete a set. Unknown identifiers are ignored.
    pub fn delete(&self, id: SetId) {
        self.inner.lock().delete(id);
    }

    /// Number of sequences in a set, or 0 if it does not exist.
    pub fn size(&self, id: SetId) -> usize {
        self.inner.lock().size(id)
    }

    /// Insert a sequence. Returns whether the set changed.
    pub fn insert(&self, id: SetId, data: Option<&[u64]>) -> bool {
        self.inner.lock().insert(id, data)
    }

    /// Remove a sequence. Returns whether the set changed.
    pub fn remove(&self, id: SetId, data: Option<&[u64]>) -> bool {
        self.inner.lock().remove(id, data)
    }

    /// Empty a set. Unknown identifiers are ignored.
    pub fn clear(&self, id: SetId) {
        self.inner.lock().clear(id);
    }

    /// Whether the set holds a content-equal sequence.
    pub fn contains(&self, id: SetId, data: Option<&[u64]>) -> bool {
        self.inner.lock().contains(id, data)
    }

    /// Snapshot of registry counters.
    pub fn stats(&self) -> RegistryStats {
        self.inner.lock().stats()
    }
}

// =============================================================================
// TESTS
// =============================================================================
