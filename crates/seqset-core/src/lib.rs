//! # seqset-core
//!
//! The set registry for seqset - THE LOGIC.
//!
//! A `SetRegistry` owns any number of independent hash sets. Each set holds
//! distinct, non-empty sequences of `u64` and is bound at creation to its
//! own caller-supplied hash function. Callers address sets only through the
//! `SetId` returned by `create`.
//!
//! ## Quick Start
//!
//! ```
//! use seqset_core::{SetId, SetRegistry};
//!
//! fn sum(data: &[u64]) -> u64 {
//!     data.iter().fold(0, |acc, v| acc.wrapping_add(*v))
//! }
//!
//! let mut registry: SetRegistry = SetRegistry::new();
//! let id = registry.create(Some(sum));
//! assert_eq!(id, SetId(1));
//!
//! assert!(registry.insert(id, Some(&[7, 9])));
//! assert!(registry.contains(id, Some(&[7, 9])));
//! assert!(!registry.contains(id, Some(&[9, 7])));
//! assert_eq!(registry.size(id), 1);
//! ```
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO I/O, NO network dependencies (pure Rust)
//! - Implements no hashing algorithm: hash functions are injected
//! - Never panics on caller input; the sentinel surface never fails loudly
//! - Audit events are observers only (`audit` feature, `tracing`)

// =============================================================================
// MODULES
// =============================================================================

pub mod audit;
pub mod hasher;
pub mod primitives;
pub mod registry;
pub mod set;
pub mod shared;
pub mod stats;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use audit::Operation;
pub use hasher::{BoxedHashFunction, HashFunction, SequenceHasher};
pub use registry::SetRegistry;
pub use set::SequenceSet;
pub use shared::SharedRegistry;
pub use stats::RegistryStats;
pub use types::{SeqSetError, Sequence, SetId};
