//! # Hash Function Capability
//!
//! Sets never hash on their own. Each set is bound at creation to a
//! caller-supplied `SequenceHasher` that maps the elements of a sequence
//! to a `u64` bucket hash.
//!
//! The registry assumes, but does not verify, that a hasher is
//! deterministic for equal input during the lifetime of its set. A poor or
//! constant hasher degrades performance only: equality is always decided by
//! comparing full contents.

/// Raw hash function shape: `(data, length) -> u64`, with the length
/// carried by the slice.
pub type HashFunction = fn(&[u64]) -> u64;

/// Heap-allocated hash function, for registries whose sets use closures
/// with captured state.
pub type BoxedHashFunction = Box<dyn Fn(&[u64]) -> u64 + Send + Sync>;

/// Capability to compute the bucket hash of a sequence.
///
/// Implemented for every `Fn(&[u64]) -> u64`, which covers plain
/// function pointers (`HashFunction`), closures and `BoxedHashFunction`.
pub trait SequenceHasher {
    /// Hash the given elements.
    fn hash_sequence(&self, data: &[u64]) -> u64;
}

impl<F> SequenceHasher for F
where
    F: Fn(&[u64]) -> u64 + ?Sized,
{
    #[inline]
    fn hash_sequence(&self, data: &[u64]) -> u64 {
        self(data)
    }
}
