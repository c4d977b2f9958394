//! # Core Type Definitions
//!
//! This module contains the value types shared by every seqset component:
//! - Set identifiers (`SetId`)
//! - Stored keys (`Sequence`)
//! - Error types (`SeqSetError`)
//!
//! ## Equality Guarantees
//!
//! Two sequences are equal iff they have the same length and the same
//! element at every position. Order matters: `[7, 9] != [9, 7]`.

use crate::primitives::INVALID_SET_ID;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// SET IDENTIFIER
// =============================================================================

/// Identifier of a set inside a `SetRegistry`.
///
/// Identifiers are handed out in strictly increasing order starting at 1.
/// `SetId(0)` is never assigned; it is the sentinel returned by a failed create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetId(pub u64);

impl SetId {
    /// The reserved sentinel identifier.
    pub const INVALID: Self = Self(INVALID_SET_ID);

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether this identifier could name a real set.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != INVALID_SET_ID
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SEQUENCE
// =============================================================================

/// An immutable, non-empty, ordered list of `u64` values.
///
/// A `Sequence` owns its data. Sets store their own copy of every
/// inserted sequence, so the caller's buffer can be reused freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>")]
pub struct Sequence(Box<[u64]>);

impl Sequence {
    /// Copy `data` into a new sequence.
    ///
    /// Returns `SeqSetError::InvalidSequence` for an empty slice.
    pub fn new(data: &[u64]) -> Result<Self, SeqSetError> {
        Self::check(Some(data)).map(|data| Self(data.into()))
    }

    /// Validate raw caller input without copying it.
    ///
    /// Input is rejected when the data reference is absent (`None`) or
    /// when it has length zero. Both yield `SeqSetError::InvalidSequence`.
    pub fn check(data: Option<&[u64]>) -> Result<&[u64], SeqSetError> {
        match data {
            Some(data) if !data.is_empty() => Ok(data),
            _ => Err(SeqSetError::InvalidSequence),
        }
    }

    /// Borrow the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Number of elements. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<u64>> for Sequence {
    type Error = SeqSetError;

    fn try_from(data: Vec<u64>) -> Result<Self, Self::Error> {
        Self::check(Some(data.as_slice()))?;
        Ok(Self(data.into_boxed_slice()))
    }
}

impl AsRef<[u64]> for Sequence {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in a set registry operation.
///
/// Strict (`try_*`) operations return these directly. The sentinel
/// operations record them in the audit trail and collapse them into
/// `SetId::INVALID`, `false` or a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqSetError {
    /// Creation was requested without a hash function.
    #[error("Invalid hash function: none supplied")]
    InvalidHashFunction,

    /// The sequence data was absent or had length zero.
    #[error("Invalid sequence: data must be present and non-empty")]
    InvalidSequence,

    /// No live set has this identifier.
    #[error("Unknown set: {0}")]
    UnknownSet(SetId),

    /// The set already contains an equal sequence.
    #[error("Set {0} already contains the sequence")]
    DuplicateSequence(SetId),

    /// The set does not contain the sequence.
    #[error("Set {0} does not contain the sequence")]
    NotFound(SetId),

    /// Every `u64` identifier has been handed out.
    #[error("Set identifiers exhausted")]
    IdentifiersExhausted,
}

impl SeqSetError {
    /// Short machine-readable name, used as the `error` field of audit records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHashFunction => "invalid_hash_function",
            Self::InvalidSequence => "invalid_sequence",
            Self::UnknownSet(_) => "unknown_set",
            Self::DuplicateSequence(_) => "duplicate_sequence",
            Self::NotFound(_) => "not_found",
            Self::IdentifiersExhausted => "identifiers_exhausted",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_id_zero_is_invalid() {
        assert!(!SetId::INVALID.is_valid());
        assert!(SetId(1).is_valid());
        assert_eq!(SetId::INVALID.value(), 0);
    }

    #[test]
    fn sequence_rejects_empty_and_absent() {
        assert_eq!(Sequence::new(&[]), Err(SeqSetError::InvalidSequence));
        assert_eq!(Sequence::check(None), Err(SeqSetError::InvalidSequence));
        assert_eq!(Sequence::check(Some(&[])), Err(SeqSetError::InvalidSequence));
        assert_eq!(Sequence::check(Some(&[4])), Ok(&[4u64][..]));
    }

    #[test]
    fn sequence_equality_is_order_sensitive() {
        let a = Sequence::new(&[7, 9]).expect("valid");
        let b = Sequence::new(&[9, 7]).expect("valid");
        let c = Sequence::new(&[7, 9]).expect("valid");

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn sequence_equality_checks_length() {
        let short = Sequence::new(&[1, 2]).expect("valid");
        let long = Sequence::new(&[1, 2, 0]).expect("valid");
        assert_ne!(short, long);
    }

    #[test]
    fn sequence_is_an_independent_copy() {
        let mut buffer = vec![1, 2, 3];
        let seq = Sequence::new(&buffer).expect("valid");
        buffer[0] = 42;

        assert_eq!(seq.as_slice(), &[1, 2, 3]);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
    }

    #[test]
    fn sequence_deserialization_is_validated() {
        let seq: Sequence = serde_json::from_str("[7, 9]").expect("valid");
        assert_eq!(seq.as_slice(), &[7, 9]);
        assert_eq!(serde_json::to_string(&seq).expect("serialize"), "[7,9]");

        assert!(serde_json::from_str::<Sequence>("[]").is_err());
        assert_eq!(Sequence::try_from(Vec::new()), Err(SeqSetError::InvalidSequence));
    }

    #[test]
    fn sequence_display() {
        let seq = Sequence::new(&[7, 9]).expect("valid");
        assert_eq!(seq.to_string(), "[7, 9]");
    }

    #[test]
    fn error_kinds_are_distinct() {
        let kinds = [
            SeqSetError::InvalidHashFunction.kind(),
            SeqSetError::InvalidSequence.kind(),
            SeqSetError::UnknownSet(SetId(1)).kind(),
            SeqSetError::DuplicateSequence(SetId(1)).kind(),
            SeqSetError::NotFound(SetId(1)).kind(),
            SeqSetError::IdentifiersExhausted.kind(),
        ];
        let unique: std::collections::BTreeSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }

    #[test]
    fn not_found_message_is_worded_correctly() {
        let msg = SeqSetError::NotFound(SetId(3)).to_string();
        assert_eq!(msg, "Set 3 does not contain the sequence");
    }
}
