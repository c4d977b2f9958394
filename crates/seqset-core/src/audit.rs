//! # Audit Trail
//!
//! Diagnostic record of every sentinel registry call.
//!
//! Each call emits one `tracing` event under the `seqset_core::audit`
//! target carrying the operation, the set identifier, the sequence length
//! (absent data has no length) and either an outcome or an error kind.
//! The trail only observes: nothing here can change a return value.
//!
//! With the `audit` feature disabled the hooks compile to empty functions
//! and `tracing` is not linked.

use crate::types::{SeqSetError, SetId};
use serde::{Deserialize, Serialize};

/// The registry operation a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Delete,
    Size,
    Insert,
    Remove,
    Clear,
    Contains,
}

impl Operation {
    /// Lowercase operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Size => "size",
            Self::Insert => "insert",
            Self::Remove => "remove",
            Self::Clear => "clear",
            Self::Contains => "contains",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// HOOKS
// =============================================================================

/// Record a call that took effect (or legitimately answered).
#[cfg(feature = "audit")]
pub(crate) fn accepted(op: Operation, set: SetId, data: Option<&[u64]>, outcome: &str) {
    tracing::debug!(
        target: crate::primitives::AUDIT_TARGET,
        op = op.as_str(),
        set = set.value(),
        len = data.map(<[u64]>::len),
        outcome,
        "{} on set {}: {}",
        op,
        set,
        outcome
    );
}

/// Record a call that was rejected.
#[cfg(feature = "audit")]
pub(crate) fn rejected(op: Operation, set: SetId, data: Option<&[u64]>, error: &SeqSetError) {
    tracing::debug!(
        target: crate::primitives::AUDIT_TARGET,
        op = op.as_str(),
        set = set.value(),
        len = data.map(<[u64]>::len),
        error = error.kind(),
        "{} on set {} rejected: {}",
        op,
        set,
        error
    );
}

#[cfg(not(feature = "audit"))]
#[inline(always)]
pub(crate) fn accepted(_op: Operation, _set: SetId, _data: Option<&[u64]>, _outcome: &str) {}

#[cfg(not(feature = "audit"))]
#[inline(always)]
pub(crate) fn rejected(_op: Operation, _set: SetId, _data: Option<&[u64]>, _error: &SeqSetError) {}
