//! # Registry Primitives
//!
//! Fixed constants of the identifier scheme.
//!
//! These values are compiled into the binary and never change at runtime.

/// Raw identifier reserved as the failure sentinel.
///
/// - No set is ever registered under this value.
/// - `create` returns it when no hash function was supplied.
pub const INVALID_SET_ID: u64 = 0;

/// Raw identifier assigned to the first set of a fresh registry.
pub const FIRST_SET_ID: u64 = 1;

/// Audit trail target for `tracing` filters (`seqset_core::audit=debug`).
pub const AUDIT_TARGET: &str = "seqset_core::audit";
