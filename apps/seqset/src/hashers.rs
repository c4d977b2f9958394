//! # Hash Function Providers
//!
//! The registry core never hashes on its own; these are the functions the
//! binary offers to `create`. Each provider is a plain `HashFunction`.
//!
//! `none` is the absent provider: creating a set with it exercises the
//! sentinel path and yields identifier 0.

use crate::error::AppError;
use seqset_core::HashFunction;

/// A named hash function.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    pub name: &'static str,
    pub description: &'static str,
    pub function: Option<HashFunction>,
}

/// Every built-in provider, in listing order.
pub const PROVIDERS: &[Provider] = &[
    Provider {
        name: "fnv1a",
        description: "64-bit FNV-1a over the little-endian bytes",
        function: Some(fnv1a),
    },
    Provider {
        name: "blake3",
        description: "first 8 bytes of the BLAKE3 digest of the little-endian bytes",
        function: Some(blake3_prefix),
    },
    Provider {
        name: "sum",
        description: "wrapping sum of the elements (order-insensitive, collides often)",
        function: Some(sum),
    },
    Provider {
        name: "constant",
        description: "always 0: every sequence shares one bucket",
        function: Some(constant),
    },
    Provider {
        name: "none",
        description: "absent hash function: create returns 0",
        function: None,
    },
];

/// Resolve a provider by name.
///
/// Returns `Ok(None)` for `none` and `AppError::UnknownHash` for names
/// that match nothing.
pub fn lookup(name: &str) -> Result<Option<HashFunction>, AppError> {
    PROVIDERS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| p.function)
        .ok_or_else(|| AppError::UnknownHash(name.to_string()))
}

// =============================================================================
// FUNCTIONS
// =============================================================================

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(data: &[u64]) -> u64 {
    data.iter()
        .flat_map(|v| v.to_le_bytes())
        .fold(FNV_OFFSET, |h, byte| (h ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

fn blake3_prefix(data: &[u64]) -> u64 {
    let mut hasher = blake3::Hasher::new();
    for value in data {
        hasher.update(&value.to_le_bytes());
    }
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(prefix)
}

fn sum(data: &[u64]) -> u64 {
    data.iter().fold(0u64, |acc, v| acc.wrapping_add(*v))
}

fn constant(_: &[u64]) -> u64 {
    0
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        assert!(matches!(lookup("fnv1a"), Ok(Some(_))));
        assert!(matches!(lookup("BLAKE3"), Ok(Some(_))));
        assert!(matches!(lookup("none"), Ok(None)));
        assert!(matches!(lookup("md5"), Err(AppError::UnknownHash(name)) if name == "md5"));
    }

    #[test]
    fn fnv1a_matches_reference_for_zero() {
        // FNV-1a of eight zero bytes.
        let mut expected = FNV_OFFSET;
        for _ in 0..8 {
            expected = expected.wrapping_mul(FNV_PRIME);
        }
        assert_eq!(fnv1a(&[0]), expected);
    }

    #[test]
    fn order_sensitive_hashers_differ_on_reversal() {
        assert_ne!(fnv1a(&[7, 9]), fnv1a(&[9, 7]));
        assert_ne!(blake3_prefix(&[7, 9]), blake3_prefix(&[9, 7]));
        assert_eq!(sum(&[7, 9]), sum(&[9, 7]));
    }

    #[test]
    fn providers_are_deterministic() {
        for provider in PROVIDERS {
            if let Some(f) = provider.function {
                assert_eq!(f(&[1, 2, 3]), f(&[1, 2, 3]), "{}", provider.name);
            }
        }
    }

    #[test]
    fn names_are_unique() {
        let names: std::collections::BTreeSet<_> = PROVIDERS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PROVIDERS.len());
    }
}
