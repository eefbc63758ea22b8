//! Stable string hashing for per-name determinism.
//!
//! `std::collections::hash_map::DefaultHasher` is randomly keyed per process,
//! so seeds derived from names go through 64-bit FNV-1a instead.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Modulus for per-target seeds and run ids.
pub const TARGET_SEED_MODULUS: u64 = 1_000_000;

/// 64-bit FNV-1a over the UTF-8 bytes of `input`.
pub const fn stable_hash(input: &str) -> u64 {
    let bytes = input.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Hash `input` and reduce it into `[0, modulus)`.
pub fn seed_for(input: &str, modulus: u64) -> u64 {
    stable_hash(input) % modulus.max(1)
}

/// Seed (and displayed run id) for a target label.
pub fn target_seed(label: &str) -> u64 {
    seed_for(label, TARGET_SEED_MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_vectors() {
        assert_eq!(stable_hash(""), 0xcbf29ce484222325);
        assert_eq!(stable_hash("a"), 0xaf63dc4c8601ec8c);
        assert_eq!(stable_hash("foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn test_seed_within_modulus() {
        for name in ["Mol-001", "Mol-002", "EGFR (non-small cell lung cancer)"] {
            assert!(seed_for(name, 10_000_000) < 10_000_000);
            assert!(target_seed(name) < TARGET_SEED_MODULUS);
        }
    }

    #[test]
    fn test_zero_modulus_does_not_panic() {
        assert_eq!(seed_for("anything", 0), 0);
    }
}
