//! Hash family abstraction for the filter.
//!
//! The filter needs `d` hash functions that behave independently over the
//! key space. They are modelled as one family indexed `1..=d`: the same
//! `(key, index)` pair always hashes to the same value, and distinct indices
//! approximate independent functions.

use std::hash::Hasher;

use siphasher::sip::SipHasher24;

/// A family of deterministic hash functions indexed from 1.
///
/// Implementations must be repeatable: `hash(key, i)` returns the same value
/// on every call for the same `(key, i)`. Cryptographic strength is not
/// required, only good distribution.
pub trait HashFamily {
    /// Hash `key` with the `index`-th function of the family (`index >= 1`).
    fn hash(&self, key: &[u8], index: u32) -> u64;
}

// Arbitrary fixed seeds; odd multipliers spread consecutive indices across
// the SipHash key space.
const SEED_K0: u64 = 0x42f8_6a9d_13c5_70e1;
const SEED_K1: u64 = 0x9b7c_0454_8d36_1f25;
const INDEX_SPREAD_K0: u64 = 0x9e37_79b9_7f4a_7c15;
const INDEX_SPREAD_K1: u64 = 0xc2b2_ae3d_27d4_eb4f;

/// Keyed SipHash-2-4 family.
///
/// Each index derives its own 128-bit SipHash key from the family seeds, so
/// the functions of the family are unrelated keyed hashes rather than the
/// same hash with a mixed-in counter.
#[derive(Clone, Debug)]
pub struct SipHashFamily {
    k0: u64,
    k1: u64,
}

impl SipHashFamily {
    /// Family with the built-in seeds; every filter using this constructor
    /// hashes identically, which keeps filters reproducible run to run.
    pub fn new() -> Self {
        Self::with_seeds(SEED_K0, SEED_K1)
    }

    /// Family with caller-chosen seeds.
    pub fn with_seeds(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }
}

impl Default for SipHashFamily {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFamily for SipHashFamily {
    fn hash(&self, key: &[u8], index: u32) -> u64 {
        let i = u64::from(index);
        let k0 = self.k0 ^ i.wrapping_mul(INDEX_SPREAD_K0);
        let k1 = self.k1 ^ i.wrapping_mul(INDEX_SPREAD_K1);

        let mut hasher = SipHasher24::new_with_keys(k0, k1);
        hasher.write(key);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let family = SipHashFamily::new();
        let key = b"amaranth";

        assert_eq!(
            family.hash(key, 1),
            family.hash(key, 1),
            "Same key and index must hash identically across calls"
        );
        assert_eq!(family.hash(key, 7), family.hash(key, 7));
    }

    #[test]
    fn test_different_indices_diverge() {
        let family = SipHashFamily::new();
        let key = b"amaranth";

        let h1 = family.hash(key, 1);
        let h2 = family.hash(key, 2);
        let h3 = family.hash(key, 3);

        assert_ne!(h1, h2, "Distinct indices must act as distinct functions");
        assert_ne!(h2, h3);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_different_keys_diverge() {
        let family = SipHashFamily::new();

        assert_ne!(family.hash(b"amaranth", 1), family.hash(b"begonia", 1));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = SipHashFamily::with_seeds(1, 2);
        let b = SipHashFamily::with_seeds(3, 4);

        assert_ne!(a.hash(b"amaranth", 1), b.hash(b"amaranth", 1));
    }

    #[test]
    fn test_rough_uniformity_over_buckets() {
        // Hash 1000 keys with 4 indices each into 10 buckets; every bucket
        // should land near the expected 400 entries.
        let family = SipHashFamily::new();
        let mut counts = [0usize; 10];

        for i in 0..1000 {
            let key = format!("key-{i}");
            for index in 1..=4 {
                let bucket = (family.hash(key.as_bytes(), index) % 10) as usize;
                counts[bucket] += 1;
            }
        }

        let expected = 400;
        for (bucket, count) in counts.iter().enumerate() {
            assert!(
                *count >= expected / 2 && *count <= expected * 3 / 2,
                "Bucket {} has {} entries, expected ~{}",
                bucket,
                count,
                expected
            );
        }
    }
}
