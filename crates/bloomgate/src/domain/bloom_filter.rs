//! Core Bloom filter implementation.
//!
//! INVARIANTS:
//! - No false negatives: once a key is inserted, `contains` returns true for
//!   it for the lifetime of the filter.
//! - The live counter `distinct_bits_set` always equals the popcount of the
//!   bit array; it is bumped only on a genuine 0-to-1 transition.

use tracing::debug;

use super::bit_array::BitArray;
use super::builder::BloomFilterBuilder;
use super::hash_family::{HashFamily, SipHashFamily};
use super::parameters::{projected_rate, FilterParams};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing.
///
/// A fixed-length bit array plus a family of `d` hash functions. Inserting a
/// key sets the `d` bits its hashes select; a lookup reports "possibly
/// present" only when all `d` bits are set. False positives are possible,
/// false negatives are not.
///
/// The bit array is sized at construction from the expected key count, the
/// hash count and the target false-positive rate, and is never resized.
/// Deletion is unsupported; clearing a bit could create false negatives for
/// other keys.
pub struct BloomFilter<H: HashFamily = SipHashFamily> {
    /// Bit array of length N, fixed at construction
    bits: BitArray,
    /// Number of hash functions (d)
    hash_count: u32,
    /// Count of bits that have transitioned 0 -> 1; drives the estimator
    distinct_bits_set: usize,
    /// Hash family, exclusively owned by this filter
    family: H,
}

impl BloomFilter<SipHashFamily> {
    /// Create a filter sized for `expected_keys` insertions at
    /// `max_false_positive` target rate, hashed with the default SipHash
    /// family.
    ///
    /// # Errors
    /// Rejects `expected_keys == 0`, `hash_count == 0`, and target rates
    /// outside the open interval (0, 1).
    pub fn new(
        expected_keys: usize,
        hash_count: u32,
        max_false_positive: f64,
    ) -> Result<Self, FilterError> {
        Self::with_family(
            expected_keys,
            hash_count,
            max_false_positive,
            SipHashFamily::new(),
        )
    }

    /// Fluent construction path.
    pub fn builder() -> BloomFilterBuilder {
        BloomFilterBuilder::new()
    }
}

impl<H: HashFamily> BloomFilter<H> {
    /// Create a filter with a caller-supplied hash family.
    ///
    /// The family abstraction keeps the filter testable with deterministic
    /// stand-in hashes; production callers normally go through [`new`]
    /// or the builder.
    ///
    /// [`new`]: BloomFilter::new
    pub fn with_family(
        expected_keys: usize,
        hash_count: u32,
        max_false_positive: f64,
        family: H,
    ) -> Result<Self, FilterError> {
        let params = FilterParams::compute(expected_keys, hash_count, max_false_positive)?;

        debug!(
            bits = params.bits,
            hash_count = params.hash_count,
            expected_rate = params.expected_rate,
            "sized new bloom filter"
        );

        Ok(Self {
            bits: BitArray::new(params.bits),
            hash_count,
            distinct_bits_set: 0,
            family,
        })
    }

    /// Bit position for `key` under the `index`-th hash function.
    fn position(&self, key: &[u8], index: u32) -> usize {
        (self.family.hash(key, index) % self.bits.len() as u64) as usize
    }

    /// Insert a key.
    ///
    /// Always touches all `d` positions; skipping one would break the
    /// no-false-negative guarantee for this key. Cannot fail and returns
    /// nothing; an insert into a Bloom filter always succeeds.
    pub fn insert(&mut self, key: &[u8]) {
        for index in 1..=self.hash_count {
            let position = self.position(key, index);
            if !self.bits.get(position) {
                self.bits.set(position);
                self.distinct_bits_set += 1;
            }
        }
    }

    /// Test whether `key` may have been inserted.
    ///
    /// Returns false as soon as any probed bit is zero: that exact bit would
    /// have been set had the key ever been inserted. Returns true when all
    /// `d` bits are set, which may be a false positive caused by other keys'
    /// hashes. Never mutates the filter.
    pub fn contains(&self, key: &[u8]) -> bool {
        (1..=self.hash_count).all(|index| self.bits.get(self.position(key, index)))
    }

    /// Projected false-positive rate from the live bit population.
    ///
    /// Uses the actual fraction of bits still zero, not a theoretical
    /// post-insertion prediction, and is therefore a projection rather than
    /// a measured rate; the two converge as the idealized hashing model
    /// holds.
    pub fn false_positive_rate(&self) -> f64 {
        projected_rate(self.bits.len(), self.distinct_bits_set, self.hash_count)
    }

    /// Number of bits currently set, from the live counter in O(1).
    pub fn bits_set(&self) -> usize {
        self.distinct_bits_set
    }

    /// Length of the bit array (N).
    pub fn capacity_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions (d).
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }
}
