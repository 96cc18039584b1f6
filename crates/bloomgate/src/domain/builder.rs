//! Fluent construction for [`BloomFilter`].
//!
//! # Example
//!
//! ```
//! use bloomgate::BloomFilter;
//!
//! let filter = BloomFilter::builder()
//!     .expected_keys(100_000)
//!     .hash_count(4)
//!     .max_false_positive(0.05)
//!     .build()
//!     .expect("valid parameters");
//!
//! assert_eq!(filter.capacity_bits(), 624_700);
//! ```

use super::bloom_filter::BloomFilter;
use super::hash_family::{HashFamily, SipHashFamily};
use crate::error::FilterError;

const DEFAULT_HASH_COUNT: u32 = 4;
const DEFAULT_MAX_FALSE_POSITIVE: f64 = 0.01;

/// Builder for [`BloomFilter`] with validate-on-build semantics.
///
/// `expected_keys` has no default and must be provided; `hash_count` and
/// `max_false_positive` fall back to 4 and 0.01. All validation happens in
/// [`build`](Self::build), which returns the same [`FilterError`]s as the
/// direct constructors.
pub struct BloomFilterBuilder<H: HashFamily = SipHashFamily> {
    expected_keys: Option<usize>,
    hash_count: Option<u32>,
    max_false_positive: Option<f64>,
    family: H,
}

impl BloomFilterBuilder<SipHashFamily> {
    /// New builder using the default SipHash family.
    pub fn new() -> Self {
        Self {
            expected_keys: None,
            hash_count: None,
            max_false_positive: None,
            family: SipHashFamily::new(),
        }
    }
}

impl Default for BloomFilterBuilder<SipHashFamily> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HashFamily> BloomFilterBuilder<H> {
    /// Expected number of distinct keys to insert (required).
    pub fn expected_keys(mut self, count: usize) -> Self {
        self.expected_keys = Some(count);
        self
    }

    /// Number of hash functions per operation.
    pub fn hash_count(mut self, count: u32) -> Self {
        self.hash_count = Some(count);
        self
    }

    /// Target worst-case false-positive rate, strictly inside (0, 1).
    pub fn max_false_positive(mut self, rate: f64) -> Self {
        self.max_false_positive = Some(rate);
        self
    }

    /// Swap in a different hash family.
    pub fn hash_family<F: HashFamily>(self, family: F) -> BloomFilterBuilder<F> {
        BloomFilterBuilder {
            expected_keys: self.expected_keys,
            hash_count: self.hash_count,
            max_false_positive: self.max_false_positive,
            family,
        }
    }

    /// Build the filter, validating all parameters.
    pub fn build(self) -> Result<BloomFilter<H>, FilterError> {
        BloomFilter::with_family(
            self.expected_keys.unwrap_or(0),
            self.hash_count.unwrap_or(DEFAULT_HASH_COUNT),
            self.max_false_positive.unwrap_or(DEFAULT_MAX_FALSE_POSITIVE),
            self.family,
        )
    }
}
