//! # Bloomgate
//!
//! Probabilistic set-membership testing with a classic Bloom filter: a
//! fixed-size bit array plus a family of independent hash functions. Useful
//! wherever an exact set is too large to store but an approximate membership
//! test is acceptable, such as pre-filtering lookups before an expensive
//! exact check.
//!
//! ## Properties
//!
//! - **No false negatives**: once a key is inserted, `contains` returns true
//!   for it, no matter how many other keys follow.
//! - **Bounded false positives**: the bit array is sized at construction so
//!   the expected false-positive rate after the declared number of inserts
//!   stays at or below the target.
//! - **Live projection**: `false_positive_rate` projects the current rate
//!   from the actual number of bits set, not from a theoretical prediction.
//! - **Fixed size, insert-only**: no resizing after construction and no
//!   deletion; removing a key could create false negatives for others.
//!
//! ## Usage
//!
//! ```
//! use bloomgate::BloomFilter;
//!
//! let mut filter = BloomFilter::new(10_000, 4, 0.01).expect("valid parameters");
//!
//! filter.insert(b"apple");
//! filter.insert(b"banana");
//!
//! assert!(filter.contains(b"apple"));      // definitely inserted
//! assert!(!filter.contains(b"cherry"));    // almost certainly absent
//!
//! println!("bits set: {}", filter.bits_set());
//! println!("projected rate: {:.4}", filter.false_positive_rate());
//! ```
//!
//! ## Layout
//!
//! - `domain/` - pure filter logic, no I/O and no async
//!   - `BloomFilter`: the filter itself
//!   - `BitArray`: fixed-length bit storage
//!   - `HashFamily` / `SipHashFamily`: indexed hash functions
//!   - sizing and estimator math in `parameters`
//!   - `BloomFilterBuilder`: fluent construction
//! - `error` - construction-time parameter errors
//! - `metrics` - operation counters for driver code

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{
    expected_rate_at_capacity, projected_rate, required_bits, BitArray, BloomFilter,
    BloomFilterBuilder, FilterParams, HashFamily, SipHashFamily,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsSnapshot};
