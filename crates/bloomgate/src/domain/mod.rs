//! Domain layer - pure filter logic.
//!
//! This layer contains:
//! - The core Bloom filter implementation
//! - The fixed-length bit array it owns
//! - The hash family abstraction and its SipHash implementation
//! - Sizing and false-positive-rate math
//! - A fluent builder for filter construction
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bit_array;
pub mod bloom_filter;
pub mod builder;
pub mod hash_family;
pub mod parameters;

pub use bit_array::BitArray;
pub use bloom_filter::BloomFilter;
pub use builder::BloomFilterBuilder;
pub use hash_family::{HashFamily, SipHashFamily};
pub use parameters::{expected_rate_at_capacity, projected_rate, required_bits, FilterParams};
