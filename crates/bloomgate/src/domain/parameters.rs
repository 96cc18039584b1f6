//! Filter sizing and false-positive math.
//!
//! Formulas, for n keys, d hash functions and target rate P:
//! - phi = 1 - P^(1/d)            -- fraction of bits left zero at capacity
//! - N   = ceil(d / (1 - phi^(1/n)))  -- minimum bits meeting the target
//! - rate = (1 - phi)^d           -- false-positive probability given phi
//!
//! Everything here is closed form; no search. Parameter validation happens
//! here, once, at construction time. Operations on a built filter never
//! re-validate.

use serde::Serialize;

use crate::error::FilterError;

/// Sizing result for a filter construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterParams {
    /// Number of bits in the filter (N)
    pub bits: usize,
    /// Number of hash functions (d)
    pub hash_count: u32,
    /// Expected false-positive rate once all n keys are inserted
    pub expected_rate: f64,
}

impl FilterParams {
    /// Validate inputs and compute the minimum bit count for the target rate.
    pub fn compute(
        expected_keys: usize,
        hash_count: u32,
        max_false_positive: f64,
    ) -> Result<Self, FilterError> {
        let bits = required_bits(expected_keys, hash_count, max_false_positive)?;
        Ok(Self {
            bits,
            hash_count,
            expected_rate: expected_rate_at_capacity(bits, expected_keys, hash_count),
        })
    }
}

/// Minimum bit-array length so that, under the independent-uniform-hashing
/// model, the expected false-positive rate after `expected_keys` insertions
/// stays at or below `max_false_positive`.
///
/// Rejects `expected_keys == 0`, `hash_count == 0` and rates outside the
/// open interval (0, 1); each would make the closed form meaningless (the
/// first two divide by zero in the exponents).
pub fn required_bits(
    expected_keys: usize,
    hash_count: u32,
    max_false_positive: f64,
) -> Result<usize, FilterError> {
    if expected_keys == 0 {
        return Err(FilterError::InvalidKeyCount {
            count: expected_keys,
        });
    }
    if hash_count == 0 {
        return Err(FilterError::InvalidHashCount { count: hash_count });
    }
    // The negated comparison also rejects NaN.
    if !(max_false_positive > 0.0 && max_false_positive < 1.0) {
        return Err(FilterError::InvalidFalsePositiveRate {
            rate: max_false_positive,
        });
    }

    let n = expected_keys as f64;
    let d = f64::from(hash_count);

    // Invert rate = (1 - phi)^d to get the zero-bit fraction the target
    // demands, then invert the per-insertion relation to get the bits.
    let phi = 1.0 - max_false_positive.powf(1.0 / d);
    let bits = (d / (1.0 - phi.powf(1.0 / n))).ceil();

    if !bits.is_finite() || bits < 1.0 || bits > usize::MAX as f64 {
        return Err(FilterError::SizeOverflow { bits });
    }
    Ok(bits as usize)
}

/// False-positive probability projected from a live bit population: the
/// chance that all `hash_count` probes of a never-inserted key land on bits
/// that are already 1.
pub fn projected_rate(bits: usize, bits_set: usize, hash_count: u32) -> f64 {
    let phi = (bits - bits_set) as f64 / bits as f64;
    (1.0 - phi).powf(f64::from(hash_count))
}

/// Expected false-positive rate of a `bits`-bit filter once `expected_keys`
/// keys have been inserted, from the exact zero-bit expectation
/// `(1 - 1/N)^(n*d)`.
pub fn expected_rate_at_capacity(bits: usize, expected_keys: usize, hash_count: u32) -> f64 {
    let m = bits as f64;
    let n = expected_keys as f64;
    let d = f64::from(hash_count);
    (1.0 - (1.0 - 1.0 / m).powf(n * d)).powf(d)
}
