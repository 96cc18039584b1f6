//! Error types for filter construction.

use thiserror::Error;

/// Errors raised while validating filter parameters.
///
/// Every variant is a construction-time rejection. Once a filter has been
/// built, `insert`, `contains`, `false_positive_rate` and `bits_set` are
/// total functions and cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("expected key count must be at least 1, got {count}")]
    InvalidKeyCount { count: usize },

    #[error("hash count must be at least 1, got {count}")]
    InvalidHashCount { count: u32 },

    #[error("false positive rate must lie strictly between 0 and 1, got {rate}")]
    InvalidFalsePositiveRate { rate: f64 },

    #[error("computed bit array length {bits} is not a usable size")]
    SizeOverflow { bits: f64 },
}
