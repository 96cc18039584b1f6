//! Operation counters for filter workloads.
//!
//! Thread-safe counters a driver can wrap around its insert and lookup
//! loops. The filter itself stays metrics-free; recording is the caller's
//! choice.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Metrics collector for Bloom filter workloads.
#[derive(Default)]
pub struct Metrics {
    /// Total filters created
    filters_created: AtomicU64,
    /// Total keys inserted across all filters
    keys_inserted: AtomicU64,
    /// Total lookups performed
    lookups: AtomicU64,
    /// Lookups that reported "possibly present"
    lookups_positive: AtomicU64,
    /// Total bytes allocated for filter bit arrays
    bytes_allocated: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a filter creation of `capacity_bits` bits.
    pub fn record_filter_created(&self, capacity_bits: usize) {
        self.filters_created.fetch_add(1, Ordering::Relaxed);
        self.bytes_allocated
            .fetch_add((capacity_bits as u64).div_ceil(8), Ordering::Relaxed);
    }

    /// Record a key insertion.
    pub fn record_insert(&self) {
        self.keys_inserted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup and its outcome.
    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Consistent point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_created: self.filters_created.load(Ordering::Relaxed),
            keys_inserted: self.keys_inserted.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            bytes_allocated: self.bytes_allocated.load(Ordering::Relaxed),
        }
    }
}

/// Plain-data snapshot of [`Metrics`] counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub filters_created: u64,
    pub keys_inserted: u64,
    pub lookups: u64,
    pub lookups_positive: u64,
    pub bytes_allocated: u64,
}
