//! Fixed-length bit array backing the filter.

use bitvec::prelude::*;

/// A bit array whose length is fixed at construction.
///
/// Thin wrapper around [`BitVec`] exposing exactly the surface the filter
/// needs: indexed get/set, the length, and a popcount used by tests to
/// cross-check the filter's live counter. There is no clear operation; the
/// filter only ever drives bits from 0 to 1.
///
/// Indices must satisfy `index < len()`. The filter reduces every hash
/// modulo the length before touching a bit, so an out-of-range access here
/// is a programming error and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    bits: BitVec<u8, Lsb0>,
}

impl BitArray {
    /// Create an array of `len` zero bits.
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    /// Number of bits in the array.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the array holds no bits at all.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Read the bit at `index`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Set the bit at `index` to 1.
    pub fn set(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Count of 1-bits, by scanning the storage.
    ///
    /// O(len/8); diagnostic paths should prefer the filter's O(1) counter.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_array_is_all_zero() {
        let bits = BitArray::new(128);

        assert_eq!(bits.len(), 128);
        assert_eq!(bits.count_ones(), 0, "Fresh array must have no bits set");
        assert!(!bits.get(0));
        assert!(!bits.get(127));
    }

    #[test]
    fn test_set_and_get() {
        let mut bits = BitArray::new(64);

        bits.set(0);
        bits.set(63);
        bits.set(17);

        assert!(bits.get(0));
        assert!(bits.get(17));
        assert!(bits.get(63));
        assert!(!bits.get(1), "Untouched bits must stay zero");
        assert_eq!(bits.count_ones(), 3);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut bits = BitArray::new(8);

        bits.set(3);
        bits.set(3);

        assert!(bits.get(3));
        assert_eq!(bits.count_ones(), 1, "Re-setting a bit must not add ones");
    }

    #[test]
    fn test_length_not_multiple_of_storage_word() {
        // Lengths that do not fill the final byte must still index correctly.
        let mut bits = BitArray::new(13);

        bits.set(12);

        assert_eq!(bits.len(), 13);
        assert!(bits.get(12));
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_access_panics() {
        let bits = BitArray::new(16);
        let _ = bits.get(16);
    }
}
