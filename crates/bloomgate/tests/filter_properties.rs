//! Property tests for the filter's structural guarantees.

use bloomgate::BloomFilter;
use proptest::collection::vec;
use proptest::prelude::*;

fn keys_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    vec(vec(any::<u8>(), 0..32), 1..64)
}

proptest! {
    #[test]
    fn no_false_negatives(keys in keys_strategy()) {
        let mut filter = BloomFilter::new(keys.len(), 4, 0.05).unwrap();

        for key in &keys {
            filter.insert(key);
        }
        for key in &keys {
            prop_assert!(filter.contains(key));
        }
    }

    #[test]
    fn repeated_insertion_changes_nothing(keys in keys_strategy()) {
        let mut filter = BloomFilter::new(keys.len(), 4, 0.05).unwrap();

        for key in &keys {
            filter.insert(key);
        }
        let once = filter.bits_set();
        for key in &keys {
            filter.insert(key);
        }

        prop_assert_eq!(filter.bits_set(), once);
    }

    #[test]
    fn bit_count_is_monotonic_and_bounded(keys in keys_strategy()) {
        let mut filter = BloomFilter::new(keys.len(), 4, 0.05).unwrap();
        let capacity = filter.capacity_bits();
        let mut previous = 0;

        for key in &keys {
            filter.insert(key);
            let current = filter.bits_set();
            prop_assert!(current >= previous);
            prop_assert!(current <= capacity);
            previous = current;
        }
    }

    #[test]
    fn projection_stays_a_probability(keys in keys_strategy()) {
        let mut filter = BloomFilter::new(keys.len(), 4, 0.05).unwrap();

        for key in &keys {
            filter.insert(key);
            let rate = filter.false_positive_rate();
            prop_assert!((0.0..=1.0).contains(&rate));
        }
    }
}
