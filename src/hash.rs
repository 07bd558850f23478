/// Folds a 64-bit key into 32 bits by XOR-ing its high and low halves.
pub fn integer_hash(key: i64) -> u32 {
    let bits = key as u64;
    (bits ^ (bits >> 32)) as u32
}

/// Bucket a key falls into for a table of `bucket_count` slots.
pub fn bucket_index(key: i64, bucket_count: usize) -> usize {
    integer_hash(key) as usize % bucket_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_high_half_into_low_half() {
        assert_eq!(integer_hash(0), 0);
        assert_eq!(integer_hash(1), 1);
        assert_eq!(integer_hash(1 << 32), 1);
        assert_eq!(integer_hash((1 << 32) | 1), 0);
        assert_eq!(integer_hash(-1), 0);
        assert_eq!(integer_hash(i64::MIN), 0x8000_0000);
    }

    #[test]
    fn equal_keys_land_in_equal_buckets() {
        for key in [-42, 0, 7, 1 << 40, i64::MAX] {
            assert_eq!(bucket_index(key, 16), bucket_index(key, 16));
        }
    }

    #[test]
    fn modulo_matches_mask_for_powers_of_two() {
        for key in -300..300 {
            assert_eq!(
                bucket_index(key, 16),
                (integer_hash(key) & 15) as usize,
                "key {}",
                key
            );
        }
    }

    #[test]
    fn non_power_of_two_counts_stay_in_range() {
        for key in [i64::MIN, -1, 0, 999, 1000, 123_456_789, i64::MAX] {
            assert!(bucket_index(key, 1000) < 1000);
        }
    }
}
