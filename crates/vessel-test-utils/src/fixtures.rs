//! Deterministic input generators for sort tests and benchmarks.
//!
//! All randomised fixtures are seeded ChaCha, so every test and bench
//! run sees identical data for a given seed.

use std::cmp::Ordering;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `[0, n)` in ascending order.
pub fn ascending(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// `[0, n)` in descending order.
pub fn descending(n: usize) -> Vec<u32> {
    (0..n as u32).rev().collect()
}

/// A seeded permutation of `[0, n)`.
pub fn shuffled(n: usize, seed: u64) -> Vec<u32> {
    let mut values = ascending(n);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    values
}

/// `n` seeded draws from `[0, distinct)` — duplicate-heavy when
/// `distinct` is small relative to `n`.
pub fn with_duplicates(n: usize, distinct: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..distinct)).collect()
}

/// Whether `values` is nondecreasing under `compare`.
pub fn is_sorted_by<E>(values: &[E], mut compare: impl FnMut(&E, &E) -> Ordering) -> bool {
    values.windows(2).all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_is_deterministic_per_seed() {
        assert_eq!(shuffled(100, 42), shuffled(100, 42));
        assert_ne!(shuffled(100, 42), shuffled(100, 43));
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let mut values = shuffled(100, 7);
        values.sort_unstable();
        assert_eq!(values, ascending(100));
    }

    #[test]
    fn is_sorted_by_accepts_equal_runs() {
        assert!(is_sorted_by(&[1, 1, 2], u32::cmp));
        assert!(!is_sorted_by(&[2, 1], u32::cmp));
    }
}
