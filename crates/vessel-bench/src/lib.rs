//! Benchmark profiles and utilities for the Vessel sequence library.
//!
//! Provides pre-built, seed-stable input profiles shared by the
//! criterion benches:
//!
//! - [`shuffled_profile`]: a seeded permutation of `[0, n)`
//! - [`ascending_profile`]: already-sorted input (middle-pivot friendly)
//! - [`duplicate_profile`]: duplicate-heavy draws from a small domain

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vessel_test_utils::fixtures;

/// Fixed seed so every bench run sees identical data.
pub const BENCH_SEED: u64 = 42;

/// Small input size: 1K elements.
pub const SMALL: usize = 1_000;

/// Large input size: 10K elements.
pub const LARGE: usize = 10_000;

/// A seeded permutation of `[0, n)`.
pub fn shuffled_profile(n: usize) -> Vec<u32> {
    fixtures::shuffled(n, BENCH_SEED)
}

/// `[0, n)` already in ascending order.
pub fn ascending_profile(n: usize) -> Vec<u32> {
    fixtures::ascending(n)
}

/// `n` draws from a 16-value domain — many equal elements.
pub fn duplicate_profile(n: usize) -> Vec<u32> {
    fixtures::with_duplicates(n, 16, BENCH_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(shuffled_profile(SMALL), shuffled_profile(SMALL));
        assert_eq!(duplicate_profile(SMALL), duplicate_profile(SMALL));
    }

    #[test]
    fn profiles_have_the_requested_size() {
        assert_eq!(shuffled_profile(LARGE).len(), LARGE);
        assert_eq!(ascending_profile(SMALL).len(), SMALL);
        assert_eq!(duplicate_profile(SMALL).len(), SMALL);
    }
}
