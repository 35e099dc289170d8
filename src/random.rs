//! Random number generation and shuffling.
//!
//! Provides seeded and entropy-seeded RNG construction plus the
//! Fisher-Yates shuffle that produces each trial's ordering.
//!
//! # Reproducibility
//!
//! Experiment runs draw their seed from the operating system via
//! [`create_entropy_rng`], so two runs differ in which orderings they see.
//! Tests use [`create_rng`] with a fixed seed; the underlying algorithm
//! (SmallRng) is deterministic for a given seed on the same platform.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::ExperimentError;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use fp_summation::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a `SmallRng` seeded once from the operating system's entropy
/// source.
///
/// # Errors
/// [`ExperimentError::Entropy`] if the OS cannot supply a seed.
pub fn create_entropy_rng() -> Result<SmallRng, ExperimentError> {
    SmallRng::try_from_os_rng().map_err(|e| ExperimentError::Entropy(e.to_string()))
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely, provided `rng` is uniform. `random_range` rejects
/// rather than reducing modulo, so no index is favoured.
///
/// # Algorithm
/// Modern variant due to Durstenfeld (1964), popularized by Knuth as
/// "Algorithm P". Iterates backwards, swapping each element with a
/// uniformly chosen earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use fp_summation::random::{create_rng, shuffle};
/// let mut v = vec![0.25_f32, 0.5, 1.0, 2.0];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// v.sort_by(f32::total_cmp);
/// assert_eq!(v, vec![0.25, 0.5, 1.0, 2.0]);
/// ```
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<u64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_entropy_rngs_differ() {
        // Two 256-bit OS seeds colliding is not a realistic outcome.
        let mut a = create_entropy_rng().unwrap();
        let mut b = create_entropy_rng().unwrap();
        let va: Vec<u64> = (0..4).map(|_| a.random()).collect();
        let vb: Vec<u64> = (0..4).map(|_| b.random()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut rng = create_rng(123);
        shuffle(&mut v, &mut rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut v: Vec<f32> = vec![];
        let mut rng = create_rng(0);
        shuffle(&mut v, &mut rng);
        assert!(v.is_empty());
    }

    #[test]
    fn test_shuffle_single() {
        let mut v = vec![42.0_f32];
        let mut rng = create_rng(0);
        shuffle(&mut v, &mut rng);
        assert_eq!(v, vec![42.0]);
    }

    #[test]
    fn test_shuffle_actually_shuffles() {
        // With 10 elements, probability of identity permutation is 1/10! ≈ 2.8e-7
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut v = original.clone();
        let mut rng = create_rng(42);
        shuffle(&mut v, &mut rng);
        assert_ne!(v, original, "shuffle should change order (probabilistic)");
    }

    #[test]
    fn test_shuffle_uniform_over_permutations() {
        // 3 elements -> 6 permutations, each expected 1/6 of the time.
        let n = 60_000;
        let mut counts = std::collections::HashMap::new();
        let mut rng = create_rng(7);
        for _ in 0..n {
            let mut v = [0u8, 1, 2];
            shuffle(&mut v, &mut rng);
            *counts.entry(v).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = n as f64 / 6.0;
        for (perm, &c) in &counts {
            let rel = (c as f64 - expected).abs() / expected;
            assert!(rel < 0.05, "permutation {perm:?} seen {c} times");
        }
    }

    #[test]
    fn test_first_position_uniform() {
        let n = 40_000;
        let mut counts = [0u32; 4];
        let mut rng = create_rng(99);
        for _ in 0..n {
            let mut v = [0usize, 1, 2, 3];
            shuffle(&mut v, &mut rng);
            counts[v[0]] += 1;
        }
        for (value, &c) in counts.iter().enumerate() {
            let ratio = c as f64 / n as f64;
            assert!(
                (ratio - 0.25).abs() < 0.02,
                "value {value} first with ratio {ratio}"
            );
        }
    }
}
