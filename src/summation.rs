//! Plain left-to-right summation in single precision.
//!
//! Deliberately uncompensated: every addition rounds to `f32`, which is the
//! effect the experiment measures. Widening the accumulator to `f64` would
//! hide the order dependence of the decimal dataset.

/// Sums `values` left to right into an `f32` accumulator starting at 0.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use fp_summation::summation::sequential_sum;
/// assert_eq!(sequential_sum(&[0.5, 0.25, 0.125]), 0.875);
/// assert_eq!(sequential_sum(&[]), 0.0);
/// ```
pub fn sequential_sum(values: &[f32]) -> f32 {
    let mut total = 0.0_f32;
    for &x in values {
        total += x;
    }
    total
}
