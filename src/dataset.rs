//! Value sets whose exact mathematical sum is a round number.
//!
//! Two datasets are available:
//!
//! - **Decimal**: powers of ten from 10⁻³ to 10³. In principle
//!   10·10⁻³ + 9·10⁻² + 9·10⁻¹ + 9·10⁰ + 9·10¹ + 9·10² + 9·10³ = 10000,
//!   but none of the fractional terms is representable in binary, so the
//!   `f32` total depends on summation order.
//! - **Binary**: powers of two from 2⁻⁴ to 2³. Here
//!   8·2⁻⁴ + 8·2⁻³ + 8·2⁻² + 9·2⁻¹ + 8·2⁰ + 8·2¹ + 8·2² + 8·2³ = 128,
//!   and every partial sum is an exact multiple of 2⁻⁴ well inside the
//!   24-bit significand, so the total is exact for every order.

use std::fmt;

const DECIMAL_TUPLE: [f32; 7] = [0.001, 0.01, 0.1, 1.0, 10.0, 100.0, 1000.0];
const DECIMAL_REPEATS: usize = 9;
const DECIMAL_EXTRA: f32 = 0.001;

const BINARY_TUPLE: [f32; 8] = [0.0625, 0.125, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];
const BINARY_REPEATS: usize = 8;
const BINARY_EXTRA: f32 = 0.5;

/// Which value set the experiment sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Variant {
    /// Powers of ten; exact sum 10000.
    Decimal,
    /// Powers of two; exact sum 128. The control case.
    #[default]
    Binary,
}

impl Variant {
    /// Builds the value set in construction order: each tuple repeated,
    /// then the single extra element.
    ///
    /// # Examples
    /// ```
    /// use fp_summation::dataset::Variant;
    /// let v = Variant::Binary.values();
    /// assert_eq!(v.len(), 65);
    /// assert_eq!(v.iter().sum::<f32>(), 128.0);
    /// ```
    pub fn values(self) -> Vec<f32> {
        match self {
            Variant::Decimal => build(&DECIMAL_TUPLE, DECIMAL_REPEATS, DECIMAL_EXTRA),
            Variant::Binary => build(&BINARY_TUPLE, BINARY_REPEATS, BINARY_EXTRA),
        }
    }

    /// The mathematically exact sum of the value set.
    pub fn exact_sum(self) -> f32 {
        match self {
            Variant::Decimal => 10000.0,
            Variant::Binary => 128.0,
        }
    }

    /// Number of elements in the value set.
    pub fn element_count(self) -> usize {
        match self {
            Variant::Decimal => DECIMAL_TUPLE.len() * DECIMAL_REPEATS + 1,
            Variant::Binary => BINARY_TUPLE.len() * BINARY_REPEATS + 1,
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Decimal => "decimal",
            Variant::Binary => "binary",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn build(tuple: &[f32], repeats: usize, extra: f32) -> Vec<f32> {
    let mut values = Vec::with_capacity(tuple.len() * repeats + 1);
    for _ in 0..repeats {
        values.extend_from_slice(tuple);
    }
    values.push(extra);
    values
}
