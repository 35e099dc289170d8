//! Frequency table of observed sums.
//!
//! Keys are `f32` values compared bit-for-bit, so two sums that differ in
//! the last ulp occupy separate buckets. The table is a `BTreeMap`, so
//! iteration is always in ascending numeric order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// An `f32` usable as an ordered map key.
///
/// Equality is bit equality and ordering is [`f32::total_cmp`]; the two
/// agree, so `Eq` and `Ord` are consistent. For the finite values the
/// experiment produces this is the usual numeric order.
#[derive(Debug, Clone, Copy)]
pub struct SumKey(pub f32);

impl PartialEq for SumKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for SumKey {}

impl PartialOrd for SumKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SumKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Occurrence counts of each distinct sum.
///
/// # Examples
/// ```
/// use fp_summation::histogram::FrequencyTable;
/// let mut table = FrequencyTable::new();
/// table.record(2.0);
/// table.record(1.0);
/// table.record(2.0);
/// assert_eq!(table.total(), 3);
/// assert_eq!(table.distinct(), 2);
/// assert_eq!(table.count(2.0), 2);
/// let keys: Vec<f32> = table.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<SumKey, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `sum` with count 1, or increments its existing count.
    pub fn record(&mut self, sum: f32) {
        *self.counts.entry(SumKey(sum)).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count recorded for exactly `sum` (0 if never seen).
    pub fn count(&self, sum: f32) -> u64 {
        self.counts.get(&SumKey(sum)).copied().unwrap_or(0)
    }

    /// Number of recorded observations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(sum, count)` pairs in ascending order of sum.
    pub fn iter(&self) -> impl Iterator<Item = (f32, u64)> + '_ {
        self.counts.iter().map(|(k, &c)| (k.0, c))
    }

    /// `(sum, count, percentage)` in ascending order of sum, with the
    /// percentage computed as `count * 100 / total`.
    pub fn entries(&self) -> impl Iterator<Item = (f32, u64, f64)> + '_ {
        let total = self.total;
        self.iter()
            .map(move |(sum, count)| (sum, count, percentage(count, total)))
    }

    /// Smallest observed sum.
    pub fn min_sum(&self) -> Option<f32> {
        self.counts.keys().next().map(|k| k.0)
    }

    /// Largest observed sum.
    pub fn max_sum(&self) -> Option<f32> {
        self.counts.keys().next_back().map(|k| k.0)
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (100 * count) as f64 / total as f64
}
