//! Histogram rendering.
//!
//! One line per distinct sum, ascending:
//!
//! ```text
//!  9999.99902343750000000000000000:  1.234000000 %
//! ```
//!
//! The sum is printed with 26 fractional digits in a 32-wide field, enough
//! to show the full decimal expansion of the `f32` value. The percentage
//! gets 9 fractional digits in a 12-wide field.

use std::io::{self, Write};

use crate::histogram::FrequencyTable;

/// Formats one histogram line, without the trailing newline.
///
/// # Examples
/// ```
/// use fp_summation::report::format_entry;
/// assert_eq!(
///     format_entry(128.0, 100.0),
///     "  128.00000000000000000000000000: 100.000000000 %"
/// );
/// ```
pub fn format_entry(sum: f32, percentage: f64) -> String {
    format!("{sum:32.26}: {percentage:12.9} %")
}

/// Writes every table entry to `out` in ascending order of sum.
///
/// Does not flush; buffered writers are flushed by the caller.
pub fn write_histogram<W: Write>(table: &FrequencyTable, out: &mut W) -> io::Result<()> {
    for (sum, _, percentage) in table.entries() {
        writeln!(out, "{}", format_entry(sum, percentage))?;
    }
    Ok(())
}
