//! Error type for the summation experiment.
//!
//! The computation itself cannot fail. The only failures are environmental:
//! the operating system refusing to hand out entropy for the generator seed,
//! or the histogram writer rejecting output.

use std::io;

/// Fatal conditions surfaced by the experiment.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// The OS entropy source could not seed the generator.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// Writing the histogram failed.
    #[error("failed to write histogram: {0}")]
    Output(#[from] io::Error),
}
