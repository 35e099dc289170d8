//! # fp-summation
//!
//! Floating-point addition is not associative. This crate sums a fixed
//! multiset of `f32` values in many random orders and tabulates how often
//! each distinct total appears.
//!
//! ## Modules
//!
//! - [`dataset`] — Decimal and binary value sets with round exact sums
//! - [`random`] — Seeded RNG construction and Fisher-Yates shuffle
//! - [`summation`] — Left-to-right single-precision summation
//! - [`histogram`] — Frequency table keyed by exact `f32` value
//! - [`experiment`] — The shuffle-then-sum trial loop
//! - [`report`] — Histogram rendering
//! - [`error`] — Error type
//!
//! ## Design Philosophy
//!
//! - **Single precision throughout**: the accumulator is `f32`; a wider
//!   type would hide the effect being measured
//! - **Uniform permutations**: every ordering of the value set is equally
//!   likely in each trial
//! - **Property-based testing**: order independence of the binary dataset
//!   verified via proptest

pub mod dataset;
pub mod error;
pub mod experiment;
pub mod histogram;
pub mod random;
pub mod report;
pub mod summation;

pub use dataset::Variant;
pub use error::ExperimentError;
pub use experiment::{run, ExperimentConfig};
pub use histogram::FrequencyTable;
