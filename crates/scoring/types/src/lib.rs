#![deny(unsafe_code)]
//! # attune-scoring-types
//!
//! Building blocks shared by the intent and logic scorers:
//!
//! - [`Tokens`]: lowercase word tokenizer
//! - [`MarkerTables`]: locale-specific marker word lists
//! - [`CalculationDetails`]: named intermediate factors for auditing
//! - [`ProcessingBudget`]: cap on how much input a scorer examines
//! - [`Advisory`]: non-fatal findings attached to a result

pub mod advisory;
pub mod budget;
pub mod details;
pub mod markers;
pub mod tokens;

pub use advisory::Advisory;
pub use budget::ProcessingBudget;
pub use details::CalculationDetails;
pub use markers::{Locale, MarkerTables};
pub use tokens::Tokens;

/// Lower bound used wherever a formula would otherwise divide by zero.
pub const EPSILON: f64 = 1e-9;

/// Clamp to the unit interval. NaN maps to 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
