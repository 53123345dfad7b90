//! Shared utilities.

pub mod decimal;

pub use decimal::{parse_sequence, sum_range};
