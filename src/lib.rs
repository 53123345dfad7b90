//! # Max Subarray Sum
//!
//! Divide-and-conquer search for the contiguous subarray with the largest
//! sum, in O(n log n) time.
//!
//! ## Architecture
//!
//! - `solver`: Recursive solver, midpoint cross scan, brute-force reference
//! - `report`: Text and JSON rendering of a result
//! - `config`: Configuration management and validation
//! - `utils`: Decimal sequence parsing

pub mod config;
pub mod report;
pub mod solver;
pub mod utils;

pub use config::Config;
pub use report::Report;
pub use solver::{max_subarray, max_subarray_sum, InvalidRange, Subarray};
