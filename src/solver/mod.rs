//! Maximum contiguous subarray sum.
//!
//! This module provides:
//! - The divide-and-conquer solver (`max_subarray_sum`, `max_subarray`)
//! - The midpoint cross scan used by its combine step
//! - An O(n²) brute-force solver for cross-checking
//!
//! # Example
//!
//! ```rust
//! use max_subarray_sum::solver::max_subarray;
//!
//! let values = [-2, -5, 6, -2, -3, 1, 5, -6];
//! let best = max_subarray(&values).unwrap();
//! assert_eq!((best.low, best.high, best.sum), (2, 6, 7));
//! ```

mod brute;
mod cross;
mod divide;
mod error;

pub use brute::brute_force;
pub use cross::{cross_scan, scan_leftward, scan_rightward};
pub use divide::{max_subarray, max_subarray_sum};
pub use error::InvalidRange;

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Numeric value the solvers can sum and compare.
pub trait Element: Copy + PartialOrd + Add<Output = Self> {}

impl<T> Element for T where T: Copy + PartialOrd + Add<Output = T> {}

/// A contiguous sub-range `[low, high]` (inclusive) and its sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Subarray<T> {
    pub low: usize,
    pub high: usize,
    pub sum: T,
}

impl<T> Subarray<T> {
    pub fn new(low: usize, high: usize, sum: T) -> Self {
        Self { low, high, sum }
    }

    /// The covered values of `sequence`.
    ///
    /// Panics if the bounds do not fit `sequence`; only pass the sequence
    /// this result was computed from.
    pub fn values<'a>(&self, sequence: &'a [T]) -> &'a [T] {
        &sequence[self.low..=self.high]
    }
}

/// Check `(left, right)` against a sequence of length `len`.
pub(crate) fn validate_range(len: usize, left: usize, right: usize) -> Result<(), InvalidRange> {
    if len == 0 {
        return Err(InvalidRange::EmptySequence);
    }
    if left > right {
        return Err(InvalidRange::Inverted { left, right });
    }
    if right >= len {
        return Err(InvalidRange::OutOfBounds { index: right, len });
    }
    Ok(())
}
