//! Human-readable and JSON rendering of a solved subarray.

use crate::solver::Subarray;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A solved subarray together with the sequence it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, T> {
    sequence: &'a [T],
    result: Subarray<T>,
}

impl<'a, T: Copy> Report<'a, T> {
    /// Bind a result to its sequence.
    ///
    /// Panics if the result's bounds do not fit the sequence.
    pub fn new(sequence: &'a [T], result: Subarray<T>) -> Self {
        assert!(
            result.low <= result.high && result.high < sequence.len(),
            "subarray ({}, {}) does not fit a sequence of length {}",
            result.low,
            result.high,
            sequence.len()
        );
        Self { sequence, result }
    }

    pub fn result(&self) -> Subarray<T> {
        self.result
    }

    pub fn values(&self) -> &'a [T] {
        self.result.values(self.sequence)
    }
}

/// `(low, high) | array -> [v, ...] | sum -> s`
impl<T: Copy + fmt::Display> fmt::Display for Report<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) | array -> [", self.result.low, self.result.high)?;
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "] | sum -> {}", self.result.sum)
    }
}

impl<T: Copy + Serialize> Serialize for Report<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Report", 4)?;
        state.serialize_field("low", &self.result.low)?;
        state.serialize_field("high", &self.result.high)?;
        state.serialize_field("values", self.values())?;
        state.serialize_field("sum", &self.result.sum)?;
        state.end()
    }
}
