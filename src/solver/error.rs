use thiserror::Error;

/// Rejected solve request. Checked once, before any recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRange {
    #[error("sequence is empty")]
    EmptySequence,
    #[error("left bound {left} is greater than right bound {right}")]
    Inverted { left: usize, right: usize },
    #[error("index {index} is out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
