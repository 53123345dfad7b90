//! Best sum of a range that crosses a midpoint.
//!
//! The range must contain both `mid` and `mid + 1`, so it is the best run
//! ending at `mid` (grown leftward) joined to the best run starting at
//! `mid + 1` (grown rightward). Each directional scan is linear in its half.

use super::{Element, Subarray};

/// Best crossing range within `[left, right]` split at `mid`.
///
/// Requires `left <= mid < right < sequence.len()`. The solver only calls
/// this on ranges it has already validated.
pub fn cross_scan<T: Element>(sequence: &[T], left: usize, mid: usize, right: usize) -> Subarray<T> {
    let (low, left_sum) = scan_leftward(sequence, left, mid);
    let (high, right_sum) = scan_rightward(sequence, mid + 1, right);
    Subarray::new(low, high, left_sum + right_sum)
}

/// Best run ending at `mid`, extended down towards `left`.
///
/// Returns `(start index, run sum)`. Only a strictly larger sum moves the
/// start, so on ties the index nearer `mid` is kept.
pub fn scan_leftward<T: Element>(sequence: &[T], left: usize, mid: usize) -> (usize, T) {
    best_run(sequence, mid, (left..mid).rev())
}

/// Best run starting at `start`, extended up towards `right`.
///
/// Returns `(end index, run sum)` with the same strict tie-break as
/// [`scan_leftward`].
pub fn scan_rightward<T: Element>(sequence: &[T], start: usize, right: usize) -> (usize, T) {
    best_run(sequence, start, start + 1..=right)
}

/// Accumulate from `seed` through `rest`, tracking the best running total.
///
/// The seed element is always taken, so an all-negative half still reports
/// a valid index with its true (negative) sum.
fn best_run<T, I>(sequence: &[T], seed: usize, rest: I) -> (usize, T)
where
    T: Element,
    I: Iterator<Item = usize>,
{
    let mut running = sequence[seed];
    let mut best = (seed, running);

    for i in rest {
        running = running + sequence[i];
        if running > best.1 {
            best = (i, running);
        }
    }

    best
}
