//! Quadratic reference solver.

use super::{validate_range, Element, InvalidRange, Subarray};

/// Try every `(low, high)` pair and keep the first strictly larger sum.
///
/// Among equal sums the lexicographically smallest `(low, high)` wins, which
/// can differ from the divide-and-conquer tie-break; only the sums are
/// guaranteed to agree.
pub fn brute_force<T: Element>(sequence: &[T]) -> Result<Subarray<T>, InvalidRange> {
    validate_range(sequence.len(), 0, sequence.len().saturating_sub(1))?;

    let mut best = Subarray::new(0, 0, sequence[0]);
    for low in 0..sequence.len() {
        let mut running = sequence[low];
        if running > best.sum {
            best = Subarray::new(low, low, running);
        }
        for high in low + 1..sequence.len() {
            running = running + sequence[high];
            if running > best.sum {
                best = Subarray::new(low, high, running);
            }
        }
    }

    Ok(best)
}
