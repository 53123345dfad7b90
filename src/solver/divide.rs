//! Divide-and-conquer maximum subarray solver.
//!
//! Splits the range at its midpoint, solves both halves recursively and
//! combines them with the best midpoint-crossing range. O(n log n) time,
//! O(log n) stack, no allocation.

use super::cross::cross_scan;
use super::{validate_range, Element, InvalidRange, Subarray};
use tracing::debug;

/// Maximum-sum contiguous range of the whole sequence.
pub fn max_subarray<T: Element>(sequence: &[T]) -> Result<Subarray<T>, InvalidRange> {
    max_subarray_sum(sequence, 0, sequence.len().saturating_sub(1))
}

/// Maximum-sum contiguous range within `[left, right]` (inclusive).
///
/// Ties are broken in favour of the left half, then the right half, then the
/// crossing range. The returned bounds always lie within `[left, right]`.
pub fn max_subarray_sum<T: Element>(
    sequence: &[T],
    left: usize,
    right: usize,
) -> Result<Subarray<T>, InvalidRange> {
    validate_range(sequence.len(), left, right)?;

    debug!(len = sequence.len(), left, right, "Solving maximum subarray");
    let best = solve(sequence, left, right);
    debug!(low = best.low, high = best.high, "Maximum subarray found");

    Ok(best)
}

fn solve<T: Element>(sequence: &[T], left: usize, right: usize) -> Subarray<T> {
    if left == right {
        return Subarray::new(left, right, sequence[right]);
    }

    let mid = left + (right - left) / 2;
    let left_best = solve(sequence, left, mid);
    let right_best = solve(sequence, mid + 1, right);
    let cross_best = cross_scan(sequence, left, mid, right);

    // `>=` keeps the earlier candidate on ties
    if left_best.sum >= right_best.sum && left_best.sum >= cross_best.sum {
        left_best
    } else if right_best.sum >= left_best.sum && right_best.sum >= cross_best.sum {
        right_best
    } else {
        cross_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::brute_force;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn range_sum(seq: &[i64], sub: &Subarray<i64>) -> i64 {
        sub.values(seq).iter().sum()
    }

    #[test]
    fn test_single_element() {
        assert_eq!(max_subarray(&[7]).unwrap(), Subarray::new(0, 0, 7));
        assert_eq!(max_subarray(&[-4]).unwrap(), Subarray::new(0, 0, -4));
    }

    #[test]
    fn test_all_negative_picks_least_negative() {
        let seq = [-5, -3, -8, -1, -9];
        assert_eq!(max_subarray(&seq).unwrap(), Subarray::new(3, 3, -1));
    }

    #[test]
    fn test_mixed_sequence_crosses_midpoint() {
        let seq = [-2, -5, 6, -2, -3, 1, 5, -6];
        assert_eq!(max_subarray(&seq).unwrap(), Subarray::new(2, 6, 7));
    }

    #[test]
    fn test_tied_maximum_prefers_right_half_over_cross() {
        // Left half best is 1, right half best is 3 (the lone 3 at index 5),
        // crossing range [1, 3] also sums to 3. Right wins the tie.
        let seq = [0, 1, 0, 2, -3, 3];
        let best = max_subarray(&seq).unwrap();
        assert_eq!(best, Subarray::new(5, 5, 3));
        assert_eq!(cross_scan(&seq, 0, 2, 5), Subarray::new(1, 3, 3));
    }

    #[test]
    fn test_left_half_wins_ties() {
        // Left and right halves both give 2; the left one is kept.
        let seq = [2, -5, 2];
        assert_eq!(max_subarray(&seq).unwrap(), Subarray::new(0, 0, 2));
    }

    #[test]
    fn test_right_half_beats_cross_on_tie() {
        // Cross (0, 1) also sums to 3.
        let seq = [0, 3];
        assert_eq!(max_subarray(&seq).unwrap(), Subarray::new(1, 1, 3));
    }

    #[test]
    fn test_length_two() {
        assert_eq!(max_subarray(&[3, -1]).unwrap(), Subarray::new(0, 0, 3));
        assert_eq!(max_subarray(&[-1, 3]).unwrap(), Subarray::new(1, 1, 3));
        assert_eq!(max_subarray(&[2, 2]).unwrap(), Subarray::new(0, 1, 4));
    }

    #[test]
    fn test_sub_range_bounds() {
        let seq = [10, -20, 3, 4, -1, 50];
        let best = max_subarray_sum(&seq, 1, 4).unwrap();
        assert_eq!(best, Subarray::new(2, 3, 7));

        let whole = max_subarray(&seq).unwrap();
        assert_eq!(whole, Subarray::new(2, 5, 56));
    }

    #[test]
    fn test_invalid_ranges() {
        let empty: [i64; 0] = [];
        assert_eq!(max_subarray(&empty), Err(InvalidRange::EmptySequence));
        assert_eq!(
            max_subarray_sum(&[1, 2, 3], 2, 1),
            Err(InvalidRange::Inverted { left: 2, right: 1 })
        );
        assert_eq!(
            max_subarray_sum(&[1, 2, 3], 0, 5),
            Err(InvalidRange::OutOfBounds { index: 5, len: 3 })
        );
    }

    #[test]
    fn test_idempotent() {
        let seq = [1, -3, 4, -1, 2, 1, -5, 4];
        let first = max_subarray(&seq).unwrap();
        let second = max_subarray(&seq).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Subarray::new(2, 5, 6));
    }

    #[test]
    fn test_float_and_decimal_elements() {
        let floats = [1.5, -0.5, 2.0];
        assert_eq!(max_subarray(&floats).unwrap(), Subarray::new(0, 2, 3.0));

        let decimals = [dec!(-1.1), dec!(2.2), dec!(-0.1), dec!(0.3)];
        let best = max_subarray(&decimals).unwrap();
        assert_eq!(best, Subarray::new(1, 3, dec!(2.4)));
        assert_eq!(best.values(&decimals).iter().copied().sum::<Decimal>(), best.sum);
    }

    #[test]
    fn test_matches_brute_force_exhaustively() {
        // Every sequence of length 1..=5 over the values -2..=2
        const DOMAIN: [i64; 5] = [-2, -1, 0, 1, 2];

        for len in 1..=5u32 {
            for code in 0..DOMAIN.len().pow(len) {
                let mut rest = code;
                let seq: Vec<i64> = (0..len)
                    .map(|_| {
                        let v = DOMAIN[rest % DOMAIN.len()];
                        rest /= DOMAIN.len();
                        v
                    })
                    .collect();

                let best = max_subarray(&seq).unwrap();
                let reference = brute_force(&seq).unwrap();

                assert!(best.low <= best.high && best.high < seq.len(), "{seq:?}");
                assert_eq!(range_sum(&seq, &best), best.sum, "{seq:?}");
                assert_eq!(best.sum, reference.sum, "{seq:?}");
            }
        }
    }
}
