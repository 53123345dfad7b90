//! Decimal sequence parsing and arithmetic helpers.

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse numbers separated by commas and/or whitespace.
///
/// A surrounding `[` `]` pair is accepted, so a report's `array -> [...]`
/// section can be fed back in. Empty tokens are skipped.
pub fn parse_sequence(text: &str) -> Result<Vec<Decimal>> {
    let trimmed = text.trim();
    let body = match (trimmed.strip_prefix('['), trimmed.strip_suffix(']')) {
        (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
        (None, None) => trimmed,
        _ => bail!("Unbalanced brackets in sequence"),
    };

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            Decimal::from_str(token)
                .with_context(|| format!("Invalid number {:?} at position {}", token, position))
        })
        .collect()
}

/// Sum of `values[low..=high]`.
pub fn sum_range(values: &[Decimal], low: usize, high: usize) -> Decimal {
    values[low..=high].iter().copied().sum()
}
