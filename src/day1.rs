//! Day 1: Historian Hysteria.
//!
//! The input is two columns of location IDs. Part one pairs the columns
//! smallest-with-smallest and sums the distances between each pair. Part two
//! scores each left value by how often it appears in the right column.

use tracing::debug;

use crate::{Error, Result};

/// Solves both parts for the given puzzle input.
///
/// Returns `(total_distance, similarity_score)`.
pub fn solve(input: &str) -> Result<(i64, i64)> {
    let (mut left, mut right) = parse_columns(input)?;
    left.sort_unstable();
    right.sort_unstable();
    debug!(pairs = left.len(), "parsed location lists");
    Ok((total_distance(&left, &right), similarity_score(&left, &right)))
}

/// Splits the input into the two columns of location IDs.
///
/// Every non-blank line must hold exactly two integers separated by
/// whitespace.
fn parse_columns(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (index, text) in input.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        let line = index + 1;
        let mut fields = text.split_whitespace();
        let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(Error::ColumnCount {
                line,
                found: text.split_whitespace().count(),
            });
        };
        left.push(a.parse().map_err(|_| Error::InvalidValue {
            line,
            text: a.to_owned(),
        })?);
        right.push(b.parse().map_err(|_| Error::InvalidValue {
            line,
            text: b.to_owned(),
        })?);
    }
    Ok((left, right))
}

/// Sums the distance between each rank-matched pair of the sorted lists.
fn total_distance(left: &[i64], right: &[i64]) -> i64 {
    left.iter().zip(right).map(|(&l, &r)| (l - r).abs()).sum()
}

/// Sums each left value multiplied by its occurrence count on the right.
///
/// Both lists are sorted, so the right-hand cursor only ever moves forward:
/// it skips values smaller than the current left value, then the run of
/// equal values starts at the cursor.
fn similarity_score(left: &[i64], right: &[i64]) -> i64 {
    let mut score = 0;
    let mut cursor = 0;
    for &value in left {
        while right.get(cursor).is_some_and(|&r| r < value) {
            cursor += 1;
        }
        for _ in right[cursor..].iter().take_while(|&&r| r == value) {
            score += value;
        }
    }
    score
}
