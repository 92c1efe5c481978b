//! Day 2: Red-Nosed Reports.
//!
//! Each line is a report: a list of levels. A report is safe when the levels
//! are strictly monotonic and adjacent levels differ by one to three. The
//! Problem Dampener of part two tolerates one bad level per report.

use tracing::debug;

use crate::{Error, Result};

/// Solves both parts for the given puzzle input.
///
/// Returns `(safe_reports, safe_with_dampener)`.
pub fn solve(input: &str) -> Result<(usize, usize)> {
    let reports = parse_reports(input)?;
    let mut safe = 0;
    let mut damped = 0;
    for levels in &reports {
        if is_safe(levels) {
            safe += 1;
            damped += 1;
        } else if is_safe_with_dampener(levels) {
            damped += 1;
        }
    }
    Ok((safe, damped))
}

fn parse_reports(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| {
            let line = index + 1;
            text.split_whitespace()
                .map(|field| {
                    field.parse().map_err(|_| Error::InvalidValue {
                        line,
                        text: field.to_owned(),
                    })
                })
                .collect()
        })
        .collect()
}

/// Reports whether the levels are monotonic with steps of one to three.
///
/// The first pair fixes the direction for the whole report. Reports with
/// fewer than two levels have no pairs to violate the rules.
fn is_safe(levels: &[i64]) -> bool {
    let Some(pair) = levels.windows(2).next() else {
        return true;
    };
    let increasing = pair[1] > pair[0];
    levels.windows(2).all(|pair| {
        let diff = if increasing {
            pair[1] - pair[0]
        } else {
            pair[0] - pair[1]
        };
        (1..=3).contains(&diff)
    })
}

/// Retries [`is_safe`] with each level removed in turn.
fn is_safe_with_dampener(levels: &[i64]) -> bool {
    (0..levels.len()).any(|skip| {
        let damped: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter_map(|(index, &level)| (index != skip).then_some(level))
            .collect();
        if is_safe(&damped) {
            debug!(?levels, removed = skip, "report safe after dampening");
            true
        } else {
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

    #[test]
    fn example_counts_both_parts() {
        assert_eq!(solve(EXAMPLE), Ok((2, 4)));
    }

    #[test]
    fn short_reports_are_safe() {
        assert!(is_safe(&[]));
        assert!(is_safe(&[7]));
    }

    #[test]
    fn direction_comes_from_the_first_pair() {
        // Starts descending, so the later rise breaks it.
        assert!(!is_safe(&[5, 4, 5, 6]));
        assert!(is_safe(&[5, 4, 3, 1]));
    }

    #[test]
    fn equal_neighbours_are_unsafe() {
        assert!(!is_safe(&[4, 4, 5]));
    }

    #[test]
    fn wide_steps_are_unsafe() {
        assert!(!is_safe(&[1, 5, 6]));
    }

    #[test]
    fn dampener_can_remove_the_first_level() {
        // Only dropping the leading 3 leaves a valid ascent.
        assert!(!is_safe(&[3, 1, 2, 3]));
        assert!(is_safe_with_dampener(&[3, 1, 2, 3]));
    }

    #[test]
    fn dampener_cannot_fix_two_faults() {
        assert!(!is_safe_with_dampener(&[1, 2, 7, 8, 9]));
    }

    #[test]
    fn bad_level_is_reported_with_line_and_text() {
        assert_eq!(
            solve("1 2 3\n4 x 6\n"),
            Err(Error::InvalidValue {
                line: 2,
                text: "x".to_owned(),
            })
        );
    }
}
