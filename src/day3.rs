//! Day 3: Mull It Over.
//!
//! The corrupted memory is scanned byte by byte for `mul(a,b)`, `do()`, and
//! `don't()` instructions. Part one sums every product; part two only the
//! products found while multiplication is enabled.

use tracing::{debug, trace};

use crate::{
    automaton::Phrase,
    engine::{Matcher, Step},
    token::{Token, classify},
};

/// Streaming scanner over corrupted memory.
///
/// Feeds one byte at a time into a [`Matcher`] and reacts to the outcome:
/// digits accumulate into the pending operand fields, a comma switches to the
/// second field, and a completed phrase either adds a product to the running
/// totals or toggles the enabled flag. Multiplication starts enabled.
#[derive(Debug)]
pub struct Scanner {
    matcher: Matcher,
    first: u64,
    second: u64,
    after_comma: bool,
    enabled: bool,
    total: u64,
    enabled_total: u64,
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(),
            first: 0,
            second: 0,
            after_comma: false,
            enabled: true,
            total: 0,
            enabled_total: 0,
        }
    }

    /// Advances the scanner by one byte of memory.
    pub fn feed(&mut self, byte: u8) {
        let token = classify(byte);
        match self.matcher.accept(token) {
            Step::Partial => match token {
                Token::Digit => {
                    let field = if self.after_comma {
                        &mut self.second
                    } else {
                        &mut self.first
                    };
                    // Fields hold at most three digits, so this cannot
                    // overflow.
                    *field = *field * 10 + u64::from(byte - b'0');
                }
                Token::Comma => self.after_comma = true,
                _ => {}
            },
            Step::Complete(phrase) => {
                self.apply(phrase);
                self.clear();
            }
            Step::Rejected => {
                if self.first != 0 || self.second != 0 || self.after_comma {
                    trace!(
                        first = self.first,
                        second = self.second,
                        "abandoned a partial instruction"
                    );
                }
                self.clear();
            }
        }
    }

    fn apply(&mut self, phrase: Phrase) {
        match phrase {
            Phrase::Mul => {
                let product = self.first * self.second;
                debug!(
                    a = self.first,
                    b = self.second,
                    product,
                    enabled = self.enabled,
                    "mul"
                );
                self.total += product;
                if self.enabled {
                    self.enabled_total += product;
                }
            }
            Phrase::Do => {
                debug!("multiplication enabled");
                self.enabled = true;
            }
            Phrase::Dont => {
                debug!("multiplication disabled");
                self.enabled = false;
            }
        }
    }

    /// Discards the pending operand fields. The enabled flag and the totals
    /// survive across instructions.
    fn clear(&mut self) {
        self.first = 0;
        self.second = 0;
        self.after_comma = false;
    }

    /// Sum of every `mul` product seen so far.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of the `mul` products seen while multiplication was enabled.
    #[must_use]
    pub fn enabled_total(&self) -> u64 {
        self.enabled_total
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Solves both parts for the given memory dump.
///
/// Returns `(total, enabled_total)`.
#[must_use]
pub fn solve(memory: &str) -> (u64, u64) {
    let mut scanner = Scanner::new();
    for byte in memory.bytes() {
        scanner.feed(byte);
    }
    (scanner.total(), scanner.enabled_total())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_instruction_multiplies_its_operands() {
        assert_eq!(solve("mul(123,456)"), (56088, 56088));
    }

    #[test]
    fn toggles_gate_the_enabled_total_only() {
        assert_eq!(solve("don't()mul(2,2)do()mul(3,3)"), (13, 9));
    }

    #[test]
    fn abandoned_operands_do_not_leak_into_the_next_product() {
        // The first instruction dies at '!' with 12 already accumulated.
        assert_eq!(solve("mul(12,7!mul(3,4)"), (12, 12));
    }

    #[test]
    fn scanner_starts_enabled() {
        let scanner = Scanner::new();
        assert!(scanner.enabled);
    }

    #[test]
    fn do_and_dont_carry_no_operands() {
        assert_eq!(solve("do()don't()do()"), (0, 0));
    }

    #[test]
    fn disabled_products_still_count_towards_part_one() {
        assert_eq!(solve("don't()mul(4,5)"), (20, 0));
    }
}
