//! Advent of Code 2024 solvers for days 1 to 3.
//!
//! Days 1 and 2 are line-oriented list puzzles. Day 3 scans a corrupted
//! memory dump for `mul(a,b)`, `do()` and `don't()` instructions using a
//! small hand-rolled automaton (see [`engine`]) instead of a general
//! pattern engine.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod automaton;
pub mod day1;
pub mod day2;
pub mod day3;
pub mod engine;
pub mod token;

pub use self::{
    automaton::Phrase,
    day3::Scanner,
    engine::{Matcher, Step},
    token::{Token, classify},
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A line did not split into the two expected columns.
    #[error("line {line}: expected two values, found {found}")]
    ColumnCount { line: usize, found: usize },

    /// A field could not be parsed as an integer.
    #[error("line {line}: invalid value {text:?}")]
    InvalidValue { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;
