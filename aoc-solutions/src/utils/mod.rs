//! Helpers shared between puzzle solvers

pub mod dp_cache;
pub mod geometry;
pub mod grid;
pub mod numbers;
pub mod progress;

use aoc_solver::ParseError;

/// Convert an `anyhow` parse failure (with its context chain) into a [`ParseError`]
pub fn invalid_format(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{:#}", err))
}

/// Parse `input` and solve one part, panicking on any error
#[cfg(test)]
pub(crate) fn solve_example<S: aoc_solver::Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).expect("example input parses");
    S::solve_part(&mut shared, part).expect("example input solves")
}
