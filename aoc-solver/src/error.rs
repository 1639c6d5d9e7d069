//! Error types for the solver library

use thiserror::Error;

/// Input that could not be turned into a puzzle's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Line or token does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle needs is absent (empty input, missing header)
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Failure answering one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// Part lies within the solver's range but has no answer
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0 or a part past the solver's last one
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Input led somewhere the puzzle promises it never goes
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Shorthand for a failure described by a message
    pub fn failed(message: impl Into<String>) -> Self {
        SolveError::SolveFailed(message.into().into())
    }
}

/// Anything that can go wrong between asking the registry and getting an answer
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn failed_keeps_message_as_source() {
        let err = SolveError::failed("no path through the valley");
        assert_eq!(err.to_string(), "Solve failed: no path through the valley");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no path through the valley"));
    }

    #[test]
    fn solver_error_wraps_both_stages() {
        let parse: SolverError = ParseError::MissingData("empty input".into()).into();
        assert_eq!(parse.to_string(), "Parse error: Missing data: empty input");
        let solve: SolverError = SolveError::PartOutOfRange(3).into();
        assert_eq!(solve.to_string(), "Solve error: Part 3 is out of range");
    }
}
