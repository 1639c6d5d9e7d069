//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// One or more answers differ from the recorded ones
    #[error("{count} answer(s) did not match the recorded answers")]
    IncorrectAnswers { count: usize },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Reading a puzzle input failed
    #[error(transparent)]
    Input(#[from] InputError),

    /// Solver creation or execution failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening nested ones in order
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let mut errors = Vec::new();
        for err in [first, second] {
            match err.inner() {
                ExecutorError::Multiple(v) => errors.extend(v.iter().cloned()),
                _ => errors.push(err),
            }
        }
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Number of leaf errors carried
    pub fn count(&self) -> usize {
        match self.inner() {
            ExecutorError::Multiple(v) => v.iter().map(ArcExecutorError::count).sum(),
            _ => 1,
        }
    }
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the puzzle
    #[error("missing input {}", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(n: u8) -> ArcExecutorError {
        ExecutorError::ThreadPool(n.to_string()).into()
    }

    fn leaves(err: &ArcExecutorError) -> Vec<String> {
        match err.inner() {
            ExecutorError::Multiple(v) => v.iter().flat_map(leaves).collect(),
            other => vec![other.to_string()],
        }
    }

    #[test]
    fn combine_flattens_in_order() {
        let left = ArcExecutorError::combine(leaf(1), leaf(2));
        let right = ArcExecutorError::combine(leaf(3), leaf(4));
        let all = ArcExecutorError::combine(left, right);
        assert_eq!(all.count(), 4);
        let names = leaves(&all);
        assert_eq!(names.len(), 4);
        assert!(names[0].ends_with('1') && names[3].ends_with('4'));
        match all.inner() {
            ExecutorError::Multiple(v) => assert_eq!(v.len(), 4),
            _ => panic!("expected Multiple"),
        }
    }

    #[test]
    fn combine_opt_keeps_single() {
        let err = ArcExecutorError::combine_opt(None, leaf(7));
        assert_eq!(err.count(), 1);
        let err = ArcExecutorError::combine_opt(Some(err), leaf(8));
        assert_eq!(err.count(), 2);
    }

    #[test]
    fn missing_input_names_path() {
        let err = InputError::Missing {
            path: PathBuf::from("inputs/2021/day-03.txt"),
        };
        assert_eq!(err.to_string(), "missing input inputs/2021/day-03.txt");
    }
}
