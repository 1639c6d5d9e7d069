use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["y2022", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let signal = input.trim();
        if signal.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(signal.as_bytes())
        } else {
            Err(ParseError::InvalidFormat("signal must be lowercase letters".into()))
        }
    }
}

/// Characters read when the last `len` were all different
pub fn marker_end(signal: &[u8], len: usize) -> Option<usize> {
    signal
        .windows(len)
        .position(|w| {
            w.iter()
                .fold(0u32, |set, b| set | 1 << (b - b'a'))
                .count_ones() as usize
                == len
        })
        .map(|i| i + len)
}

fn answer(signal: &[u8], len: usize) -> Result<String, SolveError> {
    marker_end(signal, len)
        .map(|n| n.to_string())
        .ok_or_else(|| SolveError::failed("no marker"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, 14)
    }
}
