use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["y2020"])]
pub struct Solver;

/// A boarding pass is a 10-bit number: `B`/`R` are ones, `F`/`L` zeros
pub fn seat_id(pass: &str) -> Option<u32> {
    if pass.len() != 10 {
        return None;
    }
    pass.bytes().try_fold(0, |id, b| match b {
        b'B' | b'R' => Some(id << 1 | 1),
        b'F' | b'L' => Some(id << 1),
        _ => None,
    })
}

impl AocParser for Solver {
    /// Seat ids, sorted
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ids = input
            .split_whitespace()
            .map(|pass| {
                seat_id(pass)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad boarding pass {:?}", pass)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        Ok(ids)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .last()
            .map(|id| id.to_string())
            .ok_or_else(|| SolveError::failed("no boarding passes"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .windows(2)
            .find(|w| w[1] == w[0] + 2)
            .map(|w| (w[0] + 1).to_string())
            .ok_or_else(|| SolveError::failed("no gap between seats"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn decode_passes() {
        assert_eq!(seat_id("FBFBBFFRLR"), Some(357));
        assert_eq!(seat_id("BFFFBBFRRR"), Some(567));
        assert_eq!(seat_id("FFFBBBFRRR"), Some(119));
        assert_eq!(seat_id("BBFFBBFRLL"), Some(820));
        assert_eq!(seat_id("BBFFBBFRLX"), None);
    }

    #[test]
    fn highest_and_missing() {
        let input = "FBFBBFFRLR\nBFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n";
        assert_eq!(solve_example::<Solver>(input, 1), "820");
        // 357 and 359 present, 358 missing
        assert_eq!(solve_example::<Solver>("FBFBBFFRLR\nFBFBBFFRRR\n", 2), "358");
    }
}
