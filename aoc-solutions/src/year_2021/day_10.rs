use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["y2021", "strings"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// First closing character that doesn't match
    Corrupted(u8),
    /// Closers needed to complete the line, innermost first
    Incomplete(Vec<u8>),
}

fn closer(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

fn check(line: &str) -> Check {
    let mut expected = Vec::new();
    for b in line.bytes() {
        if let Some(c) = closer(b) {
            expected.push(c);
        } else if expected.pop() != Some(b) {
            return Check::Corrupted(b);
        }
    }
    expected.reverse();
    Check::Incomplete(expected)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Check>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                if line.bytes().all(|b| b"()[]{}<>".contains(&b)) {
                    Ok(check(line))
                } else {
                    Err(ParseError::InvalidFormat(format!("bad chunk line {:?}", line)))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = shared
            .iter()
            .map(|c| match c {
                Check::Corrupted(b')') => 3,
                Check::Corrupted(b']') => 57,
                Check::Corrupted(b'}') => 1197,
                Check::Corrupted(b'>') => 25137,
                _ => 0,
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores: Vec<u64> = shared
            .iter()
            .filter_map(|c| match c {
                Check::Incomplete(rest) => Some(rest.iter().fold(0, |acc, b| {
                    acc * 5 + b")]}>".iter().position(|c| c == b).map_or(0, |i| i as u64 + 1)
                })),
                Check::Corrupted(_) => None,
            })
            .collect();
        if scores.is_empty() {
            return Err(SolveError::failed("no incomplete lines"));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    #[test]
    fn corrupted_lines() {
        assert_eq!(check("{([(<{}[<>[]}>{[]{[(<()>"), Check::Corrupted(b'}'));
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "26397");
    }

    #[test]
    fn completion_scores() {
        assert_eq!(
            check("[({(<(())[]>[[{[]{<()<>>"),
            Check::Incomplete(b"}}]])})]".to_vec())
        );
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "288957");
    }
}
