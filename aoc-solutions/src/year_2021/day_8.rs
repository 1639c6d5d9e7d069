use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 8, tags = ["y2021", "deduction"])]
pub struct Solver;

/// Segment sets as bit masks, `a` is bit 0
type Pattern = u8;

#[derive(Debug)]
pub struct Display {
    patterns: [Pattern; 10],
    output: [Pattern; 4],
}

fn pattern(word: &str) -> anyhow::Result<Pattern> {
    word.bytes().try_fold(0, |set, b| match b {
        b'a'..=b'g' => Ok(set | 1 << (b - b'a')),
        _ => Err(anyhow!("bad segment {:?} in {:?}", b as char, word)),
    })
}

fn parse_display(line: &str) -> anyhow::Result<Display> {
    let (left, right) = line
        .split_once(" | ")
        .ok_or_else(|| anyhow!("missing '|' in {:?}", line))?;
    let patterns: Vec<Pattern> = left.split_whitespace().map(pattern).collect::<anyhow::Result<_>>()?;
    let output: Vec<Pattern> = right.split_whitespace().map(pattern).collect::<anyhow::Result<_>>()?;
    ensure!(patterns.len() == 10 && output.len() == 4, "expected 10 patterns and 4 outputs");
    let mut display = Display {
        patterns: [0; 10],
        output: [0; 4],
    };
    display.patterns.copy_from_slice(&patterns);
    display.output.copy_from_slice(&output);
    Ok(display)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Display>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_display)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

fn segments(p: Pattern) -> u32 {
    p.count_ones()
}

/// Work out which pattern is which digit from segment counts and overlaps
fn decode(display: &Display) -> Option<u32> {
    let with_len = |n: u32| display.patterns.iter().copied().filter(move |&p| segments(p) == n);
    let one = with_len(2).next()?;
    let four = with_len(4).next()?;
    let seven = with_len(3).next()?;
    let eight = with_len(7).next()?;
    let mut digits = [None; 10];
    digits[1] = Some(one);
    digits[4] = Some(four);
    digits[7] = Some(seven);
    digits[8] = Some(eight);
    for p in with_len(6) {
        let d = if p & four == four {
            9
        } else if p & one == one {
            0
        } else {
            6
        };
        digits[d] = Some(p);
    }
    for p in with_len(5) {
        let d = if p & one == one {
            3
        } else if segments(p & four) == 3 {
            5
        } else {
            2
        };
        digits[d] = Some(p);
    }
    display.output.iter().try_fold(0, |acc, &out| {
        let digit = digits.iter().position(|&d| d == Some(out))?;
        Some(acc * 10 + digit as u32)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let easy = shared
            .iter()
            .flat_map(|d| d.output)
            .filter(|&p| matches!(segments(p), 2 | 3 | 4 | 7))
            .count();
        Ok(easy.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for display in shared.iter() {
            let value = decode(display).ok_or_else(|| SolveError::failed("inconsistent wiring"))?;
            total += value as u64;
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf\n";

    #[test]
    fn decodes_output() {
        let displays = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(decode(&displays[0]), Some(5353));
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "5353");
    }

    #[test]
    fn counts_unique_lengths() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "0");
        let easy = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | ab dab eafb acedgfb\n";
        assert_eq!(solve_example::<Solver>(easy, 1), "4");
        assert_eq!(solve_example::<Solver>(easy, 2), "1748");
    }
}
