use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["y2023", "hash"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let steps: Vec<&str> = input
            .split(',')
            .map(|s| s.trim_matches(['\n', '\r']))
            .filter(|s| !s.is_empty())
            .collect();
        if steps.is_empty() {
            return Err(ParseError::MissingData("no initialization steps".into()));
        }
        Ok(steps)
    }
}

pub fn hash(text: &str) -> usize {
    text.bytes().fold(0, |h, b| (h + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Remove(&'a str),
    Insert(&'a str, u32),
}

impl<'a> Step<'a> {
    fn parse(text: &'a str) -> Option<Step<'a>> {
        if let Some(label) = text.strip_suffix('-') {
            return Some(Step::Remove(label));
        }
        let (label, focal) = text.split_once('=')?;
        Some(Step::Insert(label, focal.parse().ok()?))
    }
}

/// Run the HASHMAP procedure and return the focusing power
pub fn focusing_power(steps: &[&str]) -> Result<usize, SolveError> {
    let mut boxes: Vec<Vec<(&str, u32)>> = vec![Vec::new(); 256];
    for text in steps {
        match Step::parse(text).ok_or_else(|| SolveError::failed(format!("bad step {:?}", text)))? {
            Step::Remove(label) => boxes[hash(label)].retain(|&(l, _)| l != label),
            Step::Insert(label, focal) => {
                let lenses = &mut boxes[hash(label)];
                match lenses.iter_mut().find(|(l, _)| *l == label) {
                    Some(lens) => lens.1 = focal,
                    None => lenses.push((label, focal)),
                }
            }
        }
    }
    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal as usize)
        })
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|s| hash(s)).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(focusing_power(shared)?.to_string())
    }
}
