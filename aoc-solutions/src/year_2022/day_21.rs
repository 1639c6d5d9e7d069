use std::collections::HashMap;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 21, tags = ["y2022", "expression"])]
pub struct Solver;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy)]
pub enum Job<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

pub type Troop<'a> = HashMap<&'a str, Job<'a>>;

impl AocParser for Solver {
    type SharedData<'a> = Troop<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(parse_monkey)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

fn parse_monkey(line: &str) -> anyhow::Result<(&str, Job<'_>)> {
    let (name, job) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ':' in {:?}", line))?;
    let job = match job.split_whitespace().collect::<Vec<_>>().as_slice() {
        [n] => Job::Number(n.parse().with_context(|| format!("number for {}", name))?),
        [a, op, b] => {
            let op = match *op {
                "+" => Op::Add,
                "-" => Op::Sub,
                "*" => Op::Mul,
                "/" => Op::Div,
                other => bail!("unknown operator {:?}", other),
            };
            Job::Math(*a, op, *b)
        }
        _ => bail!("bad job {:?}", job),
    };
    Ok((name, job))
}

fn job<'a>(troop: &Troop<'a>, name: &str) -> Result<Job<'a>, SolveError> {
    troop
        .get(name)
        .copied()
        .ok_or_else(|| SolveError::failed(format!("no monkey named {}", name)))
}

/// What monkey `name` yells
pub fn yell(troop: &Troop<'_>, name: &str) -> Result<i64, SolveError> {
    match job(troop, name)? {
        Job::Number(n) => Ok(n),
        Job::Math(a, op, b) => {
            let (a, b) = (yell(troop, a)?, yell(troop, b)?);
            Ok(match op {
                Op::Add => a + b,
                Op::Sub => a - b,
                Op::Mul => a * b,
                Op::Div if b == 0 => return Err(SolveError::failed("division by zero")),
                Op::Div => a / b,
            })
        }
    }
}

fn depends_on_human(troop: &Troop<'_>, name: &str) -> bool {
    name == HUMAN
        || matches!(troop.get(name), Some(Job::Math(a, _, b))
            if depends_on_human(troop, a) || depends_on_human(troop, b))
}

/// The number `humn` must yell for monkey `name` to yell `target`
fn solve_for_human(troop: &Troop<'_>, name: &str, target: i64) -> Result<i64, SolveError> {
    if name == HUMAN {
        return Ok(target);
    }
    let Job::Math(a, op, b) = job(troop, name)? else {
        return Err(SolveError::failed(format!("{} yells a constant", name)));
    };
    if depends_on_human(troop, a) {
        let known = yell(troop, b)?;
        let needed = match op {
            Op::Add => target - known,
            Op::Sub => target + known,
            Op::Mul => target / known,
            Op::Div => target * known,
        };
        solve_for_human(troop, a, needed)
    } else {
        let known = yell(troop, a)?;
        let needed = match op {
            Op::Add => target - known,
            Op::Sub => known - target,
            Op::Mul => target / known,
            Op::Div => known / target,
        };
        solve_for_human(troop, b, needed)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(yell(shared, ROOT)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Job::Math(a, _, b) = job(shared, ROOT)? else {
            return Err(SolveError::failed("root yells a constant"));
        };
        let answer = if depends_on_human(shared, a) {
            solve_for_human(shared, a, yell(shared, b)?)?
        } else {
            solve_for_human(shared, b, yell(shared, a)?)?
        };
        Ok(answer.to_string())
    }
}
