use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::{extract_unsigned, lcm};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["y2022", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(n) => old + n,
            Operation::Multiply(n) => old * n,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn last_number(line: &str) -> anyhow::Result<u64> {
    extract_unsigned(line)
        .last()
        .copied()
        .ok_or_else(|| anyhow!("expected a number in {:?}", line))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let lines: Vec<&str> = block.lines().map(str::trim).collect();
    let [_, items, operation, test, if_true, if_false] = lines.as_slice() else {
        bail!("expected six lines per monkey, got {}", lines.len());
    };
    let operation = match operation
        .strip_prefix("Operation: new = old ")
        .map(|op| op.split_once(' '))
    {
        Some(Some(("*", "old"))) => Operation::Square,
        Some(Some(("*", n))) => Operation::Multiply(n.parse().context("multiplier")?),
        Some(Some(("+", n))) => Operation::Add(n.parse().context("addend")?),
        _ => bail!("unrecognised operation {:?}", operation),
    };
    Ok(Monkey {
        items: extract_unsigned(items),
        operation,
        divisor: last_number(test)?,
        if_true: last_number(if_true)? as usize,
        if_false: last_number(if_false)? as usize,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let monkeys = input
            .split("\n\n")
            .filter(|b| !b.trim().is_empty())
            .map(parse_monkey)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_format)?;
        if let Some(m) = monkeys
            .iter()
            .find(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len() || m.divisor == 0)
        {
            return Err(ParseError::InvalidFormat(format!("monkey throws nowhere: {:?}", m)));
        }
        Ok(monkeys)
    }
}

/// Product of the two highest inspection counts
pub fn monkey_business(initial: &[Monkey], rounds: usize, relief: bool) -> u64 {
    let mut monkeys = initial.to_vec();
    let modulus = monkeys.iter().fold(1, |acc, m| lcm(acc, m.divisor));
    let mut inspections = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspections[i] += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[i];
            for item in items {
                let mut worry = operation.apply(item);
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }
    inspections.sort_unstable_by(|a, b| b.cmp(a));
    inspections.iter().take(2).product()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, true).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 10_000, false).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn with_relief() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "10605");
    }

    #[test]
    fn without_relief() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "2713310158");
    }

    #[test]
    fn rejects_unknown_target() {
        assert!(Solver::parse(&EXAMPLE.replace("monkey 3", "monkey 7")).is_err());
    }
}
