use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 23, tags = ["y2015", "vm"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Half(usize),
    Triple(usize),
    Inc(usize),
    Jump(i64),
    JumpIfEven(usize, i64),
    JumpIfOne(usize, i64),
}

fn register(name: &str) -> anyhow::Result<usize> {
    match name.trim().trim_end_matches(',') {
        "a" => Ok(0),
        "b" => Ok(1),
        other => bail!("unknown register {:?}", other),
    }
}

fn offset(text: &str) -> anyhow::Result<i64> {
    text.trim().parse().with_context(|| format!("bad offset {:?}", text))
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let (op, args) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("missing operand in {:?}", line))?;
    let mut args = args.split(", ");
    let mut next = || args.next().ok_or_else(|| anyhow!("missing operand in {:?}", line));
    Ok(match op {
        "hlf" => Instruction::Half(register(next()?)?),
        "tpl" => Instruction::Triple(register(next()?)?),
        "inc" => Instruction::Inc(register(next()?)?),
        "jmp" => Instruction::Jump(offset(next()?)?),
        "jie" => Instruction::JumpIfEven(register(next()?)?, offset(next()?)?),
        "jio" => Instruction::JumpIfOne(register(next()?)?, offset(next()?)?),
        _ => bail!("unknown instruction {:?}", op),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_instruction)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Run until the instruction pointer leaves the program; returns `[a, b]`
pub fn run(program: &[Instruction], a: u64) -> [u64; 2] {
    let mut regs = [a, 0];
    let mut ip: i64 = 0;
    while let Some(&ins) = usize::try_from(ip).ok().and_then(|i| program.get(i)) {
        ip += match ins {
            Instruction::Half(r) => {
                regs[r] /= 2;
                1
            }
            Instruction::Triple(r) => {
                regs[r] *= 3;
                1
            }
            Instruction::Inc(r) => {
                regs[r] += 1;
                1
            }
            Instruction::Jump(o) => o,
            Instruction::JumpIfEven(r, o) if regs[r] % 2 == 0 => o,
            Instruction::JumpIfOne(r, o) if regs[r] == 1 => o,
            _ => 1,
        };
    }
    regs
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, 0)[1].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, 1)[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
inc a
jio a, +2
tpl a
inc a
";

    #[test]
    fn example_program() {
        let program = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(run(&program, 0), [2, 0]);
        assert_eq!(run(&program, 1), [7, 0]);
    }

    #[test]
    fn rejects_unknown_register() {
        assert!(Solver::parse("inc c").is_err());
    }
}
