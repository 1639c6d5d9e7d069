use std::collections::HashMap;
use std::ops::Range;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 19, tags = ["y2023", "interval"])]
pub struct Solver;

const START: &str = "in";
const ACCEPT: &str = "A";
const REJECT: &str = "R";

/// Ratings in `x`, `m`, `a`, `s` order
type Ratings = [u64; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Test {
    category: usize,
    less: bool,
    value: u64,
}

impl Test {
    fn passes(&self, ratings: &Ratings) -> bool {
        let r = ratings[self.category];
        if self.less { r < self.value } else { r > self.value }
    }

    /// Split a range into the part passing the test and the part failing it
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        let v = self.value;
        if self.less {
            (range.start..range.end.min(v), range.start.max(v)..range.end)
        } else {
            (range.start.max(v + 1)..range.end, range.start..range.end.min(v + 1))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule<'a> {
    test: Option<Test>,
    target: &'a str,
}

#[derive(Debug)]
pub struct System<'a> {
    workflows: HashMap<&'a str, Vec<Rule<'a>>>,
    parts: Vec<Ratings>,
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_system(input).map_err(invalid_format)
    }
}

fn parse_system(input: &str) -> anyhow::Result<System<'_>> {
    let (flows, parts) = input
        .trim()
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("missing blank line before the parts"))?;
    let workflows = flows
        .lines()
        .map(parse_workflow)
        .collect::<anyhow::Result<_>>()?;
    let parts = parts
        .lines()
        .map(|line| -> anyhow::Result<Ratings> {
            extract_unsigned::<u64>(line)
                .try_into()
                .map_err(|_| anyhow!("part {:?} needs four ratings", line))
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(System { workflows, parts })
}

fn parse_workflow(line: &str) -> anyhow::Result<(&str, Vec<Rule<'_>>)> {
    let (name, rules) = line
        .trim()
        .strip_suffix('}')
        .and_then(|l| l.split_once('{'))
        .ok_or_else(|| anyhow!("bad workflow {:?}", line))?;
    let rules = rules
        .split(',')
        .map(parse_rule)
        .collect::<anyhow::Result<_>>()
        .with_context(|| format!("workflow {}", name))?;
    Ok((name, rules))
}

fn parse_rule(rule: &str) -> anyhow::Result<Rule<'_>> {
    let Some((test, target)) = rule.split_once(':') else {
        return Ok(Rule { test: None, target: rule });
    };
    let mut chars = test.chars();
    let category = match chars.next() {
        Some('x') => 0,
        Some('m') => 1,
        Some('a') => 2,
        Some('s') => 3,
        other => bail!("bad category {:?}", other),
    };
    let less = match chars.next() {
        Some('<') => true,
        Some('>') => false,
        other => bail!("bad comparison {:?}", other),
    };
    let value = chars.as_str().parse().context("rule value")?;
    Ok(Rule {
        test: Some(Test { category, less, value }),
        target,
    })
}

impl System<'_> {
    fn rules(&self, name: &str) -> Result<&[Rule<'_>], SolveError> {
        self.workflows
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SolveError::failed(format!("no workflow {}", name)))
    }

    fn accepts(&self, ratings: &Ratings) -> Result<bool, SolveError> {
        let mut at = START;
        // Every hop visits a different workflow unless the system loops
        for _ in 0..=self.workflows.len() {
            match at {
                ACCEPT => return Ok(true),
                REJECT => return Ok(false),
                _ => {}
            }
            at = self
                .rules(at)?
                .iter()
                .find(|r| r.test.is_none_or(|t| t.passes(ratings)))
                .map(|r| r.target)
                .ok_or_else(|| SolveError::failed(format!("workflow {} has no fallback", at)))?;
        }
        Err(SolveError::failed("workflows loop"))
    }

    /// Rating combinations within `ranges` that `name` ends up accepting
    pub fn combinations(&self, name: &str, mut ranges: [Range<u64>; 4]) -> Result<u64, SolveError> {
        match name {
            ACCEPT => return Ok(ranges.iter().map(|r| r.end.saturating_sub(r.start)).product()),
            REJECT => return Ok(0),
            _ => {}
        }
        let mut total = 0;
        for rule in self.rules(name)? {
            match rule.test {
                None => return Ok(total + self.combinations(rule.target, ranges)?),
                Some(test) => {
                    let (pass, fail) = test.split(&ranges[test.category]);
                    if !pass.is_empty() {
                        let mut taken = ranges.clone();
                        taken[test.category] = pass;
                        total += self.combinations(rule.target, taken)?;
                    }
                    if fail.is_empty() {
                        return Ok(total);
                    }
                    ranges[test.category] = fail;
                }
            }
        }
        Ok(total)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sum = 0;
        for part in &shared.parts {
            if shared.accepts(part)? {
                sum += part.iter().sum::<u64>();
            }
        }
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let full = std::array::from_fn(|_| 1..4001);
        Ok(shared.combinations(START, full)?.to_string())
    }
}
