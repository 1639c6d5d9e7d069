use std::ops::Range;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["y2023", "interval"])]
pub struct Solver;

/// One line of a map: `len` values starting at `src` move to `dst`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    dst: u64,
    src: u64,
    len: u64,
}

impl Shift {
    fn source(&self) -> Range<u64> {
        self.src..self.src + self.len
    }

    fn apply(&self, v: u64) -> u64 {
        v - self.src + self.dst
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    stages: Vec<Vec<Shift>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input).map_err(invalid_format)
    }
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = input.split("\n\n").map(str::trim).filter(|b| !b.is_empty());
    let seeds = blocks
        .next()
        .and_then(|b| b.strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("missing seeds line"))?;
    let seeds = extract_unsigned(seeds);
    let stages = blocks
        .map(|block| {
            let mut lines = block.lines();
            let title = lines.next().unwrap_or_default();
            lines
                .map(|line| match extract_unsigned::<u64>(line).as_slice() {
                    &[dst, src, len] => Ok(Shift { dst, src, len }),
                    _ => Err(anyhow!("bad map line {:?}", line)),
                })
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("in {}", title))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Almanac { seeds, stages })
}

fn locate(stages: &[Vec<Shift>], seed: u64) -> u64 {
    stages.iter().fold(seed, |v, stage| {
        stage
            .iter()
            .find(|s| s.source().contains(&v))
            .map_or(v, |s| s.apply(v))
    })
}

/// Push whole ranges through one stage, splitting them where shifts begin and end
pub fn map_ranges(stage: &[Shift], ranges: Vec<Range<u64>>) -> Vec<Range<u64>> {
    let mut pending = ranges;
    let mut mapped = Vec::new();
    'next: while let Some(range) = pending.pop() {
        for shift in stage {
            let source = shift.source();
            let start = range.start.max(source.start);
            let end = range.end.min(source.end);
            if start >= end {
                continue;
            }
            mapped.push(shift.apply(start)..shift.apply(end - 1) + 1);
            if range.start < start {
                pending.push(range.start..start);
            }
            if end < range.end {
                pending.push(end..range.end);
            }
            continue 'next;
        }
        mapped.push(range);
    }
    mapped
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&s| locate(&shared.stages, s))
            .min()
            .map(|v| v.to_string())
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let seeds: Vec<Range<u64>> = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .collect();
        shared
            .stages
            .iter()
            .fold(seeds, |ranges, stage| map_ranges(stage, ranges))
            .iter()
            .map(|r| r.start)
            .min()
            .map(|v| v.to_string())
            .ok_or_else(|| SolveError::failed("no seed ranges"))
    }
}
