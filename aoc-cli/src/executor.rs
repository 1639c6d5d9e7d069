//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::{CheckOutcome, InputStore, RecordedAnswers};
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::{self, Sender};

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the result that paid for parsing the input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
    pub check: Option<CheckOutcome>,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, err: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(err),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
            check: None,
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    shared: SharedState,
    thread_pool: rayon::ThreadPool,
}

/// State every worker reads
struct SharedState {
    registry: SolverRegistry,
    inputs: InputStore,
    check: bool,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ArcExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedState {
                registry,
                inputs: InputStore::new(config.input_dir.as_path()),
                check: config.check,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.shared.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.shared;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .filter_map(|info| {
                Some(WorkItem {
                    year: info.year,
                    day: info.day,
                    parts: select_parts(cfg.part_filter, info.parts)?,
                })
            })
            .collect()
    }

    /// Execute all work items and stream results into `tx`
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let shared = &self.shared;

        match shared.parallelize_by {
            ParallelizeBy::Sequential => run_group(&work_items, &tx, shared),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.thread_pool.install(|| {
                    by_year
                        .par_iter()
                        .map(|items| run_group(items, &tx, shared).err())
                        .reduce(|| None, merge_errors)
                        .map_or(Ok(()), Err)
                })
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .map(|work| run_work_item(work, &tx, shared).err())
                    .reduce(|| None, merge_errors)
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

fn merge_errors(
    left: Option<ArcExecutorError>,
    right: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (left, right) {
        (Some(l), Some(r)) => Some(ArcExecutorError::combine(l, r)),
        (l, r) => l.or(r),
    }
}

/// Parts to run given the `--part` filter, `None` when the solver lacks it
fn select_parts(part_filter: Option<u8>, max_parts: u8) -> Option<RangeInclusive<u8>> {
    match part_filter {
        Some(p) if p <= max_parts => Some(p..=p),
        Some(_) => None,
        None => Some(1..=max_parts),
    }
}

fn run_group(
    items: &[WorkItem],
    tx: &Sender<SolverResult>,
    shared: &SharedState,
) -> Result<(), ArcExecutorError> {
    let mut collected: Option<ArcExecutorError> = None;
    for work in items {
        if let Err(e) = run_work_item(work, tx, shared) {
            collected = Some(ArcExecutorError::combine_opt(collected, e));
        }
    }
    collected.map_or(Ok(()), Err)
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load input and answers, then solve the item's parts
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &SharedState,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match shared.inputs.input(year, day) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(year, day, error = %e, "skipping puzzle");
            let err = ArcExecutorError::from(ExecutorError::from(e));
            for part in work.parts.clone() {
                send(tx, SolverResult::failed(year, day, part, err.clone()))?;
            }
            return Ok(());
        }
    };

    let answers = if shared.check {
        shared.inputs.answers(year, day).unwrap_or_else(|e| {
            tracing::warn!(year, day, error = %e, "ignoring unreadable answers");
            RecordedAnswers::default()
        })
    } else {
        RecordedAnswers::default()
    };
    let ctx = PuzzleRun {
        work,
        input: &input,
        answers: shared.check.then_some(&answers),
        registry: &shared.registry,
    };

    if shared.parallelize_by == ParallelizeBy::Part {
        ctx.solve_parts_in_parallel(tx)
    } else {
        ctx.solve_parts_in_order(tx)
    }
}

/// One puzzle with its input loaded
struct PuzzleRun<'a> {
    work: &'a WorkItem,
    input: &'a str,
    answers: Option<&'a RecordedAnswers>,
    registry: &'a SolverRegistry,
}

impl PuzzleRun<'_> {
    fn create(&self) -> Result<Box<dyn DynSolver + '_>, ArcExecutorError> {
        self.registry
            .create_solver(self.work.year, self.work.day, self.input)
            .map_err(|e| ArcExecutorError::from(ExecutorError::from(e)))
    }

    fn solve(&self, solver: &mut dyn DynSolver, part: u8) -> SolverResult {
        let (year, day) = (self.work.year, self.work.day);
        let _span = tracing::debug_span!("solve", year, day, part).entered();
        match solver.solve(part) {
            Ok(solved) => {
                let solve_duration = solved.duration();
                tracing::debug!(elapsed = %solve_duration, "solved");
                SolverResult {
                    year,
                    day,
                    part,
                    check: self.answers.map(|a| a.check(part, &solved.answer)),
                    answer: Ok(solved.answer),
                    parse_duration: None,
                    solve_duration,
                }
            }
            Err(e) => {
                let err = ExecutorError::from(aoc_solver::SolverError::from(e));
                SolverResult::failed(year, day, part, err.into())
            }
        }
    }

    /// Parse once, solve the parts in order, forwarding each result as it lands
    fn solve_parts_in_order(&self, tx: &Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let (year, day) = (self.work.year, self.work.day);
        let mut solver = match self.create() {
            Ok(solver) => solver,
            Err(e) => {
                for part in self.work.parts.clone() {
                    send(tx, SolverResult::failed(year, day, part, e.clone()))?;
                }
                return Ok(());
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in self.work.parts.clone() {
            let mut result = self.solve(&mut *solver, part);
            result.parse_duration = parse_duration.take();
            send(tx, result)?;
        }
        Ok(())
    }

    /// Each part parses its own instance so parts run concurrently
    fn solve_parts_in_parallel(&self, tx: &Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let (year, day) = (self.work.year, self.work.day);
        let (part_tx, part_rx) = mpsc::channel();

        self.work
            .parts
            .clone()
            .into_par_iter()
            .for_each_with(part_tx, |ptx, part| {
                let result = match self.create() {
                    Ok(mut solver) => {
                        let mut result = self.solve(&mut *solver, part);
                        result.parse_duration = Some(solver.parse_duration());
                        result
                    }
                    Err(e) => SolverResult::failed(year, day, part, e),
                };
                ptx.send(result).ok();
            });

        for result in part_rx.into_iter().sorted_by_key(|r| r.part) {
            send(tx, result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc_solver::SolverRegistryBuilder;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn executor(dir: &TempDir, extra: &[&str]) -> Executor {
        let input_dir = dir.path().to_string_lossy().into_owned();
        let mut argv = vec!["aoc", "--input-dir", input_dir.as_str(), "--threads", "2"];
        argv.extend_from_slice(extra);
        let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();
        let registry = SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        Executor::new(registry, &config).unwrap()
    }

    fn run(executor: &Executor) -> (Vec<SolverResult>, Result<(), ArcExecutorError>) {
        let (tx, rx) = mpsc::channel();
        let outcome = executor.execute(tx);
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        (results, outcome)
    }

    fn write(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn part_filter_selects_parts() {
        assert_eq!(select_parts(None, 2), Some(1..=2));
        assert_eq!(select_parts(Some(2), 2), Some(2..=2));
        assert_eq!(select_parts(Some(2), 1), None);
        assert_eq!(select_parts(None, 1), Some(1..=1));
    }

    #[test]
    fn work_items_respect_filters() {
        let dir = TempDir::new().unwrap();
        let exec = executor(&dir, &["-y", "2022", "-p", "2"]);
        let items = exec.collect_work_items();
        assert!(items.iter().all(|w| w.year == 2022 && w.parts == (2..=2)));
        // day 25 has no second part
        assert!(items.iter().all(|w| w.day != 25));
        assert_eq!(items.len(), 24);
    }

    #[test]
    fn solves_and_checks_local_input() {
        let dir = TempDir::new().unwrap();
        write(&dir, "2015/day-01.txt", "()())\n");
        write(&dir, "2015/day-01.answers", "-1\n1\n");
        for mode in ["sequential", "year", "day", "part"] {
            let exec = executor(
                &dir,
                &["-y", "2015", "-d", "1", "--check", "--parallelize-by", mode],
            );
            let (results, outcome) = run(&exec);
            assert!(outcome.is_ok());
            assert_eq!(results.len(), 2, "mode {}", mode);
            assert_eq!(results[0].answer.as_deref().unwrap(), "-1");
            assert_eq!(results[0].check, Some(CheckOutcome::Correct));
            assert_eq!(results[1].answer.as_deref().unwrap(), "5");
            assert_eq!(
                results[1].check,
                Some(CheckOutcome::Incorrect {
                    expected: "1".to_string()
                })
            );
            assert!(results[0].parse_duration.is_some());
        }
    }

    #[test]
    fn rendered_screen_checks_against_block() {
        let dir = TempDir::new().unwrap();
        let dots = "6,10\n0,14\n9,10\n0,3\n10,4\n4,11\n6,0\n6,12\n4,1\n0,13\n\
                    10,12\n3,4\n3,0\n8,4\n1,10\n2,14\n8,10\n9,0\n\n\
                    fold along y=7\nfold along x=5\n";
        write(&dir, "2021/day-13.txt", dots);
        write(
            &dir,
            "2021/day-13.answers",
            "17\n---\n#####\n#...#\n#...#\n#...#\n#####\n",
        );
        let exec = executor(&dir, &["-y", "2021", "-d", "13", "--check"]);
        let (results, outcome) = run(&exec);
        assert!(outcome.is_ok());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.check == Some(CheckOutcome::Correct)));
    }

    #[test]
    fn missing_input_yields_error_per_part() {
        let dir = TempDir::new().unwrap();
        let exec = executor(&dir, &["-y", "2015", "-d", "2"]);
        let (results, outcome) = run(&exec);
        assert!(outcome.is_ok());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.answer.is_err()));
        assert!(results.iter().all(|r| r.check.is_none()));
    }

    #[test]
    fn parse_failure_reported_not_panicked() {
        let dir = TempDir::new().unwrap();
        write(&dir, "2015/day-01.txt", "(x)");
        let exec = executor(&dir, &["-y", "2015", "-d", "1"]);
        let (results, _) = run(&exec);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.answer.is_err()));
    }
}
