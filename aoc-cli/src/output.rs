//! Output formatting for solver results

use crate::executor::SolverResult;
use crate::inputs::CheckOutcome;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print one result: answers to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", render_full(result)),
            (Err(e), _) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// Print the run summary; quiet mode prints nothing
    pub fn print_summary(&self, summary: &Summary) {
        if self.quiet {
            return;
        }
        let elapsed = self.start_time.elapsed();
        println!();
        for line in summary.render(elapsed) {
            println!("{}", line);
        }
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `YYYY/DD Part P: answer (parse: .., solve: ..)` plus the check outcome
pub fn render_full(result: &SolverResult) -> String {
    let answer = match &result.answer {
        Ok(answer) => answer.as_str(),
        Err(_) => "",
    };
    let parse = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    let check = match &result.check {
        Some(outcome) => format!(" {}", format_outcome(outcome)),
        None => String::new(),
    };
    format!(
        "{}: {} ({}solve: {}){}",
        prefix(result),
        answer,
        parse,
        format_duration(result.solve_duration),
        check
    )
}

/// Totals over a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unrecorded: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn from_results(results: &[SolverResult]) -> Self {
        let mut summary = Summary::default();
        for result in results {
            if result.answer.is_err() {
                summary.failed += 1;
                continue;
            }
            summary.solved += 1;
            summary.parse_time = summary.parse_time + result.parse_duration.unwrap_or_default();
            summary.solve_time = summary.solve_time + result.solve_duration;
            match result.check {
                Some(CheckOutcome::Correct) => summary.correct += 1,
                Some(CheckOutcome::Incorrect { .. }) => summary.incorrect += 1,
                Some(CheckOutcome::Unrecorded) => summary.unrecorded += 1,
                None => {}
            }
        }
        summary
    }

    fn checked(&self) -> bool {
        self.correct + self.incorrect + self.unrecorded > 0
    }

    pub fn render(&self, elapsed: Duration) -> Vec<String> {
        let mut lines = vec![
            "--- Summary ---".to_string(),
            format!("Solvers: {} solved, {} failed", self.solved, self.failed),
        ];
        if self.checked() {
            lines.push(format!(
                "Answers: {} correct, {} incorrect, {} unrecorded",
                self.correct, self.incorrect, self.unrecorded
            ));
        }
        lines.push(format!("Total parse time: {}", format_duration(self.parse_time)));
        lines.push(format!("Total solve time: {}", format_duration(self.solve_time)));
        lines.push(format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)));
        if !elapsed.is_zero() {
            let compute = (self.parse_time + self.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            lines.push(format!("Speedup factor: {:.2}x", compute / elapsed.as_secs_f64()));
        }
        lines
    }
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_micros(micros.unsigned_abs().into())),
        Some(micros) => format_micros(micros.unsigned_abs().into()),
    }
}

fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Correct => "✓ correct".to_string(),
        CheckOutcome::Incorrect { expected } => format!("✗ incorrect (expected {})", expected),
        CheckOutcome::Unrecorded => "? unrecorded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};

    fn solved(part: u8, answer: &str, check: Option<CheckOutcome>) -> SolverResult {
        SolverResult {
            year: 2022,
            day: 4,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: (part == 1).then(|| TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(3),
            check,
        }
    }

    fn failed() -> SolverResult {
        let err: ArcExecutorError = ExecutorError::ChannelSend.into();
        SolverResult {
            answer: Err(err),
            ..solved(2, "", None)
        }
    }

    #[test]
    fn durations_pick_a_unit() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn full_line_has_timings_and_check() {
        let line = render_full(&solved(1, "2", Some(CheckOutcome::Correct)));
        assert_eq!(line, "2022/04 Part 1: 2 (parse: 250µs, solve: 3.00ms) ✓ correct");
        let line = render_full(&solved(
            2,
            "4",
            Some(CheckOutcome::Incorrect {
                expected: "5".to_string(),
            }),
        ));
        assert_eq!(line, "2022/04 Part 2: 4 (solve: 3.00ms) ✗ incorrect (expected 5)");
    }

    #[test]
    fn summary_counts_outcomes() {
        let results = vec![
            solved(1, "2", Some(CheckOutcome::Correct)),
            solved(2, "4", Some(CheckOutcome::Unrecorded)),
            failed(),
        ];
        let summary = Summary::from_results(&results);
        assert_eq!(summary.solved, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.unrecorded, 1);
        assert_eq!(summary.incorrect, 0);
        assert_eq!(summary.solve_time, TimeDelta::milliseconds(6));
        assert_eq!(summary.parse_time, TimeDelta::microseconds(250));
        let lines = summary.render(Duration::from_millis(10));
        assert!(lines.contains(&"Answers: 1 correct, 0 incorrect, 1 unrecorded".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("Speedup factor")));
    }

    #[test]
    fn unchecked_run_omits_answer_line() {
        let summary = Summary::from_results(&[solved(1, "2", None)]);
        assert!(!summary.render(Duration::ZERO).iter().any(|l| l.starts_with("Answers")));
    }
}
