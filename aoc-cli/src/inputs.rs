//! Local puzzle inputs and recorded answers
//!
//! Layout under the input directory:
//! - `{year}/day-{dd}.txt` holds the puzzle input
//! - `{year}/day-{dd}.answers` holds one recorded answer per line
//!   (line 1 = part 1, line 2 = part 2, blank = not recorded)
//!
//! Answers spanning several lines (rendered screens) use block form instead:
//! parts are separated by a line holding only `---`, and a block with no
//! text leaves its part unrecorded.
//!
//! ```text
//! 13140
//! ---
//! ##..##..
//! ###.###.
//! ```

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of comparing an answer with the recorded one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    Incorrect { expected: String },
    Unrecorded,
}

/// Answers recorded for one puzzle, indexed by part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedAnswers {
    parts: Vec<Option<String>>,
}

/// Line separating part blocks in an `.answers` file
pub const PART_SEPARATOR: &str = "---";

impl RecordedAnswers {
    pub fn parse(text: &str) -> Self {
        let parts = if text.lines().any(|l| l.trim() == PART_SEPARATOR) {
            text.split_terminator('\n')
                .collect::<Vec<_>>()
                .split(|l| l.trim() == PART_SEPARATOR)
                .map(|block| normalize(&block.join("\n")))
                .collect()
        } else {
            text.lines().map(normalize).collect()
        };
        Self { parts }
    }

    pub fn get(&self, part: u8) -> Option<&str> {
        let idx = usize::from(part).checked_sub(1)?;
        self.parts.get(idx)?.as_deref()
    }

    pub fn check(&self, part: u8, answer: &str) -> CheckOutcome {
        match self.get(part) {
            None => CheckOutcome::Unrecorded,
            Some(expected) if normalize(answer).as_deref() == Some(expected) => {
                CheckOutcome::Correct
            }
            Some(expected) => CheckOutcome::Incorrect {
                expected: expected.to_string(),
            },
        }
    }
}

/// Lines trimmed, surrounding blank lines dropped; `None` when nothing is left
fn normalize(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let first = lines.iter().position(|l| !l.is_empty())?;
    let last = lines.iter().rposition(|l| !l.is_empty())?;
    Some(lines[first..=last].join("\n"))
}

/// Read-only view over the input directory
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(year.to_string()).join(format!("day-{:02}.txt", day))
    }

    pub fn answers_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_path(year, day).with_extension("answers")
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn input(&self, year: u16, day: u8) -> Result<String, InputError> {
        read(&self.input_path(year, day))?.ok_or_else(|| InputError::Missing {
            path: self.input_path(year, day),
        })
    }

    /// Recorded answers; a missing `.answers` file records nothing
    pub fn answers(&self, year: u16, day: u8) -> Result<RecordedAnswers, InputError> {
        Ok(read(&self.answers_path(year, day))?
            .map(|text| RecordedAnswers::parse(&text))
            .unwrap_or_default())
    }
}

fn read(path: &Path) -> Result<Option<String>, InputError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(InputError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, InputStore) {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let store = InputStore::new(temp.path());
        (temp, store)
    }

    #[test]
    fn paths_follow_year_layout() {
        let store = InputStore::new("inputs");
        assert_eq!(
            store.input_path(2021, 3),
            PathBuf::from("inputs/2021/day-03.txt")
        );
        assert_eq!(
            store.answers_path(2023, 25),
            PathBuf::from("inputs/2023/day-25.answers")
        );
    }

    #[test]
    fn reads_existing_input() {
        let (_temp, store) = store_with(&[("2015/day-01.txt", "(()(()(\n")]);
        assert!(store.contains(2015, 1));
        assert_eq!(store.input(2015, 1).unwrap(), "(()(()(\n");
    }

    #[test]
    fn missing_input_is_reported() {
        let (_temp, store) = store_with(&[]);
        assert!(!store.contains(2015, 2));
        assert!(matches!(
            store.input(2015, 2),
            Err(InputError::Missing { .. })
        ));
    }

    #[test]
    fn missing_answers_record_nothing() {
        let (_temp, store) = store_with(&[("2015/day-01.txt", "()")]);
        let answers = store.answers(2015, 1).unwrap();
        assert_eq!(answers.check(1, "0"), CheckOutcome::Unrecorded);
    }

    #[test]
    fn answers_checked_per_part() {
        let (_temp, store) = store_with(&[("2022/day-25.answers", "2=-1=0\n")]);
        let answers = store.answers(2022, 25).unwrap();
        assert_eq!(answers.check(1, "2=-1=0"), CheckOutcome::Correct);
        assert_eq!(
            answers.check(1, "1=0"),
            CheckOutcome::Incorrect {
                expected: "2=-1=0".to_string()
            }
        );
        assert_eq!(answers.check(2, "anything"), CheckOutcome::Unrecorded);
    }

    #[test]
    fn blank_line_leaves_part_unrecorded() {
        let answers = RecordedAnswers::parse("\n  4512  \n");
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.get(2), Some("4512"));
        assert_eq!(answers.get(0), None);
    }

    #[test]
    fn screen_answers_recorded_as_blocks() {
        let screen = "##..\n#..#\n####";
        let answers = RecordedAnswers::parse("13140\n---\n##..\n#..#\n####\n");
        assert_eq!(answers.check(1, "13140"), CheckOutcome::Correct);
        assert_eq!(answers.check(2, screen), CheckOutcome::Correct);
        assert_eq!(answers.check(2, &format!("\n{}\n", screen)), CheckOutcome::Correct);
        assert_eq!(
            answers.check(2, "##..\n#..#\n###."),
            CheckOutcome::Incorrect {
                expected: screen.to_string()
            }
        );
    }

    #[test]
    fn empty_block_leaves_part_unrecorded() {
        let answers = RecordedAnswers::parse("---\n\n---\n.#\n#.\n");
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.get(2), None);
        assert_eq!(answers.get(3), Some(".#\n#."));
    }

    proptest! {
        #[test]
        fn recorded_answer_always_checks_correct(
            p1 in "[0-9a-zA-Z][0-9a-zA-Z=-]{0,11}",
            p2 in "[0-9a-zA-Z][0-9a-zA-Z=-]{0,11}",
        ) {
            let answers = RecordedAnswers::parse(&format!("{}\n{}\n", p1, p2));
            prop_assert_eq!(answers.check(1, &p1), CheckOutcome::Correct);
            prop_assert_eq!(answers.check(2, &p2), CheckOutcome::Correct);
            prop_assert_eq!(answers.check(3, &p1), CheckOutcome::Unrecorded);
        }
    }
}
