//! Parser and solver traits every puzzle implements

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on
pub trait AocParser {
    /// Parsed input plus anything a part wants to leave for later parts.
    ///
    /// The lifetime lets the data borrow from the input (`&'a str` slices,
    /// `Vec<&'a [u8]>` rows) instead of copying it.
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N` of a puzzle
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split("\n\n")
///             .map(|elf| {
///                 elf.lines()
///                     .map(|l| l.parse::<u32>())
///                     .sum::<Result<u32, _>>()
///                     .map_err(|e| ParseError::InvalidFormat(e.to_string()))
///             })
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Calories {
///     fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         elves
///             .iter()
///             .max()
///             .map(u32::to_string)
///             .ok_or_else(|| SolveError::failed("no elves"))
///     }
/// }
///
/// let mut elves = Calories::parse("1000\n2000\n\n4000").unwrap();
/// assert_eq!(<Calories as PartSolver<1>>::solve(&mut elves).unwrap(), "4000");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: how many parts it has and how to answer each
///
/// Normally derived with `#[derive(AocSolver)]`, which routes part `k` to
/// `PartSolver<k>`.
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer `part`; parts without an answer give `PartNotImplemented`
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// `PartOutOfRange` for part 0 or anything above `PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
