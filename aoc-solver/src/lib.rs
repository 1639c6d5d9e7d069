//! Advent of Code Solver Library
//!
//! The framework every puzzle in the archive plugs into. A puzzle is a type
//! that parses its input once into shared data and then answers any of its
//! parts from that data; the registry turns those types into uniform,
//! type-erased solver instances the runner can schedule.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.trim())
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let up = shared.matches('(').count() as i64;
//!         let down = shared.matches(')').count() as i64;
//!         Ok((up - down).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Floors>(2015, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2015, 1, "(()(()(").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "7");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns input text into `SharedData` (owned or borrowed).
//! - [`PartSolver<N>`] answers part `N` with mutable access to the shared
//!   data, so a later part can reuse work stored by an earlier one.
//! - [`Solver`] dispatches part numbers; `#[derive(AocSolver)]` writes it.
//! - [`DynSolver`] is the object-safe face of a parsed [`SolverInstance`].
//! - `#[derive(AutoRegisterSolver)]` with `#[aoc(year, day, tags)]` submits a
//!   [`SolverPlugin`] to the inventory; [`SolverRegistryBuilder`] collects them.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder, calc_index,
    from_index,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
