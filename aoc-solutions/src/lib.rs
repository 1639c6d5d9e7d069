//! Advent of Code puzzle solutions with automatic registration
//!
//! One module per puzzle year, one file per day. Every solver derives
//! `AutoRegisterSolver`, so linking this crate is enough for the runner to
//! find it. Years can be compiled out with the `year-YYYY` features.

pub mod katas;
pub mod utils;

#[cfg(feature = "year-2015")]
pub mod year_2015;
#[cfg(feature = "year-2020")]
pub mod year_2020;
#[cfg(feature = "year-2021")]
pub mod year_2021;
#[cfg(feature = "year-2022")]
pub mod year_2022;
#[cfg(feature = "year-2023")]
pub mod year_2023;
