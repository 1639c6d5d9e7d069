//! Memoisation cache for dynamic programming over a DAG of subproblems
//!
//! A [`DpProblem`] names the subproblems each index depends on and how to
//! combine their values; [`DpCache`] resolves dependencies on demand and
//! computes every index at most once.
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** A cyclic dependency graph recurses
//! until the stack overflows. Dependencies must form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Binary strings of length `n` without two adjacent ones.
//! struct NoAdjacentOnes;
//!
//! impl DpProblem<usize, u64> for NoAdjacentOnes {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n < 2 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         match *n {
//!             0 => 1,
//!             1 => 2,
//!             _ => deps.iter().sum(),
//!         }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), NoAdjacentOnes);
//! assert_eq!(cache.get(&5), 13);
//! ```
//!
//! # Example: closures
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! // Ways to climb `n` stairs taking 1, 2 or 3 steps at a time
//! let stairs = DpCache::new(
//!     HashMapBackend::new(),
//!     |n: &u32| (1..=3).filter(|s| s <= n).map(|s| n - s).collect::<Vec<u32>>(),
//!     |n: &u32, deps: Vec<u64>| if *n == 0 { 1 } else { deps.iter().sum() },
//! );
//! assert_eq!(stairs.get(&4), 7);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{ClosureProblem, DpCache};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
