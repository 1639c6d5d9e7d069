use std::cell::Cell;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Counts how often `compute` runs, to check memoisation
struct CountingGrid<'a> {
    calls: &'a Cell<usize>,
}

impl DpProblem<(usize, usize), u64> for CountingGrid<'_> {
    fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
        match (r, c) {
            (0, 0) => vec![],
            (0, c) => vec![(0, c - 1)],
            (r, 0) => vec![(r - 1, 0)],
            (r, c) => vec![(r - 1, c), (r, c - 1)],
        }
    }

    fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
        self.calls.set(self.calls.get() + 1);
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

#[test]
fn fibonacci_with_vec_backend() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&50), 12_586_269_025);
}

#[test]
fn each_index_is_computed_once() {
    let calls = Cell::new(0);
    let cache = DpCache::with_problem(HashMapBackend::new(), CountingGrid { calls: &calls });

    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(calls.get(), 25);

    assert_eq!(cache.get(&(3, 3)), 20);
    assert_eq!(calls.get(), 25);
}

#[test]
fn closure_problem() {
    let cache = DpCache::new(
        VecBackend::with_capacity(16),
        |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
        |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { *n as u64 * deps[0] },
    );
    assert_eq!(cache.get(&5), 120);
    assert_eq!(cache.get(&0), 1);
}
