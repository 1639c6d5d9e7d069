//! Re-orders streamed results into (year, day, part) order
//!
//! Two min-heaps: the keys still owed, and results that arrived early.
//! A result is released once its key is the smallest one still owed.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key for ordering results, ascending by year, day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

/// Anything the aggregator can order
pub trait Keyed {
    fn key(&self) -> ResultKey;
}

impl Keyed for SolverResult {
    fn key(&self) -> ResultKey {
        ResultKey {
            year: self.year,
            day: self.day,
            part: self.part,
        }
    }
}

struct Pending<T>(T);

impl<T: Keyed> Ord for Pending<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.key().cmp(&self.0.key())
    }
}

impl<T: Keyed> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Keyed> Eq for Pending<T> {}

impl<T: Keyed> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.key() == other.0.key()
    }
}

pub struct ResultAggregator<T> {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Pending<T>>,
}

impl<T: Keyed> ResultAggregator<T> {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Buffer a result and release every result now due, in order
    pub fn add(&mut self, result: T) -> Vec<T> {
        self.pending.push(Pending(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(top)) = (self.expected.peek(), self.pending.peek()) {
            if top.0.key() != *next {
                break;
            }
            self.expected.pop();
            if let Some(Pending(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Everything still buffered, in order
    pub fn drain(&mut self) -> Vec<T> {
        let mut rest = Vec::with_capacity(self.pending.len());
        while let Some(Pending(result)) = self.pending.pop() {
            rest.push(result);
        }
        rest
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    impl Keyed for ResultKey {
        fn key(&self) -> ResultKey {
            *self
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    #[test]
    fn in_order_results_pass_straight_through() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2)]);
        assert_eq!(agg.add(key(2015, 1, 1)), vec![key(2015, 1, 1)]);
        assert_eq!(agg.add(key(2015, 1, 2)), vec![key(2015, 1, 2)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn early_results_wait_for_predecessors() {
        let mut agg =
            ResultAggregator::new([key(2021, 2, 1), key(2015, 1, 2), key(2015, 1, 1)]);
        assert!(agg.add(key(2015, 1, 2)).is_empty());
        assert!(agg.add(key(2021, 2, 1)).is_empty());
        assert_eq!(
            agg.add(key(2015, 1, 1)),
            vec![key(2015, 1, 1), key(2015, 1, 2), key(2021, 2, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_returns_leftovers_sorted() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);
        agg.add(key(2015, 2, 1));
        agg.add(key(2015, 1, 2));
        assert!(!agg.is_complete());
        assert_eq!(agg.drain(), vec![key(2015, 1, 2), key(2015, 2, 1)]);
    }

    fn keys() -> impl Strategy<Value = Vec<ResultKey>> {
        prop::collection::btree_set((2015u16..2024, 1u8..=25, 1u8..=2), 1..40).prop_map(|set| {
            set.into_iter()
                .map(|(year, day, part)| key(year, day, part))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn any_arrival_order_is_released_sorted(
            (sorted, shuffled) in keys().prop_flat_map(|k| (Just(k.clone()), Just(k).prop_shuffle()))
        ) {
            let mut agg = ResultAggregator::new(shuffled.iter().copied());
            let mut released = Vec::new();
            for k in shuffled {
                released.extend(agg.add(k));
            }
            prop_assert!(agg.is_complete());
            prop_assert_eq!(released, sorted);
        }
    }
}
