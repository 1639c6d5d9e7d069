//! Trait-based DP problem definition.

/// Dependency structure and combination step of a DP problem.
///
/// - `I`: index type for the DP cache
/// - `K`: value type stored in the cache
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index from the values of `deps(index)`,
    /// supplied in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
