//! TSP problem trait.

/// Defines a traveling salesman problem instance.
///
/// This trait is the distance oracle consumed by the solver: it exposes the
/// node count and pairwise distances. Node identifiers are in `[1, N]`;
/// identifier 0 is never valid. Distances are non-negative and assumed
/// symmetric (the 2-opt delta formula relies on `d(i, j) = d(j, i)`).
///
/// Self-distances `d(i, i)` are never queried by the solver, so
/// implementations need not define them.
///
/// # Examples
///
/// ```
/// use tsp_anytime::models::TspProblem;
///
/// struct Ring(usize);
///
/// impl TspProblem for Ring {
///     fn node_count(&self) -> usize { self.0 }
///     fn distance(&self, from: usize, to: usize) -> f64 {
///         if from == to { 0.0 } else { 1.0 }
///     }
/// }
///
/// let ring = Ring(5);
/// assert_eq!(ring.node_count(), 5);
/// assert_eq!(ring.distance(1, 5), 1.0);
/// ```
pub trait TspProblem: Send + Sync {
    /// Total node count, at least 2.
    fn node_count(&self) -> usize;

    /// Travel distance from node `from` to node `to`, both in `[1, N]`.
    fn distance(&self, from: usize, to: usize) -> f64;
}
