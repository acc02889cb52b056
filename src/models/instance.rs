//! Concrete TSP instance backed by a dense distance matrix.

use super::TspProblem;
use crate::distance::DistanceMatrix;

/// A TSP instance: a node count plus a dense symmetric distance table.
///
/// Nodes are identified by integers in `[1, N]`. The backing matrix is
/// `(N+1)×(N+1)` so that node identifiers index it directly; row and
/// column 0 are unused.
///
/// # Examples
///
/// ```
/// use tsp_anytime::models::{TspInstance, TspProblem};
///
/// let mut instance = TspInstance::new(3);
/// instance.set_distance(1, 2, 4.0);
/// instance.set_distance(2, 3, 5.0);
/// instance.set_distance(1, 3, 6.0);
///
/// assert_eq!(instance.node_count(), 3);
/// assert_eq!(instance.distance(1, 2), 4.0);
/// assert_eq!(instance.distance(2, 1), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    node_count: usize,
    distances: DistanceMatrix,
}

impl TspInstance {
    /// Creates an instance over `node_count` nodes with all distances zero.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            distances: DistanceMatrix::new(node_count + 1),
        }
    }

    /// Creates an instance from an existing matrix.
    ///
    /// Returns `None` unless the matrix is `(node_count + 1)` on a side.
    pub fn from_matrix(node_count: usize, distances: DistanceMatrix) -> Option<Self> {
        if distances.size() != node_count + 1 {
            return None;
        }
        Some(Self {
            node_count,
            distances,
        })
    }

    /// Creates a Euclidean instance from planar coordinates.
    ///
    /// `points[k]` becomes node `k + 1`.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut instance = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                instance.set_distance(i + 1, j + 1, (dx * dx + dy * dy).sqrt());
            }
        }
        instance
    }

    /// Sets the distance between two nodes in both directions.
    pub fn set_distance(&mut self, i: usize, j: usize, d: f64) {
        debug_assert!(d >= 0.0, "negative distance between {i} and {j}");
        self.distances.set(i, j, d);
        self.distances.set(j, i, d);
    }
}

impl TspProblem for TspInstance {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }
}
