//! Dense distance matrix.

/// A dense n×n distance matrix stored in row-major order.
///
/// For 1-indexed TSP instances the matrix is allocated one row and column
/// larger than the node count so identifiers index it directly; row and
/// column 0 then stay unused.
///
/// # Examples
///
/// ```
/// use tsp_anytime::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set(1, 2, 5.0);
/// dm.set(2, 1, 5.0);
/// assert_eq!(dm.get(1, 2), 5.0);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
