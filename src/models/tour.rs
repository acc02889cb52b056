//! Tour representation.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A Hamiltonian cycle expressed as an ordered sequence of node identifiers.
///
/// Node identifiers are 1-based: a tour over `n` nodes holds a permutation
/// of `{1, …, n}`. The cycle wraps implicitly from the last node back to
/// the first.
///
/// # Examples
///
/// ```
/// use tsp_anytime::models::Tour;
///
/// let tour = Tour::from_nodes(vec![1, 3, 2, 4]);
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour[0], 1);
/// assert!(tour.is_permutation_of(4));
/// assert!(!tour.is_permutation_of(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Creates a tour from an ordered node sequence.
    pub fn from_nodes(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The ordered node sequence.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Consumes the tour, returning the node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Node following position `pos`, wrapping from the last position to 0.
    pub fn successor(&self, pos: usize) -> usize {
        self.nodes[(pos + 1) % self.nodes.len()]
    }

    /// Reverses the contiguous segment `[from..=to]` in place.
    ///
    /// This is the 2-opt move primitive: reversing the segment between two
    /// edges replaces those edges with their crossing counterparts.
    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        self.nodes[from..=to].reverse();
    }

    /// Returns `true` if the tour visits every node in `{1, …, n}` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.nodes.len() != n {
            return false;
        }
        let mut seen = vec![false; n + 1];
        for &node in &self.nodes {
            if node < 1 || node > n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}

impl Index<usize> for Tour {
    type Output = usize;

    fn index(&self, pos: usize) -> &usize {
        &self.nodes[pos]
    }
}
