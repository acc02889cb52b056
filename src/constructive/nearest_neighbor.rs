//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a chosen node, always visit the
//! nearest unvisited node. If the deadline expires mid-construction, the
//! remaining positions are filled with unvisited nodes in ascending
//! identifier order so a complete permutation is always returned.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! The simplest constructive heuristic for TSP. Solution quality is
//! typically 15-25% above optimal, but it provides a fast seed for local
//! search.

use crate::models::{Tour, TspProblem};
use crate::solver::Deadline;

/// Constructs a tour by greedy nearest-unvisited selection from `start`.
///
/// Ties in the minimum-distance selection break toward the lowest node
/// identifier (strictly-less comparison over an ascending scan). The
/// returned tour contains every node in `[1, N]` exactly once even if the
/// deadline expires mid-construction.
///
/// # Arguments
///
/// * `problem` — Distance oracle
/// * `start` — Start node in `[1, N]`, placed at position 0
/// * `deadline` — Polled before each greedy placement
///
/// # Examples
///
/// ```
/// use tsp_anytime::constructive::nearest_neighbor_tour;
/// use tsp_anytime::models::TspInstance;
/// use tsp_anytime::solver::Deadline;
/// use std::time::Duration;
///
/// let instance = TspInstance::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let deadline = Deadline::new(Duration::from_secs(1));
/// let tour = nearest_neighbor_tour(&instance, 1, &deadline);
/// assert_eq!(tour.nodes(), &[1, 2, 3]);
/// ```
pub fn nearest_neighbor_tour<P: TspProblem>(
    problem: &P,
    start: usize,
    deadline: &Deadline,
) -> Tour {
    let n = problem.node_count();
    debug_assert!((1..=n).contains(&start), "start node {start} out of range");

    let mut nodes = vec![0usize; n];
    let mut used = vec![false; n + 1];

    let mut current = start;
    used[current] = true;
    nodes[0] = current;

    let mut pos = 1;
    while pos < n {
        if deadline.is_expired() {
            // Fallback fill: complete the permutation with the remaining
            // nodes in ascending identifier order.
            for slot in nodes.iter_mut().skip(pos) {
                for v in 1..=n {
                    if !used[v] {
                        *slot = v;
                        used[v] = true;
                        break;
                    }
                }
            }
            break;
        }

        let mut next = 0usize;
        let mut best_distance = f64::INFINITY;
        for v in 1..=n {
            if !used[v] {
                let d = problem.distance(current, v);
                if d < best_distance {
                    best_distance = d;
                    next = v;
                }
            }
        }
        debug_assert!(next != 0, "no unvisited node found");

        nodes[pos] = next;
        used[next] = true;
        current = next;
        pos += 1;
    }

    Tour::from_nodes(nodes)
}
