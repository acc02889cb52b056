//! Cycle cost evaluation.

use crate::models::{Tour, TspProblem};

/// Computes the total cycle cost of a tour in a single pass.
///
/// Sums `d(t[i], t[i+1])` for consecutive positions, then adds the wrap
/// edge `d(t[n-1], t[0])`. Accumulation is plain double precision in tour
/// order, matching the direction used by the 2-opt delta updates.
///
/// Tours with fewer than two nodes have cost zero.
///
/// # Examples
///
/// ```
/// use tsp_anytime::evaluation::tour_cost;
/// use tsp_anytime::models::{Tour, TspInstance};
///
/// let instance = TspInstance::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let tour = Tour::from_nodes(vec![1, 2, 3, 4]);
/// assert!((tour_cost(&tour, &instance) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_cost<P: TspProblem>(tour: &Tour, problem: &P) -> f64 {
    let n = tour.len();
    if n < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n - 1 {
        sum += problem.distance(tour[i], tour[i + 1]);
    }
    sum += problem.distance(tour[n - 1], tour[0]);
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TspInstance;

    fn triangle() -> TspInstance {
        let mut instance = TspInstance::new(3);
        instance.set_distance(1, 2, 1.0);
        instance.set_distance(2, 3, 1.0);
        instance.set_distance(1, 3, 1.0);
        instance
    }

    #[test]
    fn test_triangle_cost() {
        let tour = Tour::from_nodes(vec![1, 2, 3]);
        assert!((tour_cost(&tour, &triangle()) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_includes_wrap_edge() {
        let mut instance = TspInstance::new(3);
        instance.set_distance(1, 2, 1.0);
        instance.set_distance(2, 3, 2.0);
        instance.set_distance(3, 1, 4.0);
        let tour = Tour::from_nodes(vec![1, 2, 3]);
        assert!((tour_cost(&tour, &instance) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_matches_reversed_tour_when_symmetric() {
        let instance = TspInstance::from_points(&[(0.0, 0.0), (2.0, 1.0), (5.0, 3.0), (1.0, 4.0)]);
        let forward = Tour::from_nodes(vec![1, 3, 2, 4]);
        let backward = Tour::from_nodes(vec![4, 2, 3, 1]);
        let diff = tour_cost(&forward, &instance) - tour_cost(&backward, &instance);
        assert!(diff.abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_tours_cost_zero() {
        let instance = triangle();
        assert_eq!(tour_cost(&Tour::from_nodes(vec![]), &instance), 0.0);
        assert_eq!(tour_cost(&Tour::from_nodes(vec![2]), &instance), 0.0);
    }
}
