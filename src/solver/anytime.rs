//! Anytime search orchestrator.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Deadline;
use crate::constructive::nearest_neighbor_tour;
use crate::evaluation::{tour_cost, Incumbent};
use crate::local_search::two_opt_improve;
use crate::models::{Tour, TspProblem};

/// Fixed PRNG seed so identical inputs replay identical restart sequences.
const RESTART_SEED: u64 = 42;

/// Anytime heuristic TSP solver.
///
/// Repeatedly seeds tours with the nearest-neighbor heuristic from varied
/// start nodes and improves each with 2-opt, tracking the best tour seen
/// across restarts. Every loop polls the deadline, so [`solve`] always
/// returns by the budget and the incumbent is a complete, valid tour at
/// any moment of interruption (or empty when the budget was too small for
/// even one construction).
///
/// The first restart starts at node 1; every later restart draws a
/// uniform random start node in `[1, N]`. Collisions across restarts are
/// permitted: this is a Monte-Carlo restart scheme, not a systematic
/// cover.
///
/// [`solve`]: AnytimeSolver::solve
///
/// # Examples
///
/// ```
/// use tsp_anytime::models::TspInstance;
/// use tsp_anytime::solver::AnytimeSolver;
///
/// let instance = TspInstance::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let mut solver = AnytimeSolver::new(&instance, 100);
/// solver.solve();
///
/// assert!((solver.best_cost() - 4.0).abs() < 1e-9);
/// assert!(solver.best_tour().expect("tour found").is_permutation_of(4));
/// assert!(solver.cycle_evaluations() >= 1);
/// ```
pub struct AnytimeSolver<'a, P: TspProblem> {
    problem: &'a P,
    budget: Duration,
    incumbent: Incumbent,
}

impl<'a, P: TspProblem> AnytimeSolver<'a, P> {
    /// Creates a solver with a wall-clock budget in milliseconds.
    ///
    /// A budget of 0 is legal: `solve` then returns almost immediately
    /// and the incumbent may stay empty.
    pub fn new(problem: &'a P, budget_millis: u64) -> Self {
        Self {
            problem,
            budget: Duration::from_millis(budget_millis),
            incumbent: Incumbent::new(),
        }
    }

    /// Runs the search until the deadline, then returns.
    ///
    /// The deadline is fixed at entry as `now + budget`. Termination is
    /// cooperative: construction and improvement poll the deadline and
    /// exit at their next check once it is breached.
    pub fn solve(&mut self) {
        let deadline = Deadline::new(self.budget);
        let n = self.problem.node_count();
        let mut rng = StdRng::seed_from_u64(RESTART_SEED);

        let mut first_start = true;
        let mut restarts: u64 = 0;

        while !deadline.is_expired() {
            let start_node = if first_start {
                first_start = false;
                1
            } else {
                rng.random_range(1..=n)
            };

            let mut tour = nearest_neighbor_tour(self.problem, start_node, &deadline);
            if deadline.is_expired() {
                break;
            }

            let nn_cost = tour_cost(&tour, self.problem);
            self.incumbent.offer(nn_cost, &tour);

            two_opt_improve(&mut tour, self.problem, &mut self.incumbent, &deadline);
            restarts += 1;
        }

        log::debug!(
            "search finished: {restarts} restarts, {} evaluations, best cost {:.2}",
            self.incumbent.evaluations(),
            self.incumbent.best_cost()
        );
    }

    /// Best cost found, `f64::INFINITY` if no tour ever completed.
    pub fn best_cost(&self) -> f64 {
        self.incumbent.best_cost()
    }

    /// A fresh copy of the best tour, or `None` if no tour ever completed.
    pub fn best_tour(&self) -> Option<Tour> {
        self.incumbent.best_tour()
    }

    /// Number of tours offered to the incumbent tracker.
    pub fn cycle_evaluations(&self) -> u64 {
        self.incumbent.evaluations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TspInstance;

    fn unit_square() -> TspInstance {
        TspInstance::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_solve_unit_square() {
        let instance = unit_square();
        let mut solver = AnytimeSolver::new(&instance, 50);
        solver.solve();
        assert!((solver.best_cost() - 4.0).abs() < 1e-9);
        let tour = solver.best_tour().expect("tour found");
        assert!(tour.is_permutation_of(4));
        assert!(solver.cycle_evaluations() >= 1);
    }

    #[test]
    fn test_zero_budget_returns_promptly() {
        let instance = unit_square();
        let mut solver = AnytimeSolver::new(&instance, 0);
        solver.solve();
        match solver.best_tour() {
            None => assert!(solver.best_cost().is_infinite()),
            Some(tour) => assert!(tour.is_permutation_of(4)),
        }
    }

    #[test]
    fn test_shortcut_edge_is_used() {
        // All distances 10 except d(1, 5) = 1: the optimal cycle spends
        // the shortcut exactly once, cost 4 * 10 - 10 + 1 = 37.
        let mut instance = TspInstance::new(5);
        for i in 1..=5 {
            for j in (i + 1)..=5 {
                instance.set_distance(i, j, 10.0);
            }
        }
        instance.set_distance(1, 5, 1.0);

        let mut solver = AnytimeSolver::new(&instance, 100);
        solver.solve();
        assert!((solver.best_cost() - 37.0).abs() < 1e-9);

        let tour = solver.best_tour().expect("tour found");
        let nodes = tour.nodes();
        let adjacent = (0..5).any(|p| {
            let a = nodes[p];
            let b = nodes[(p + 1) % 5];
            (a == 1 && b == 5) || (a == 5 && b == 1)
        });
        assert!(adjacent, "tour {nodes:?} must use the shortcut edge");
    }

    #[test]
    fn test_deterministic_best_cost() {
        let instance = TspInstance::from_points(&[
            (0.0, 0.0),
            (2.0, 7.0),
            (8.0, 3.0),
            (5.0, 9.0),
            (1.0, 4.0),
            (7.0, 7.0),
            (4.0, 1.0),
        ]);
        let mut a = AnytimeSolver::new(&instance, 100);
        a.solve();
        let mut b = AnytimeSolver::new(&instance, 100);
        b.solve();
        // Budget is generous enough for 2-opt convergence on 7 nodes, so
        // both runs reach the same local optimum from the same restarts.
        assert_eq!(a.best_cost(), b.best_cost());
        assert!(a.best_tour().expect("tour").is_permutation_of(7));
    }

    #[test]
    fn test_never_worse_than_first_greedy_tour() {
        // The first restart offers the node-1 greedy tour itself, so the
        // incumbent can only match or beat it.
        let instance = TspInstance::from_points(&[
            (0.0, 0.0),
            (1.0, 0.1),
            (2.0, 0.0),
            (1.0, 5.0),
            (0.5, 4.9),
            (1.5, 4.9),
        ]);
        let deadline = Deadline::new(Duration::from_secs(3600));
        let greedy = nearest_neighbor_tour(&instance, 1, &deadline);
        let greedy_cost = tour_cost(&greedy, &instance);

        let mut solver = AnytimeSolver::new(&instance, 100);
        solver.solve();
        assert!(solver.best_cost() <= greedy_cost);
        assert!(solver.best_tour().expect("tour").is_permutation_of(6));
    }
}
