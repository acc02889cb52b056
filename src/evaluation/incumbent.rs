//! Incumbent (best-so-far) tour tracking.

use crate::models::Tour;

/// Tracks the best-cost tour seen so far and counts every evaluation.
///
/// Each [`offer`](Incumbent::offer) increments the evaluation counter
/// whether or not the offered tour improves on the incumbent. Comparison
/// is strict `<` with no tolerance; the acceptance tolerance lives in the
/// 2-opt improver, not here. Improving tours are stored as defensive
/// copies so later mutation of the working tour cannot corrupt the record.
///
/// # Examples
///
/// ```
/// use tsp_anytime::evaluation::Incumbent;
/// use tsp_anytime::models::Tour;
///
/// let mut incumbent = Incumbent::new();
/// assert!(incumbent.best_cost().is_infinite());
///
/// let tour = Tour::from_nodes(vec![1, 2, 3]);
/// assert!(incumbent.offer(10.0, &tour));
/// assert!(!incumbent.offer(10.0, &tour)); // not strictly better
/// assert_eq!(incumbent.evaluations(), 2);
/// assert_eq!(incumbent.best_cost(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Incumbent {
    best_cost: f64,
    best_tour: Option<Tour>,
    evaluations: u64,
}

impl Incumbent {
    /// Creates an empty incumbent: infinite cost, no tour, zero evaluations.
    pub fn new() -> Self {
        Self {
            best_cost: f64::INFINITY,
            best_tour: None,
            evaluations: 0,
        }
    }

    /// Offers a tour with its cost; returns `true` if it became the incumbent.
    pub fn offer(&mut self, cost: f64, tour: &Tour) -> bool {
        self.evaluations += 1;
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_tour = Some(tour.clone());
            true
        } else {
            false
        }
    }

    /// Best cost seen so far, `f64::INFINITY` if no tour was ever offered.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// A copy of the best tour, or `None` if no tour was ever offered.
    pub fn best_tour(&self) -> Option<Tour> {
        self.best_tour.clone()
    }

    /// Number of tours offered so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}
