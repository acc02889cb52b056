//! Domain model types for the traveling salesman problem.
//!
//! Provides the core abstractions: tours as node permutations, the
//! distance-oracle problem trait, and a concrete matrix-backed instance.

mod instance;
mod problem;
mod tour;

pub use instance::TspInstance;
pub use problem::TspProblem;
pub use tour::Tour;
