//! # tsp-anytime
//!
//! Anytime heuristic solver for the traveling salesman problem: greedy
//! nearest-neighbor construction from varied start nodes, 2-opt local
//! search, and incumbent tracking under a hard wall-clock budget. The
//! search is cooperative: every inner loop polls the deadline, and the
//! solver always returns a complete, valid tour at any moment of
//! interruption.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Tour, TspProblem trait, TspInstance)
//! - [`distance`] — Dense distance matrix
//! - [`io`] — Instance file loading
//! - [`evaluation`] — Cycle cost evaluation and incumbent tracking
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt improvement
//! - [`solver`] — Deadline and the anytime search orchestrator

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;
