//! Anytime search orchestration.
//!
//! - [`Deadline`] — Absolute monotonic deadline polled at every suspension point
//! - [`AnytimeSolver`] — Nearest-neighbor restarts with 2-opt improvement

mod anytime;
mod deadline;

pub use anytime::AnytimeSolver;
pub use deadline::Deadline;
