//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — Deadline-aware 2-opt edge reversal

mod two_opt;

pub use two_opt::two_opt_improve;
