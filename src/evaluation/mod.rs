//! Tour cost evaluation and incumbent tracking.

mod evaluator;
mod incumbent;

pub use evaluator::tour_cost;
pub use incumbent::Incumbent;
