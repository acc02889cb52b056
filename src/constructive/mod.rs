//! Constructive heuristics for seeding tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor construction with
//!   a deadline-aware fallback completion, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_tour;
