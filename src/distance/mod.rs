//! Distance matrices.
//!
//! Provides a dense distance matrix for TSP instances.

mod matrix;

pub use matrix::DistanceMatrix;
