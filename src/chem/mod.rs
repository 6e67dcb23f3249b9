//! Reagent quantities and bounded solutions.

pub mod fixed_point;
pub mod solution;

pub use fixed_point::FixedPoint2;
pub use solution::{ReagentQuantity, Solution, SolutionError};
