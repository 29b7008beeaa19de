//! Geometric utility functions for soma geometry calculations.
//!
//! Norms and distances live in [`norms`]; areas, centroids and axis helpers in
//! [`measures`]. Both are re-exported here.

pub mod measures;
pub mod norms;

pub use measures::*;
pub use norms::*;
