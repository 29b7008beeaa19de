//! Vector norm and distance computations.
//!
//! This module provides numerically stable functions for computing norms and
//! distances of 3D vectors.

use crate::geometry::point::Point;

/// Sum of squares of the coordinates.
///
/// # Examples
///
/// ```
/// use soma_geometry::geometry::util::squared_norm;
///
/// assert_eq!(squared_norm(&[1.0, 2.0, 2.0]), 9.0);
/// ```
#[must_use]
pub fn squared_norm(coords: &[f64; 3]) -> f64 {
    coords.iter().fold(0.0, |acc, &x| acc + x * x)
}

/// Euclidean norm of a 3D vector.
///
/// # Numerical Stability
///
/// The coordinates are scaled by the largest absolute value before squaring,
/// which avoids overflow and underflow for very large or very small inputs
/// (soma radii of `1e-8` are common in malformed files).
///
/// # Examples
///
/// ```
/// use soma_geometry::geometry::util::hypot;
///
/// assert_eq!(hypot(&[1.0, 2.0, 2.0]), 3.0);
/// assert_eq!(hypot(&[0.0, 0.0, 0.0]), 0.0);
/// ```
#[must_use]
pub fn hypot(coords: &[f64; 3]) -> f64 {
    let max_abs = coords.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()));
    if max_abs == 0.0 {
        return 0.0;
    }

    let sum_of_scaled_squares = coords
        .iter()
        .map(|&x| {
            let scaled = x / max_abs;
            scaled * scaled
        })
        .sum::<f64>();

    max_abs * sum_of_scaled_squares.sqrt()
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point, b: &Point) -> f64 {
    hypot(&(*a - *b).coords())
}
