//! Data and operations on 3D points.
//!
//! Soma samples live in ordinary Euclidean 3-space, so [`Point`] is a thin,
//! `Copy` wrapper around an `[f64; 3]` with the handful of vector operations
//! the soma engines need.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

// =============================================================================
// AXIS
// =============================================================================

/// One of the three Cartesian axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The x axis (column 0).
    X,
    /// The y axis (column 1).
    Y,
    /// The z axis (column 2).
    Z,
}

impl Axis {
    /// All axes in column order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Column index of this axis in a sample row.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// Errors raised when a point carries non-finite coordinates.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointValidationError {
    /// A coordinate value is NaN or infinite.
    #[error("Invalid coordinate on axis {axis}: {value}")]
    InvalidCoordinate {
        /// Axis of the invalid coordinate.
        axis: Axis,
        /// Value of the invalid coordinate, as a string.
        value: String,
    },
}

/// A position in 3D space.
///
/// Points are immutable once created; derive a new one with the arithmetic
/// operators or [`Point::midpoint`].
///
/// # Examples
///
/// ```
/// use soma_geometry::geometry::point::{Axis, Point};
///
/// let p = Point::new([1.0, 2.0, 3.0]);
/// assert_eq!(p.coord(Axis::Y), 2.0);
/// assert_eq!(p - p, Point::origin());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: [f64; 3],
}

impl Point {
    /// Creates a point from `[x, y, z]`.
    #[must_use]
    pub const fn new(coords: [f64; 3]) -> Self {
        Self { coords }
    }

    /// The origin `(0, 0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self { coords: [0.0; 3] }
    }

    /// Returns the coordinates as `[x, y, z]`.
    #[must_use]
    pub const fn coords(&self) -> [f64; 3] {
        self.coords
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn coord(&self, axis: Axis) -> f64 {
        self.coords[axis.index()]
    }

    /// Dot product with another point taken as a vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Uniform scaling of the position vector.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.coords.map(|c| c * factor))
    }

    /// Midpoint of the segment between `self` and `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other).scale(0.5)
    }

    /// Checks that every coordinate is finite.
    ///
    /// # Errors
    ///
    /// Returns [`PointValidationError::InvalidCoordinate`] for the first
    /// NaN or infinite coordinate.
    pub fn validate(&self) -> Result<(), PointValidationError> {
        for axis in Axis::ALL {
            let value = self.coord(axis);
            if !value.is_finite() {
                return Err(PointValidationError::InvalidCoordinate {
                    axis,
                    value: format!("{value:?}"),
                });
            }
        }
        Ok(())
    }
}

impl From<[f64; 3]> for Point {
    fn from(coords: [f64; 3]) -> Self {
        Self::new(coords)
    }
}

impl From<Point> for [f64; 3] {
    fn from(point: Point) -> Self {
        point.coords
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let [x, y, z] = self.coords;
        let [a, b, c] = rhs.coords;
        Self::new([x + a, y + b, z + c])
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let [x, y, z] = self.coords;
        let [a, b, c] = rhs.coords;
        Self::new([x - a, y - b, z - c])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.coords;
        write!(f, "[{x}, {y}, {z}]")
    }
}

// =============================================================================
// TESTS
// =============================================================================
