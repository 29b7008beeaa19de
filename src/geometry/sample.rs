//! Soma samples: a position plus a radius.
//!
//! A [`Sample`] is one row of the `(x, y, z, radius)` table a morphology reader
//! extracts for the soma section. The column layout is fixed; see [`Column`]
//! and [`COL_COUNT`].

#![forbid(unsafe_code)]

use crate::geometry::point::{Point, PointValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of columns in a sample row: `x, y, z, radius`.
pub const COL_COUNT: usize = 4;

/// Column labels for a sample row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// x coordinate.
    X = 0,
    /// y coordinate.
    Y = 1,
    /// z coordinate.
    Z = 2,
    /// Radius.
    R = 3,
}

/// Errors raised when a sample, or a sequence of samples, is not usable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// A coordinate of the sample at `index` is NaN or infinite.
    #[error("Sample {index} has an invalid position: {source}")]
    InvalidPosition {
        /// Row index of the offending sample.
        index: usize,
        /// Underlying coordinate error.
        #[source]
        source: PointValidationError,
    },
    /// The radius of the sample at `index` is negative or not finite.
    #[error("Sample {index} has an invalid radius: {radius}")]
    InvalidRadius {
        /// Row index of the offending sample.
        index: usize,
        /// The rejected radius, as a string.
        radius: String,
    },
    /// Points and diameters were supplied with different lengths.
    #[error("Got {points} soma points but {diameters} diameters")]
    LengthMismatch {
        /// Number of xyz points.
        points: usize,
        /// Number of diameters.
        diameters: usize,
    },
}

/// One soma sample: a 3D position and a radius.
///
/// # Examples
///
/// ```
/// use soma_geometry::geometry::sample::Sample;
///
/// let s = Sample::new([11.0, 22.0, 33.0], 44.0);
/// assert_eq!(s.to_array(), [11.0, 22.0, 33.0, 44.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    position: Point,
    radius: f64,
}

impl Sample {
    /// Creates a sample from `[x, y, z]` and a radius.
    #[must_use]
    pub const fn new(position: [f64; 3], radius: f64) -> Self {
        Self {
            position: Point::new(position),
            radius,
        }
    }

    /// Creates a sample from a `[x, y, z, r]` row.
    #[must_use]
    pub const fn from_array(row: [f64; COL_COUNT]) -> Self {
        let [x, y, z, r] = row;
        Self::new([x, y, z], r)
    }

    /// Creates a sample from a position and a *diameter*.
    #[must_use]
    pub fn from_diameter(position: [f64; 3], diameter: f64) -> Self {
        Self::new(position, diameter / 2.0)
    }

    /// The sample position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// The sample radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Value of a single column.
    #[must_use]
    pub const fn get(&self, column: Column) -> f64 {
        match column {
            Column::X => self.position.coords()[0],
            Column::Y => self.position.coords()[1],
            Column::Z => self.position.coords()[2],
            Column::R => self.radius,
        }
    }

    /// Returns the `[x, y, z, r]` row.
    #[must_use]
    pub const fn to_array(&self) -> [f64; COL_COUNT] {
        let [x, y, z] = self.position.coords();
        [x, y, z, self.radius]
    }

    /// Validates the sample as row `index` of a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidPosition`] for non-finite coordinates and
    /// [`SampleError::InvalidRadius`] for a negative or non-finite radius.
    pub fn validate(&self, index: usize) -> Result<(), SampleError> {
        self.position
            .validate()
            .map_err(|source| SampleError::InvalidPosition { index, source })?;
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SampleError::InvalidRadius {
                index,
                radius: format!("{:?}", self.radius),
            });
        }
        Ok(())
    }
}

impl From<[f64; COL_COUNT]> for Sample {
    fn from(row: [f64; COL_COUNT]) -> Self {
        Self::from_array(row)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, r] = self.to_array();
        write!(f, "[{x}, {y}, {z}, {r}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_columns() {
        let s = Sample::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.get(Column::X), 1.0);
        assert_eq!(s.get(Column::Y), 2.0);
        assert_eq!(s.get(Column::Z), 3.0);
        assert_eq!(s.get(Column::R), 4.0);
        assert_eq!(s.position(), Point::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_sample_from_diameter_halves() {
        let s = Sample::from_diameter([0.0, 0.0, 0.0], 1.0);
        assert_eq!(s.radius(), 0.5);
    }

    #[test]
    fn test_sample_validate() {
        assert!(Sample::new([0.0; 3], 0.0).validate(0).is_ok());

        let err = Sample::new([0.0; 3], -1.0).validate(3).unwrap_err();
        assert!(matches!(err, SampleError::InvalidRadius { index: 3, .. }));

        let err = Sample::new([0.0, 0.0, f64::NAN], 1.0).validate(1).unwrap_err();
        assert!(matches!(err, SampleError::InvalidPosition { index: 1, .. }));
        assert!(err.to_string().contains("Sample 1"));
    }
}
