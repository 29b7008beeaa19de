//! The ordered soma sample buffer.
//!
//! A [`SampleBuffer`] owns the `(x, y, z, radius)` rows a morphology reader
//! extracted for the soma section. Row order is significant: it is the stack
//! order for cylinder somas and the winding for contours. An empty buffer is
//! valid and denotes "no soma".
//!
//! Cloning a buffer copies every row; two buffers never share storage.

#![forbid(unsafe_code)]

use crate::geometry::point::Point;
use crate::geometry::sample::{COL_COUNT, Sample, SampleError};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::slice;

/// Owned, validated, ordered sequence of soma samples.
///
/// # Examples
///
/// ```
/// use soma_geometry::core::sample_buffer::SampleBuffer;
///
/// let buffer = SampleBuffer::from_rows(&[[0.0, 0.0, 0.0, 1.0], [0.0, 5.0, 0.0, 1.0]]).unwrap();
/// assert_eq!(buffer.shape(), (2, 4));
///
/// let empty = SampleBuffer::default();
/// assert_eq!(empty.shape(), (0, 4));
/// assert_eq!(empty.iter().count(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct SampleBuffer {
    samples: Vec<Sample>,
}

impl SampleBuffer {
    /// Builds a buffer from samples, validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first [`SampleError`] found, tagged with its row index.
    pub fn new(samples: Vec<Sample>) -> Result<Self, SampleError> {
        for (index, sample) in samples.iter().enumerate() {
            sample.validate(index)?;
        }
        Ok(Self { samples })
    }

    /// Builds a buffer from `[x, y, z, radius]` rows.
    ///
    /// # Errors
    ///
    /// See [`SampleBuffer::new`].
    pub fn from_rows(rows: &[[f64; COL_COUNT]]) -> Result<Self, SampleError> {
        Self::new(rows.iter().copied().map(Sample::from_array).collect())
    }

    /// Builds a buffer from xyz positions and per-point *diameters*.
    ///
    /// Readers commonly store soma widths as diameters; the stored radius is
    /// half of each diameter.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::LengthMismatch`] when the two slices differ in
    /// length, otherwise see [`SampleBuffer::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use soma_geometry::core::sample_buffer::SampleBuffer;
    ///
    /// let buffer = SampleBuffer::from_diameters(
    ///     &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]],
    ///     &[1.0, 1.0, 1.0],
    /// )
    /// .unwrap();
    /// assert_eq!(buffer.to_rows()[1], [1.0, 1.0, 1.0, 0.5]);
    /// ```
    pub fn from_diameters(points: &[[f64; 3]], diameters: &[f64]) -> Result<Self, SampleError> {
        if points.len() != diameters.len() {
            return Err(SampleError::LengthMismatch {
                points: points.len(),
                diameters: diameters.len(),
            });
        }
        Self::new(
            points
                .iter()
                .zip(diameters)
                .map(|(&p, &d)| Sample::from_diameter(p, d))
                .collect(),
        )
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(rows, columns)`; the column count is always [`COL_COUNT`].
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.samples.len(), COL_COUNT)
    }

    /// The samples in stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Positions of all samples in stored order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.samples.iter().map(Sample::position).collect()
    }

    /// Copies the buffer out as `[x, y, z, radius]` rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<[f64; COL_COUNT]> {
        self.samples.iter().map(Sample::to_array).collect()
    }

    /// Lazy iteration over `[x, y, z, radius]` rows in stored order.
    ///
    /// Every call starts a fresh pass over the buffer.
    #[must_use]
    pub fn iter(&self) -> RowIter<'_> {
        RowIter {
            inner: self.samples.iter(),
        }
    }
}

impl TryFrom<Vec<Sample>> for SampleBuffer {
    type Error = SampleError;

    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

impl From<SampleBuffer> for Vec<Sample> {
    fn from(buffer: SampleBuffer) -> Self {
        buffer.samples
    }
}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = [f64; COL_COUNT];
    type IntoIter = RowIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rows of a [`SampleBuffer`].
#[derive(Clone, Debug)]
pub struct RowIter<'a> {
    inner: slice::Iter<'a, Sample>,
}

impl Iterator for RowIter<'_> {
    type Item = [f64; COL_COUNT];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Sample::to_array)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for RowIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Sample::to_array)
    }
}

impl ExactSizeIterator for RowIter<'_> {}

impl FusedIterator for RowIter<'_> {}
