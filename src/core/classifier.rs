//! Soma classification.
//!
//! Maps a format tag and a sample buffer to the soma model that applies.
//! Classification is a pure function of its inputs.
//!
//! # SWC-like input
//!
//! | Samples | Classification |
//! |---|---|
//! | 0 | [`Classification::Empty`] |
//! | 1 | [`Classification::SinglePoint`] |
//! | 3, first sample between the other two | [`Classification::NeuromorphoThreePointCylinders`] |
//! | 3, first sample at an end, every radius zero | [`SomaError::MalformedSoma`] |
//! | 2, 3 (first sample at an end), 4+ | [`Classification::Cylinders`] |
//!
//! A NeuroMorpho three-point soma is a center sample with one sample on each
//! side of it. When the first sample is instead the end of a chain, the three
//! samples are a plain cylinder stack.
//!
//! # Contour-like input
//!
//! | Samples | Classification |
//! |---|---|
//! | 0 | [`Classification::Empty`] |
//! | 1, 2 | [`SomaError::InvalidContourSoma`] |
//! | 3+ | [`Classification::SimpleContour`] |

#![forbid(unsafe_code)]

use crate::core::config::SomaConfig;
use crate::core::format::{SomaFormat, SomaKind};
use crate::core::sample_buffer::SampleBuffer;
use crate::core::validation::{SomaError, check_contour_count, describe_samples};
use crate::geometry::sample::Sample;

/// Outcome of classifying a soma sample buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// No samples.
    Empty,
    /// A single sample.
    SinglePoint,
    /// Three samples centred on the first.
    NeuromorphoThreePointCylinders {
        /// Whether the samples satisfy the NeuroMorpho convention exactly.
        conforms: bool,
    },
    /// A stack of two or more samples.
    Cylinders,
    /// A contour outline.
    SimpleContour,
}

impl Classification {
    /// The soma kind this classification selects.
    #[must_use]
    pub const fn kind(&self) -> SomaKind {
        match self {
            Self::Empty => SomaKind::Empty,
            Self::SinglePoint => SomaKind::SinglePoint,
            Self::NeuromorphoThreePointCylinders { .. } => SomaKind::NeuromorphoThreePointCylinders,
            Self::Cylinders => SomaKind::Cylinders,
            Self::SimpleContour => SomaKind::SimpleContour,
        }
    }
}

/// Classifies samples read from a file of the given format.
///
/// # Errors
///
/// Returns [`SomaError::InvalidContourSoma`] for a contour with one or two
/// samples, and [`SomaError::MalformedSoma`] for three SWC samples that all
/// have a zero radius but do not form a centred triplet.
///
/// # Examples
///
/// ```
/// use soma_geometry::core::classifier::{classify, Classification};
/// use soma_geometry::core::config::SomaConfig;
/// use soma_geometry::core::format::SomaFormat;
/// use soma_geometry::core::sample_buffer::SampleBuffer;
///
/// let samples = SampleBuffer::from_rows(&[
///     [0.0, 0.0, 0.0, 44.0],
///     [0.0, -44.0, 0.0, 44.0],
///     [0.0, 44.0, 0.0, 44.0],
/// ])
/// .unwrap();
/// let classification = classify(SomaFormat::Swc, &samples, &SomaConfig::default()).unwrap();
/// assert_eq!(
///     classification,
///     Classification::NeuromorphoThreePointCylinders { conforms: true }
/// );
/// ```
pub fn classify(
    format: SomaFormat,
    samples: &SampleBuffer,
    config: &SomaConfig,
) -> Result<Classification, SomaError> {
    let slice = samples.as_slice();
    let classification = match format {
        SomaFormat::Swc => match slice.len() {
            0 => Classification::Empty,
            1 => Classification::SinglePoint,
            3 if is_centered_triplet(slice) => Classification::NeuromorphoThreePointCylinders {
                conforms: conforms_to_three_point_convention(slice, config.convention_tolerance),
            },
            3 if slice
                .iter()
                .all(|s| s.radius() <= config.zero_radius_epsilon) =>
            {
                return Err(SomaError::MalformedSoma {
                    details: format!("Zero radius. {}", describe_samples(slice)),
                });
            }
            _ => Classification::Cylinders,
        },
        SomaFormat::Contour => {
            check_contour_count(slice.len())?;
            if slice.is_empty() {
                Classification::Empty
            } else {
                Classification::SimpleContour
            }
        }
    };

    tracing::debug!(
        format = %format,
        samples = slice.len(),
        kind = %classification.kind(),
        "classified soma"
    );
    Ok(classification)
}

/// Classifies samples under a raw format tag such as `"swc"` or `"asc"`.
///
/// # Errors
///
/// Returns [`SomaError::UnsupportedSomaKind`] carrying `tag` verbatim when the
/// tag is unknown, otherwise see [`classify`].
pub fn classify_tag(
    tag: &str,
    samples: &SampleBuffer,
    config: &SomaConfig,
) -> Result<Classification, SomaError> {
    let format: SomaFormat = tag.parse()?;
    classify(format, samples, config)
}

/// Validates samples against a soma kind declared by the reader.
///
/// # Errors
///
/// Returns [`SomaError::InvalidContourSoma`] for a one- or two-sample contour
/// and [`SomaError::SampleCountMismatch`] for any other count the kind does not
/// accept.
pub fn classify_declared(
    kind: SomaKind,
    samples: &SampleBuffer,
    config: &SomaConfig,
) -> Result<Classification, SomaError> {
    let slice = samples.as_slice();
    if kind == SomaKind::SimpleContour {
        check_contour_count(slice.len())?;
    }
    if !kind.accepts_sample_count(slice.len()) {
        return Err(SomaError::SampleCountMismatch {
            kind,
            expected: kind.expected_samples(),
            actual: slice.len(),
        });
    }

    Ok(match kind {
        SomaKind::Empty => Classification::Empty,
        SomaKind::SinglePoint => Classification::SinglePoint,
        SomaKind::NeuromorphoThreePointCylinders => {
            Classification::NeuromorphoThreePointCylinders {
                conforms: conforms_to_three_point_convention(slice, config.convention_tolerance),
            }
        }
        SomaKind::Cylinders => Classification::Cylinders,
        SomaKind::SimpleContour => Classification::SimpleContour,
    })
}

/// Whether the first of three samples sits between the other two.
///
/// True when the offsets from sample 0 to samples 1 and 2 do not point the
/// same way (non-positive dot product). Coincident samples count as centred.
#[must_use]
pub fn is_centered_triplet(samples: &[Sample]) -> bool {
    let [center, first, second] = samples else {
        return false;
    };
    let d1 = first.position() - center.position();
    let d2 = second.position() - center.position();
    d1.dot(&d2) <= 0.0
}

/// Checks three samples against the NeuroMorpho three-point convention.
///
/// The convention describes the soma as a center sample `(x, y, z, r)` and
/// two samples at `∓r` along a single axis, all with radius `r`:
///
/// ```text
/// x   y      z   r
/// x   y - r  z   r
/// x   y + r  z   r
/// ```
///
/// Any axis is accepted. Comparisons use `tolerance` relative to the largest
/// offset or radius involved, so tiny (`1e-8`) somas are judged on their own
/// scale.
#[must_use]
pub fn conforms_to_three_point_convention(samples: &[Sample], tolerance: f64) -> bool {
    let [center, first, second] = samples else {
        return false;
    };
    let r = center.radius();
    let d1 = (first.position() - center.position()).coords();
    let d2 = (second.position() - center.position()).coords();

    let scale = d1
        .iter()
        .chain(d2.iter())
        .map(|c| c.abs())
        .chain(samples.iter().map(Sample::radius))
        .fold(0.0, f64::max);
    let abs_tol = tolerance * scale;
    let close = |a: f64, b: f64| (a - b).abs() <= abs_tol;

    if !(close(first.radius(), r) && close(second.radius(), r)) {
        return false;
    }
    if !d1.iter().zip(d2.iter()).all(|(&a, &b)| close(a, -b)) {
        return false;
    }

    let mut off_axis = d1.iter().filter(|&&c| !close(c, 0.0));
    match (off_axis.next(), off_axis.next()) {
        (Some(&offset), None) => close(offset.abs(), r),
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
