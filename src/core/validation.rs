//! Soma errors, diagnostics and the warn-or-fail policy.
//!
//! Malformed soma geometry is handled in one of two ways:
//!
//! - **fail-hard**: construction returns a [`SomaError`] and no soma is built;
//! - **warn-and-continue**: construction succeeds with best-effort geometry
//!   and a [`SomaDiagnostic`] is attached to the soma and forwarded to the
//!   caller's [`DiagnosticSink`](crate::core::traits::DiagnosticSink).
//!
//! Every decision is made eagerly while the soma is being built.
//!
//! | Condition | Outcome |
//! |---|---|
//! | unknown format or kind tag | [`SomaError::UnsupportedSomaKind`] |
//! | contour with 1 or 2 samples | [`SomaError::InvalidContourSoma`] |
//! | three-point soma, convention holds, zero radius | [`SomaDiagnostic::ZeroRadius`] |
//! | three-point soma, convention violated, zero radius | [`SomaError::MalformedSoma`] |
//! | three-point soma, convention violated, non-zero radius | [`SomaDiagnostic::NonConformingThreePoint`] (or [`SomaError::MalformedSoma`] in strict mode) |

#![forbid(unsafe_code)]

use crate::core::config::SomaConfig;
use crate::core::format::SomaKind;
use crate::geometry::sample::{Sample, SampleError};
use std::fmt;
use thiserror::Error;

/// Errors that prevent a soma from being built or a property from being
/// computed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SomaError {
    /// The format or soma-kind tag is not recognised.
    #[error("No soma constructor for soma type: {tag}")]
    UnsupportedSomaKind {
        /// The raw tag, verbatim.
        tag: String,
    },
    /// A contour soma needs at least three outline points.
    #[error("Invalid contour soma: a contour needs at least 3 points, got {count}")]
    InvalidContourSoma {
        /// Number of samples supplied.
        count: usize,
    },
    /// Three-point soma geometry that cannot be salvaged.
    #[error("Malformed soma: the soma does not conform the three point soma spec. {details}")]
    MalformedSoma {
        /// What was wrong with the samples.
        details: String,
    },
    /// A property is undefined for this kind of soma.
    #[error("Soma {property} is not computable for {kind}")]
    NotComputable {
        /// Kind of the soma that was queried.
        kind: SomaKind,
        /// Name of the requested property.
        property: &'static str,
    },
    /// A declared soma kind was given the wrong number of samples.
    #[error("{kind} expects {expected} samples, got {actual}")]
    SampleCountMismatch {
        /// The declared kind.
        kind: SomaKind,
        /// Sample count the kind accepts.
        expected: &'static str,
        /// Sample count supplied.
        actual: usize,
    },
    /// A radius override was negative or not finite.
    #[error("Invalid soma radius: {radius}")]
    InvalidRadius {
        /// The rejected radius, as a string.
        radius: String,
    },
    /// A sample row is unusable.
    #[error(transparent)]
    InvalidSample(#[from] SampleError),
}

/// Non-fatal findings about soma geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SomaDiagnostic {
    /// The samples follow the soma convention but every radius is
    /// effectively zero.
    ZeroRadius {
        /// Kind of the affected soma.
        kind: SomaKind,
    },
    /// Three samples that deviate from the NeuroMorpho convention; geometry
    /// was computed on a best-effort basis.
    NonConformingThreePoint {
        /// The offending samples.
        details: String,
    },
}

impl fmt::Display for SomaDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRadius { kind } => write!(f, "Zero radius for {kind}"),
            Self::NonConformingThreePoint { details } => write!(
                f,
                "The soma does not conform the three point soma spec. \
                 The only valid neuro-morpho soma is a center sample (x, y, z, r) with two \
                 samples offset by -r and +r along a single axis, all of radius r. {details}"
            ),
        }
    }
}

/// Result of applying the policy to one malformed-geometry check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// Nothing to report.
    Accept,
    /// Build the soma and report the diagnostic.
    Warn(SomaDiagnostic),
    /// Refuse to build the soma.
    Fail(SomaError),
}

/// Decides the outcome for a three-sample NeuroMorpho soma.
///
/// `conforms` is the result of the convention check performed by the
/// classifier. A radius counts as zero when it is at most
/// [`SomaConfig::zero_radius_epsilon`].
///
/// # Examples
///
/// ```
/// use soma_geometry::core::config::SomaConfig;
/// use soma_geometry::core::validation::{three_point_policy, PolicyOutcome};
/// use soma_geometry::geometry::sample::Sample;
///
/// let samples = [
///     Sample::new([0.0, 0.0, 0.0], 1e-8),
///     Sample::new([0.0, -44.0, 0.0], 1e-8),
///     Sample::new([0.0, 44.0, 0.0], 1e-8),
/// ];
/// let outcome = three_point_policy(false, &samples, &SomaConfig::default());
/// assert!(matches!(outcome, PolicyOutcome::Fail(_)));
/// ```
#[must_use]
pub fn three_point_policy(
    conforms: bool,
    samples: &[Sample],
    config: &SomaConfig,
) -> PolicyOutcome {
    let zero_radius = samples
        .iter()
        .all(|s| s.radius() <= config.zero_radius_epsilon);

    match (conforms, zero_radius) {
        (true, false) => PolicyOutcome::Accept,
        (true, true) => PolicyOutcome::Warn(SomaDiagnostic::ZeroRadius {
            kind: SomaKind::NeuromorphoThreePointCylinders,
        }),
        (false, true) => PolicyOutcome::Fail(SomaError::MalformedSoma {
            details: format!("Zero radius. {}", describe_samples(samples)),
        }),
        (false, false) if config.strict_three_point => PolicyOutcome::Fail(SomaError::MalformedSoma {
            details: describe_samples(samples),
        }),
        (false, false) => PolicyOutcome::Warn(SomaDiagnostic::NonConformingThreePoint {
            details: describe_samples(samples),
        }),
    }
}

/// Checks that a contour soma has enough outline points.
///
/// An empty contour is allowed: it denotes a morphology without a soma.
///
/// # Errors
///
/// Returns [`SomaError::InvalidContourSoma`] for one or two samples.
pub fn check_contour_count(count: usize) -> Result<(), SomaError> {
    match count {
        1 | 2 => Err(SomaError::InvalidContourSoma { count }),
        _ => Ok(()),
    }
}

/// Formats samples as `Got: [x, y, z, r], ...` for messages.
#[must_use]
pub fn describe_samples(samples: &[Sample]) -> String {
    let rows: Vec<String> = samples.iter().map(ToString::to_string).collect();
    format!("Got: {}", rows.join(", "))
}

// =============================================================================
// TESTS
// =============================================================================
