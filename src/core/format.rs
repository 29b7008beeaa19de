//! Soma format tags and soma kinds.
//!
//! [`SomaFormat`] is what a morphology reader knows about the file the samples
//! came from; [`SomaKind`] is what the classifier decides the samples
//! represent. The display names of [`SomaKind`] ("SomaSinglePoint",
//! "SomaCylinders", ...) appear in diagnostics and in the `Display` output of a
//! soma, and downstream tooling matches on them.

#![forbid(unsafe_code)]

use crate::core::validation::SomaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SOMA FORMAT
// =============================================================================

/// The family of file conventions a soma section was read from.
///
/// # Examples
///
/// ```
/// use soma_geometry::core::format::SomaFormat;
///
/// assert_eq!("swc".parse::<SomaFormat>().unwrap(), SomaFormat::Swc);
/// assert_eq!("ASC".parse::<SomaFormat>().unwrap(), SomaFormat::Contour);
///
/// let err = "vtk".parse::<SomaFormat>().unwrap_err();
/// assert!(err.to_string().contains("vtk"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SomaFormat {
    /// SWC-like files: the soma is a set of typed points (single point,
    /// three-point NeuroMorpho convention, or a stack of cylinders).
    Swc,
    /// Contour-like files (Neurolucida ASC, H5v1): the soma is an outline
    /// polygon.
    Contour,
}

impl SomaFormat {
    /// Canonical lowercase tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swc => "swc",
            Self::Contour => "contour",
        }
    }
}

impl fmt::Display for SomaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SomaFormat {
    type Err = SomaError;

    /// Parses a raw reader tag. Matching ignores ASCII case and surrounding
    /// whitespace; the error carries the tag verbatim.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "swc" => Ok(Self::Swc),
            "asc" | "contour" | "h5" => Ok(Self::Contour),
            _ => Err(SomaError::UnsupportedSomaKind {
                tag: tag.to_string(),
            }),
        }
    }
}

// =============================================================================
// SOMA KIND
// =============================================================================

/// The geometric model a soma is reconstructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SomaKind {
    /// No soma samples.
    Empty,
    /// One sample: a sphere.
    SinglePoint,
    /// Three samples in the NeuroMorpho cylinder-pair convention.
    NeuromorphoThreePointCylinders,
    /// A stack of truncated cones through consecutive samples.
    Cylinders,
    /// A closed outline polygon.
    SimpleContour,
}

impl SomaKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Empty,
        Self::SinglePoint,
        Self::NeuromorphoThreePointCylinders,
        Self::Cylinders,
        Self::SimpleContour,
    ];

    /// Display name, e.g. `"SomaSinglePoint"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "SomaEmpty",
            Self::SinglePoint => "SomaSinglePoint",
            Self::NeuromorphoThreePointCylinders => "SomaNeuromorphoThreePointCylinders",
            Self::Cylinders => "SomaCylinders",
            Self::SimpleContour => "SomaSimpleContour",
        }
    }

    /// Upper-case soma type tag as written by MorphIO-based readers.
    #[must_use]
    pub const fn reader_tag(self) -> &'static str {
        match self {
            Self::Empty => "SOMA_UNDEFINED",
            Self::SinglePoint => "SOMA_SINGLE_POINT",
            Self::NeuromorphoThreePointCylinders => "SOMA_NEUROMORPHO_THREE_POINT_CYLINDERS",
            Self::Cylinders => "SOMA_CYLINDERS",
            Self::SimpleContour => "SOMA_SIMPLE_CONTOUR",
        }
    }

    /// Human-readable sample count this kind requires.
    #[must_use]
    pub const fn expected_samples(self) -> &'static str {
        match self {
            Self::Empty => "0",
            Self::SinglePoint => "1",
            Self::NeuromorphoThreePointCylinders => "3",
            Self::Cylinders => "at least 2",
            Self::SimpleContour => "at least 3",
        }
    }

    /// Whether `count` samples can describe a soma of this kind.
    #[must_use]
    pub const fn accepts_sample_count(self, count: usize) -> bool {
        match self {
            Self::Empty => count == 0,
            Self::SinglePoint => count == 1,
            Self::NeuromorphoThreePointCylinders => count == 3,
            Self::Cylinders => count >= 2,
            Self::SimpleContour => count >= 3,
        }
    }
}

impl fmt::Display for SomaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SomaKind {
    type Err = SomaError;

    /// Parses either a display name (`"SomaCylinders"`) or a reader tag
    /// (`"SOMA_CYLINDERS"`).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == trimmed || kind.reader_tag() == trimmed)
            .ok_or_else(|| SomaError::UnsupportedSomaKind {
                tag: tag.to_string(),
            })
    }
}
