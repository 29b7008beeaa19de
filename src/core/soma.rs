//! The soma of a neuron morphology.
//!
//! A [`Soma`] owns its sample buffer together with the geometry derived from
//! it. It is built once, eagerly: classification, validation and the geometry
//! engine all run inside the constructor, so a `Soma` value is always valid
//! and every fatal condition surfaces as a [`SomaError`] at construction time.
//!
//! # Examples
//!
//! ```
//! use soma_geometry::core::format::{SomaFormat, SomaKind};
//! use soma_geometry::core::sample_buffer::SampleBuffer;
//! use soma_geometry::core::soma::Soma;
//!
//! let samples = SampleBuffer::from_rows(&[[11.0, 22.0, 33.0, 44.0]]).unwrap();
//! let soma = Soma::new(SomaFormat::Swc, samples).unwrap();
//!
//! assert_eq!(soma.kind(), SomaKind::SinglePoint);
//! assert_eq!(soma.center().unwrap().coords(), [11.0, 22.0, 33.0]);
//! assert_eq!(soma.radius(), Some(44.0));
//! assert!(soma.to_string().contains("SomaSinglePoint"));
//! ```
//!
//! # Ownership
//!
//! `Clone` copies the sample buffer. A clone can be mutated through
//! [`Soma::set_points`] or [`Soma::set_radius`] without any effect on the
//! original.

#![forbid(unsafe_code)]

use crate::core::algorithms::{cylinders, simple_contour, single_point, three_point};
use crate::core::classifier::{Classification, classify, classify_declared};
use crate::core::config::SomaConfig;
use crate::core::format::{SomaFormat, SomaKind};
use crate::core::sample_buffer::{RowIter, SampleBuffer};
use crate::core::traits::diagnostic_sink::{DiagnosticSink, TracingSink};
use crate::core::validation::{PolicyOutcome, SomaDiagnostic, SomaError, three_point_policy};
use crate::geometry::point::Point;
use crate::geometry::util::sphere_volume;
use std::fmt;

/// Derived soma geometry. Fields a soma kind does not define are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SomaGeometry {
    /// Soma center.
    pub center: Option<Point>,
    /// Soma radius.
    pub radius: Option<f64>,
    /// Soma surface area.
    pub area: Option<f64>,
}

/// How the soma kind was chosen; replayed when the points are replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    Format(SomaFormat),
    Declared(SomaKind),
}

/// A validated soma with its derived geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Soma {
    kind: SomaKind,
    origin: Origin,
    samples: SampleBuffer,
    geometry: SomaGeometry,
    radius_override: Option<f64>,
    diagnostics: Vec<SomaDiagnostic>,
    config: SomaConfig,
}

/// Everything produced by one pass of the construction pipeline.
struct Built {
    kind: SomaKind,
    geometry: SomaGeometry,
    diagnostics: Vec<SomaDiagnostic>,
}

impl Soma {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Builds a soma from samples read from a file of the given format.
    ///
    /// Uses [`SomaConfig::default`] and forwards diagnostics to `tracing`.
    ///
    /// # Errors
    ///
    /// - [`SomaError::InvalidContourSoma`] for a contour with 1 or 2 samples
    /// - [`SomaError::MalformedSoma`] for an unusable three-point soma
    pub fn new(format: SomaFormat, samples: SampleBuffer) -> Result<Self, SomaError> {
        Self::with_config(format, samples, SomaConfig::default(), &mut TracingSink)
    }

    /// Builds a soma with explicit configuration and diagnostic sink.
    ///
    /// # Errors
    ///
    /// See [`Soma::new`].
    pub fn with_config(
        format: SomaFormat,
        samples: SampleBuffer,
        config: SomaConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, SomaError> {
        Self::build(Origin::Format(format), samples, config, sink)
    }

    /// Builds a soma from a raw format tag such as `"swc"` or `"asc"`.
    ///
    /// # Errors
    ///
    /// Returns [`SomaError::UnsupportedSomaKind`] with the tag verbatim when it
    /// is not recognised, otherwise see [`Soma::new`].
    ///
    /// ```
    /// use soma_geometry::core::sample_buffer::SampleBuffer;
    /// use soma_geometry::core::soma::Soma;
    ///
    /// let err = Soma::from_tag("xyz", SampleBuffer::default()).unwrap_err();
    /// assert!(err.to_string().contains("xyz"));
    /// ```
    pub fn from_tag(tag: &str, samples: SampleBuffer) -> Result<Self, SomaError> {
        Self::new(tag.parse()?, samples)
    }

    /// Builds a soma of a kind already determined by the reader.
    ///
    /// # Errors
    ///
    /// Returns [`SomaError::SampleCountMismatch`] (or
    /// [`SomaError::InvalidContourSoma`]) when the sample count does not fit
    /// the kind, and [`SomaError::MalformedSoma`] for an unusable three-point
    /// soma.
    pub fn with_kind(kind: SomaKind, samples: SampleBuffer) -> Result<Self, SomaError> {
        Self::with_kind_and_config(kind, samples, SomaConfig::default(), &mut TracingSink)
    }

    /// [`Soma::with_kind`] with explicit configuration and diagnostic sink.
    ///
    /// # Errors
    ///
    /// See [`Soma::with_kind`].
    pub fn with_kind_and_config(
        kind: SomaKind,
        samples: SampleBuffer,
        config: SomaConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, SomaError> {
        Self::build(Origin::Declared(kind), samples, config, sink)
    }

    fn build(
        origin: Origin,
        samples: SampleBuffer,
        config: SomaConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, SomaError> {
        let Built {
            kind,
            geometry,
            diagnostics,
        } = Self::reconstruct(origin, &samples, &config, sink)?;
        Ok(Self {
            kind,
            origin,
            samples,
            geometry,
            radius_override: None,
            diagnostics,
            config,
        })
    }

    /// Classify, apply the warning policy, then run the geometry engine.
    fn reconstruct(
        origin: Origin,
        samples: &SampleBuffer,
        config: &SomaConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Built, SomaError> {
        let classification = match origin {
            Origin::Format(format) => classify(format, samples, config)?,
            Origin::Declared(kind) => classify_declared(kind, samples, config)?,
        };

        let mut diagnostics = Vec::new();
        if let Classification::NeuromorphoThreePointCylinders { conforms } = classification {
            match three_point_policy(conforms, samples.as_slice(), config) {
                PolicyOutcome::Accept => {}
                PolicyOutcome::Warn(diagnostic) => {
                    sink.warn(&diagnostic);
                    diagnostics.push(diagnostic);
                }
                PolicyOutcome::Fail(err) => return Err(err),
            }
        }

        let slice = samples.as_slice();
        let kind = classification.kind();
        let geometry = match kind {
            SomaKind::Empty => SomaGeometry::default(),
            SomaKind::SinglePoint => single_point::compute(slice),
            SomaKind::NeuromorphoThreePointCylinders => three_point::compute(slice),
            SomaKind::Cylinders => cylinders::compute(slice),
            SomaKind::SimpleContour => simple_contour::compute(slice),
        };

        Ok(Built {
            kind,
            geometry,
            diagnostics,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The soma model in use.
    #[must_use]
    pub const fn kind(&self) -> SomaKind {
        self.kind
    }

    /// The file format the soma was classified under, if it was not declared
    /// directly with [`Soma::with_kind`].
    #[must_use]
    pub const fn format(&self) -> Option<SomaFormat> {
        match self.origin {
            Origin::Format(format) => Some(format),
            Origin::Declared(_) => None,
        }
    }

    /// The samples, in stored order.
    #[must_use]
    pub const fn points(&self) -> &SampleBuffer {
        &self.samples
    }

    /// Soma center; `None` for an empty soma.
    #[must_use]
    pub const fn center(&self) -> Option<Point> {
        self.geometry.center
    }

    /// Soma radius; `None` for an empty soma.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        self.radius_override.or(self.geometry.radius)
    }

    /// Soma surface area.
    ///
    /// # Errors
    ///
    /// Returns [`SomaError::NotComputable`] for single-point, contour and
    /// empty somas.
    pub fn area(&self) -> Result<f64, SomaError> {
        self.geometry.area.ok_or(SomaError::NotComputable {
            kind: self.kind,
            property: "area",
        })
    }

    /// Volume of the sphere with the soma radius.
    ///
    /// This is only an approximation of the soma volume. Each call logs the
    /// approximation at DEBUG level.
    #[must_use]
    pub fn volume(&self) -> Option<f64> {
        let radius = self.radius()?;
        tracing::debug!(kind = %self.kind, radius, "approximating soma volume by a sphere");
        Some(sphere_volume(radius))
    }

    /// Diagnostics raised while the current geometry was computed.
    #[must_use]
    pub fn diagnostics(&self) -> &[SomaDiagnostic] {
        &self.diagnostics
    }

    /// The configuration the soma was built with.
    #[must_use]
    pub const fn config(&self) -> &SomaConfig {
        &self.config
    }

    /// Lazily iterates `[x, y, z, radius]` rows in stored order.
    ///
    /// Each call starts a new pass.
    #[must_use]
    pub fn iter(&self) -> RowIter<'_> {
        self.samples.iter()
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Replaces the samples and recomputes the geometry.
    ///
    /// The soma is re-classified the same way it was built (by format or by
    /// declared kind), so the kind may change. Any radius set with
    /// [`Soma::set_radius`] is discarded. On error the soma is left unchanged.
    ///
    /// # Errors
    ///
    /// The same conditions as construction.
    pub fn set_points(&mut self, samples: SampleBuffer) -> Result<(), SomaError> {
        self.set_points_with_sink(samples, &mut TracingSink)
    }

    /// [`Soma::set_points`] with an explicit diagnostic sink.
    ///
    /// # Errors
    ///
    /// See [`Soma::set_points`].
    pub fn set_points_with_sink(
        &mut self,
        samples: SampleBuffer,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), SomaError> {
        let Built {
            kind,
            geometry,
            diagnostics,
        } = Self::reconstruct(self.origin, &samples, &self.config, sink)?;
        tracing::debug!(from = %self.kind, to = %kind, samples = samples.len(), "soma points replaced");
        self.kind = kind;
        self.samples = samples;
        self.geometry = geometry;
        self.diagnostics = diagnostics;
        self.radius_override = None;
        Ok(())
    }

    /// Overrides the soma radius.
    ///
    /// # Errors
    ///
    /// Returns [`SomaError::NotComputable`] for an empty soma, which has no
    /// radius, and [`SomaError::InvalidRadius`] for a negative or non-finite
    /// value.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), SomaError> {
        if self.kind == SomaKind::Empty {
            return Err(SomaError::NotComputable {
                kind: self.kind,
                property: "radius",
            });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SomaError::InvalidRadius {
                radius: format!("{radius:?}"),
            });
        }
        self.radius_override = Some(radius);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Soma {
    type Item = [f64; 4];
    type IntoIter = RowIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Soma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(samples: {}) <center: ", self.kind, self.samples.len())?;
        match self.center() {
            Some(center) => write!(f, "{center}")?,
            None => f.write_str("None")?,
        }
        f.write_str(", radius: ")?;
        match self.radius() {
            Some(radius) => write!(f, "{radius}")?,
            None => f.write_str("None")?,
        }
        f.write_str(">")
    }
}

// =============================================================================
// TESTS
// =============================================================================
