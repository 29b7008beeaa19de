//! # soma-geometry
//!
//! Soma reconstruction for neuron morphologies.
//!
//! A morphology reader hands over a handful of `(x, y, z, radius)` samples
//! describing the cell body. This crate decides which soma model applies,
//! checks the samples against the conventions of the source format, and
//! computes the soma center, radius and surface area used by morphometric
//! analysis.
//!
//! # Soma models
//!
//! | Kind | Samples | Center | Radius | Area |
//! |---|---|---|---|---|
//! | `SomaEmpty` | 0 | none | none | not computable |
//! | `SomaSinglePoint` | 1 | the sample | the sample radius | not computable |
//! | `SomaNeuromorphoThreePointCylinders` | 3 | first sample | first sample radius | two-cone lateral area |
//! | `SomaCylinders` | 2+ | mid-point of the stack | sphere of equal area | stack lateral area |
//! | `SomaSimpleContour` | 3+ | vertex centroid | mean vertex distance | not computable |
//!
//! # Basic Usage
//!
//! ```rust
//! use soma_geometry::prelude::*;
//!
//! // NeuroMorpho three-point soma of radius 10 centred at the origin
//! let samples = SampleBuffer::from_rows(&[
//!     [0.0, 0.0, 0.0, 10.0],
//!     [0.0, -10.0, 0.0, 10.0],
//!     [0.0, 10.0, 0.0, 10.0],
//! ])
//! .unwrap();
//!
//! let soma = Soma::new(SomaFormat::Swc, samples).unwrap();
//!
//! assert_eq!(soma.kind(), SomaKind::NeuromorphoThreePointCylinders);
//! assert_eq!(soma.radius(), Some(10.0));
//! assert!((soma.area().unwrap() - 4.0 * std::f64::consts::PI * 100.0).abs() < 1e-9);
//! assert!(soma.diagnostics().is_empty());
//! ```
//!
//! # Malformed input
//!
//! Problems that leave no usable geometry are returned as
//! [`SomaError`](core::validation::SomaError) from the constructor. Problems
//! that still allow a best-effort answer are kept on the soma as
//! [`SomaDiagnostic`](core::validation::SomaDiagnostic)s and forwarded to a
//! [`DiagnosticSink`](core::traits::DiagnosticSink), by default `tracing`.
//!
//! ```rust
//! use soma_geometry::prelude::*;
//!
//! let skewed = SampleBuffer::from_rows(&[
//!     [0.0, 0.0, 0.0, 10.0],
//!     [-2.0, -6.0, 0.0, 10.0],
//!     [2.0, 6.0, 0.0, 10.0],
//! ])
//! .unwrap();
//!
//! let mut warnings: Vec<SomaDiagnostic> = Vec::new();
//! let soma = Soma::with_config(SomaFormat::Swc, skewed.clone(), SomaConfig::default(), &mut warnings)
//!     .unwrap();
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(soma.diagnostics(), warnings.as_slice());
//!
//! let strict = config_presets::strict();
//! assert!(Soma::with_config(SomaFormat::Swc, skewed, strict, &mut NullSink).is_err());
//! ```

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module classifies soma samples, validates them and computes soma geometry.
///
/// It includes the [`Soma`](core::soma::Soma) type, the sample buffer it owns, and the
/// configuration and diagnostics used while building it.
pub mod core {
    /// Geometry engines, one per soma kind
    pub mod algorithms {
        /// Stack of truncated cones
        pub mod cylinders;
        /// Outline polygon
        pub mod simple_contour;
        /// Sphere from one sample
        pub mod single_point;
        /// NeuroMorpho three-point soma
        pub mod three_point;
    }
    pub mod classifier;
    pub mod config;
    pub mod format;
    pub mod sample_buffer;
    pub mod soma;
    pub mod validation;
    /// Traits for soma reconstruction.
    pub mod traits {
        pub mod diagnostic_sink;
        pub use diagnostic_sink::*;
    }
    // Re-export the `core` modules.
    pub use classifier::*;
    pub use config::*;
    pub use format::*;
    pub use sample_buffer::*;
    pub use soma::*;
    pub use traits::*;
    pub use validation::*;
}

/// Contains geometric types: the `Point` and `Sample` structs and measurement helpers.
pub mod geometry {
    pub mod point;
    pub mod sample;
    /// Norms, areas and centroids over points and samples
    pub mod util;
    pub use point::*;
    pub use sample::*;
    pub use util::*;
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        classifier::*, config::*, format::*, sample_buffer::*, soma::*, traits::diagnostic_sink::*,
        validation::*,
    };

    // Re-export from geometry
    pub use crate::geometry::{point::*, sample::*, util::*};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
