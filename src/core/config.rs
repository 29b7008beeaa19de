//! Tolerances and policy switches for soma reconstruction.
//!
//! [`SomaConfig::default`] reproduces the lenient NeuroMorpho handling: three
//! point somas that deviate from the convention are kept with a warning.
//! Use [`SomaConfigBuilder`] to override individual fields, or one of the
//! [`config_presets`].
//!
//! ```
//! use soma_geometry::core::config::{SomaConfig, SomaConfigBuilder};
//!
//! let config = SomaConfigBuilder::default()
//!     .zero_radius_epsilon(1e-9)
//!     .strict_three_point(true)
//!     .build()
//!     .unwrap();
//! assert!(config.strict_three_point);
//! assert_eq!(config.convention_tolerance, SomaConfig::default().convention_tolerance);
//!
//! assert!(SomaConfigBuilder::default().zero_radius_epsilon(-1.0).build().is_err());
//! ```

#![forbid(unsafe_code)]

/// Radii at or below this value count as zero.
pub const DEFAULT_ZERO_RADIUS_EPSILON: f64 = 1e-7;

/// Relative tolerance of the three-point convention checks.
pub const DEFAULT_CONVENTION_TOLERANCE: f64 = 1e-6;

/// Configuration for soma classification and validation.
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SomaConfig {
    /// Radii at or below this threshold are treated as zero.
    #[builder(default = "DEFAULT_ZERO_RADIUS_EPSILON")]
    pub zero_radius_epsilon: f64,
    /// Relative tolerance used when comparing offsets and radii of a
    /// three-point soma against the NeuroMorpho convention.
    #[builder(default = "DEFAULT_CONVENTION_TOLERANCE")]
    pub convention_tolerance: f64,
    /// Reject, instead of warn about, three-point somas that deviate from the
    /// convention with a non-zero radius.
    #[builder(default)]
    pub strict_three_point: bool,
}

impl Default for SomaConfig {
    fn default() -> Self {
        config_presets::neuromorpho_lenient()
    }
}

impl SomaConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let checks = [
            ("zero_radius_epsilon", self.zero_radius_epsilon),
            ("convention_tolerance", self.convention_tolerance),
        ];
        for (name, value) in checks {
            match value {
                Some(v) if !(v.is_finite() && v >= 0.0) => {
                    return Err(format!("{name} must be finite and non-negative, got {v:?}"));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Ready-made configurations.
pub mod config_presets {
    use super::{DEFAULT_CONVENTION_TOLERANCE, DEFAULT_ZERO_RADIUS_EPSILON, SomaConfig};

    /// Keeps non-conforming NeuroMorpho somas with a warning.
    #[must_use]
    pub const fn neuromorpho_lenient() -> SomaConfig {
        SomaConfig {
            zero_radius_epsilon: DEFAULT_ZERO_RADIUS_EPSILON,
            convention_tolerance: DEFAULT_CONVENTION_TOLERANCE,
            strict_three_point: false,
        }
    }

    /// Rejects every three-point soma that deviates from the convention.
    #[must_use]
    pub const fn strict() -> SomaConfig {
        SomaConfig {
            zero_radius_epsilon: DEFAULT_ZERO_RADIUS_EPSILON,
            convention_tolerance: DEFAULT_CONVENTION_TOLERANCE,
            strict_three_point: true,
        }
    }
}
