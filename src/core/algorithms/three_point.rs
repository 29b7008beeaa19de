//! NeuroMorpho three-point soma.
//!
//! NeuroMorpho.org encodes a soma of radius `r` as a center sample and two
//! samples at `∓r` along one axis, describing a cylinder of radius `r` and
//! height `2r`, whose lateral area equals the area of a sphere of radius `r`.
//!
//! The center and radius are always taken from the first sample. The area is
//! the lateral area of the two cones joining the samples in dominant-axis
//! order, which is `4πr²` for conforming input and a best-effort value for
//! files that drift from the convention.

use super::cylinders::stack_area;
use crate::core::soma::SomaGeometry;
use crate::geometry::sample::Sample;

/// Computes center, radius and area of a three-point soma.
#[must_use]
pub fn compute(samples: &[Sample]) -> SomaGeometry {
    let Some(center) = samples.first() else {
        return SomaGeometry::default();
    };
    SomaGeometry {
        center: Some(center.position()),
        radius: Some(center.radius()),
        area: Some(stack_area(samples)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_conforming_soma_has_sphere_area() {
        let samples = [
            Sample::new([0.0, 0.0, 0.0], 10.0),
            Sample::new([0.0, -10.0, 0.0], 10.0),
            Sample::new([0.0, 10.0, 0.0], 10.0),
        ];
        let geometry = compute(&samples);
        assert_eq!(geometry.center, Some(Point::origin()));
        assert_eq!(geometry.radius, Some(10.0));
        assert_relative_eq!(geometry.area.unwrap(), 4.0 * PI * 100.0, epsilon = 1e-9);
        assert_relative_eq!(geometry.area.unwrap(), 1256.6370614, epsilon = 1e-6);
    }

    #[test]
    fn test_skewed_soma_best_effort_area() {
        let samples = [
            Sample::new([0.0, 0.0, 0.0], 10.0),
            Sample::new([-2.0, -6.0, 0.0], 10.0),
            Sample::new([2.0, 6.0, 0.0], 10.0),
        ];
        let geometry = compute(&samples);
        assert_eq!(geometry.center, Some(Point::origin()));
        assert_relative_eq!(geometry.area.unwrap(), 794.76706126368811, epsilon = 1e-4);
    }

    #[test]
    fn test_radius_comes_from_first_sample() {
        let samples = [
            Sample::new([0.0, 0.0, 0.0], 44.0),
            Sample::new([0.0, -44.0, 0.0], 44.0),
            Sample::new([0.0, 44.0, 0.0], 44.0),
        ];
        assert_eq!(compute(&samples).radius, Some(44.0));
    }
}
