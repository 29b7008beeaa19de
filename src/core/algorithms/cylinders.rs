//! Cylinder-stack soma.
//!
//! The soma is modelled as truncated cones joining consecutive samples along
//! the dominant axis. The surface area is the sum of their lateral areas (no
//! end caps), and the radius is that of the sphere with the same area.
//!
//! For a stack of equal radii `r` and total height `h = 2r` this gives
//! `2πrh = 4πr²`, i.e. the stack and the reported sphere agree exactly.

use crate::core::soma::SomaGeometry;
use crate::geometry::sample::Sample;
use crate::geometry::util::{
    dominant_axis, sorted_along, sphere_equivalent_radius, stacked_frustum_area,
};

/// Lateral area of the stack, ordered along its dominant axis.
#[must_use]
pub fn stack_area(samples: &[Sample]) -> f64 {
    let axis = dominant_axis(samples);
    stacked_frustum_area(&sorted_along(samples, axis))
}

/// Computes center, radius and area of a cylinder stack.
///
/// The center is the midpoint of the two extreme samples along the dominant
/// axis. Fewer than two samples yield empty geometry.
#[must_use]
pub fn compute(samples: &[Sample]) -> SomaGeometry {
    if samples.len() < 2 {
        return SomaGeometry::default();
    }

    let axis = dominant_axis(samples);
    let ordered = sorted_along(samples, axis);
    let area = stacked_frustum_area(&ordered);
    let center = match (ordered.first(), ordered.last()) {
        (Some(lo), Some(hi)) => Some(lo.position().midpoint(&hi.position())),
        _ => None,
    };

    SomaGeometry {
        center,
        radius: Some(sphere_equivalent_radius(area)),
        area: Some(area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;
    use approx::assert_relative_eq;

    #[test]
    fn test_stack_equivalent_to_sphere() {
        let samples = [
            Sample::new([0.0, 0.0, -10.0], 40.0),
            Sample::new([0.0, 0.0, 0.0], 40.0),
            Sample::new([0.0, 0.0, 10.0], 40.0),
        ];
        let geometry = compute(&samples);
        assert_relative_eq!(geometry.radius.unwrap(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(geometry.area.unwrap(), 5026.548245743669, epsilon = 1e-9);
        assert_eq!(geometry.center, Some(Point::new([0.0, 0.0, 0.0])));
    }

    #[test]
    fn test_cone_without_base() {
        let samples: Vec<Sample> = (0..6)
            .map(|k| {
                let v = f64::from(2 * k);
                Sample::new([0.0, v, 0.0], v)
            })
            .collect();
        let geometry = compute(&samples);
        assert_relative_eq!(geometry.area.unwrap(), 444.288293851, epsilon = 1e-6);
        assert_eq!(geometry.center, Some(Point::new([0.0, 5.0, 0.0])));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let ordered = [
            Sample::new([0.0, 0.0, 0.0], 1.0),
            Sample::new([0.0, 0.0, 1.0], 2.0),
            Sample::new([0.0, 0.0, 3.0], 1.5),
        ];
        let shuffled = [ordered[2], ordered[0], ordered[1]];
        assert_eq!(compute(&ordered), compute(&shuffled));
    }

    #[test]
    fn test_two_samples() {
        let samples = [
            Sample::new([0.0, 0.0, -10.0], 40.0),
            Sample::new([0.0, 0.0, 0.0], 40.0),
        ];
        let geometry = compute(&samples);
        assert_relative_eq!(
            geometry.area.unwrap(),
            std::f64::consts::PI * 80.0 * 10.0,
            epsilon = 1e-9
        );
        assert_eq!(geometry.center, Some(Point::new([0.0, 0.0, -5.0])));
    }

    #[test]
    fn test_too_few_samples() {
        assert_eq!(compute(&[]), SomaGeometry::default());
        assert_eq!(
            compute(&[Sample::new([0.0; 3], 1.0)]),
            SomaGeometry::default()
        );
    }
}
