//! Geometric measure computations for soma samples.
//!
//! Lateral areas of truncated cones, centroids, mean radial distances and the
//! dominant-axis ordering used by the cylinder-based soma models.

#![forbid(unsafe_code)]

use super::norms::{distance, hypot};
use crate::geometry::point::{Axis, Point};
use crate::geometry::sample::Sample;
use ordered_float::OrderedFloat;
use std::f64::consts::PI;

/// Lateral surface area of the truncated cone joining two samples.
///
/// The frustum has end radii `r₀`, `r₁` and slant height
/// `√(L² + (r₀ − r₁)²)`, where `L` is the distance between the two sample
/// positions. End caps are not included.
///
/// **Area = π (r₀ + r₁) √(L² + (r₀ − r₁)²)**
///
/// # Examples
///
/// ```
/// use soma_geometry::geometry::sample::Sample;
/// use soma_geometry::geometry::util::frustum_lateral_area;
/// use approx::assert_relative_eq;
///
/// // Open cylinder of radius 1 and height 2.
/// let a = Sample::new([0.0, 0.0, 0.0], 1.0);
/// let b = Sample::new([0.0, 0.0, 2.0], 1.0);
/// assert_relative_eq!(frustum_lateral_area(&a, &b), 4.0 * std::f64::consts::PI);
/// ```
#[must_use]
pub fn frustum_lateral_area(a: &Sample, b: &Sample) -> f64 {
    let length = distance(&a.position(), &b.position());
    let dr = a.radius() - b.radius();
    let slant = hypot(&[length, dr, 0.0]);
    PI * (a.radius() + b.radius()) * slant
}

/// Sum of frustum lateral areas over consecutive pairs of `samples`.
#[must_use]
pub fn stacked_frustum_area(samples: &[Sample]) -> f64 {
    samples
        .windows(2)
        .map(|pair| frustum_lateral_area(&pair[0], &pair[1]))
        .sum()
}

/// Arithmetic mean of the given points, or `None` when there are none.
#[must_use]
pub fn centroid<'a, I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Point::origin(), 0_usize), |(sum, n), p| (sum + *p, n + 1));
    if count == 0 {
        return None;
    }
    #[expect(
        clippy::cast_precision_loss,
        reason = "soma sample counts are tiny compared to f64 mantissa range"
    )]
    let n = count as f64;
    Some(sum.scale(1.0 / n))
}

/// Mean Euclidean distance from `center` to each of `points`.
///
/// Returns `0.0` for an empty sequence.
#[must_use]
pub fn average_points_distance(center: &Point, points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|p| distance(center, p)).sum();
    #[expect(
        clippy::cast_precision_loss,
        reason = "soma sample counts are tiny compared to f64 mantissa range"
    )]
    let n = points.len() as f64;
    total / n
}

/// Extent `max − min` of the samples along `axis` (0 when empty).
#[must_use]
pub fn axis_extent(samples: &[Sample], axis: Axis) -> f64 {
    let mut coords = samples.iter().map(|s| s.position().coord(axis));
    let Some(first) = coords.next() else {
        return 0.0;
    };
    let (min, max) = coords.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c)));
    max - min
}

/// The axis along which the samples spread the most.
///
/// Ties go to the earlier axis in `x, y, z` order, so a degenerate input
/// (all samples at one position) reports [`Axis::X`].
#[must_use]
pub fn dominant_axis(samples: &[Sample]) -> Axis {
    Axis::ALL
        .into_iter()
        .map(|axis| (axis, axis_extent(samples, axis)))
        .fold((Axis::X, f64::NEG_INFINITY), |best, (axis, extent)| {
            if extent > best.1 { (axis, extent) } else { best }
        })
        .0
}

/// Copies `samples` ordered by their coordinate along `axis`.
///
/// The sort is stable: samples with equal coordinates keep input order.
#[must_use]
pub fn sorted_along(samples: &[Sample], axis: Axis) -> Vec<Sample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| OrderedFloat(s.position().coord(axis)));
    sorted
}

/// Radius of the sphere whose surface area equals `area`.
///
/// **r = √(A / 4π)**
#[must_use]
pub fn sphere_equivalent_radius(area: f64) -> f64 {
    (area / (4.0 * PI)).sqrt()
}

/// Volume of a sphere of the given radius.
#[must_use]
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

// =============================================================================
// TESTS
// =============================================================================
