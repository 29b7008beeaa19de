//! Simple contour soma.
//!
//! The samples are the vertices of an outline drawn around the cell body.
//! The center is the vertex centroid and the radius the mean vertex distance
//! to it. The outline does not enclose a surface, so no area is reported.
//! Sample radii are ignored.

use crate::core::soma::SomaGeometry;
use crate::geometry::sample::Sample;
use crate::geometry::util::{average_points_distance, centroid};

/// Computes center and radius of a contour.
#[must_use]
pub fn compute(samples: &[Sample]) -> SomaGeometry {
    let positions: Vec<_> = samples.iter().map(Sample::position).collect();
    let Some(center) = centroid(&positions) else {
        return SomaGeometry::default();
    };
    SomaGeometry {
        center: Some(center),
        radius: Some(average_points_distance(&center, &positions)),
        area: None,
    }
}
