//! Single-point soma: a sphere centred on the one sample.

use crate::core::soma::SomaGeometry;
use crate::geometry::sample::Sample;

/// Center and radius come straight from the sample; no area is defined.
#[must_use]
pub fn compute(samples: &[Sample]) -> SomaGeometry {
    samples
        .first()
        .map_or_else(SomaGeometry::default, |sample| SomaGeometry {
            center: Some(sample.position()),
            radius: Some(sample.radius()),
            area: None,
        })
}
