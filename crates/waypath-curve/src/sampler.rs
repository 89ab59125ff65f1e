//! Uniform-distance sampling of a single curve.

use crate::{CubicCurve, VectorSpace, move_towards};

/// Precomputed polyline over one [`CubicCurve`] at approximately uniform
/// distance spacing, trading memory for O(1) distance lookups.
///
/// Sample *i* sits at mapped distance `segment_size * i` from the curve
/// start. The spacing is only approximate: the mapping goes through
/// [`CubicCurve::normalize_distance`], and speed along a Bézier curve is not
/// constant. The requested segment size is kept verbatim rather than being
/// refitted to `estimated_length / sample_count`.
#[derive(Debug, Clone)]
pub struct ArcLengthSampler<V> {
    curve: CubicCurve<V>,
    segment_size: f32,
    samples: Vec<V>,
}

impl<V: VectorSpace> ArcLengthSampler<V> {
    /// Samples `curve` every `segment_size` units.
    ///
    /// The sample count is `floor(estimated_length / segment_size)`; a
    /// segment size larger than the whole curve produces an empty polyline,
    /// and queries then degenerate to the curve start.
    ///
    /// Panics if `segment_size` is not strictly positive.
    pub fn new(curve: &CubicCurve<V>, segment_size: f32) -> Self {
        assert!(segment_size > 0.0, "segment size must be positive");

        let count = (curve.estimated_length() / segment_size) as usize;
        let samples = (0..count)
            .map(|i| curve.point_at(curve.normalize_distance(segment_size * i as f32)))
            .collect();

        Self {
            curve: *curve,
            segment_size,
            samples,
        }
    }

    /// The spacing the polyline was built with.
    #[inline]
    pub fn segment_size(&self) -> f32 {
        self.segment_size
    }

    /// Number of precomputed samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// The precomputed polyline, ordered from the curve start.
    #[inline]
    pub fn samples(&self) -> &[V] {
        &self.samples
    }

    /// Returns the point at `distance` from the curve start.
    ///
    /// Looks up the bracketing sample pair and walks the remainder from the
    /// lower sample toward the upper one. Distances at or past the last
    /// sample clamp to the last sample.
    pub fn point_at_distance(&self, distance: f32) -> V {
        let Some(&last) = self.samples.last() else {
            return self.curve.point_at(0.0);
        };

        let index = (distance.max(0.0) / self.segment_size) as usize;
        if index + 1 >= self.samples.len() {
            return last;
        }

        let remainder = distance - index as f32 * self.segment_size;
        move_towards(self.samples[index], self.samples[index + 1], remainder)
    }
}
