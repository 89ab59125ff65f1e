//! Cubic Bézier segments with cached arc-length estimates.

use crate::{VectorSpace, gauss, lerp};

/// Tolerance for classifying a curve as straight: the curve degenerates to a
/// line when its chord and its estimated arc length agree this closely.
pub const STRAIGHT_TOLERANCE: f32 = 1e-5;

/// Curves with an estimated length below this are degenerate points.
/// [`CubicCurve::normalize_distance`] yields parameter 0 for them instead of
/// dividing, so no NaN can reach point evaluation.
pub const MIN_CURVE_LENGTH: f32 = 1e-6;

/// A cubic Bézier segment.
///
/// Control order is `start`, `start_tangent`, `end_tangent`, `end`. The
/// arc-length estimate and the straight-line flag are derived once at
/// construction and fixed afterwards; there is no mutation API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve<V> {
    start: V,
    end: V,
    start_tangent: V,
    end_tangent: V,
    estimated_length: f32,
    straight: bool,
}

impl<V: VectorSpace> CubicCurve<V> {
    /// Creates a curve and computes its arc-length estimate.
    ///
    /// The estimate integrates the derivative magnitude with 24-point
    /// Gauss–Legendre quadrature, which is exact for the chord of a
    /// degenerate (collinear) curve; the straight-line flag falls out of
    /// comparing the two.
    pub fn new(start: V, end: V, start_tangent: V, end_tangent: V) -> Self {
        let mut curve = Self {
            start,
            end,
            start_tangent,
            end_tangent,
            estimated_length: 0.0,
            straight: false,
        };
        curve.estimated_length = curve.quadrature_length();
        curve.straight = (start.distance(end) - curve.estimated_length).abs() < STRAIGHT_TOLERANCE;
        curve
    }

    /// Start point (t = 0).
    #[inline]
    pub fn start(&self) -> V {
        self.start
    }

    /// End point (t = 1).
    #[inline]
    pub fn end(&self) -> V {
        self.end
    }

    /// First control point, pulled from the start toward the waypoint.
    #[inline]
    pub fn start_tangent(&self) -> V {
        self.start_tangent
    }

    /// Second control point, pulled from the end toward the waypoint.
    #[inline]
    pub fn end_tangent(&self) -> V {
        self.end_tangent
    }

    /// Arc-length estimate computed at construction.
    ///
    /// Always at least the chord length, with equality (within
    /// [`STRAIGHT_TOLERANCE`]) exactly when the curve is straight.
    #[inline]
    pub fn estimated_length(&self) -> f32 {
        self.estimated_length
    }

    /// True when the control points are collinear enough that evaluation
    /// degenerates to linear interpolation between the endpoints.
    #[inline]
    pub fn is_straight_line(&self) -> bool {
        self.straight
    }

    /// Returns the point at shape parameter `t` ∈ [0, 1].
    ///
    /// Straight curves short-circuit to a single lerp; everything else runs
    /// the De Casteljau reduction, whose floating-point behavior under
    /// collinear inputs matches the straight branch within tolerance.
    pub fn point_at(&self, t: f32) -> V {
        if self.straight {
            return lerp(self.start, self.end, t);
        }

        // First reduction: four control points down to three.
        let p01 = lerp(self.start, self.start_tangent, t);
        let p12 = lerp(self.start_tangent, self.end_tangent, t);
        let p23 = lerp(self.end_tangent, self.end, t);

        // Second reduction.
        let p012 = lerp(p01, p12, t);
        let p123 = lerp(p12, p23, t);

        // Final point on the curve.
        lerp(p012, p123, t)
    }

    /// Evaluates the curve's derivative at `t`.
    ///
    /// One hodograph reduction (successive control-point differences scaled
    /// by the degree) turns the cubic into its quadratic derivative, which
    /// is then blended with the Bernstein basis.
    pub fn derivative_at(&self, t: f32) -> V {
        let d0 = (self.start_tangent - self.start) * 3.0;
        let d1 = (self.end_tangent - self.start_tangent) * 3.0;
        let d2 = (self.end - self.end_tangent) * 3.0;

        let mt = 1.0 - t;
        d0 * (mt * mt) + d1 * (2.0 * mt * t) + d2 * (t * t)
    }

    /// Maps a distance along this curve to a shape parameter.
    ///
    /// This is the cheap proxy `distance / estimated_length`, clamped to
    /// [0, 1]. It is not an exact arc-length inverse, since speed along a
    /// Bézier curve is not constant. Callers that need uniform-speed motion within
    /// a single curve should use [`ArcLengthSampler`](crate::ArcLengthSampler).
    ///
    /// Degenerate curves (length below [`MIN_CURVE_LENGTH`]) yield 0.
    pub fn normalize_distance(&self, distance: f32) -> f32 {
        if self.estimated_length < MIN_CURVE_LENGTH {
            return 0.0;
        }
        (distance / self.estimated_length).clamp(0.0, 1.0)
    }

    /// Integrates the derivative magnitude over t ∈ [0, 1].
    fn quadrature_length(&self) -> f32 {
        // Nodes live on [-1, 1]; remap to [0, 1] and scale by half the
        // interval.
        let mut sum = 0.0;
        for (&x, &w) in gauss::ABSCISSAE.iter().zip(gauss::WEIGHTS.iter()) {
            let t = 0.5 * x + 0.5;
            sum += w * self.derivative_at(t).length();
        }
        0.5 * sum
    }
}
