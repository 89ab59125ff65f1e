//! Cubic Bézier curve math for distance-parameterized movement.
//!
//! This crate provides:
//! - [`VectorSpace`] - minimal capability trait for host 3D vector types
//! - [`CubicCurve`] - a cubic Bézier segment with a cached arc-length estimate
//! - [`ArcLengthSampler`] - uniform-distance polyline over one curve
//!
//! Curves are parameterized by a shape parameter t ∈ [0, 1]; travel distance
//! along a curve maps to t only approximately (speed along a Bézier curve is
//! not constant). [`CubicCurve::normalize_distance`] gives the cheap proxy
//! mapping; [`ArcLengthSampler`] trades memory for a closer fit.

use core::ops::{Add, Mul, Sub};

use glam::Vec3;

mod cubic;
mod gauss;
mod sampler;

pub use cubic::{CubicCurve, MIN_CURVE_LENGTH, STRAIGHT_TOLERANCE};
pub use sampler::ArcLengthSampler;

/// Vector operations the curve math needs from a host vector type.
///
/// Kept minimal so integrating another engine's math library means
/// implementing one trait: component arithmetic plus a Euclidean norm.
/// Positions are always 3-component; there is no 2D variant.
pub trait VectorSpace:
    Clone + Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    /// Returns the Euclidean length (magnitude) of this vector.
    fn length(&self) -> f32;

    /// Returns the Euclidean distance to another point.
    #[inline]
    fn distance(&self, other: Self) -> f32 {
        (other - *self).length()
    }
}

impl VectorSpace for Vec3 {
    #[inline]
    fn length(&self) -> f32 {
        Vec3::length(*self)
    }
}

/// Linear interpolation between two points.
#[inline]
pub fn lerp<V: VectorSpace>(a: V, b: V, t: f32) -> V {
    a * (1.0 - t) + b * t
}

/// Moves from `from` toward `to` by at most `max_delta` units, stopping at
/// `to` rather than overshooting.
pub fn move_towards<V: VectorSpace>(from: V, to: V, max_delta: f32) -> V {
    let gap = from.distance(to);
    if gap <= max_delta || gap <= f32::EPSILON {
        return to;
    }
    from + (to - from) * (max_delta / gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 4.0, -6.0);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_distance() {
        let a = Vec3::ZERO;
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_towards_partial() {
        let from = Vec3::ZERO;
        let to = Vec3::new(10.0, 0.0, 0.0);

        let p = move_towards(from, to, 4.0);
        assert!((p - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_move_towards_clamps_at_target() {
        let from = Vec3::ZERO;
        let to = Vec3::new(1.0, 0.0, 0.0);

        assert_eq!(move_towards(from, to, 5.0), to);
        assert_eq!(move_towards(to, to, 0.1), to);
    }
}
