//! Movement paths: waypoint lists turned into distance-queryable curve chains.

use glam::Vec3;
use waypath_curve::{ArcLengthSampler, CubicCurve, MIN_CURVE_LENGTH, VectorSpace, lerp};

use crate::PathError;

/// One curve of a path plus its distance range along the whole path.
///
/// Ranges are half-open `[start_distance, end_distance)`, contiguous and in
/// path order, so together they cover `[0, total_length]` exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEntry<V> {
    curve: CubicCurve<V>,
    start_distance: f32,
    end_distance: f32,
}

impl<V: VectorSpace> CurveEntry<V> {
    /// The curve spanning this range.
    #[inline]
    pub fn curve(&self) -> &CubicCurve<V> {
        &self.curve
    }

    /// Distance along the path where this curve begins.
    #[inline]
    pub fn start_distance(&self) -> f32 {
        self.start_distance
    }

    /// Distance along the path where the next curve takes over.
    #[inline]
    pub fn end_distance(&self) -> f32 {
        self.end_distance
    }
}

/// A smooth travel path through an ordered list of waypoints.
///
/// One cubic curve is built per waypoint, spanning from the midpoint before
/// it to the midpoint after it and bulging toward the waypoint by
/// `smoothness` (0 = sharp corners, 1 = full smoothing). The path therefore
/// passes through interior waypoints only approximately; that is a property
/// of the midpoint construction, not an accident. The first and last
/// waypoints are hit exactly.
///
/// Distance queries binary-search the ordered curve ranges, then map the
/// local distance to the curve's shape parameter.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use waypath_motion::MovementPath;
///
/// let path = MovementPath::new(
///     vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0)],
///     0.5,
/// )?;
///
/// assert!((path.total_length() - 20.0).abs() < 0.5);
/// let mid = path.point_at_distance(10.0)?;
/// assert!((mid - Vec3::new(10.0, 0.0, 0.0)).length() < 0.1);
/// # Ok::<(), waypath_motion::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        bound(
            serialize = "V: serde::Serialize + waypath_curve::VectorSpace",
            deserialize = "V: serde::de::DeserializeOwned + waypath_curve::VectorSpace"
        ),
        try_from = "PathBlueprint<V>",
        into = "PathBlueprint<V>"
    )
)]
pub struct MovementPath<V = Vec3> {
    waypoints: Vec<V>,
    smoothness: f32,
    entries: Vec<CurveEntry<V>>,
    total_length: f32,
}

impl<V: VectorSpace> MovementPath<V> {
    /// Builds a path through `waypoints` with the given smoothness.
    ///
    /// Smoothness outside [0, 1] is clamped.
    ///
    /// # Errors
    ///
    /// [`PathError::NoWaypoints`] for an empty list;
    /// [`PathError::DegenerateCurve`] when a curve collapses to a point
    /// (duplicate adjacent waypoints, or a single-waypoint list).
    pub fn new(waypoints: Vec<V>, smoothness: f32) -> Result<Self, PathError> {
        let smoothness = smoothness.clamp(0.0, 1.0);
        let (entries, total_length) = build_entries(&waypoints, smoothness)?;
        Ok(Self {
            waypoints,
            smoothness,
            entries,
            total_length,
        })
    }

    /// Replaces the whole path with one built from the new inputs.
    ///
    /// The replacement is built completely before any field changes, so on
    /// error the existing path is left untouched, and a successful rebuild
    /// never exposes a mix of old and new state.
    pub fn rebuild(&mut self, waypoints: Vec<V>, smoothness: f32) -> Result<(), PathError> {
        let smoothness = smoothness.clamp(0.0, 1.0);
        let (entries, total_length) = build_entries(&waypoints, smoothness)?;

        self.waypoints = waypoints;
        self.smoothness = smoothness;
        self.entries = entries;
        self.total_length = total_length;
        Ok(())
    }

    /// Empties the path. Subsequent queries return [`PathError::NoWaypoints`]
    /// until the next successful [`rebuild`](Self::rebuild).
    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.entries.clear();
        self.total_length = 0.0;
        self.smoothness = 0.0;
    }

    /// Returns the point exactly `distance` units along the path.
    ///
    /// Distances past the total length clamp to the path's end point;
    /// negative distances are rejected.
    pub fn point_at_distance(&self, distance: f32) -> Result<V, PathError> {
        if distance < 0.0 {
            return Err(PathError::NegativeDistance { distance });
        }
        let Some(last) = self.entries.last() else {
            return Err(PathError::NoWaypoints);
        };
        if distance > self.total_length {
            return Ok(last.curve.end());
        }

        let entry = self.entry_at_distance(distance);
        let t = entry.curve.normalize_distance(distance - entry.start_distance);
        Ok(entry.curve.point_at(t))
    }

    /// Sum of all curve length estimates.
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// The path's end point, if the path is non-empty.
    pub fn last_point(&self) -> Option<V> {
        self.entries.last().map(|entry| entry.curve.end())
    }

    /// The waypoints the path was built from.
    #[inline]
    pub fn waypoints(&self) -> &[V] {
        &self.waypoints
    }

    /// The smoothness the path was built with, after clamping.
    #[inline]
    pub fn smoothness(&self) -> f32 {
        self.smoothness
    }

    /// The curves in path order with their distance ranges.
    #[inline]
    pub fn segments(&self) -> &[CurveEntry<V>] {
        &self.entries
    }

    /// Number of curves (one per waypoint).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a cleared or default-constructed path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the whole path to a polyline with roughly `segment_size`
    /// spacing, for visualization or export.
    ///
    /// Each curve contributes its [`ArcLengthSampler`] polyline; the
    /// polylines are half-open, so shared curve boundaries appear exactly
    /// once, and curves shorter than the spacing contribute no interior
    /// samples. The path's end point is appended so the polyline terminates
    /// where the path does.
    ///
    /// Not used for distance queries: spacing across curve boundaries is
    /// only approximate where curvature changes.
    pub fn flatten(&self, segment_size: f32) -> Vec<V> {
        let mut points = Vec::new();
        for entry in &self.entries {
            let sampler = ArcLengthSampler::new(&entry.curve, segment_size);
            points.extend_from_slice(sampler.samples());
        }
        if let Some(last) = self.last_point() {
            points.push(last);
        }
        points
    }

    /// Finds the curve whose range contains `distance`.
    ///
    /// Binary search for the last entry starting at or before `distance`.
    /// Callers guarantee a non-empty path and a non-negative distance.
    fn entry_at_distance(&self, distance: f32) -> &CurveEntry<V> {
        let mut lo = 0;
        let mut hi = self.entries.len() - 1;

        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if self.entries[mid].start_distance <= distance {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        &self.entries[lo]
    }
}

impl<V> Default for MovementPath<V> {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            smoothness: 0.0,
            entries: Vec::new(),
            total_length: 0.0,
        }
    }
}

/// Builds one curve per waypoint and accumulates the distance ranges.
///
/// Curve *i* spans from the midpoint between waypoint *i-1* and *i* to the
/// midpoint between *i* and *i+1* (endpoints act as their own missing
/// neighbor), with tangents pulled from those midpoints toward the waypoint
/// by `smoothness`.
fn build_entries<V: VectorSpace>(
    waypoints: &[V],
    smoothness: f32,
) -> Result<(Vec<CurveEntry<V>>, f32), PathError> {
    if waypoints.is_empty() {
        return Err(PathError::NoWaypoints);
    }

    let last = waypoints.len() - 1;
    let mut entries = Vec::with_capacity(waypoints.len());
    let mut total = 0.0_f32;

    for (i, &center) in waypoints.iter().enumerate() {
        let prev = waypoints[i.saturating_sub(1)];
        let next = waypoints[(i + 1).min(last)];

        let enter = lerp(prev, center, 0.5);
        let exit = lerp(center, next, 0.5);
        let enter_tangent = lerp(enter, center, smoothness);
        let exit_tangent = lerp(exit, center, smoothness);

        let curve = CubicCurve::new(enter, exit, enter_tangent, exit_tangent);
        if curve.estimated_length() < MIN_CURVE_LENGTH {
            return Err(PathError::DegenerateCurve { index: i });
        }

        let end = total + curve.estimated_length();
        entries.push(CurveEntry {
            curve,
            start_distance: total,
            end_distance: end,
        });
        total = end;
    }

    Ok((entries, total))
}

/// Source data for a path: the construction inputs, nothing derived.
///
/// This is the persistence form of [`MovementPath`]: serializing a path
/// stores its blueprint, and deserializing re-runs construction, so cached
/// lengths and distance ranges can never go stale on disk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "V: serde::Serialize",
        deserialize = "V: serde::de::DeserializeOwned"
    ))
)]
pub struct PathBlueprint<V = Vec3> {
    pub waypoints: Vec<V>,
    pub smoothness: f32,
}

impl<V: VectorSpace> TryFrom<PathBlueprint<V>> for MovementPath<V> {
    type Error = PathError;

    fn try_from(blueprint: PathBlueprint<V>) -> Result<Self, PathError> {
        MovementPath::new(blueprint.waypoints, blueprint.smoothness)
    }
}

impl<V: VectorSpace> From<MovementPath<V>> for PathBlueprint<V> {
    fn from(path: MovementPath<V>) -> Self {
        Self {
            waypoints: path.waypoints,
            smoothness: path.smoothness,
        }
    }
}
