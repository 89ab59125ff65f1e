//! Error types for waypath-motion.

use thiserror::Error;

/// Errors from path construction and distance queries.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PathError {
    /// Construction needs at least one waypoint. Also returned when
    /// querying a cleared or default-constructed path.
    #[error("path has no waypoints")]
    NoWaypoints,

    /// The curve built around this waypoint has zero estimated length,
    /// usually from duplicate adjacent waypoints.
    #[error("degenerate curve at waypoint {index}: estimated length is zero")]
    DegenerateCurve { index: usize },

    /// Negative distances indicate a caller error and are rejected;
    /// overshoot past the total length clamps instead.
    #[error("negative distance query: {distance}")]
    NegativeDistance { distance: f32 },
}
