//! Distance-parameterized movement paths through 3D waypoints.
//!
//! This crate turns an ordered waypoint list into a chain of cubic Bézier
//! curves and answers "where is the point exactly D units along the path?"
//! without re-deriving geometry per query:
//!
//! - [`MovementPath`] - build, query by distance, rebuild/clear
//! - [`SharedMovementPath`] - single-writer/multi-reader publication
//! - [`PathBlueprint`] - persistence form (feature `serde`)
//! - [`PathError`] - construction and query errors
//!
//! The curve math lives in [`waypath_curve`] and is re-exported here. The
//! vector type is pluggable through [`VectorSpace`]; `glam::Vec3` is the
//! default.

mod error;
mod path;
mod shared;

pub use error::PathError;
pub use path::{CurveEntry, MovementPath, PathBlueprint};
pub use shared::SharedMovementPath;

pub use waypath_curve::{
    ArcLengthSampler, CubicCurve, MIN_CURVE_LENGTH, STRAIGHT_TOLERANCE, VectorSpace, lerp,
    move_towards,
};

pub use glam;
