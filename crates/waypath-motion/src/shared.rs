//! Concurrent publication of movement paths.

use std::sync::Arc;

use glam::Vec3;
use parking_lot::RwLock;
use waypath_curve::VectorSpace;

use crate::{MovementPath, PathError};

/// A movement path shared between one writer and many readers.
///
/// Readers take a snapshot with [`load`](Self::load) and query it with no
/// locking at all; the lock is held only for the pointer clone. A rebuild
/// constructs the complete replacement path outside the lock, then publishes
/// it with a single swap. A snapshot is always a fully-old or fully-new
/// path, never a mix of the two, and a failed rebuild leaves the published
/// path unchanged.
#[derive(Debug)]
pub struct SharedMovementPath<V = Vec3> {
    current: RwLock<Arc<MovementPath<V>>>,
}

impl<V: VectorSpace> SharedMovementPath<V> {
    /// Publishes an initial path.
    pub fn new(path: MovementPath<V>) -> Self {
        Self {
            current: RwLock::new(Arc::new(path)),
        }
    }

    /// Starts with an empty path; queries error until the first rebuild.
    pub fn empty() -> Self {
        Self::new(MovementPath::default())
    }

    /// Returns the currently published path snapshot.
    ///
    /// The snapshot stays valid (and internally consistent) even if a
    /// rebuild publishes a replacement while it is held.
    pub fn load(&self) -> Arc<MovementPath<V>> {
        self.current.read().clone()
    }

    /// Builds a path from the new inputs and publishes it atomically.
    ///
    /// On error nothing is published and readers keep the previous path.
    pub fn rebuild(&self, waypoints: Vec<V>, smoothness: f32) -> Result<(), PathError> {
        let fresh = Arc::new(MovementPath::new(waypoints, smoothness)?);
        *self.current.write() = fresh;
        Ok(())
    }

    /// Publishes an empty path.
    pub fn clear(&self) {
        *self.current.write() = Arc::new(MovementPath::default());
    }

    /// Queries the currently published path. See
    /// [`MovementPath::point_at_distance`].
    pub fn point_at_distance(&self, distance: f32) -> Result<V, PathError> {
        self.load().point_at_distance(distance)
    }

    /// Total length of the currently published path.
    pub fn total_length(&self) -> f32 {
        self.load().total_length()
    }
}

impl<V: VectorSpace> Default for SharedMovementPath<V> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoints(scale: f32) -> Vec<Vec3> {
        vec![
            Vec3::ZERO,
            Vec3::new(scale, 0.0, 0.0),
            Vec3::new(2.0 * scale, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_empty_until_first_rebuild() {
        let shared = SharedMovementPath::<Vec3>::empty();
        assert_eq!(shared.point_at_distance(0.0), Err(PathError::NoWaypoints));

        shared.rebuild(waypoints(10.0), 0.5).unwrap();
        assert!(shared.point_at_distance(0.0).is_ok());
    }

    #[test]
    fn test_rebuild_swaps_whole_path() {
        let shared = SharedMovementPath::new(MovementPath::new(waypoints(10.0), 0.5).unwrap());

        shared.rebuild(waypoints(5.0), 0.5).unwrap();
        assert!((shared.total_length() - 10.0).abs() < 0.1);
    }

    #[test]
    fn test_snapshot_survives_rebuild() {
        let shared = SharedMovementPath::new(MovementPath::new(waypoints(10.0), 0.5).unwrap());
        let snapshot = shared.load();

        shared.rebuild(waypoints(5.0), 0.5).unwrap();

        // The old snapshot still answers from the old path.
        assert!((snapshot.total_length() - 20.0).abs() < 0.1);
        assert!((shared.total_length() - 10.0).abs() < 0.1);
    }

    #[test]
    fn test_failed_rebuild_keeps_published_path() {
        let shared = SharedMovementPath::new(MovementPath::new(waypoints(10.0), 0.5).unwrap());

        assert_eq!(shared.rebuild(Vec::new(), 0.5), Err(PathError::NoWaypoints));
        assert!((shared.total_length() - 20.0).abs() < 0.1);
    }

    #[test]
    fn test_concurrent_readers_see_old_or_new() {
        let shared = Arc::new(SharedMovementPath::new(
            MovementPath::new(waypoints(10.0), 0.5).unwrap(),
        ));

        let reader = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    let total = shared.load().total_length();
                    // Totals of the two generations; never a mix.
                    assert!(
                        (total - 20.0).abs() < 0.1 || (total - 10.0).abs() < 0.1,
                        "saw inconsistent total {total}"
                    );
                }
            })
        };

        for _ in 0..100 {
            shared.rebuild(waypoints(5.0), 0.5).unwrap();
            shared.rebuild(waypoints(10.0), 0.5).unwrap();
        }

        reader.join().unwrap();
    }
}
