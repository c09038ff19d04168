//! Ordered arena of animated poses.
//!
//! Every animated object in the scene registers a [`Motion`] here together
//! with its initial pose. Once per frame the host calls [`tick`] with a
//! single clock reading; every entry is advanced exactly once, in
//! registration order, synchronously. Entries can be removed when their
//! object leaves the scene, so nothing keeps animating a despawned target.
//!
//! [`tick`]: AnimationRegistry::tick

mod motion;

use bevy::ecs::resource::Resource;
use bevy::transform::components::Transform;
use bevy_log::debug;

pub use motion::{BobMotion, FigureEightMotion, Motion, OrbitMotion};

/// Stable handle to one registered animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

struct AnimationEntry {
    id: AnimationId,
    pose: Transform,
    motion: Motion,
}

/// Indexed arena of animated entries, ticked in registration order.
#[derive(Default, Resource)]
pub struct AnimationRegistry {
    entries: Vec<AnimationEntry>,
    next_id: u64,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a motion with its initial pose. Duplicate motions are fine;
    /// identity is the returned id, ordering is insertion order.
    pub fn register(&mut self, motion: Motion, initial: Transform) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.entries.push(AnimationEntry {
            id,
            pose: initial,
            motion,
        });
        id
    }

    /// Detaches an entry. The relative order of the remaining entries is
    /// preserved. Returns false if the id was already gone.
    pub fn remove(&mut self, id: AnimationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!("released animation {id:?}");
        }
        removed
    }

    /// Advances every entry exactly once, in registration order, all with
    /// the same clock reading.
    pub fn tick(&mut self, now: f32) {
        for entry in &mut self.entries {
            entry.motion.apply(&mut entry.pose, now);
        }
    }

    /// Current pose of an entry, if it is still registered.
    pub fn pose(&self, id: AnimationId) -> Option<&Transform> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.pose)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;
    use std::sync::{Arc, Mutex};

    fn logging_motion(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Motion {
        let log = Arc::clone(log);
        Motion::Custom(Box::new(move |_pose, _t| {
            log.lock().unwrap().push(name);
        }))
    }

    #[test]
    fn tick_runs_entries_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = AnimationRegistry::new();
        registry.register(logging_motion(&log, "first"), Transform::IDENTITY);
        registry.register(logging_motion(&log, "second"), Transform::IDENTITY);
        registry.register(logging_motion(&log, "third"), Transform::IDENTITY);

        for tick in 0..3 {
            registry.tick(tick as f32);
        }

        let expected: Vec<&str> = ["first", "second", "third"].repeat(3);
        assert_eq!(*log.lock().unwrap(), expected);
    }

    #[test]
    fn remove_preserves_order_of_remaining_entries() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = AnimationRegistry::new();
        registry.register(logging_motion(&log, "first"), Transform::IDENTITY);
        let middle = registry.register(logging_motion(&log, "second"), Transform::IDENTITY);
        registry.register(logging_motion(&log, "third"), Transform::IDENTITY);

        assert!(registry.remove(middle));
        assert!(!registry.remove(middle), "double removal reports false");
        assert_eq!(registry.len(), 2);

        registry.tick(0.0);
        assert_eq!(*log.lock().unwrap(), vec!["first", "third"]);
        assert!(registry.pose(middle).is_none());
    }

    #[test]
    fn orbit_stays_on_its_circle() {
        let orbit = OrbitMotion {
            center: Vec3::new(100.0, 45.0, 250.0),
            radius: 70.0,
            angular_speed: 0.5,
        };
        let mut pose = Transform::IDENTITY;
        for ti in 0..200 {
            let t = ti as f32 * 0.173;
            orbit.apply(&mut pose, t);
            let from_center = pose.translation - orbit.center;
            assert!((from_center.length() - orbit.radius).abs() < 1e-3);
            assert_eq!(pose.translation.y, orbit.center.y);
        }
    }

    #[test]
    fn orbit_heading_is_tangent_offset() {
        let orbit = OrbitMotion {
            center: Vec3::ZERO,
            radius: 10.0,
            angular_speed: 0.5,
        };
        let mut pose = Transform::IDENTITY;
        orbit.apply(&mut pose, 2.0);
        let expected = Quat::from_rotation_y(1.0 + FRAC_PI_2);
        assert!(pose.rotation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn bob_oscillates_around_base_without_drifting() {
        let bob = BobMotion {
            base: Vec3::new(50.0, 35.0, -50.0),
            height: 0.5,
            speed: 1.5,
            tilt: 0.05,
        };
        let mut pose = Transform::IDENTITY;
        for ti in 0..100 {
            let t = ti as f32 * 0.21;
            bob.apply(&mut pose, t);
            assert_eq!(pose.translation.x, bob.base.x);
            assert_eq!(pose.translation.z, bob.base.z);
            assert!((pose.translation.y - bob.base.y).abs() <= bob.height + 1e-6);
        }
    }

    #[test]
    fn figure_eight_stays_in_its_bounds() {
        let eight = FigureEightMotion {
            center: Vec3::new(-90.0, 30.0, -190.0),
            radius: 50.0,
            height: 5.0,
            speed: 0.5,
        };
        let mut pose = Transform::IDENTITY;
        for ti in 0..300 {
            let t = ti as f32 * 0.11;
            eight.apply(&mut pose, t);
            let offset = pose.translation - eight.center;
            assert!(offset.x.abs() <= eight.radius + 1e-4);
            assert!(offset.z.abs() <= eight.radius * 0.5 + 1e-4);
            assert!(offset.y.abs() <= eight.height + 1e-4);
        }
    }

    #[test]
    fn registered_scale_survives_ticking() {
        let mut registry = AnimationRegistry::new();
        let id = registry.register(
            Motion::Orbit(OrbitMotion {
                center: Vec3::ZERO,
                radius: 70.0,
                angular_speed: 0.5,
            }),
            Transform::from_scale(Vec3::splat(25.0)),
        );
        registry.tick(3.0);
        let pose = registry.pose(id).unwrap();
        assert_eq!(pose.scale, Vec3::splat(25.0));
    }
}
