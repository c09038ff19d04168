//! Time-driven motion paths.
//!
//! Each motion is a pure function of a clock reading that writes one target
//! pose. Translation and rotation are overwritten; scale is left alone so a
//! model's authored scale survives.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{EulerRot, Quat, Vec3};
use bevy::transform::components::Transform;
use serde::{Deserialize, Serialize};

/// Circular course around a fixed center, heading tangent to the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitMotion {
    pub center: Vec3,
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
}

impl OrbitMotion {
    pub fn apply(&self, pose: &mut Transform, t: f32) {
        let angle = self.angular_speed * t;
        pose.translation = self.center
            + Vec3::new(angle.cos() * self.radius, 0.0, angle.sin() * self.radius);
        pose.rotation = Quat::from_rotation_y(angle + FRAC_PI_2);
    }
}

/// Vertical bobbing around a base position, with a small tilt on two axes.
///
/// The tilt phases run at 0.5x and 0.7x of the bob speed so the tilt never
/// visibly synchronizes with the bob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BobMotion {
    pub base: Vec3,
    pub height: f32,
    pub speed: f32,
    pub tilt: f32,
}

impl BobMotion {
    pub fn apply(&self, pose: &mut Transform, t: f32) {
        let phase = t * self.speed;
        pose.translation = self.base + Vec3::Y * (phase.sin() * self.height);
        pose.rotation = Quat::from_euler(
            EulerRot::XYZ,
            (phase * 0.5).sin() * self.tilt,
            0.0,
            (phase * 0.7).sin() * self.tilt,
        );
    }
}

/// Figure-eight swim: a full sine on x, a double-rate half-amplitude sine
/// on z, and a gentle rise and fall on y. The heading keeps the forward
/// axis tangent to the path via the velocity-proportional cosine terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureEightMotion {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
    pub speed: f32,
}

impl FigureEightMotion {
    pub fn apply(&self, pose: &mut Transform, t: f32) {
        let phase = t * self.speed;
        pose.translation = self.center
            + Vec3::new(
                phase.sin() * self.radius,
                phase.sin() * self.height,
                (phase * 2.0).sin() * self.radius * 0.5,
            );

        let heading = f32::atan2(
            phase.cos() * self.radius,
            (phase * 2.0).cos() * self.radius * 0.5,
        );
        pose.rotation = Quat::from_euler(
            EulerRot::YXZ,
            -(heading - FRAC_PI_2),
            phase.sin() * 0.1,
            0.0,
        );
    }
}

/// A motion path for one animated object.
pub enum Motion {
    Orbit(OrbitMotion),
    Bob(BobMotion),
    FigureEight(FigureEightMotion),
    /// Escape hatch for motions the fixed variants cannot express.
    Custom(Box<dyn FnMut(&mut Transform, f32) + Send + Sync>),
}

impl Motion {
    /// Writes the pose for clock reading `t`.
    pub fn apply(&mut self, pose: &mut Transform, t: f32) {
        match self {
            Motion::Orbit(orbit) => orbit.apply(pose, t),
            Motion::Bob(bob) => bob.apply(pose, t),
            Motion::FigureEight(eight) => eight.apply(pose, t),
            Motion::Custom(f) => f(pose, t),
        }
    }
}

impl std::fmt::Debug for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Motion::Orbit(m) => f.debug_tuple("Orbit").field(m).finish(),
            Motion::Bob(m) => f.debug_tuple("Bob").field(m).finish(),
            Motion::FigureEight(m) => f.debug_tuple("FigureEight").field(m).finish(),
            Motion::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
