//! Free-look orbit controller.
//!
//! Left-drag rotates around the scene origin, scroll zooms. Motion eases
//! toward its goal values so the camera settles instead of snapping; the
//! distance is clamped and the pitch never dips below the horizon.

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::SceneCamera;

const MIN_DISTANCE: f32 = 50.0;
const MAX_DISTANCE: f32 = 300.0;
// Strictly above the horizon, strictly short of straight down.
const MIN_PITCH: f32 = 0.05;
const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;
const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 10.0;
/// Fraction of the remaining distance covered per 60 Hz frame.
const DAMPING: f32 = 0.05;

#[derive(Resource, Debug)]
pub struct OrbitController {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_goal: f32,
    pitch_goal: f32,
    distance_goal: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: MAX_PITCH,
            distance: MAX_DISTANCE,
            yaw_goal: 0.0,
            pitch_goal: MAX_PITCH,
            distance_goal: MAX_DISTANCE,
        }
    }
}

impl OrbitController {
    /// Takes over from wherever the top-down camera left the transform,
    /// so entering orbital mode never jumps.
    pub fn adopt(&mut self, position: Vec3) {
        let offset = position - self.target;
        let length = offset.length().max(1e-4);

        self.distance = length.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.pitch = (offset.y / length).clamp(-1.0, 1.0).asin().clamp(MIN_PITCH, MAX_PITCH);
        self.yaw = offset.x.atan2(offset.z);
        self.yaw_goal = self.yaw;
        self.pitch_goal = self.pitch;
        self.distance_goal = self.distance;
    }

    fn position(&self) -> Vec3 {
        self.target
            + Vec3::new(
                self.pitch.cos() * self.yaw.sin(),
                self.pitch.sin(),
                self.pitch.cos() * self.yaw.cos(),
            ) * self.distance
    }
}

pub fn orbit_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut controller: ResMut<OrbitController>,
) {
    let controller = controller.into_inner();

    if mouse_buttons.pressed(MouseButton::Left) {
        for event in motion.read() {
            controller.yaw_goal -= event.delta.x * ROTATE_SENSITIVITY;
            controller.pitch_goal = (controller.pitch_goal + event.delta.y * ROTATE_SENSITIVITY)
                .clamp(MIN_PITCH, MAX_PITCH);
        }
    } else {
        motion.clear();
    }

    for event in wheel.read() {
        let steps = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 20.0,
        };
        controller.distance_goal =
            (controller.distance_goal - steps * ZOOM_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

pub fn orbit_update(
    time: Res<Time>,
    mut controller: ResMut<OrbitController>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    let controller = controller.into_inner();

    // Frame-rate independent easing toward the goals.
    let blend = 1.0 - (1.0 - DAMPING).powf(time.delta_secs() * 60.0);
    controller.yaw += (controller.yaw_goal - controller.yaw) * blend;
    controller.pitch += (controller.pitch_goal - controller.pitch) * blend;
    controller.distance += (controller.distance_goal - controller.distance) * blend;

    transform.translation = controller.position();
    transform.look_at(controller.target, Vec3::Y);
}
