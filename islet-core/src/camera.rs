//! Top-down camera rig and view-mode state machine.
//!
//! The top-down camera is a dolly on the XZ plane: four direction flags
//! each push the camera a fixed step per tick, the height is clamped every
//! frame, and after any move the camera re-aims at a point ten units ahead
//! along -Z. Orbital mode hands the camera over to the orbit controller in
//! the app; the only logic owned here is the mode toggle and the snap back
//! to the top-down pose on re-entry.

use bevy::ecs::resource::Resource;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Which controller currently owns the camera.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    TopDown,
    Orbital,
}

impl CameraMode {
    pub fn toggle(&mut self) {
        *self = match self {
            CameraMode::TopDown => CameraMode::Orbital,
            CameraMode::Orbital => CameraMode::TopDown,
        };
    }

    pub fn is_orbital(self) -> bool {
        self == CameraMode::Orbital
    }
}

/// Direction flags for one tick of top-down movement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveFlags {
    pub fn any(self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// One tick's outcome: where the camera is now, and where it should aim if
/// it moved this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollyStep {
    pub position: Vec3,
    pub look_target: Option<Vec3>,
}

/// Fixed-height dolly configuration.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopDownRig {
    /// World units moved per tick per active flag.
    pub speed: f32,
    /// Height the camera is clamped to every frame.
    pub height: f32,
    /// How far ahead along -Z the aim point sits.
    pub look_ahead: f32,
}

impl Default for TopDownRig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            height: 200.0,
            look_ahead: 10.0,
        }
    }
}

impl TopDownRig {
    /// Aim point for a camera at `position`: ground level, ten units ahead.
    pub fn look_target(&self, position: Vec3) -> Vec3 {
        Vec3::new(position.x, 0.0, position.z - self.look_ahead)
    }

    /// One tick of flag-driven movement. The height clamp applies whether
    /// or not any flag is set; the aim point is only refreshed on a move.
    pub fn advance(&self, position: Vec3, flags: MoveFlags) -> DollyStep {
        let mut position = position;
        if flags.forward {
            position.z -= self.speed;
        }
        if flags.backward {
            position.z += self.speed;
        }
        if flags.left {
            position.x -= self.speed;
        }
        if flags.right {
            position.x += self.speed;
        }
        position.y = self.height;

        DollyStep {
            position,
            look_target: flags.any().then(|| self.look_target(position)),
        }
    }

    /// Pose to apply when the camera returns from orbital mode: height
    /// snapped back, aim refreshed, x/z kept wherever orbital left them.
    pub fn resnap(&self, position: Vec3) -> DollyStep {
        let mut position = position;
        position.y = self.height;
        DollyStep {
            position,
            look_target: Some(self.look_target(position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_tick_from_rest_position() {
        let rig = TopDownRig::default();
        let step = rig.advance(
            Vec3::new(0.0, 200.0, 0.0),
            MoveFlags {
                forward: true,
                ..Default::default()
            },
        );
        assert_eq!(step.position, Vec3::new(0.0, 200.0, -2.0));
        assert_eq!(step.look_target, Some(Vec3::new(0.0, 0.0, -12.0)));
    }

    #[test]
    fn each_flag_moves_one_axis() {
        let rig = TopDownRig::default();
        let origin = Vec3::new(0.0, 200.0, 0.0);

        let back = rig.advance(origin, MoveFlags { backward: true, ..Default::default() });
        assert_eq!(back.position, Vec3::new(0.0, 200.0, 2.0));

        let left = rig.advance(origin, MoveFlags { left: true, ..Default::default() });
        assert_eq!(left.position, Vec3::new(-2.0, 200.0, 0.0));

        let right = rig.advance(origin, MoveFlags { right: true, ..Default::default() });
        assert_eq!(right.position, Vec3::new(2.0, 200.0, 0.0));
    }

    #[test]
    fn opposing_flags_cancel_but_still_reaim() {
        let rig = TopDownRig::default();
        let step = rig.advance(
            Vec3::new(5.0, 200.0, 5.0),
            MoveFlags {
                forward: true,
                backward: true,
                ..Default::default()
            },
        );
        assert_eq!(step.position, Vec3::new(5.0, 200.0, 5.0));
        // Both flags were active, so the camera still re-aims.
        assert_eq!(step.look_target, Some(Vec3::new(5.0, 0.0, -5.0)));
    }

    #[test]
    fn height_is_clamped_even_without_input() {
        let rig = TopDownRig::default();
        let step = rig.advance(Vec3::new(3.0, 120.0, -9.0), MoveFlags::default());
        assert_eq!(step.position, Vec3::new(3.0, 200.0, -9.0));
        assert_eq!(step.look_target, None);
    }

    #[test]
    fn double_toggle_returns_to_top_down_resnap() {
        let mut mode = CameraMode::default();
        assert_eq!(mode, CameraMode::TopDown);

        mode.toggle();
        assert!(mode.is_orbital());
        // Orbital mode wanders off somewhere below the dolly plane.
        let wandered = Vec3::new(80.0, 55.0, -40.0);

        mode.toggle();
        assert_eq!(mode, CameraMode::TopDown);
        let rig = TopDownRig::default();
        let step = rig.resnap(wandered);
        assert_eq!(step.position, Vec3::new(80.0, 200.0, -40.0));
        assert_eq!(step.look_target, Some(Vec3::new(80.0, 0.0, -50.0)));
    }
}
