//! Camera rig: fixed-height top-down dolly by default, free orbit on
//! toggle. The dolly math lives in `islet_core::camera`; this module only
//! feeds it input flags and applies the resulting pose.

mod orbit;

use bevy::prelude::*;
use bevy_atmosphere::prelude::AtmosphereCamera;
use islet_core::camera::{CameraMode, MoveFlags, TopDownRig};

use crate::constants::{FOG_COLOR, FOG_DENSITY};
use crate::input::keyboard::{is_action_just_pressed, is_action_pressed};
use crate::input::{data::GameAction, KeyMap};
use crate::postfx::PixelateSettings;
use crate::AppSettings;

/// Marker for the one scene camera.
#[derive(Component)]
pub struct SceneCamera;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraMode>()
            .init_resource::<TopDownRig>()
            .init_resource::<orbit::OrbitController>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    toggle_view_mode,
                    top_down_movement.run_if(in_top_down),
                    orbit::orbit_input.run_if(in_orbital),
                    orbit::orbit_update.run_if(in_orbital),
                )
                    .chain(),
            );
    }
}

fn in_top_down(mode: Res<CameraMode>) -> bool {
    !mode.is_orbital()
}

fn in_orbital(mode: Res<CameraMode>) -> bool {
    mode.is_orbital()
}

fn setup_camera(mut commands: Commands, settings: Res<AppSettings>, rig: Res<TopDownRig>) {
    let mut camera = commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Msaa::Off,
        Transform::from_xyz(0.0, rig.height, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: FOG_COLOR,
            falloff: FogFalloff::Exponential {
                density: FOG_DENSITY,
            },
            ..Default::default()
        },
        AtmosphereCamera::default(),
        Name::new("camera"),
    ));
    if let Some(pixel_size) = settings.pixelation {
        camera.insert(PixelateSettings { pixel_size });
    }
}

fn toggle_view_mode(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    rig: Res<TopDownRig>,
    mut mode: ResMut<CameraMode>,
    mut controller: ResMut<orbit::OrbitController>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    if !is_action_just_pressed(GameAction::ToggleViewMode, &keyboard_input, &key_map) {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        debug!("camera not found");
        return;
    };

    mode.toggle();
    if mode.is_orbital() {
        controller.adopt(transform.translation);
    } else {
        // Back to the dolly plane: height snapped, aim refreshed.
        let step = rig.resnap(transform.translation);
        transform.translation = step.position;
        if let Some(target) = step.look_target {
            transform.look_at(target, Vec3::Y);
        }
    }
}

fn top_down_movement(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    rig: Res<TopDownRig>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        debug!("camera not found");
        return;
    };

    let flags = MoveFlags {
        forward: is_action_pressed(GameAction::MoveForward, &keyboard_input, &key_map),
        backward: is_action_pressed(GameAction::MoveBackward, &keyboard_input, &key_map),
        left: is_action_pressed(GameAction::MoveLeft, &keyboard_input, &key_map),
        right: is_action_pressed(GameAction::MoveRight, &keyboard_input, &key_map),
    };

    let step = rig.advance(transform.translation, flags);
    transform.translation = step.position;
    if let Some(target) = step.look_target {
        transform.look_at(target, Vec3::Y);
    }
}
