//! The moving inhabitants: the boat, the rubber duck, and the clownfish.
//!
//! The boat is a plain tinted box, so it spawns (and registers its orbit)
//! immediately. The duck and the fish are loaded models; their motions are
//! registered by the loading controller on the tick each asset arrives, so
//! registration order for those two follows load completion order.

use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use islet_core::animation::{
    AnimationRegistry, BobMotion, FigureEightMotion, Motion, OrbitMotion,
};

use super::animation::Animated;
use super::dressing::Dressing;
use super::loading::{PendingModel, PendingModels};
use crate::constants::{MODEL_CLOWNFISH, MODEL_DUCK, WOOD_BROWN};

pub fn setup_wildlife(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<AnimationRegistry>,
    mut pending: ResMut<PendingModels>,
    asset_server: Res<AssetServer>,
) {
    let boat_pose = Transform::from_xyz(100.0, 45.0, 250.0).with_scale(Vec3::splat(25.0));
    let boat_id = registry.register(
        Motion::Orbit(OrbitMotion {
            center: Vec3::new(100.0, 45.0, 250.0),
            radius: 70.0,
            angular_speed: 0.5,
        }),
        boat_pose,
    );
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(1.0, 0.5, 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: WOOD_BROWN,
            ..Default::default()
        })),
        boat_pose,
        Animated { id: boat_id },
        Name::new("boat"),
    ));

    pending.0.push(PendingModel {
        name: "rubber duck",
        scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_DUCK)),
        transform: Transform::from_xyz(50.0, 35.0, -50.0),
        dressing: Dressing::Authored,
        motion: Some(Motion::Bob(BobMotion {
            base: Vec3::new(50.0, 35.0, -50.0),
            height: 0.5,
            speed: 1.5,
            tilt: 0.05,
        })),
    });

    pending.0.push(PendingModel {
        name: "clownfish",
        scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_CLOWNFISH)),
        transform: Transform::from_xyz(-90.0, 30.0, -190.0),
        dressing: Dressing::Authored,
        motion: Some(Motion::FigureEight(FigureEightMotion {
            center: Vec3::new(-90.0, 30.0, -190.0),
            radius: 50.0,
            height: 5.0,
            speed: 0.5,
        })),
    });
}
