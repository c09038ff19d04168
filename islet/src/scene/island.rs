//! Static dressing: the island itself, its buildings, and the seabed
//! scatter. Everything here is queued as a pending model; the loading
//! controller places it once its asset arrives.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use rand::Rng;

use super::dressing::Dressing;
use super::load_repeating_texture;
use super::loading::{PendingModel, PendingModels};
use crate::constants::{
    MODEL_CABIN, MODEL_CORAL, MODEL_DOCK, MODEL_ISLAND, MODEL_PALM, MODEL_STARFISH,
    SCATTER_HALF_EXTENT, SEABED_LEVEL, TEXTURE_SAND, TEXTURE_STARFISH, WOOD_BROWN,
};

/// Fixed palm sites on the island ridge.
const PALM_SITES: [Vec3; 3] = [
    Vec3::new(0.0, 100.0, 40.0),
    Vec3::new(-200.0, 110.0, 40.0),
    Vec3::new(-250.0, 90.0, 30.0),
];

const CORAL_COUNT: usize = 40;
const STARFISH_COUNT: usize = 60;

pub fn setup_static_models(asset_server: Res<AssetServer>, mut pending: ResMut<PendingModels>) {
    let mut rng = rand::thread_rng();

    pending.0.push(PendingModel {
        name: "island",
        scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_ISLAND)),
        transform: Transform::from_xyz(-200.0, 15.0, 50.0).with_scale(Vec3::splat(2.0)),
        dressing: Dressing::Textured {
            map: load_repeating_texture(&asset_server, TEXTURE_SAND),
            uv_scale: 20.0,
            roughness: 0.8,
            metallic: 0.1,
        },
        motion: None,
    });

    pending.0.push(PendingModel {
        name: "dock",
        scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_DOCK)),
        transform: Transform::from_xyz(-95.0, 20.0, -120.0)
            .with_scale(Vec3::splat(0.1))
            .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
        dressing: Dressing::Tinted {
            color: WOOD_BROWN,
            roughness: 0.8,
            metallic: 0.1,
        },
        motion: None,
    });

    pending.0.push(PendingModel {
        name: "cabin",
        scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_CABIN)),
        transform: Transform::from_xyz(-125.0, 95.0, -10.0)
            .with_scale(Vec3::splat(18.0))
            .with_rotation(Quat::from_rotation_y(PI)),
        dressing: Dressing::Authored,
        motion: None,
    });

    let palm_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_PALM));
    for site in PALM_SITES {
        pending.0.push(PendingModel {
            name: "palm tree",
            scene: palm_scene.clone(),
            transform: Transform::from_translation(site)
                .with_scale(Vec3::splat(50.0))
                .with_rotation(Quat::from_rotation_y(rng.gen_range(0.0..TAU))),
            dressing: Dressing::Authored,
            motion: None,
        });
    }

    // Seabed scatter: pink coral and textured starfish, uniformly placed.
    let coral_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_CORAL));
    for _ in 0..CORAL_COUNT {
        let scale = rng.gen_range(0.02..0.04);
        pending.0.push(PendingModel {
            name: "coral",
            scene: coral_scene.clone(),
            transform: scatter_transform(&mut rng, scale),
            dressing: Dressing::Glowing {
                color: Color::srgb_u8(0xff, 0x69, 0xb4),
                emissive: Color::srgb_u8(0xff, 0x14, 0x93).to_linear() * 0.1,
                roughness: 0.9,
                metallic: 0.1,
            },
            motion: None,
        });
    }

    let starfish_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_STARFISH));
    let starfish_texture = load_repeating_texture(&asset_server, TEXTURE_STARFISH);
    for _ in 0..STARFISH_COUNT {
        let scale = rng.gen_range(5.0..8.0);
        pending.0.push(PendingModel {
            name: "starfish",
            scene: starfish_scene.clone(),
            transform: scatter_transform(&mut rng, scale),
            dressing: Dressing::Textured {
                map: starfish_texture.clone(),
                uv_scale: 1.0,
                roughness: 0.7,
                metallic: 0.1,
            },
            motion: None,
        });
    }
}

/// Random seabed placement: uniform in the scatter square, random yaw.
fn scatter_transform(rng: &mut impl Rng, scale: f32) -> Transform {
    Transform::from_xyz(
        rng.gen_range(-SCATTER_HALF_EXTENT..SCATTER_HALF_EXTENT),
        SEABED_LEVEL,
        rng.gen_range(-SCATTER_HALF_EXTENT..SCATTER_HALF_EXTENT),
    )
    .with_scale(Vec3::splat(scale))
    .with_rotation(Quat::from_rotation_y(rng.gen_range(0.0..TAU)))
}
