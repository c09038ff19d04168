//! Scene assembly: lights, fog partner material, seabed, static dressing,
//! wildlife, and the systems that usher loaded models into the world.

pub mod animation;
pub mod dressing;
pub mod island;
pub mod loading;
pub mod wildlife;

use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::prelude::*;

use crate::constants::{
    AMBIENT_COLOR, SEABED_LEVEL, SEA_RADIUS, SUN_COLOR, TEXTURE_SEABED,
};
use crate::water::mesh::radial_disc;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(animation::SceneAnimationPlugin)
            .init_resource::<loading::PendingModels>()
            .add_systems(
                Startup,
                (
                    setup_environment,
                    island::setup_static_models,
                    wildlife::setup_wildlife,
                ),
            )
            .add_systems(Update, loading::insert_ready_models)
            .add_observer(dressing::dress_scene_instance);
    }
}

/// Loads an image with repeat addressing so it can tile across a surface.
pub fn load_repeating_texture(asset_server: &AssetServer, path: &'static str) -> Handle<Image> {
    asset_server.load_with_settings(path, |settings: &mut ImageLoaderSettings| {
        settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            ..Default::default()
        });
    })
}

fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOR,
        brightness: 400.0,
        ..Default::default()
    });

    commands.spawn((
        DirectionalLight {
            color: SUN_COLOR,
            illuminance: 8_000.0,
            ..Default::default()
        },
        Transform::from_xyz(10.0, 100.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("sun"),
    ));

    // Sandy seabed disc below the water. Flat, so a single fan is enough.
    let seabed = materials.add(StandardMaterial {
        base_color_texture: Some(load_repeating_texture(&asset_server, TEXTURE_SEABED)),
        uv_transform: Affine2::from_scale(Vec2::splat(25.0)),
        perceptual_roughness: 0.5,
        metallic: 0.3,
        ..Default::default()
    });
    commands.spawn((
        Mesh3d(meshes.add(radial_disc(SEA_RADIUS, 1, 100))),
        MeshMaterial3d(seabed),
        Transform::from_xyz(0.0, SEABED_LEVEL, 0.0),
        Name::new("seabed"),
    ));
}
