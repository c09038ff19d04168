//! Material dressing for loaded models.
//!
//! Loaded glTF scenes arrive with whatever materials they were authored
//! with. Each queued model declares up front which treatment its meshes
//! get; one observer applies it when the scene instance finishes spawning.

use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

/// How a loaded model's meshes are surfaced.
#[derive(Debug, Clone)]
pub enum Dressing {
    /// Keep the materials authored in the asset.
    Authored,
    /// Flat tint, e.g. the wooden dock.
    Tinted {
        color: Color,
        roughness: f32,
        metallic: f32,
    },
    /// Tiling texture, e.g. the sandy island dome.
    Textured {
        map: Handle<Image>,
        uv_scale: f32,
        roughness: f32,
        metallic: f32,
    },
    /// Tint plus a faint glow, e.g. the coral.
    Glowing {
        color: Color,
        emissive: LinearRgba,
        roughness: f32,
        metallic: f32,
    },
}

impl Dressing {
    /// The replacement material, or `None` to keep the authored ones.
    fn material(&self) -> Option<StandardMaterial> {
        match self {
            Dressing::Authored => None,
            Dressing::Tinted {
                color,
                roughness,
                metallic,
            } => Some(StandardMaterial {
                base_color: *color,
                perceptual_roughness: *roughness,
                metallic: *metallic,
                ..Default::default()
            }),
            Dressing::Textured {
                map,
                uv_scale,
                roughness,
                metallic,
            } => Some(StandardMaterial {
                base_color_texture: Some(map.clone()),
                uv_transform: Affine2::from_scale(Vec2::splat(*uv_scale)),
                perceptual_roughness: *roughness,
                metallic: *metallic,
                ..Default::default()
            }),
            Dressing::Glowing {
                color,
                emissive,
                roughness,
                metallic,
            } => Some(StandardMaterial {
                base_color: *color,
                emissive: *emissive,
                perceptual_roughness: *roughness,
                metallic: *metallic,
                ..Default::default()
            }),
        }
    }
}

/// Carries the dressing on the scene root until the instance is ready.
#[derive(Component, Debug, Clone)]
pub struct Dressed(pub Dressing);

/// Applies the declared dressing to every mesh of a finished scene
/// instance. One shared material handle per model keeps draw calls down.
pub fn dress_scene_instance(
    trigger: Trigger<SceneInstanceReady>,
    dressed: Query<&Dressed>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let root = trigger.target();
    let Ok(Dressed(dressing)) = dressed.get(root) else {
        return;
    };
    let Some(material) = dressing.material() else {
        return;
    };

    let handle = materials.add(material);
    for entity in children.iter_descendants(root) {
        if meshes.contains(entity) {
            commands
                .entity(entity)
                .insert(MeshMaterial3d(handle.clone()));
        }
    }
}
