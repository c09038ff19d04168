//! Custom water material and the surface it shades.
//!
//! The WGSL shader carries the actual wave model; it must stay formula-for-
//! formula identical to the CPU reference in `islet_core::water`. The host
//! writes the elapsed time into the material uniform once per frame, which
//! is the only mutable state the surface has.

pub mod mesh;

use bevy::asset::embedded_asset;
use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use islet_core::water::WaveParameters;

use crate::constants::{SEA_RADIUS, TEXTURE_WATER, TEXTURE_WATER_BUMP, WATER_LEVEL};
use crate::scene::load_repeating_texture;

/// Radial tessellation of the water disc; enough interior vertices for the
/// displacement to read as waves rather than a tilting plate.
const WATER_RINGS: u32 = 48;
const WATER_SEGMENTS: u32 = 96;

pub struct WaterPlugin;

impl Plugin for WaterPlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "water.wgsl");

        app.add_plugins(MaterialPlugin::<WaterMaterial>::default())
            .add_systems(Startup, setup_water)
            .add_systems(Update, advance_water_time);
    }
}

/// Uniform block shared with `water.wgsl`.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct WaterUniform {
    pub water_color: Vec4,
    pub amplitude: f32,
    pub frequency: f32,
    pub bump_scale: f32,
    pub texture_scale: f32,
    pub opacity: f32,
    pub time: f32,
}

impl WaterUniform {
    fn from_params(params: &WaveParameters) -> Self {
        Self {
            water_color: params.base_color.extend(1.0),
            amplitude: params.amplitude,
            frequency: params.frequency,
            bump_scale: params.bump_scale,
            texture_scale: params.texture_scale,
            opacity: params.opacity,
            time: 0.0,
        }
    }
}

#[derive(Asset, AsBindGroup, TypePath, Debug, Clone)]
pub struct WaterMaterial {
    #[uniform(0)]
    pub uniform: WaterUniform,
    #[texture(1)]
    #[sampler(2)]
    pub water_texture: Handle<Image>,
    #[texture(3)]
    #[sampler(4)]
    pub bump_texture: Handle<Image>,
}

impl Material for WaterMaterial {
    fn vertex_shader() -> ShaderRef {
        "embedded://islet/water/water.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "embedded://islet/water/water.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Visible from below the surface too.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// Handle to the one water material, for the per-frame time write.
#[derive(Resource)]
pub struct WaterMaterialHandle {
    pub handle: Handle<WaterMaterial>,
}

fn setup_water(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<WaterMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let params = WaveParameters::default();
    if let Err(err) = params.validate() {
        // Unreachable with the shipped defaults, but a bad edit to the
        // defaults should say so loudly rather than render garbage.
        error!("water parameters rejected: {err}");
        return;
    }

    let handle = materials.add(WaterMaterial {
        uniform: WaterUniform::from_params(&params),
        water_texture: load_repeating_texture(&asset_server, TEXTURE_WATER),
        bump_texture: load_repeating_texture(&asset_server, TEXTURE_WATER_BUMP),
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh::radial_disc(SEA_RADIUS, WATER_RINGS, WATER_SEGMENTS))),
        MeshMaterial3d(handle.clone()),
        Transform::from_xyz(0.0, WATER_LEVEL, 0.0),
        Name::new("water"),
    ));
    commands.insert_resource(WaterMaterialHandle { handle });

    info!("water surface initialized");
}

/// Writes this frame's clock reading into the shader uniform.
fn advance_water_time(
    time: Res<Time>,
    handle: Option<Res<WaterMaterialHandle>>,
    mut materials: ResMut<Assets<WaterMaterial>>,
) {
    let Some(handle) = handle else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.handle) {
        material.uniform.time = time.elapsed_secs();
    }
}
