//! Deferred scene insertion for asynchronously loaded models.
//!
//! Model loads are fire-and-forget at the asset-server level; nothing here
//! blocks on them. Each request is queued with everything needed to place
//! it, and one controller system polls load state per tick, inserting the
//! model (and registering its motion) on the tick its data is ready. A
//! failed load is logged and dropped; the scene simply goes without that
//! model.

use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;
use islet_core::animation::{AnimationRegistry, Motion};

use super::animation::Animated;
use super::dressing::{Dressed, Dressing};

/// A model waiting for its asset data.
pub struct PendingModel {
    /// Display name, for logs.
    pub name: &'static str,
    pub scene: Handle<Scene>,
    pub transform: Transform,
    pub dressing: Dressing,
    /// Motion to register the moment the model enters the scene.
    pub motion: Option<Motion>,
}

#[derive(Resource, Default)]
pub struct PendingModels(pub Vec<PendingModel>);

pub fn insert_ready_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingModels>,
    mut registry: ResMut<AnimationRegistry>,
) {
    if pending.0.is_empty() {
        return;
    }

    let mut still_pending = Vec::new();
    for model in pending.0.drain(..) {
        match asset_server.get_recursive_dependency_load_state(model.scene.id()) {
            Some(RecursiveDependencyLoadState::Loaded) => {
                spawn_model(&mut commands, &mut registry, model);
            }
            Some(RecursiveDependencyLoadState::Failed(err)) => {
                warn!("failed to load model '{}': {err}", model.name);
            }
            _ => still_pending.push(model),
        }
    }
    pending.0 = still_pending;
}

fn spawn_model(commands: &mut Commands, registry: &mut AnimationRegistry, model: PendingModel) {
    let PendingModel {
        name,
        scene,
        transform,
        dressing,
        motion,
    } = model;

    log::debug!("model '{name}' ready");
    let mut entity = commands.spawn((SceneRoot(scene), transform, Dressed(dressing), Name::new(name)));
    if let Some(motion) = motion {
        let id = registry.register(motion, transform);
        entity.insert(Animated { id });
    }
}
