//! Bridges the animation registry into the ECS.
//!
//! The registry owns every animated pose; entities carrying [`Animated`]
//! just mirror their entry. Ticking happens once per frame with a single
//! clock reading, then poses are copied out, so every motion in a frame
//! sees the same time regardless of system ordering noise elsewhere.

use bevy::prelude::*;
use islet_core::animation::AnimationRegistry;
use islet_core::AnimationId;

/// Entities whose transform is driven by a registry entry.
#[derive(Component)]
pub struct Animated {
    pub id: AnimationId,
}

pub struct SceneAnimationPlugin;

impl Plugin for SceneAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationRegistry>()
            .add_systems(Update, (tick_animations, apply_poses).chain())
            .add_observer(release_removed);
    }
}

/// Advances every registered motion with this frame's clock reading.
fn tick_animations(time: Res<Time>, mut registry: ResMut<AnimationRegistry>) {
    registry.tick(time.elapsed_secs());
}

/// Copies registry poses onto the entities they drive.
fn apply_poses(
    registry: Res<AnimationRegistry>,
    mut driven: Query<(&Animated, &mut Transform)>,
) {
    for (animated, mut transform) in &mut driven {
        if let Some(pose) = registry.pose(animated.id) {
            *transform = *pose;
        }
    }
}

/// Releases the registry entry when an animated entity despawns, so no
/// motion keeps ticking against a target that left the scene.
fn release_removed(
    trigger: Trigger<OnRemove, Animated>,
    animated: Query<&Animated>,
    mut registry: ResMut<AnimationRegistry>,
) {
    if let Ok(animated) = animated.get(trigger.target()) {
        registry.remove(animated.id);
    }
}
