//! The quack, and the background music.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::constants::{AUDIO_MUSIC, AUDIO_QUACK};
use crate::input::keyboard::is_action_just_pressed;
use crate::input::{data::GameAction, KeyMap};
use crate::AppSettings;

pub struct SceneAudioPlugin;

impl Plugin for SceneAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_audio)
            .add_systems(Update, quack_on_input);
    }
}

#[derive(Resource)]
struct SoundHandles {
    quack: Handle<AudioSource>,
}

/// Marker for an in-flight quack, so a new press can restart it.
#[derive(Component)]
struct QuackPlayback;

fn setup_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<AppSettings>,
) {
    commands.insert_resource(SoundHandles {
        quack: asset_server.load(AUDIO_QUACK),
    });

    if settings.mute {
        info!("background music muted");
        return;
    }
    commands.spawn((
        AudioPlayer::new(asset_server.load(AUDIO_MUSIC)),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(0.2)),
        Name::new("background music"),
    ));
}

fn quack_on_input(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    sounds: Res<SoundHandles>,
    playing: Query<Entity, With<QuackPlayback>>,
) {
    if !is_action_just_pressed(GameAction::Quack, &keyboard_input, &key_map) {
        return;
    }

    // Restart semantics: cut any quack already in flight.
    for entity in &playing {
        commands.entity(entity).despawn();
    }
    commands.spawn((
        AudioPlayer::new(sounds.quack.clone()),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(0.5)),
        QuackPlayback,
        Name::new("quack"),
    ));
}
