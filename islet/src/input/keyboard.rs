use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use bevy::input::ButtonInput;
use bevy::prelude::*;
use ron::{from_str, ser::PrettyConfig};

use crate::constants::BINDS_FILE;
use crate::input::{data::GameAction, KeyMap};
use crate::ConfigFolderPath;

fn write_keybindings_to_path(key_map: &KeyMap, binds_path: &Path) -> Result<(), std::io::Error> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(true);

    let serialized = ron::ser::to_string_pretty(key_map, pretty_config)
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "serialization failed"))?;
    if let Some(parent) = binds_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(binds_path)?;
    file.write_all(serialized.as_bytes())
}

pub fn is_action_pressed(
    action: GameAction,
    keyboard_input: &ButtonInput<KeyCode>,
    key_map: &KeyMap,
) -> bool {
    if let Some(key_codes) = key_map.map.get(&action) {
        for key_code in key_codes {
            if keyboard_input.pressed(*key_code) {
                return true;
            }
        }
    }
    false
}

pub fn is_action_just_pressed(
    action: GameAction,
    keyboard_input: &ButtonInput<KeyCode>,
    key_map: &KeyMap,
) -> bool {
    if let Some(key_codes) = key_map.map.get(&action) {
        for key_code in key_codes {
            if keyboard_input.just_pressed(*key_code) {
                return true;
            }
        }
    }
    false
}

pub(crate) fn default_key_map() -> BTreeMap<GameAction, Vec<KeyCode>> {
    let mut map = BTreeMap::new();
    map.insert(
        GameAction::MoveForward,
        vec![KeyCode::KeyW, KeyCode::ArrowUp],
    );
    map.insert(
        GameAction::MoveBackward,
        vec![KeyCode::KeyS, KeyCode::ArrowDown],
    );
    map.insert(GameAction::MoveLeft, vec![KeyCode::KeyA, KeyCode::ArrowLeft]);
    map.insert(
        GameAction::MoveRight,
        vec![KeyCode::KeyD, KeyCode::ArrowRight],
    );
    map.insert(GameAction::Quack, vec![KeyCode::KeyQ]);
    map.insert(GameAction::ToggleViewMode, vec![KeyCode::KeyV]);
    map
}

/// Loads keybindings from the config folder, writing the defaults there on
/// first run (or when the file is unreadable).
pub fn get_bindings(config_folder: &ConfigFolderPath) -> KeyMap {
    let binds_path = config_folder.0.join(BINDS_FILE);

    if let Ok(content) = fs::read_to_string(binds_path.as_path()) {
        if let Ok(key_map) = from_str::<KeyMap>(&content) {
            return key_map;
        }
    }

    let key_map = KeyMap::default();
    if let Err(e) = write_keybindings_to_path(&key_map, binds_path.as_path()) {
        error!(
            "Failed to create default keybindings file at {:?}: {}",
            binds_path, e
        );
    }
    key_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_default_binding() {
        let map = default_key_map();
        for action in [
            GameAction::MoveForward,
            GameAction::MoveBackward,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Quack,
            GameAction::ToggleViewMode,
        ] {
            assert!(
                map.get(&action).is_some_and(|keys| !keys.is_empty()),
                "{action:?} has no default key"
            );
        }
    }

    #[test]
    fn movement_actions_accept_wasd_and_arrows() {
        let map = default_key_map();
        assert_eq!(
            map[&GameAction::MoveForward],
            vec![KeyCode::KeyW, KeyCode::ArrowUp]
        );
        assert_eq!(
            map[&GameAction::MoveLeft],
            vec![KeyCode::KeyA, KeyCode::ArrowLeft]
        );
    }
}
