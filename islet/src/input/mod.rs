pub mod data;
pub mod keyboard;

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use data::GameAction;

/// Action-to-key bindings, loaded from (and written to) the config folder.
#[derive(Resource, Serialize, Deserialize)]
pub struct KeyMap {
    #[serde(default = "keyboard::default_key_map")]
    pub map: BTreeMap<GameAction, Vec<KeyCode>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: keyboard::default_key_map(),
        }
    }
}
