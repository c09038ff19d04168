use bevy::prelude::Color;

pub const WINDOW_TITLE: &str = "Islet";

/// Keybindings file, relative to the config folder.
pub const BINDS_FILE: &str = "binds.ron";
pub const DEFAULT_CONFIG_FOLDER: &str = "config";

// Vertical layout of the scene.
pub const WATER_LEVEL: f32 = 40.0;
pub const SEABED_LEVEL: f32 = 20.0;
pub const SEA_RADIUS: f32 = 1000.0;

/// Half-extent of the square the seabed decorations are scattered over.
pub const SCATTER_HALF_EXTENT: f32 = 400.0;

// Sky, fog and light tints.
pub const AMBIENT_COLOR: Color = Color::srgb(0.600, 0.780, 0.949);
pub const SUN_COLOR: Color = Color::srgb(0.749, 0.902, 0.961);
pub const FOG_COLOR: Color = Color::srgb(0.349, 0.431, 0.851);
pub const FOG_DENSITY: f32 = 0.003;

pub const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Shared wood tint for the dock and the boat.
pub const WOOD_BROWN: Color = Color::srgb(0.545, 0.271, 0.075);

// Asset paths, relative to the assets folder.
pub const MODEL_ISLAND: &str = "models/island.glb";
pub const MODEL_DOCK: &str = "models/dock.glb";
pub const MODEL_PALM: &str = "models/palm_tree.glb";
pub const MODEL_CABIN: &str = "models/wooden_cabin.glb";
pub const MODEL_CORAL: &str = "models/coral.glb";
pub const MODEL_STARFISH: &str = "models/starfish.glb";
pub const MODEL_DUCK: &str = "models/rubber_duck.glb";
pub const MODEL_CLOWNFISH: &str = "models/clownfish.glb";

pub const TEXTURE_WATER: &str = "textures/water.jpg";
pub const TEXTURE_WATER_BUMP: &str = "textures/water_bump.jpg";
pub const TEXTURE_SEABED: &str = "textures/seabed.jpg";
pub const TEXTURE_SAND: &str = "textures/sand.jpg";
pub const TEXTURE_STARFISH: &str = "textures/starfish.jpg";

pub const AUDIO_QUACK: &str = "audio/quack.ogg";
pub const AUDIO_MUSIC: &str = "audio/delfino_plaza.ogg";
