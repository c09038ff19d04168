mod audio;
mod camera;
mod constants;
mod input;
mod postfx;
mod scene;
mod ui;
mod water;

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_atmosphere::prelude::AtmospherePlugin;
use clap::Parser;

use constants::{DEFAULT_CONFIG_FOLDER, WINDOW_TITLE};
use input::keyboard::get_bindings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        long,
        help = "Override the assets folder path, defaults to ./assets"
    )]
    assets_folder_path: Option<String>,

    #[arg(
        long,
        help = "Override the config folder path (keybindings), defaults to ./config"
    )]
    config_folder_path: Option<String>,

    #[arg(long, help = "Edge length of the pixelation blocks, in pixels")]
    pixel_size: Option<f32>,

    #[arg(long, help = "Disable the pixelation post-processing pass")]
    no_postfx: bool,

    #[arg(long, help = "Start without background music")]
    mute: bool,
}

/// Folder holding the keybindings file.
#[derive(Resource, Debug, Clone)]
pub struct ConfigFolderPath(pub PathBuf);

/// Switches resolved from the command line once at startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct AppSettings {
    pub mute: bool,
    /// Pixel block size for the post-processing pass; `None` disables it.
    pub pixelation: Option<f32>,
}

fn main() {
    let args = Args::parse();

    let config_folder = ConfigFolderPath(PathBuf::from(
        args.config_folder_path
            .unwrap_or_else(|| DEFAULT_CONFIG_FOLDER.to_string()),
    ));
    let settings = AppSettings {
        mute: args.mute,
        pixelation: (!args.no_postfx)
            .then(|| args.pixel_size.unwrap_or(postfx::DEFAULT_PIXEL_SIZE)),
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            // Nearest sampling keeps textures crisp under the pixelation pass
            .set(ImagePlugin::default_nearest())
            .set(AssetPlugin {
                file_path: args
                    .assets_folder_path
                    .unwrap_or_else(|| "assets".to_string()),
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
    );

    app.insert_resource(get_bindings(&config_folder))
        .insert_resource(config_folder)
        .insert_resource(settings)
        .add_plugins((
            AtmospherePlugin,
            camera::CameraRigPlugin,
            scene::ScenePlugin,
            water::WaterPlugin,
            postfx::PixelatePlugin,
            audio::SceneAudioPlugin,
            ui::OverlayPlugin,
        ))
        .run();
}
