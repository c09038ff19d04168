//! Help overlay in the bottom-left corner.

use bevy::prelude::*;

use crate::constants::TEXT_COLOR;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_overlay);
    }
}

fn setup_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                left: Val::Px(20.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..Default::default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            BorderRadius::all(Val::Px(5.0)),
            Name::new("help overlay"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("'Q' to quack | 'V' to switch camera"),
                TextFont {
                    font_size: 16.0,
                    ..Default::default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}
