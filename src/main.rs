mod character;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod stage;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Star Walker".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        stage::StagePlugin,
        character::CharacterPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
