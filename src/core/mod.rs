//! Core domain: camera and page background.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Page background behind the stage.
pub const PAGE_COLOR: Color = Color::srgb(0.965, 0.969, 0.973);

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(PAGE_COLOR))
            .add_systems(Startup, setup_camera);
    }
}
