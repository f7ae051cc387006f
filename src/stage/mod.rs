//! Stage domain: the bounded container the character lives in.

mod components;
mod events;
mod layout;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GroundLine, StageBackground};
pub use events::StageResized;
pub use layout::{StageBounds, StageLayout};

pub(crate) use systems::{relayout_stage, spawn_stage};

use bevy::prelude::*;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StageLayout>()
            .add_message::<StageResized>()
            .add_systems(Startup, spawn_stage)
            .add_systems(Update, relayout_stage);
    }
}
