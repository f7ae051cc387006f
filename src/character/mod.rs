//! Character domain: the walking, draggable, falling character.

mod components;
pub mod motion;
mod resources;
mod spawn;
mod systems;


pub use components::{Character, CharacterSize, Facing, MotionMode, MotionState, StagePosition};
pub use resources::PointerInput;

use bevy::prelude::*;

use crate::character::spawn::spawn_character;
use crate::character::systems::{
    advance_fall, advance_walk, handle_drag, read_pointer, settle_on_resize,
    sync_character_transform, tick_walk_resume,
};
use crate::stage::{relayout_stage, spawn_stage};

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInput>()
            .add_systems(Startup, spawn_character.after(spawn_stage))
            .add_systems(
                Update,
                (
                    read_pointer,
                    handle_drag,
                    tick_walk_resume,
                    settle_on_resize,
                    advance_fall,
                    advance_walk,
                    sync_character_transform,
                )
                    .chain()
                    .after(relayout_stage),
            );
    }
}
