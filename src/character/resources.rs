//! Character domain: pointer sampling resources.

use bevy::prelude::*;

/// Pointer state for this frame, already mapped into stage-local space.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerInput {
    /// `None` when no pointer is over the window or the stage is unmeasured.
    pub position: Option<Vec2>,
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}
