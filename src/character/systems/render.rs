//! Character domain: mapping stage-local state onto the world transform.

use bevy::prelude::*;

use crate::character::{Character, CharacterSize, MotionState, StagePosition};
use crate::stage::StageLayout;

/// Draw order of the character above the stage panel and ground.
pub(crate) const CHARACTER_Z: f32 = 1.0;

pub(crate) fn sync_character_transform(
    layout: Res<StageLayout>,
    mut query: Query<
        (
            &StagePosition,
            &CharacterSize,
            &MotionState,
            &mut Transform,
            &mut Visibility,
        ),
        With<Character>,
    >,
) {
    for (position, size, state, mut transform, mut visibility) in &mut query {
        let Some(bounds) = layout.bounds else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        let center = bounds.local_to_world(position.0 + size.0 * 0.5);
        transform.translation = center.extend(CHARACTER_Z);
        transform.scale.x = state.facing.scale_x();
        visibility.set_if_neq(Visibility::Inherited);
    }
}
