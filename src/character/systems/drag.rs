//! Character domain: pick-up, follow, and drop.

use bevy::prelude::*;

use crate::character::systems::begin_fall;
use crate::character::{Character, CharacterSize, MotionState, PointerInput, StagePosition};
use crate::config::WidgetConfig;
use crate::stage::StageLayout;

pub(crate) fn handle_drag(
    pointer: Res<PointerInput>,
    layout: Res<StageLayout>,
    config: Res<WidgetConfig>,
    mut query: Query<(&mut MotionState, &mut StagePosition, &CharacterSize), With<Character>>,
) {
    for (mut state, mut position, size) in &mut query {
        if !state.is_dragging {
            if !pointer.just_pressed {
                continue;
            }
            let Some(point) = pointer.position else {
                continue;
            };
            if !size.contains(position.0, point) {
                continue;
            }

            state.stop_all();
            state.is_dragging = true;
            state.is_walking = false;
            state.grab_offset = point - position.0;
            debug!("Drag started at {:?}", position.0);
            continue;
        }

        if pointer.pressed {
            if let Some(point) = pointer.position {
                position.0 = point - state.grab_offset;
            }
        }

        if pointer.just_released || !pointer.pressed {
            state.is_dragging = false;
            state.resume_walk_timer = Some(config.resume_walk_delay);
            debug!("Dropped at {:?}", position.0);

            if let Some(stage) = layout.size() {
                begin_fall(&mut state, position.0, size.0, stage, &config);
            }
        }
    }
}

/// Count down the post-drop delay and re-enable walking when it expires.
pub(crate) fn tick_walk_resume(
    time: Res<Time>,
    mut query: Query<&mut MotionState, With<Character>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if state.is_dragging {
            continue;
        }
        let Some(remaining) = state.resume_walk_timer else {
            continue;
        };

        let remaining = remaining - dt;
        if remaining <= 0.0 {
            state.resume_walk_timer = None;
            state.is_walking = true;
            debug!("Walking resumed");
        } else {
            state.resume_walk_timer = Some(remaining);
        }
    }
}
