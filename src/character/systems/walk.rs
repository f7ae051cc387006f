//! Character domain: back-and-forth walking along the floor.

use bevy::prelude::*;

use crate::character::motion::{LinearTween, plan_walk_step};
use crate::character::{Character, CharacterSize, MotionState, StagePosition};
use crate::config::WidgetConfig;
use crate::stage::StageLayout;

pub(crate) fn advance_walk(
    time: Res<Time>,
    layout: Res<StageLayout>,
    config: Res<WidgetConfig>,
    mut query: Query<(&mut MotionState, &mut StagePosition, &CharacterSize), With<Character>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut position, size) in &mut query {
        // Walking never overlaps a drag or a fall
        if state.is_dragging || state.fall.is_some() {
            continue;
        }

        // Time left over after a step ends carries into the next one
        let mut leftover = 0.0;
        if let Some(mut tween) = state.walk {
            let (x, overflow) = tween.advance_with_overflow(dt);
            position.0.x = x;
            if !tween.is_finished() {
                state.walk = Some(tween);
                continue;
            }
            state.walk = None;
            leftover = overflow;
        }

        if !state.is_walking {
            continue;
        }
        let Some(stage) = layout.size() else {
            continue;
        };
        let Some(plan) = plan_walk_step(position.0.x, state.facing, stage.x, size.0.x, &config)
        else {
            continue;
        };

        if plan.facing != state.facing {
            debug!("Turned {:?} at x={:.1}", plan.facing, position.0.x);
            state.facing = plan.facing;
        }
        let mut tween = LinearTween::new(position.0.x, plan.target_x, config.walk_duration);
        if leftover > 0.0 {
            position.0.x = tween.advance(leftover);
        }
        state.walk = Some(tween);
    }
}
