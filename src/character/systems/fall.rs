//! Character domain: settling onto the stage floor.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::character::motion::{SettleMotion, SpringParams, settle_target};
use crate::character::{Character, CharacterSize, MotionState, StagePosition};
use crate::config::WidgetConfig;
use crate::stage::StageResized;

/// Start (or retarget) a fall from `position`. Cancels any walk step and
/// carries over the velocity of a fall already in flight.
pub(crate) fn begin_fall(
    state: &mut MotionState,
    position: Vec2,
    size: Vec2,
    stage_size: Vec2,
    config: &WidgetConfig,
) {
    let velocity = state.fall.map(|f| f.velocity()).unwrap_or(Vec2::ZERO);
    let fall = SettleMotion::new(
        position,
        settle_target(position, stage_size, size, config.floor_inset),
        velocity,
        SpringParams::from_config(config),
    );
    debug!(
        "Falling from {:?} to {:?} at {:?}",
        position,
        fall.target(),
        velocity
    );

    state.walk = None;
    state.fall = Some(fall);
}

/// Re-settle after the stage changes size, unless the character is held.
pub(crate) fn settle_on_resize(
    mut resized: MessageReader<StageResized>,
    config: Res<WidgetConfig>,
    mut query: Query<(&mut MotionState, &StagePosition, &CharacterSize), With<Character>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    let Some(bounds) = event.bounds else {
        return;
    };

    for (mut state, position, size) in &mut query {
        if state.is_dragging {
            continue;
        }
        begin_fall(&mut state, position.0, size.0, bounds.size, &config);
    }
}

pub(crate) fn advance_fall(
    time: Res<Time>,
    mut query: Query<(&mut MotionState, &mut StagePosition), With<Character>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut position) in &mut query {
        if state.is_dragging {
            continue;
        }
        let Some(mut fall) = state.fall else {
            continue;
        };

        position.0 = fall.advance(dt);
        if fall.is_at_rest() {
            state.fall = None;
            debug!("Settled at {:?}", position.0);
        } else {
            state.fall = Some(fall);
        }
    }
}
