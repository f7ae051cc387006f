//! Debug overlay for watching the motion model (dev-tools feature).
//!
//! Press F3 to toggle a text readout of the character's motion mode,
//! facing, position, and the current stage size.

use bevy::prelude::*;

use crate::character::{Character, MotionState, StagePosition};
use crate::stage::StageLayout;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay text node
#[derive(Component, Debug)]
pub struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_overlay)
            .add_systems(Update, (toggle_debug_overlay, update_debug_overlay).chain());
    }
}

fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new(""),
        TextColor(Color::srgb(0.2, 0.2, 0.25)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut overlay: Query<&mut Visibility, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    state.overlay_visible = !state.overlay_visible;
    for mut visibility in &mut overlay {
        *visibility = if state.overlay_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    info!(
        "Debug overlay {}",
        if state.overlay_visible { "on" } else { "off" }
    );
}

fn update_debug_overlay(
    state: Res<DebugState>,
    layout: Res<StageLayout>,
    character: Query<(&MotionState, &StagePosition), With<Character>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    if !state.overlay_visible {
        return;
    }
    let Ok((motion, position)) = character.single() else {
        return;
    };

    let stage = match layout.size() {
        Some(size) => format!("{:.0}x{:.0}", size.x, size.y),
        None => "unmeasured".to_string(),
    };
    let readout = format!(
        "mode: {:?}\nfacing: {:?}\nposition: ({:.1}, {:.1})\nstage: {}",
        motion.mode(),
        motion.facing,
        position.0.x,
        position.0.y,
        stage
    );

    for mut text in &mut overlay {
        text.0 = readout.clone();
    }
}
