//! Stage domain: stage spawning and resize handling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::config::WidgetConfig;
use crate::stage::{GroundLine, StageBackground, StageBounds, StageLayout, StageResized};

const STAGE_COLOR: Color = Color::WHITE;
const GROUND_COLOR: Color = Color::srgb(0.898, 0.906, 0.922);

pub(crate) fn spawn_stage(
    mut commands: Commands,
    config: Res<WidgetConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<StageLayout>,
) {
    layout.bounds = windows
        .single()
        .ok()
        .and_then(|window| StageBounds::from_window(window.size(), &config));

    let (background, ground) = stage_transforms(layout.bounds, config.ground_height);

    commands.spawn((
        StageBackground,
        Sprite::from_color(STAGE_COLOR, background.1),
        background.0,
    ));
    commands.spawn((
        GroundLine,
        Sprite::from_color(GROUND_COLOR, ground.1),
        ground.0,
    ));

    match layout.bounds {
        Some(bounds) => info!("Stage laid out at {}x{}", bounds.size.x, bounds.size.y),
        None => warn!("No primary window to measure; stage starts empty"),
    }
}

/// Re-measure the stage whenever the primary window changes size.
pub(crate) fn relayout_stage(
    mut resize_events: MessageReader<WindowResized>,
    mut resized: MessageWriter<StageResized>,
    config: Res<WidgetConfig>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut layout: ResMut<StageLayout>,
    mut background: Query<(&mut Sprite, &mut Transform), With<StageBackground>>,
    mut ground: Query<(&mut Sprite, &mut Transform), (With<GroundLine>, Without<StageBackground>)>,
) {
    let Ok(primary) = primary.single() else {
        resize_events.clear();
        return;
    };

    // Only the newest size matters when several arrive in one frame.
    let Some(event) = resize_events.read().filter(|e| e.window == primary).last() else {
        return;
    };

    let bounds = StageBounds::from_window(Vec2::new(event.width, event.height), &config);
    if bounds == layout.bounds {
        return;
    }
    layout.bounds = bounds;

    let (bg, gr) = stage_transforms(bounds, config.ground_height);
    for (mut sprite, mut transform) in &mut background {
        sprite.custom_size = Some(bg.1);
        *transform = bg.0;
    }
    for (mut sprite, mut transform) in &mut ground {
        sprite.custom_size = Some(gr.1);
        *transform = gr.0;
    }

    debug!("Stage resized: {:?}", bounds.map(|b| b.size));
    resized.write(StageResized { bounds });
}

/// Transforms and sizes for the background panel and ground strip.
fn stage_transforms(
    bounds: Option<StageBounds>,
    ground_height: f32,
) -> ((Transform, Vec2), (Transform, Vec2)) {
    let Some(bounds) = bounds else {
        return (
            (Transform::default(), Vec2::ZERO),
            (Transform::default(), Vec2::ZERO),
        );
    };

    let ground_height = ground_height.min(bounds.size.y);
    let ground_center = bounds.local_to_world(Vec2::new(
        bounds.size.x * 0.5,
        bounds.size.y - ground_height * 0.5,
    ));

    (
        (
            Transform::from_translation(bounds.center.extend(0.0)),
            bounds.size,
        ),
        (
            Transform::from_translation(ground_center.extend(0.1)),
            Vec2::new(bounds.size.x, ground_height),
        ),
    )
}
