//! Stage domain: tests for container layout and resize handling.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::{StageBounds, StageLayout, StageResized, relayout_stage};
use crate::config::WidgetConfig;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// -----------------------------------------------------------------------------
// Layout tests
// -----------------------------------------------------------------------------

#[test]
fn test_wide_window_caps_width() {
    let bounds = StageBounds::from_window(Vec2::new(1280.0, 720.0), &WidgetConfig::default())
        .unwrap();
    assert!(approx(bounds.size.x, 672.0));
    assert!(approx(bounds.size.y, 378.0));
}

#[test]
fn test_narrow_window_uses_min_height() {
    let bounds =
        StageBounds::from_window(Vec2::new(400.0, 720.0), &WidgetConfig::default()).unwrap();
    assert!(approx(bounds.size.x, 368.0));
    // 368 / (16/9) = 207, below the 300 floor
    assert!(approx(bounds.size.y, 300.0));
}

#[test]
fn test_empty_window_has_no_bounds() {
    let config = WidgetConfig::default();
    assert!(StageBounds::from_window(Vec2::ZERO, &config).is_none());
    assert!(StageBounds::from_window(Vec2::new(0.0, 500.0), &config).is_none());
    // Narrower than the page padding
    assert!(StageBounds::from_window(Vec2::new(20.0, 500.0), &config).is_none());
}

#[test]
fn test_local_world_mapping() {
    let bounds = StageBounds {
        center: Vec2::ZERO,
        size: Vec2::new(600.0, 300.0),
    };

    assert_eq!(bounds.top_left(), Vec2::new(-300.0, 150.0));
    assert_eq!(bounds.local_to_world(Vec2::ZERO), Vec2::new(-300.0, 150.0));
    assert_eq!(
        bounds.local_to_world(Vec2::new(600.0, 300.0)),
        Vec2::new(300.0, -150.0)
    );

    let local = Vec2::new(123.0, 45.0);
    assert_eq!(bounds.world_to_local(bounds.local_to_world(local)), local);
}

// -----------------------------------------------------------------------------
// Resize tests
// -----------------------------------------------------------------------------

fn resize_app() -> (App, Entity) {
    let mut app = App::new();
    app.insert_resource(WidgetConfig::default())
        .init_resource::<StageLayout>()
        .add_message::<WindowResized>()
        .add_message::<StageResized>()
        .add_systems(Update, relayout_stage);
    let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
    (app, window)
}

#[test]
fn test_resize_updates_layout_and_notifies() {
    let (mut app, window) = resize_app();

    app.world_mut().write_message(WindowResized {
        window,
        width: 500.0,
        height: 400.0,
    });
    app.update();

    let size = app.world().resource::<StageLayout>().size().unwrap();
    assert!(approx(size.x, 468.0));
    assert!(approx(size.y, 300.0));
    assert!(!app.world().resource::<Messages<StageResized>>().is_empty());
}

#[test]
fn test_resize_of_other_window_is_ignored() {
    let (mut app, _) = resize_app();
    let other = app.world_mut().spawn(Window::default()).id();

    app.world_mut().write_message(WindowResized {
        window: other,
        width: 500.0,
        height: 400.0,
    });
    app.update();

    assert!(app.world().resource::<StageLayout>().bounds.is_none());
    assert!(app.world().resource::<Messages<StageResized>>().is_empty());
}

#[test]
fn test_minimized_window_clears_bounds() {
    let (mut app, window) = resize_app();

    app.world_mut().write_message(WindowResized {
        window,
        width: 800.0,
        height: 600.0,
    });
    app.update();
    assert!(app.world().resource::<StageLayout>().bounds.is_some());

    app.world_mut().write_message(WindowResized {
        window,
        width: 0.0,
        height: 0.0,
    });
    app.update();
    assert!(app.world().resource::<StageLayout>().bounds.is_none());
}
