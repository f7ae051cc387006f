//! Character domain: pointer sampling from mouse and touch.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::character::PointerInput;
use crate::stage::StageLayout;

/// Touch activity for one frame, copied out of `Touches`.
#[derive(Debug, Default)]
pub(crate) struct TouchFrame {
    /// Touches currently held, with their window positions.
    pub pressed: Vec<(u64, Vec2)>,
    pub just_pressed: Vec<u64>,
    /// Touches released or canceled this frame.
    pub just_ended: Vec<u64>,
}

impl TouchFrame {
    fn from_touches(touches: &Touches) -> Self {
        Self {
            pressed: touches.iter().map(|t| (t.id(), t.position())).collect(),
            just_pressed: touches.iter_just_pressed().map(|t| t.id()).collect(),
            just_ended: touches
                .iter_just_released()
                .chain(touches.iter_just_canceled())
                .map(|t| t.id())
                .collect(),
        }
    }

    fn position_of(&self, id: u64) -> Option<Vec2> {
        self.pressed
            .iter()
            .find(|(pressed_id, _)| *pressed_id == id)
            .map(|(_, position)| *position)
    }
}

/// The one touch acting as the pointer, in window coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct TouchPointer {
    /// Touch to keep following next frame.
    pub id: Option<u64>,
    pub position: Option<Vec2>,
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl TouchPointer {
    fn is_active(&self) -> bool {
        self.id.is_some() || self.just_released
    }
}

/// Follow the tracked touch until it ends; otherwise adopt the lowest-id
/// touch that went down this frame.
pub(crate) fn select_touch(tracked: Option<u64>, frame: &TouchFrame) -> TouchPointer {
    if let Some(id) = tracked {
        let position = frame.position_of(id);
        if frame.just_ended.contains(&id) || position.is_none() {
            return TouchPointer {
                just_released: true,
                ..default()
            };
        }
        return TouchPointer {
            id: Some(id),
            position,
            pressed: true,
            ..default()
        };
    }

    let Some(id) = frame.just_pressed.iter().copied().min() else {
        return TouchPointer::default();
    };
    TouchPointer {
        id: Some(id),
        position: frame.position_of(id),
        pressed: true,
        just_pressed: true,
        just_released: false,
    }
}

pub(crate) fn read_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    layout: Res<StageLayout>,
    mut tracked_touch: Local<Option<u64>>,
    mut pointer: ResMut<PointerInput>,
) {
    let touch = select_touch(*tracked_touch, &TouchFrame::from_touches(&touches));
    *tracked_touch = touch.id;

    // A tracked touch wins over the mouse cursor
    let screen_position = if touch.is_active() {
        pointer.pressed = touch.pressed;
        pointer.just_pressed = touch.just_pressed;
        pointer.just_released = touch.just_released;
        touch.position
    } else {
        pointer.pressed = mouse.pressed(MouseButton::Left);
        pointer.just_pressed = mouse.just_pressed(MouseButton::Left);
        pointer.just_released = mouse.just_released(MouseButton::Left);
        windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position())
    };

    pointer.position = match (screen_position, cameras.single(), layout.bounds) {
        (Some(screen), Ok((camera, camera_transform)), Some(bounds)) => camera
            .viewport_to_world_2d(camera_transform, screen)
            .ok()
            .map(|world| bounds.world_to_local(world)),
        _ => None,
    };
}
