//! Stage domain: container measurement and coordinate mapping.
//!
//! Stage-local space has its origin at the container's top-left corner with
//! +y pointing down, matching how layout boxes are measured. World space is
//! the 2D camera's space (origin at window center, +y up).

use bevy::prelude::*;

use crate::config::WidgetConfig;

/// Measured container rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBounds {
    /// Container center in world space.
    pub center: Vec2,
    /// Container width and height.
    pub size: Vec2,
}

impl StageBounds {
    /// Lay the container out inside a window of the given logical size.
    /// Returns `None` when the window has no usable area.
    pub fn from_window(window_size: Vec2, config: &WidgetConfig) -> Option<Self> {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return None;
        }

        let available = window_size.x - 2.0 * config.page_padding;
        let width = available.min(config.stage_max_width);
        if width <= 0.0 {
            return None;
        }
        let height = (width / config.stage_aspect).max(config.stage_min_height);

        Some(Self {
            center: Vec2::ZERO,
            size: Vec2::new(width, height),
        })
    }

    /// World position of the container's top-left corner.
    pub fn top_left(&self) -> Vec2 {
        self.center + Vec2::new(-self.size.x, self.size.y) * 0.5
    }

    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.top_left() + Vec2::new(local.x, -local.y)
    }

    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        let offset = world - self.top_left();
        Vec2::new(offset.x, -offset.y)
    }
}

/// Current stage measurements. `None` until the window has been measured,
/// or while it has no area.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct StageLayout {
    pub bounds: Option<StageBounds>,
}

impl StageLayout {
    pub fn size(&self) -> Option<Vec2> {
        self.bounds.map(|b| b.size)
    }
}
