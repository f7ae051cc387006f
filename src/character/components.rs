//! Character domain: components for the walking character.

use bevy::prelude::*;

use crate::character::motion::{LinearTween, SettleMotion};

#[derive(Component, Debug)]
pub struct Character;

/// Top-left corner of the character in stage-local space (+y down).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct StagePosition(pub Vec2);

/// Width and height of the character's bounding box.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CharacterSize(pub Vec2);

impl CharacterSize {
    pub fn contains(&self, top_left: Vec2, point: Vec2) -> bool {
        let rel = point - top_left;
        rel.x >= 0.0 && rel.y >= 0.0 && rel.x <= self.0.x && rel.y <= self.0.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Horizontal scale applied to the visual.
    pub fn scale_x(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Which behavior currently drives the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionMode {
    Idle,
    Walking,
    Dragging,
    Falling,
}

#[derive(Component, Debug)]
pub struct MotionState {
    pub facing: Facing,
    pub is_dragging: bool,
    pub is_walking: bool,
    /// Pointer position minus character top-left at grab time.
    pub grab_offset: Vec2,
    /// In-flight walk step on the x axis.
    pub walk: Option<LinearTween>,
    /// In-flight settle toward the floor.
    pub fall: Option<SettleMotion>,
    /// Seconds left before walking resumes after a drop.
    pub resume_walk_timer: Option<f32>,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            facing: Facing::Right,
            is_dragging: false,
            is_walking: true,
            grab_offset: Vec2::ZERO,
            walk: None,
            fall: None,
            resume_walk_timer: None,
        }
    }
}

impl MotionState {
    pub fn mode(&self) -> MotionMode {
        if self.is_dragging {
            MotionMode::Dragging
        } else if self.fall.is_some() {
            MotionMode::Falling
        } else if self.is_walking {
            MotionMode::Walking
        } else {
            MotionMode::Idle
        }
    }

    /// Drop every running animation and pending resume.
    pub fn stop_all(&mut self) {
        self.walk = None;
        self.fall = None;
        self.resume_walk_timer = None;
    }
}
