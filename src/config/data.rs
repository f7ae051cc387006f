//! Config domain: serializable tuning for stage layout and character motion.

use bevy::prelude::*;
use serde::Deserialize;

/// Visual variant drawn for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CharacterShape {
    #[default]
    Star,
    Circle,
    Square,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Horizontal distance covered by one walk step.
    pub walk_step: f32,
    /// Seconds taken by one walk step (linear tween).
    pub walk_duration: f32,
    /// Distance from a container edge at which the character turns around.
    pub edge_margin: f32,
    /// Seconds after a drop before walking resumes.
    pub resume_walk_delay: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub spring_mass: f32,
    /// Spring settles once displacement drops below this.
    pub rest_delta: f32,
    /// Spring settles once speed drops below this (units/s).
    pub rest_speed: f32,
    /// Gap left between the character's feet and the container bottom.
    pub floor_inset: f32,
    pub character_size: f32,
    pub shape: CharacterShape,
    pub stage_max_width: f32,
    pub stage_min_height: f32,
    /// Width / height ratio of the stage before the min height applies.
    pub stage_aspect: f32,
    /// Margin kept between the stage and the window edges.
    pub page_padding: f32,
    pub ground_height: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            walk_step: 100.0,
            walk_duration: 2.0,
            edge_margin: 10.0,
            resume_walk_delay: 0.5,
            spring_stiffness: 200.0,
            spring_damping: 20.0,
            spring_mass: 1.0,
            rest_delta: 0.5,
            rest_speed: 2.0,
            floor_inset: 20.0,
            character_size: 56.0,
            shape: CharacterShape::Star,
            stage_max_width: 672.0,
            stage_min_height: 300.0,
            stage_aspect: 16.0 / 9.0,
            page_padding: 16.0,
            ground_height: 8.0,
        }
    }
}
