//! Stage domain: marker components for stage visuals.

use bevy::prelude::*;

/// Marker for the white container panel.
#[derive(Component, Debug)]
pub struct StageBackground;

/// Marker for the ground strip along the container bottom.
#[derive(Component, Debug)]
pub struct GroundLine;
