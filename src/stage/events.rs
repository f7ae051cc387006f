//! Stage domain: layout change events.

use bevy::ecs::message::Message;

use crate::stage::StageBounds;

/// Event fired after the stage re-lays-out for a new window size.
#[derive(Debug)]
pub struct StageResized {
    pub bounds: Option<StageBounds>,
}

impl Message for StageResized {}
