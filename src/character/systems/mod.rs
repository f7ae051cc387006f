//! Character domain: system modules for pointer, walk, and fall updates.

pub(crate) mod drag;
pub(crate) mod fall;
pub(crate) mod input;
pub(crate) mod render;
pub(crate) mod walk;

pub(crate) use drag::{handle_drag, tick_walk_resume};
pub(crate) use fall::{advance_fall, begin_fall, settle_on_resize};
pub(crate) use input::read_pointer;
pub(crate) use render::sync_character_transform;
pub(crate) use walk::advance_walk;
