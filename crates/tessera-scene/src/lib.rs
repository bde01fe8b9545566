//! Scene abstraction: drawable registration, animation switching and tap
//! picking, with an in-memory implementation for headless runs.

mod entity;
mod events;
mod memory;
mod scene;

pub use entity::{AnimationSet, Drawable, EntityId};
pub use events::TapEvent;
pub use memory::MemoryScene;
pub use scene::{Scene, SceneError, register_world, replace_texture};
