//! Planar geometry primitives shared by the terrain generator, the movement
//! engine and the scene.

mod rect;

pub use glam::Vec2;
pub use rect::Rect;
