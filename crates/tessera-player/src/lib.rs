//! Target-seeking player movement with axis-separated AABB collision.

mod animation;
mod collision;
mod controller;

pub use animation::{AnimationState, Facing, MotionState};
pub use collision::{resolve_horizontal, resolve_vertical};
pub use controller::{MAX_TICK_INTERVAL_MS, MovementConfig, Player, PlayerController, TickOutcome};
