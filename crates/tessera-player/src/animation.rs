//! Facing × motion animation state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal facing. Vertical movement never changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal step, or `None` for a zero step.
    pub fn from_step(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Whether the controller has a target to move toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    Idle,
    Seeking,
}

impl MotionState {
    fn clip(self) -> &'static str {
        match self {
            MotionState::Idle => "idle",
            MotionState::Seeking => "walk",
        }
    }
}

/// The animation an entity should be playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnimationState {
    pub facing: Facing,
    pub motion: MotionState,
}

impl AnimationState {
    pub const ALL: [AnimationState; 4] = [
        AnimationState::new(Facing::Left, MotionState::Idle),
        AnimationState::new(Facing::Right, MotionState::Idle),
        AnimationState::new(Facing::Left, MotionState::Seeking),
        AnimationState::new(Facing::Right, MotionState::Seeking),
    ];

    pub const fn new(facing: Facing, motion: MotionState) -> Self {
        Self { facing, motion }
    }

    /// Key into the scene's animation table, e.g. `"walk_left"`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.motion.clip(), self.facing.name())
    }
}
