//! Tap-to-move controller driven by a fixed-period tick.

use serde::{Deserialize, Serialize};
use tessera_math::{Rect, Vec2};
use tessera_scene::{EntityId, TapEvent};

use crate::animation::{AnimationState, Facing, MotionState};
use crate::collision::{resolve_horizontal, resolve_vertical};

/// Smallest speed the controller will run with.
const MIN_SPEED: f32 = 0.001;

/// Longest accepted tick period, one minute.
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

/// Movement tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Distance travelled per tick, and the arrival radius.
    pub speed: f32,
    /// Period of the movement tick in milliseconds.
    pub tick_interval_ms: u64,
    /// Drop the target on a tick where a collision stops forward progress.
    pub clear_target_on_block: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            tick_interval_ms: 30,
            clear_target_on_block: true,
        }
    }
}

impl MovementConfig {
    /// Clamp out-of-range values instead of rejecting them.
    pub fn sanitized(&self) -> Self {
        let speed = if self.speed.is_finite() {
            self.speed.max(MIN_SPEED)
        } else {
            MIN_SPEED
        };
        Self {
            speed,
            tick_interval_ms: self.tick_interval_ms.clamp(1, MAX_TICK_INTERVAL_MS),
            clear_target_on_block: self.clear_target_on_block,
        }
    }
}

/// The controlled entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: EntityId,
    pub bounds: Rect,
    pub facing: Facing,
    pub target: Option<Vec2>,
}

impl Player {
    pub fn new(id: impl Into<EntityId>, position: Vec2, size: Vec2) -> Self {
        Self {
            id: id.into(),
            bounds: Rect::from_position_size(position, size),
            facing: Facing::default(),
            target: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.bounds.position()
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Result of a single [`PlayerController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No target was set.
    Idle,
    /// The target was within one step and has been cleared. The entity did
    /// not move.
    Arrived,
    /// The entity stepped toward its target. A `blocked_*` flag is set when a
    /// collision on that axis left no forward progress.
    Moved { blocked_x: bool, blocked_y: bool },
}

impl TickOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, TickOutcome::Moved { blocked_x, blocked_y } if *blocked_x || *blocked_y)
    }
}

/// Drives a [`Player`] toward the last tapped point.
#[derive(Clone, Debug)]
pub struct PlayerController {
    player: Player,
    config: MovementConfig,
}

impl PlayerController {
    pub fn new(player: Player, config: MovementConfig) -> Self {
        Self {
            player,
            config: config.sanitized(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Replace any in-flight target.
    pub fn set_target(&mut self, target: Vec2) {
        tracing::debug!(x = target.x, y = target.y, "player target set");
        self.player.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.player.target = None;
    }

    /// Taps set the target regardless of what was tapped.
    pub fn handle_tap(&mut self, event: &TapEvent) {
        self.set_target(event.position);
    }

    pub fn state(&self) -> MotionState {
        if self.player.target.is_some() {
            MotionState::Seeking
        } else {
            MotionState::Idle
        }
    }

    pub fn animation(&self) -> AnimationState {
        AnimationState::new(self.player.facing, self.state())
    }

    /// Advance one movement step.
    ///
    /// Steps `speed` units from the entity center toward the target, resolving
    /// x before y. The y pass sees the already corrected x position.
    pub fn tick(&mut self, colliders: &[Rect]) -> TickOutcome {
        let Some(target) = self.player.target else {
            return TickOutcome::Idle;
        };

        let speed = self.config.speed;
        let delta = target - self.player.center();
        let distance = delta.length();
        if distance < speed {
            self.player.target = None;
            tracing::debug!(distance, "player arrived");
            return TickOutcome::Arrived;
        }

        let step = delta / distance * speed;
        if let Some(facing) = Facing::from_step(step.x) {
            self.player.facing = facing;
        }

        let start = self.player.position();
        let bounds = &mut self.player.bounds;

        bounds.x += step.x;
        let hit_x = resolve_horizontal(bounds, colliders);
        bounds.y += step.y;
        let hit_y = resolve_vertical(bounds, colliders);

        let blocked_x = hit_x && (bounds.x - start.x) * step.x <= 0.0;
        let blocked_y = hit_y && (bounds.y - start.y) * step.y <= 0.0;

        if (blocked_x || blocked_y) && self.config.clear_target_on_block {
            tracing::debug!(blocked_x, blocked_y, "player blocked, target cleared");
            self.player.target = None;
        }

        TickOutcome::Moved {
            blocked_x,
            blocked_y,
        }
    }
}
