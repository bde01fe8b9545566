//! A headless run: one generated world, one scene, one controlled player.

use std::ops::ControlFlow;
use std::path::Path;

use tessera_config::{Config, MovementSettings, PlayerConfig, WorldConfig};
use tessera_math::{Rect, Vec2};
use tessera_player::{AnimationState, MovementConfig, Player, PlayerController, TickOutcome};
use tessera_scene::{
    AnimationSet, Drawable, EntityId, MemoryScene, Scene, SceneError, TapEvent, register_world,
    replace_texture,
};
use tessera_terrain::{GeneratorConfig, OctaveParams, World, WorldGenerator};
use tracing::{debug, info};

use crate::error::AppError;
use crate::game_loop::TickClock;

/// Simulated host frame length: a 60 Hz render loop.
const FRAME_TIME: f64 = 1.0 / 60.0;

/// How the movement following a tap ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// The player came within one step of the tap.
    Arrived,
    /// A collision stopped forward progress and the target was dropped.
    Blocked,
    /// The tick budget ran out with the target still set.
    Exhausted,
}

/// Summary of one replayed tap.
#[derive(Clone, Debug, PartialEq)]
pub struct TapReport {
    pub event: TapEvent,
    /// The tile swapped for the replacement texture, if any.
    pub replaced: Option<EntityId>,
    pub ticks: u32,
    pub result: TapResult,
    pub final_position: Vec2,
}

/// Owns the world, the scene the world is drawn into and the player
/// controller, and replays taps against them.
pub struct Session {
    world: World,
    scene: MemoryScene,
    controller: PlayerController,
    colliders: Vec<Rect>,
    clock: TickClock,
    max_ticks_per_tap: u32,
    tap_replacement: Option<String>,
}

impl Session {
    /// Generate the configured world and register it, then the player, into
    /// a fresh scene.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let world = WorldGenerator::new(generator_config(&config.world)).generate();

        let mut scene = MemoryScene::new();
        register_world(&mut scene, &world)?;

        let movement = movement_config(&config.movement);
        let clock = TickClock::from_millis(movement.tick_interval_ms);
        let controller = PlayerController::new(spawn_player(&config.player), movement);
        scene.register_entity(player_drawable(controller.player(), &config.player))?;
        scene.set_animation(&controller.player().id, &controller.animation().key())?;

        let colliders = world.blocking_colliders();
        info!(
            tiles = world.tiles().len(),
            colliders = colliders.len(),
            "session ready"
        );

        Ok(Self {
            world,
            scene,
            controller,
            colliders,
            clock,
            max_ticks_per_tap: config.movement.max_ticks_per_tap,
            tap_replacement: config.world.tap_replacement.clone(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scene(&self) -> &MemoryScene {
        &self.scene
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub fn colliders(&self) -> &[Rect] {
        &self.colliders
    }

    /// Deliver a tap at `position` and tick until the player stops or the
    /// per-tap budget runs out.
    pub fn tap(&mut self, position: Vec2) -> Result<TapReport, AppError> {
        let event = self.scene.tap(position);
        debug!(x = position.x, y = position.y, picked = ?event.target, "tap");
        let replaced = self.replace_tapped_tile(&event)?;
        self.controller.handle_tap(&event);

        let Self {
            scene,
            controller,
            colliders,
            clock,
            max_ticks_per_tap,
            ..
        } = self;
        let colliders = colliders.as_slice();
        let budget = *max_ticks_per_tap;
        let max_frames = frame_budget(budget, clock.period());

        let mut ticks = 0u32;
        let mut frames = 0u64;
        let mut result = None;
        let mut failure = None;
        while result.is_none() && failure.is_none() {
            if ticks >= budget || frames >= max_frames {
                result = Some(TapResult::Exhausted);
                break;
            }
            frames += 1;
            clock.advance(FRAME_TIME, |_| {
                ticks += 1;
                let outcome = controller.tick(colliders);
                if let Err(e) = sync_player(scene, controller) {
                    failure = Some(e);
                    return ControlFlow::Break(());
                }
                result = match outcome {
                    TickOutcome::Idle | TickOutcome::Arrived => Some(TapResult::Arrived),
                    TickOutcome::Moved { .. } if controller.player().target.is_none() => {
                        Some(TapResult::Blocked)
                    }
                    TickOutcome::Moved { .. } if ticks >= budget => Some(TapResult::Exhausted),
                    TickOutcome::Moved { .. } => None,
                };
                if result.is_some() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
        }
        if let Some(e) = failure {
            return Err(e.into());
        }

        let report = TapReport {
            event,
            replaced,
            ticks,
            result: result.unwrap_or(TapResult::Exhausted),
            final_position: self.controller.player().position(),
        };
        info!(
            ticks = report.ticks,
            result = ?report.result,
            x = report.final_position.x,
            y = report.final_position.y,
            "tap resolved"
        );
        Ok(report)
    }

    /// Swap a tapped tile for the replacement texture. Taps on nothing, on
    /// the player, or on an already replaced tile leave the scene alone.
    fn replace_tapped_tile(&mut self, event: &TapEvent) -> Result<Option<EntityId>, AppError> {
        let (Some(texture), Some(id)) = (self.tap_replacement.as_deref(), event.target.as_ref())
        else {
            return Ok(None);
        };
        if *id == self.controller.player().id
            || self.scene.get(id).is_some_and(|d| d.texture == texture)
        {
            return Ok(None);
        }
        replace_texture(&mut self.scene, id, texture)?;
        info!(tile = %id, texture, "tile replaced");
        Ok(Some(id.clone()))
    }

    /// Log per-biome tile counts in biome order.
    pub fn log_biome_summary(&self) {
        let histogram = self.world.biome_histogram();
        let mut counts: Vec<_> = histogram.into_iter().collect();
        counts.sort();
        for (biome, count) in counts {
            info!(biome = biome.name(), tiles = count, "biome");
        }
    }

    /// Write the tile list to `path` as pretty RON.
    pub fn dump_tiles(&self, path: &Path) -> Result<(), AppError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        let serialized = ron::ser::to_string_pretty(self.world.tiles(), pretty)?;
        std::fs::write(path, serialized).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), tiles = self.world.tiles().len(), "tiles written");
        Ok(())
    }
}

/// Host frames allowed for `budget` ticks of `period` seconds, with one spare
/// tick of slack for accumulator rounding.
fn frame_budget(budget: u32, period: f64) -> u64 {
    let frames_per_tick = (period / FRAME_TIME).ceil().max(1.0) as u64;
    (u64::from(budget) + 1).saturating_mul(frames_per_tick)
}

/// Push the player's position and animation to the scene.
fn sync_player(scene: &mut MemoryScene, controller: &PlayerController) -> Result<(), SceneError> {
    let player = controller.player();
    scene.set_position(&player.id, player.position())?;
    scene.set_animation(&player.id, &controller.animation().key())
}

pub fn generator_config(world: &WorldConfig) -> GeneratorConfig {
    GeneratorConfig {
        width: world.width as usize,
        height: world.height as usize,
        tile_size: world.tile_size,
        chunk_size: world.chunk_size as usize,
        seed: world.seed.clone(),
        smoothness: world.smoothness,
        octaves: world.octaves.map(|o| OctaveParams {
            octaves: o.octaves,
            persistence: o.persistence,
            lacunarity: o.lacunarity,
            scale: o.scale,
        }),
        interpolate: world.interpolate,
    }
}

pub fn movement_config(movement: &MovementSettings) -> MovementConfig {
    MovementConfig {
        speed: movement.speed,
        tick_interval_ms: movement.tick_interval_ms,
        clear_target_on_block: movement.clear_target_on_block,
    }
    .sanitized()
}

fn spawn_player(config: &PlayerConfig) -> Player {
    Player::new(
        config.id.as_str(),
        Vec2::new(config.spawn.0, config.spawn.1),
        Vec2::new(config.size.0, config.size.1),
    )
}

/// The player's drawable, with one sprite sheet per animation key.
pub fn player_drawable(player: &Player, config: &PlayerConfig) -> Drawable {
    let animations = AnimationState::ALL
        .iter()
        .fold(AnimationSet::new(), |set, state| {
            let key = state.key();
            let asset = format!("{}/{}.png", config.sprite_dir.trim_end_matches('/'), key);
            set.with(key, asset)
        });
    let idle = AnimationState::default().key();
    let texture = animations.get(&idle).unwrap_or_default().to_string();
    Drawable::new(
        player.id.clone(),
        player.position(),
        player.bounds.size(),
        texture,
    )
    .with_animations(animations)
}
