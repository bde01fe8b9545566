//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World generation settings.
    pub world: WorldConfig,
    /// Player movement settings.
    pub movement: MovementSettings,
    /// Player entity settings.
    pub player: PlayerConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunk grid width.
    pub width: u32,
    /// Chunk grid height.
    pub height: u32,
    /// Pixels per tile edge.
    pub tile_size: u32,
    /// Tiles per chunk edge.
    pub chunk_size: u32,
    /// Seed string. Same seed, same world.
    pub seed: String,
    /// Biome blend radius in pixels.
    pub smoothness: f64,
    /// Blend biomes per tile across neighbouring chunks.
    pub interpolate: bool,
    /// Multi-octave noise. `None` samples the base field directly.
    pub octaves: Option<OctaveConfig>,
    /// Texture swapped onto a tapped tile. `None` leaves tiles untouched.
    pub tap_replacement: Option<String>,
}

/// Multi-octave noise parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OctaveConfig {
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub scale: f64,
}

/// Player movement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementSettings {
    /// Distance moved per tick.
    pub speed: f32,
    /// Movement tick period in milliseconds.
    pub tick_interval_ms: u64,
    /// Stop when a collision blocks forward progress.
    pub clear_target_on_block: bool,
    /// Upper bound on ticks spent on a single tap.
    pub max_ticks_per_tap: u32,
}

/// Player entity configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Scene id of the player drawable.
    pub id: String,
    /// Spawn position, top-left corner in world pixels.
    pub spawn: (f32, f32),
    /// Collision box size in pixels.
    pub size: (f32, f32),
    /// Directory holding one sprite sheet per animation key.
    pub sprite_dir: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log a per-biome tile count after generation.
    pub biome_summary: bool,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            tile_size: 16,
            chunk_size: 4,
            seed: "tessera".to_string(),
            smoothness: 1.0,
            interpolate: true,
            octaves: None,
            tap_replacement: Some("blocks/stone.png".to_string()),
        }
    }
}

impl Default for OctaveConfig {
    fn default() -> Self {
        Self {
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
            scale: 1.0,
        }
    }
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            tick_interval_ms: 30,
            clear_target_on_block: true,
            max_ticks_per_tap: 2000,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            id: "Player-1".to_string(),
            spawn: (0.0, 0.0),
            size: (16.0, 16.0),
            sprite_dir: "sprites/player".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            biome_summary: true,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join("config.ron");
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Returns `Some(new_config)` if the file on disk differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join("config.ron"))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
