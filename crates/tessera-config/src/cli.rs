//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, OctaveConfig};

/// tessera command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "tessera", about = "Procedural tile world with tap-to-move player")]
pub struct CliArgs {
    /// World width in chunks.
    #[arg(long)]
    pub width: Option<u32>,

    /// World height in chunks.
    #[arg(long)]
    pub height: Option<u32>,

    /// Tile edge in pixels.
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Chunk edge in tiles.
    #[arg(long)]
    pub chunk_size: Option<u32>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<String>,

    /// Biome blend radius in pixels.
    #[arg(long)]
    pub smoothness: Option<f64>,

    /// Number of noise octaves. 0 disables the multi-octave stage.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Maximum movement ticks per tap.
    #[arg(long)]
    pub ticks: Option<u32>,

    /// World-space tap as `x,y`. Repeat to script several taps.
    #[arg(long = "tap", value_parser = parse_point, allow_hyphen_values = true)]
    pub taps: Vec<(f32, f32)>,

    /// Write the generated tiles as RON. Without a path, writes `tiles.ron`
    /// in the data directory.
    #[arg(long, value_name = "PATH")]
    pub dump: Option<Option<PathBuf>>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse an `x,y` pair.
pub fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok((x, y))
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(size) = args.tile_size {
            self.world.tile_size = size;
        }
        if let Some(size) = args.chunk_size {
            self.world.chunk_size = size;
        }
        if let Some(ref seed) = args.seed {
            self.world.seed = seed.clone();
        }
        if let Some(s) = args.smoothness {
            self.world.smoothness = s;
        }
        if let Some(n) = args.octaves {
            self.world.octaves = (n > 0).then(|| OctaveConfig {
                octaves: n,
                ..self.world.octaves.unwrap_or_default()
            });
        }
        if let Some(ticks) = args.ticks {
            self.movement.max_ticks_per_tap = ticks;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
