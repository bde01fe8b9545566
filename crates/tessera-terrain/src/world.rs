//! Generation pipeline and the assembled tile world.
//!
//! One configurable pipeline: seed → noise field → optional octave synthesis
//! → chunk classification → optional per-tile interpolation → tile emission.

use std::time::Instant;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tessera_math::Rect;

use crate::biome::{Biome, TextureTable, classify_tile};
use crate::chunk::ChunkGrid;
use crate::interpolate::TileInterpolator;
use crate::noise_field::NoiseField;
use crate::octave::{OctaveParams, OctaveSynthesizer};
use crate::rng::{DEFAULT_SEED, SeededRng};

/// Inputs to [`WorldGenerator`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chunk grid width.
    pub width: usize,
    /// Chunk grid height.
    pub height: usize,
    /// Pixels per tile edge.
    pub tile_size: u32,
    /// Tiles per chunk edge.
    pub chunk_size: usize,
    /// Arbitrary seed string.
    pub seed: String,
    /// Gaussian blend radius in pixels.
    pub smoothness: f64,
    /// Enables the multi-octave stage when set.
    pub octaves: Option<OctaveParams>,
    /// Enables per-tile interpolation. When off, every tile takes its
    /// chunk's coarse biome.
    pub interpolate: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            tile_size: 16,
            chunk_size: 4,
            seed: DEFAULT_SEED.to_string(),
            smoothness: 1.0,
            octaves: None,
            interpolate: true,
        }
    }
}

impl GeneratorConfig {
    /// Return a copy with zero extents and sizes raised to one.
    pub fn sanitized(&self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
            tile_size: self.tile_size.max(1),
            chunk_size: self.chunk_size.max(1),
            seed: self.seed.clone(),
            smoothness: crate::interpolate::sanitize_smoothness(self.smoothness),
            octaves: self.octaves.map(|p| p.sanitized()),
            interpolate: self.interpolate,
        }
    }
}

/// One emitted tile. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable scene id, `"x-{x},y-{y}"`.
    pub id: String,
    /// Pixel x of the top-left corner.
    pub x: u32,
    /// Pixel y of the top-left corner.
    pub y: u32,
    pub biome: Biome,
    pub texture: String,
}

impl Tile {
    pub fn new(x: u32, y: u32, biome: Biome, texture: impl Into<String>) -> Self {
        Self {
            id: tile_id(x, y),
            x,
            y,
            biome,
            texture: texture.into(),
        }
    }

    /// The tile's footprint in pixels.
    pub fn bounds(&self, tile_size: u32) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            tile_size as f32,
            tile_size as f32,
        )
    }
}

/// Scene id for the tile whose top-left corner is at pixel `(x, y)`.
pub fn tile_id(x: u32, y: u32) -> String {
    format!("x-{x},y-{y}")
}

/// A generated world: the chunk grid and the tiles emitted from it.
#[derive(Clone, Debug)]
pub struct World {
    config: GeneratorConfig,
    chunks: ChunkGrid,
    tiles: Vec<Tile>,
}

impl World {
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn chunks(&self) -> &ChunkGrid {
        &self.chunks
    }

    /// Tiles in emission order: chunks row by row, then tiles row by row
    /// inside each chunk.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// World extent in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let span = self.config.chunk_size as u32 * self.config.tile_size;
        (self.config.width as u32 * span, self.config.height as u32 * span)
    }

    /// The tile covering pixel `(x, y)`, if any.
    pub fn tile_at(&self, x: f32, y: f32) -> Option<&Tile> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let ts = self.config.tile_size;
        let cs = self.config.chunk_size;
        let col = (x as u32 / ts) as usize;
        let row = (y as u32 / ts) as usize;
        let (cx, tx) = (col / cs, col % cs);
        let (cy, ty) = (row / cs, row % cs);
        if cx >= self.config.width || cy >= self.config.height {
            return None;
        }
        let index = (cy * self.config.width + cx) * cs * cs + ty * cs + tx;
        self.tiles.get(index)
    }

    /// Number of tiles per biome.
    pub fn biome_histogram(&self) -> HashMap<Biome, usize> {
        let mut histogram = HashMap::new();
        for tile in &self.tiles {
            *histogram.entry(tile.biome).or_insert(0) += 1;
        }
        histogram
    }

    /// One collider per tile whose biome matches `blocks`, in tile order.
    pub fn colliders(&self, blocks: impl Fn(Biome) -> bool) -> Vec<Rect> {
        let ts = self.config.tile_size;
        self.tiles
            .iter()
            .filter(|t| blocks(t.biome))
            .map(|t| t.bounds(ts))
            .collect()
    }

    /// Colliders for every impassable tile.
    pub fn blocking_colliders(&self) -> Vec<Rect> {
        self.colliders(Biome::blocks_movement)
    }
}

/// Map a normalized `[0, 1]` octave value onto the signed range the chunk
/// thresholds expect.
#[inline]
fn resign(normalized: f64) -> f64 {
    normalized * 2.0 - 1.0
}

/// Runs the generation pipeline. Owns its RNG state, so repeated or
/// concurrent generators with the same config produce identical worlds.
pub struct WorldGenerator {
    config: GeneratorConfig,
    textures: TextureTable,
}

impl WorldGenerator {
    /// Create a generator. The config is sanitized here.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config: config.sanitized(),
            textures: TextureTable::default(),
        }
    }

    /// Replace the biome → texture table.
    pub fn with_textures(mut self, textures: TextureTable) -> Self {
        self.textures = textures;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Classify the chunk grid without emitting tiles.
    pub fn classify_chunks(&self) -> ChunkGrid {
        let cfg = &self.config;
        let mut rng = SeededRng::from_str_seed(&cfg.seed);
        let field = NoiseField::new(cfg.width, cfg.height, &mut rng);

        match cfg.octaves {
            Some(params) => {
                let normalized = OctaveSynthesizer::new(&field, params).synthesize();
                ChunkGrid::classify(cfg.width, cfg.height, |x, y| {
                    normalized.get(x, y).map_or(0.0, resign)
                })
            }
            None => ChunkGrid::classify(cfg.width, cfg.height, |x, y| {
                field.sample(x as f64, y as f64)
            }),
        }
    }

    /// Run the full pipeline.
    pub fn generate(&self) -> World {
        let start = Instant::now();
        let cfg = &self.config;
        let chunks = self.classify_chunks();

        let cs = cfg.chunk_size;
        let ts = cfg.tile_size;
        let mut tiles = Vec::with_capacity(chunks.len() * cs * cs);
        let interpolator = TileInterpolator::new(&chunks, cs, ts, cfg.smoothness);

        for chunk in &chunks {
            for ty in 0..cs {
                for tx in 0..cs {
                    let biome = if cfg.interpolate {
                        classify_tile(interpolator.value(chunk.x, chunk.y, tx, ty))
                    } else {
                        chunk.biome
                    };
                    let px = (chunk.x * cs + tx) as u32 * ts;
                    let py = (chunk.y * cs + ty) as u32 * ts;
                    tiles.push(Tile::new(px, py, biome, self.textures.get(biome)));
                }
            }
        }

        tracing::info!(
            seed = %cfg.seed,
            chunks = chunks.len(),
            tiles = tiles.len(),
            octaves = cfg.octaves.is_some(),
            interpolate = cfg.interpolate,
            "generated world in {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        World {
            config: cfg.clone(),
            chunks,
            tiles,
        }
    }
}
