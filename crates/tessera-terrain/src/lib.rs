//! Procedural tile-world generation: seeded noise, multi-octave synthesis,
//! chunk biome classification, and Gaussian per-tile interpolation.

mod biome;
mod chunk;
mod interpolate;
mod noise_field;
mod octave;
mod rng;
mod world;

pub use biome::{Biome, TextureTable, classify_chunk, classify_tile, round_to_tenth};
pub use chunk::{Chunk, ChunkGrid};
pub use interpolate::{MIN_SMOOTHNESS, TileInterpolator, sanitize_smoothness};
pub use noise_field::{NoiseField, smoothstep};
pub use octave::{MIN_SCALE, NormalizedField, OctaveParams, OctaveSynthesizer, inverse_lerp};
pub use rng::{
    DEFAULT_SEED, LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER, SeededRng, seed_from_str,
};
pub use world::{GeneratorConfig, Tile, World, WorldGenerator, tile_id};
