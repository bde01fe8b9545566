//! Biome set, threshold classifiers, and the biome → texture table.
//!
//! Two threshold tables exist on purpose: the coarse chunk table and the finer
//! per-tile table use different cut points, and only the tile table has a
//! Beach band.

use serde::{Deserialize, Serialize};

/// Terrain biome. Declaration order runs from lowest to highest noise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Biome {
    Water,
    Sea,
    Beach,
    Plains,
    Forest,
    Mountain,
}

impl Biome {
    /// Every biome in ascending threshold order.
    pub const ALL: [Biome; 6] = [
        Biome::Water,
        Biome::Sea,
        Biome::Beach,
        Biome::Plains,
        Biome::Forest,
        Biome::Mountain,
    ];

    /// Lowercase name, e.g. `"plains"`.
    pub fn name(self) -> &'static str {
        match self {
            Biome::Water => "water",
            Biome::Sea => "sea",
            Biome::Beach => "beach",
            Biome::Plains => "plains",
            Biome::Forest => "forest",
            Biome::Mountain => "mountain",
        }
    }

    /// Whether a tile of this biome is impassable for the player.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Biome::Water | Biome::Mountain)
    }

    /// Default texture reference for this biome.
    pub fn default_texture(self) -> &'static str {
        match self {
            Biome::Water => "terrain/ocean.png",
            Biome::Sea => "terrain/sea.png",
            Biome::Beach => "terrain/beach.png",
            Biome::Plains => "terrain/plains.png",
            Biome::Forest => "terrain/forest.png",
            Biome::Mountain => "terrain/mountain.png",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Round to one decimal place, halves away from zero.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Coarse chunk classification of a raw noise value in `[-1, 1]`.
///
/// The value is rounded to one decimal first, then compared against
/// ascending thresholds; the first match wins, so a value exactly on a cut
/// point resolves to the lower biome. Never yields [`Biome::Beach`].
pub fn classify_chunk(raw_noise: f64) -> Biome {
    let v = round_to_tenth(raw_noise);
    if v <= -0.6 {
        Biome::Water
    } else if v <= -0.2 {
        Biome::Sea
    } else if v <= 0.2 {
        Biome::Plains
    } else if v <= 0.4 {
        Biome::Forest
    } else {
        Biome::Mountain
    }
}

/// Fine per-tile classification of an interpolated value in `[-1, 1]`.
///
/// Unrounded, first match wins.
pub fn classify_tile(value: f64) -> Biome {
    if value <= -0.6 {
        Biome::Water
    } else if value <= -0.2 {
        Biome::Sea
    } else if value <= 0.0 {
        Biome::Beach
    } else if value <= 0.3 {
        Biome::Plains
    } else if value <= 0.6 {
        Biome::Forest
    } else {
        Biome::Mountain
    }
}

/// Maps each biome to the texture reference handed to the scene.
///
/// Starts from [`Biome::default_texture`]; individual entries can be
/// overridden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureTable {
    textures: [String; 6],
}

impl Default for TextureTable {
    fn default() -> Self {
        Self {
            textures: Biome::ALL.map(|b| b.default_texture().to_string()),
        }
    }
}

impl TextureTable {
    pub fn get(&self, biome: Biome) -> &str {
        &self.textures[biome.index()]
    }

    pub fn set(&mut self, biome: Biome, texture: impl Into<String>) {
        self.textures[biome.index()] = texture.into();
    }

    /// Builder-style override.
    pub fn with(mut self, biome: Biome, texture: impl Into<String>) -> Self {
        self.set(biome, texture);
        self
    }
}
