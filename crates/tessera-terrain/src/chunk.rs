//! Coarse chunk grid: one classified noise sample per chunk, indexed by grid
//! coordinate for neighbour lookups during interpolation.

use serde::{Deserialize, Serialize};

use crate::biome::{Biome, classify_chunk};

/// One coarse grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub x: usize,
    pub y: usize,
    pub biome: Biome,
    /// Signed noise in `[-1, 1]` the biome was classified from.
    pub raw_noise: f64,
}

impl Chunk {
    /// Classify a raw noise value into a chunk at `(x, y)`.
    pub fn classify(x: usize, y: usize, raw_noise: f64) -> Self {
        Self {
            x,
            y,
            biome: classify_chunk(raw_noise),
            raw_noise,
        }
    }
}

/// Dense row-major grid of chunks, read-only after construction.
#[derive(Clone, Debug, Default)]
pub struct ChunkGrid {
    width: usize,
    height: usize,
    chunks: Vec<Chunk>,
}

impl ChunkGrid {
    /// Build a grid by classifying `noise(x, y)` for every cell, row by row.
    pub fn classify(width: usize, height: usize, mut noise: impl FnMut(usize, usize) -> f64) -> Self {
        let mut chunks = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                chunks.push(Chunk::classify(x, y, noise(x, y)));
            }
        }
        Self {
            width,
            height,
            chunks,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk at a grid coordinate, `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<&Chunk> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.chunks.get(y as usize * self.width + x as usize)
    }

    /// The 3×3 neighbourhood around `(x, y)`, including the chunk itself.
    ///
    /// Neighbours that fall outside the grid are skipped, so edge chunks
    /// yield fewer than nine entries.
    pub fn neighborhood(&self, x: usize, y: usize) -> impl Iterator<Item = &Chunk> + '_ {
        let (x, y) = (x as i64, y as i64);
        (-1..=1).flat_map(move |dy| (-1..=1).filter_map(move |dx| self.get(x + dx, y + dy)))
    }

    /// Iterate chunks in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }
}

impl<'a> IntoIterator for &'a ChunkGrid {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
