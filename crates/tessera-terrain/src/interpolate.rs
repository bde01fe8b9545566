//! Gaussian blending of chunk noise across the 3×3 neighbourhood, giving each
//! tile a smooth biome transition instead of a hard chunk border.

use crate::chunk::ChunkGrid;

/// Smallest usable smoothness factor.
pub const MIN_SMOOTHNESS: f64 = 0.001;

/// Clamp a caller-supplied smoothness into the usable range.
pub fn sanitize_smoothness(smoothness: f64) -> f64 {
    if smoothness.is_finite() && smoothness > 0.0 {
        smoothness
    } else {
        MIN_SMOOTHNESS
    }
}

/// Blends chunk noise for tiles inside a [`ChunkGrid`].
///
/// Distances are measured in pixels: a tile at local `(tx, ty)` inside chunk
/// `(cx, cy)` is centred at `(cx * chunk_size + tx) * tile_size + tile_size / 2`,
/// and a chunk's centre sits half a chunk span past its origin.
pub struct TileInterpolator<'a> {
    grid: &'a ChunkGrid,
    chunk_size: usize,
    tile_size: f64,
    two_sigma_sq: f64,
}

impl<'a> TileInterpolator<'a> {
    pub fn new(grid: &'a ChunkGrid, chunk_size: usize, tile_size: u32, smoothness: f64) -> Self {
        let s = sanitize_smoothness(smoothness);
        Self {
            grid,
            chunk_size: chunk_size.max(1),
            tile_size: tile_size.max(1) as f64,
            two_sigma_sq: 2.0 * s * s,
        }
    }

    /// Pixel centre of tile `(tx, ty)` of chunk `(cx, cy)`.
    pub fn tile_center(&self, cx: usize, cy: usize, tx: usize, ty: usize) -> (f64, f64) {
        let ts = self.tile_size;
        let x = (cx * self.chunk_size + tx) as f64 * ts + ts / 2.0;
        let y = (cy * self.chunk_size + ty) as f64 * ts + ts / 2.0;
        (x, y)
    }

    /// Pixel centre of chunk `(nx, ny)`.
    pub fn chunk_center(&self, nx: usize, ny: usize) -> (f64, f64) {
        let span = self.chunk_size as f64 * self.tile_size;
        (nx as f64 * span + span / 2.0, ny as f64 * span + span / 2.0)
    }

    /// Interpolated noise for tile `(tx, ty)` of chunk `(cx, cy)`.
    ///
    /// Returns the weighted mean of neighbour raw noise with weights
    /// `exp(-d² / 2s²)`. Weights are evaluated relative to the nearest
    /// neighbour, which leaves the mean unchanged but keeps the nearest weight
    /// at 1, so tiny smoothness values converge to the own-chunk value rather
    /// than underflowing. Returns 0 if nothing contributes.
    pub fn value(&self, cx: usize, cy: usize, tx: usize, ty: usize) -> f64 {
        let (px, py) = self.tile_center(cx, cy, tx, ty);
        let dist_sq = |nx: usize, ny: usize| {
            let (ox, oy) = self.chunk_center(nx, ny);
            (px - ox).powi(2) + (py - oy).powi(2)
        };

        let nearest_sq = self
            .grid
            .neighborhood(cx, cy)
            .map(|n| dist_sq(n.x, n.y))
            .fold(f64::INFINITY, f64::min);

        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for n in self.grid.neighborhood(cx, cy) {
            let weight = (-(dist_sq(n.x, n.y) - nearest_sq) / self.two_sigma_sq).exp();
            weighted += weight * n.raw_noise;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            weighted / total_weight
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkGrid;

    const EPSILON: f64 = 1e-9;

    fn checker(w: usize, h: usize) -> ChunkGrid {
        ChunkGrid::classify(w, h, |x, y| if (x + y) % 2 == 0 { 0.8 } else { -0.8 })
    }

    /// Direct `exp(-d² / 2s²)` over the in-bounds neighbourhood.
    fn direct_gaussian(
        grid: &ChunkGrid,
        (cx, cy, tx, ty): (usize, usize, usize, usize),
        chunk_size: usize,
        tile_size: f64,
        smoothness: f64,
    ) -> f64 {
        let px = (cx * chunk_size + tx) as f64 * tile_size + tile_size / 2.0;
        let py = (cy * chunk_size + ty) as f64 * tile_size + tile_size / 2.0;
        let span = chunk_size as f64 * tile_size;
        let (mut sum, mut total) = (0.0, 0.0);
        for n in grid.neighborhood(cx, cy) {
            let dx = px - (n.x as f64 * span + span / 2.0);
            let dy = py - (n.y as f64 * span + span / 2.0);
            let w = (-(dx * dx + dy * dy) / (2.0 * smoothness * smoothness)).exp();
            sum += w * n.raw_noise;
            total += w;
        }
        sum / total
    }

    #[test]
    fn test_centres_are_in_pixels() {
        let grid = checker(3, 3);
        let interp = TileInterpolator::new(&grid, 4, 16, 1.0);
        assert_eq!(interp.tile_center(0, 0, 0, 0), (8.0, 8.0));
        assert_eq!(interp.tile_center(1, 2, 3, 0), (120.0, 136.0));
        assert_eq!(interp.chunk_center(0, 0), (32.0, 32.0));
        assert_eq!(interp.chunk_center(2, 1), (160.0, 96.0));
    }

    #[test]
    fn test_matches_direct_gaussian() {
        let grid = ChunkGrid::classify(4, 3, |x, y| ((x * 7 + y * 3) % 5) as f64 * 0.4 - 0.8);
        for smoothness in [16.0, 40.0, 100.0] {
            let interp = TileInterpolator::new(&grid, 4, 16, smoothness);
            for cy in 0..3 {
                for cx in 0..4 {
                    for t in 0..4 {
                        let at = (cx, cy, t, 3 - t);
                        let expected = direct_gaussian(&grid, at, 4, 16.0, smoothness);
                        let v = interp.value(cx, cy, t, 3 - t);
                        assert!(
                            (v - expected).abs() < EPSILON,
                            "s={smoothness} {at:?}: {v} != {expected}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_unit_smoothness_keeps_own_chunk_at_default_sizes() {
        // One pixel of blur against a 64 px chunk span leaves neighbours with
        // negligible weight.
        let grid = checker(3, 3);
        let interp = TileInterpolator::new(&grid, 4, 16, 1.0);
        for t in 0..4 {
            let v = interp.value(1, 1, t, t);
            let expected = direct_gaussian(&grid, (1, 1, t, t), 4, 16.0, 1.0);
            assert!((v - 0.8).abs() < EPSILON);
            assert!((v - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_uniform_grid_interpolates_to_constant() {
        let grid = ChunkGrid::classify(4, 4, |_, _| 0.35);
        let interp = TileInterpolator::new(&grid, 4, 16, 50.0);
        for tx in 0..4 {
            for ty in 0..4 {
                assert!((interp.value(1, 2, tx, ty) - 0.35).abs() < EPSILON);
                assert!((interp.value(0, 0, tx, ty) - 0.35).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_tiny_smoothness_converges_to_own_chunk() {
        let grid = checker(5, 5);
        let interp = TileInterpolator::new(&grid, 8, 16, 1e-4);
        for cy in 0..5 {
            for cx in 0..5 {
                let own = grid.get(cx as i64, cy as i64).unwrap().raw_noise;
                for t in 0..8 {
                    let v = interp.value(cx, cy, t, 7 - t);
                    assert!(
                        (v - own).abs() < 1e-6,
                        "chunk ({cx}, {cy}) tile {t}: {v} should approach {own}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_large_smoothness_flattens_toward_mean() {
        let grid = checker(3, 3);
        let interp = TileInterpolator::new(&grid, 4, 16, 1e6);
        // Centre chunk sees five +0.8 and four -0.8 neighbours.
        let expected = (5.0 * 0.8 - 4.0 * 0.8) / 9.0;
        assert!((interp.value(1, 1, 0, 0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_blend_is_between_neighbour_extremes() {
        let grid = checker(6, 6);
        let interp = TileInterpolator::new(&grid, 4, 16, 40.0);
        for cx in 0..6 {
            for tx in 0..4 {
                let v = interp.value(cx, 3, tx, tx);
                assert!((-0.8 - EPSILON..=0.8 + EPSILON).contains(&v));
            }
        }
    }

    #[test]
    fn test_tile_near_border_leans_toward_neighbour() {
        // Left half -1, right half +1.
        let grid = ChunkGrid::classify(2, 1, |x, _| if x == 0 { -1.0 } else { 1.0 });
        let interp = TileInterpolator::new(&grid, 8, 1, 4.0);
        let far = interp.value(0, 0, 0, 4);
        let near = interp.value(0, 0, 7, 4);
        assert!(near > far, "tile next to the +1 chunk should blend higher");
        assert!(far < 0.0);
    }

    #[test]
    fn test_non_positive_smoothness_is_floored() {
        assert_eq!(sanitize_smoothness(0.0), MIN_SMOOTHNESS);
        assert_eq!(sanitize_smoothness(-2.0), MIN_SMOOTHNESS);
        assert_eq!(sanitize_smoothness(f64::NAN), MIN_SMOOTHNESS);
        assert_eq!(sanitize_smoothness(1.5), 1.5);

        let grid = checker(3, 3);
        let interp = TileInterpolator::new(&grid, 4, 16, 0.0);
        let v = interp.value(1, 1, 1, 1);
        assert!(v.is_finite());
        assert!((v - 0.8).abs() < 1e-6);
    }
}
