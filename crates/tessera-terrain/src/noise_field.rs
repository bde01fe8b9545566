//! Base noise field: a grid of seeded random samples with a smoothed,
//! signed lookup.

use crate::rng::SeededRng;

/// Smoothstep easing `t²(3 - 2t)` on `[0, 1]`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// A `width × height` grid of values in `[0, 1)`, drawn once from the RNG
/// stream at construction and immutable afterwards.
///
/// The grid is sized in chunk units, not tiles. Lookups outside the grid
/// wrap, so the field repeats beyond its declared extent.
#[derive(Clone, Debug)]
pub struct NoiseField {
    width: usize,
    height: usize,
    /// Column-major: `values[x * height + y]`, matching the draw order.
    values: Vec<f64>,
}

impl NoiseField {
    /// Draw a new field from `rng`. Cells are filled column by column: the
    /// outer loop walks `x`, the inner loop walks `y`.
    ///
    /// Zero extents are raised to one so that lookups always have a cell.
    pub fn new(width: usize, height: usize, rng: &mut SeededRng) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut values = Vec::with_capacity(width * height);
        for _x in 0..width {
            for _y in 0..height {
                values.push(rng.next_float());
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw stored value at an in-range cell.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn raw(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of range");
        self.values[x * self.height + y]
    }

    /// Sample the field at `(x, y)`, returning a value in `[-1, 1]`.
    ///
    /// Coordinates are floored to a cell and wrapped into the grid with a
    /// Euclidean modulo, so fractional and negative inputs are accepted. The
    /// stored value is eased with [`smoothstep`] and rescaled from `[0, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let cx = wrap(x, self.width);
        let cy = wrap(y, self.height);
        let value = self.values[cx * self.height + cy];
        smoothstep(value) * 2.0 - 1.0
    }
}

#[inline]
fn wrap(coord: f64, extent: usize) -> usize {
    if !coord.is_finite() {
        return 0;
    }
    (coord.floor() as i64).rem_euclid(extent as i64) as usize
}
