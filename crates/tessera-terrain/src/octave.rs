//! Multi-octave noise synthesis with min–max normalization.
//!
//! Layers the base [`NoiseField`] at increasing frequencies and decreasing
//! amplitudes, then rescales the whole field into `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::noise_field::NoiseField;

/// Smallest usable sampling scale.
pub const MIN_SCALE: f64 = 0.001;

/// Configuration for multi-octave synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveParams {
    /// Number of octaves to layer. Zero is treated as one.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves, in `[0, 1]`.
    pub persistence: f64,
    /// Frequency multiplier between successive octaves, at least 1.
    pub lacunarity: f64,
    /// Divisor applied to cell coordinates before sampling. Must be positive.
    pub scale: f64,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
            scale: 1.0,
        }
    }
}

impl OctaveParams {
    /// Return a copy with every parameter clamped into its usable range.
    ///
    /// Out-of-range values are normalized, never rejected.
    pub fn sanitized(&self) -> Self {
        let persistence = if self.persistence.is_nan() {
            0.0
        } else {
            self.persistence.clamp(0.0, 1.0)
        };
        let lacunarity = if self.lacunarity >= 1.0 {
            self.lacunarity
        } else {
            1.0
        };
        let scale = if self.scale > 0.0 {
            self.scale
        } else {
            MIN_SCALE
        };
        Self {
            octaves: self.octaves.max(1),
            persistence,
            lacunarity,
            scale,
        }
    }
}

/// Inverse linear interpolation of `value` between `a` and `b`.
///
/// Returns 0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a != b { (value - a) / (b - a) } else { 0.0 }
}

/// A synthesized field normalized into `[0, 1]`.
///
/// Row-major: `values[y * width + x]`.
#[derive(Clone, Debug)]
pub struct NormalizedField {
    width: usize,
    height: usize,
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl NormalizedField {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Normalized value at a cell, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }

    /// Smallest accumulated value before normalization.
    pub fn raw_min(&self) -> f64 {
        self.min
    }

    /// Largest accumulated value before normalization.
    pub fn raw_max(&self) -> f64 {
        self.max
    }

    /// True when every cell accumulated the same value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Layers octaves of a [`NoiseField`] over its own grid.
pub struct OctaveSynthesizer<'a> {
    field: &'a NoiseField,
    params: OctaveParams,
}

impl<'a> OctaveSynthesizer<'a> {
    /// Create a synthesizer. Parameters are sanitized on construction.
    pub fn new(field: &'a NoiseField, params: OctaveParams) -> Self {
        Self {
            field,
            params: params.sanitized(),
        }
    }

    /// The sanitized parameters in use.
    pub fn params(&self) -> &OctaveParams {
        &self.params
    }

    /// Accumulate all octaves at one cell, before normalization.
    pub fn accumulate(&self, x: usize, y: usize) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..self.params.octaves {
            let sx = x as f64 / self.params.scale * frequency;
            let sy = y as f64 / self.params.scale * frequency;
            total += self.field.sample(sx, sy) * amplitude;

            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        total
    }

    /// Synthesize the whole field and min–max normalize it into `[0, 1]`.
    ///
    /// A field whose cells all accumulate the same value normalizes to 0.
    pub fn synthesize(&self) -> NormalizedField {
        let width = self.field.width();
        let height = self.field.height();
        let mut values = Vec::with_capacity(width * height);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for y in 0..height {
            for x in 0..width {
                let v = self.accumulate(x, y);
                min = min.min(v);
                max = max.max(v);
                values.push(v);
            }
        }

        for v in &mut values {
            *v = inverse_lerp(min, max, *v);
        }

        tracing::debug!(
            octaves = self.params.octaves,
            min,
            max,
            "synthesized {}x{} octave field",
            width,
            height
        );

        NormalizedField {
            width,
            height,
            values,
            min,
            max,
        }
    }
}
