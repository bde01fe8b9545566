//! Deterministic seeded randomness.
//!
//! Provides the string-seed hash and the 32-bit linear congruential generator
//! every noise field is drawn from. Both are bit-exact across platforms: the
//! whole generator relies on the same seed string replaying the same stream.

use rand::RngCore;

// ---------------------------------------------------------------------------
// Seed derivation
// ---------------------------------------------------------------------------

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: &str = "tessera";

/// Hash an arbitrary string into a 32-bit seed with the rolling
/// `hash * 31 + unit` polynomial, wrapping on overflow.
///
/// The hash iterates UTF-16 code units. The result may be negative and should
/// be treated as opaque bits rather than a magnitude.
pub fn seed_from_str(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

// ---------------------------------------------------------------------------
// Linear congruential generator
// ---------------------------------------------------------------------------

/// LCG multiplier.
pub const LCG_MULTIPLIER: u32 = 1_664_525;
/// LCG increment.
pub const LCG_INCREMENT: u32 = 1_013_904_223;
/// LCG modulus, 2^32. Arithmetic on `u32` wraps at exactly this value.
pub const LCG_MODULUS: f64 = 4_294_967_296.0;

/// A 32-bit linear congruential generator: `state = (a * state + c) mod 2^32`.
///
/// Owned by whichever generator draws from it; there is no shared or ambient
/// RNG state. The period is bounded by 2^32 and the stream cannot be reseeded
/// mid-way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a generator from a numeric seed. The initial state is
    /// `seed XOR a`, reduced modulo 2^32.
    pub fn from_seed(seed: i32) -> Self {
        Self {
            state: (seed as u32) ^ LCG_MULTIPLIER,
        }
    }

    /// Create a generator from a string seed via [`seed_from_str`].
    pub fn from_str_seed(seed: &str) -> Self {
        Self::from_seed(seed_from_str(seed))
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance one step and return the new state.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Draw the next float in `[0, 1)`.
    #[inline]
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.step()) / LCG_MODULUS
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        rand::rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}
