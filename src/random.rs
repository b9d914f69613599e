//! Randomness injection for palette generation.
//!
//! Every generator in the crate draws through [`RandomSource`], so callers
//! pick the source: an entropy-seeded [`PaletteRng`] in the browser, a
//! fixed seed for reproducible output, or a [`Sequence`] that replays exact
//! draws in tests.

use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::hex::HexColor;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform draw from `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw from `[min, max)`.
    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        (max - min).mul_add(self.next_unit(), min)
    }

    /// Uniform hex digit value in `0..16`.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    fn next_hex_digit(&mut self) -> u8 {
        ((self.next_unit() * 16.0).floor() as u8).min(15)
    }
}

/// Default generator: PCG-64, small and seedable.
pub type PaletteRng = rand_pcg::Pcg64;

impl RandomSource for PaletteRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_hex_digit(&mut self) -> u8 {
        self.random_range(0..16u8)
    }
}

/// Generator with a fixed seed. Same seed, same palettes.
#[must_use]
pub fn seeded(seed: u64) -> PaletteRng {
    PaletteRng::seed_from_u64(seed)
}

/// Generator seeded from the platform entropy source
/// (`crypto.getRandomValues` on wasm32).
///
/// # Errors
/// Returns [`crate::SwatchError::Entropy`] if the entropy source is
/// unavailable.
pub fn from_entropy() -> Result<PaletteRng> {
    let mut seed = [0u8; 8];
    getrandom::getrandom(&mut seed)?;
    Ok(seeded(u64::from_le_bytes(seed)))
}

/// Replays a fixed list of unit draws, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields 0.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    values: Vec<f64>,
    pos: usize,
}

impl Sequence {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        let value = match self.values.len() {
            0 => 0.0,
            len => self.values.get(self.pos % len).copied().unwrap_or(0.0),
        };
        self.pos += 1;
        value.clamp(0.0, BELOW_ONE)
    }
}

/// Six independent uniform hex digits.
pub fn generate_random_hex<R: RandomSource + ?Sized>(rng: &mut R) -> HexColor {
    let mut byte = || rng.next_hex_digit() * 16 + rng.next_hex_digit();
    let r = byte();
    let g = byte();
    let b = byte();
    HexColor::from_rgb(r, g, b)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles_and_clamps() {
        let mut seq = Sequence::new(vec![0.25, 1.5, -1.0]);
        assert_eq!(seq.next_unit(), 0.25);
        assert!(seq.next_unit() < 1.0);
        assert_eq!(seq.next_unit(), 0.0);
        assert_eq!(seq.next_unit(), 0.25);
        assert_eq!(seq.draws(), 4);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut seq = Sequence::default();
        assert_eq!(seq.next_unit(), 0.0);
        assert_eq!(generate_random_hex(&mut seq).to_string(), "#000000");
    }

    #[test]
    fn test_hex_digit_from_unit() {
        let mut seq = Sequence::new(vec![0.0, 0.0625, 0.5, 0.999_999]);
        assert_eq!(seq.next_hex_digit(), 0);
        assert_eq!(seq.next_hex_digit(), 1);
        assert_eq!(seq.next_hex_digit(), 8);
        assert_eq!(seq.next_hex_digit(), 15);
    }

    #[test]
    fn test_random_hex_digit_order() {
        // digits are drawn R-high, R-low, G-high, ...
        let mut seq = Sequence::new(vec![
            15.0 / 16.0,
            14.0 / 16.0,
            0.0,
            1.0 / 16.0,
            10.0 / 16.0,
            11.0 / 16.0,
        ]);
        assert_eq!(generate_random_hex(&mut seq).to_string(), "#FE01AB");
    }

    #[test]
    fn test_next_in_range() {
        let mut seq = Sequence::new(vec![0.5]);
        assert_eq!(seq.next_in(70.0, 100.0), 85.0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..32 {
            assert_eq!(generate_random_hex(&mut a), generate_random_hex(&mut b));
        }
    }

    #[test]
    fn test_pcg_digits_in_range() {
        let mut rng = seeded(7);
        for _ in 0..1000 {
            assert!(rng.next_hex_digit() < 16);
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
