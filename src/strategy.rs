//! Palette regeneration strategies
//!
//! Each strategy takes the current palette by reference and returns a new
//! one. Locked slots are copied through unchanged and consume no random
//! draws; unlocked slots are recolored in slot order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{hsl_to_hex, rgb_to_hsl};
use crate::config::{ComplementaryConfig, GeneratorConfig, MonochromaticConfig};
use crate::error::SwatchError;
use crate::palette::Palette;
use crate::random::{generate_random_hex, RandomSource};

/// The three ways a palette can be regenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Independent random hex per slot.
    Random,
    /// Hues spread evenly around the wheel from one random base hue.
    Complementary,
    /// One random hue, lightness ramping up by slot.
    Monochromatic,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Random, Self::Complementary, Self::Monochromatic];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Complementary => "complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Regenerate `current` with this strategy.
    pub fn apply<R: RandomSource + ?Sized>(
        self,
        current: &Palette,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Palette {
        match self {
            Self::Random => generate_new_palette(current, rng),
            Self::Complementary => complementary_with(current, rng, &config.complementary),
            Self::Monochromatic => monochromatic_with(current, rng, &config.monochromatic),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SwatchError::UnknownStrategy(s.to_string()))
    }
}

/// Fresh random hex for every unlocked slot.
pub fn generate_new_palette<R: RandomSource + ?Sized>(current: &Palette, rng: &mut R) -> Palette {
    log::debug!("regenerating random palette");
    current.recolor_unlocked(|_, _| generate_random_hex(rng))
}

/// Complementary palette with the default spacing and ranges.
pub fn generate_complementary_palette<R: RandomSource + ?Sized>(
    current: &Palette,
    rng: &mut R,
) -> Palette {
    complementary_with(current, rng, &ComplementaryConfig::default())
}

/// Slot `i` gets hue `base + i * hue_step`, with saturation and lightness
/// drawn from the configured ranges.
pub fn complementary_with<R: RandomSource + ?Sized>(
    current: &Palette,
    rng: &mut R,
    config: &ComplementaryConfig,
) -> Palette {
    let base_hue = (rng.next_unit() * 360.0).floor();
    log::debug!("complementary palette, base hue {base_hue}");

    current.recolor_unlocked(|index, _| {
        let hue = slot_hue(base_hue, config.hue_step, index);
        let saturation = config.saturation.sample(rng);
        let lightness = config.lightness.sample(rng);
        log::trace!("slot {index}: hsl({hue}, {saturation:.1}, {lightness:.1})");
        hsl_to_hex(hue, saturation, lightness)
    })
}

#[allow(clippy::cast_precision_loss)]
fn slot_hue(base: f64, step: f64, index: usize) -> f64 {
    step.mul_add(index as f64, base).rem_euclid(360.0)
}

/// Monochromatic palette with the default lightness ramp.
pub fn generate_monochromatic_palette<R: RandomSource + ?Sized>(
    current: &Palette,
    rng: &mut R,
) -> Palette {
    monochromatic_with(current, rng, &MonochromaticConfig::default())
}

/// Every unlocked slot shares the hue of one random color; lightness follows
/// the configured ramp by slot index and saturation is drawn per slot.
pub fn monochromatic_with<R: RandomSource + ?Sized>(
    current: &Palette,
    rng: &mut R,
    config: &MonochromaticConfig,
) -> Palette {
    let base = generate_random_hex(rng);
    let hue = rgb_to_hsl(base).h;
    log::debug!("monochromatic palette from {base}, hue {hue:.1}");

    current.recolor_unlocked(|index, _| {
        let lightness = config.lightness_at(index);
        let saturation = config.saturation.sample(rng);
        hsl_to_hex(hue, saturation, lightness)
    })
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
    use crate::random::{seeded, Sequence};

    #[test]
    fn test_parse_strategy() {
        assert_eq!("random".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!(
            " Complementary ".parse::<Strategy>().unwrap(),
            Strategy::Complementary
        );
        assert_eq!(
            "MONOCHROMATIC".parse::<Strategy>().unwrap(),
            Strategy::Monochromatic
        );
        assert!(matches!(
            "triadic".parse::<Strategy>(),
            Err(SwatchError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_slot_hue_wraps() {
        assert_eq!(slot_hue(300.0, 72.0, 1), 12.0);
        assert_eq!(slot_hue(0.0, 72.0, 4), 288.0);
    }

    #[test]
    fn test_locked_slots_consume_no_draws() {
        let palette = Palette::random(&mut seeded(9))
            .toggle_lock("color-0")
            .unwrap()
            .toggle_lock("color-1")
            .unwrap();
        let mut seq = Sequence::new(vec![0.5]);
        let _ = generate_complementary_palette(&palette, &mut seq);
        // base hue + (saturation, lightness) for three unlocked slots
        assert_eq!(seq.draws(), 7);
    }

    #[test]
    fn test_apply_dispatches_with_config() {
        let palette = Palette::random(&mut seeded(10));
        let config = GeneratorConfig::default();
        let direct = generate_monochromatic_palette(&palette, &mut seeded(11));
        let applied = Strategy::Monochromatic.apply(&palette, &mut seeded(11), &config);
        assert_eq!(direct, applied);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Strategy::Complementary).unwrap(),
            "\"complementary\""
        );
    }
}
