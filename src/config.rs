//! Generator configuration.
//!
//! Tunables for the complementary and monochromatic strategies. The defaults
//! reproduce the stock palette behaviour; a JSON document may override any
//! subset of fields.
//!
//! ```json
//! { "complementary": { "hueStep": 72, "lightness": { "min": 40, "max": 80 } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::palette::SLOT_COUNT;
use crate::random::RandomSource;

/// Half-open percentage interval `[min, max)` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

impl PercentRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> f64 {
        rng.next_in(self.min, self.max)
    }

    fn validate(self, name: &str) -> Result<()> {
        if !is_percent(self.min) || !is_percent(self.max) {
            return Err(SwatchError::InvalidConfig(format!(
                "{name} must lie within 0..=100, got {}..{}",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(SwatchError::InvalidConfig(format!(
                "{name} is inverted: {}..{}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

fn is_percent(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplementaryConfig {
    /// Degrees between neighbouring slots. 72 spreads five slots evenly.
    pub hue_step: f64,
    pub saturation: PercentRange,
    pub lightness: PercentRange,
}

impl Default for ComplementaryConfig {
    fn default() -> Self {
        Self {
            hue_step: 72.0,
            saturation: PercentRange::new(70.0, 100.0),
            lightness: PercentRange::new(40.0, 80.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonochromaticConfig {
    pub saturation: PercentRange,
    /// Lightness of slot 0.
    pub lightness_start: f64,
    /// Lightness added per slot.
    pub lightness_step: f64,
}

impl MonochromaticConfig {
    /// Lightness of slot `index` on the ramp.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lightness_at(&self, index: usize) -> f64 {
        self.lightness_step.mul_add(index as f64, self.lightness_start)
    }
}

impl Default for MonochromaticConfig {
    fn default() -> Self {
        Self {
            saturation: PercentRange::new(60.0, 100.0),
            lightness_start: 20.0,
            lightness_step: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub complementary: ComplementaryConfig,
    pub monochromatic: MonochromaticConfig,
}

impl GeneratorConfig {
    /// Parse a JSON document and validate it.
    ///
    /// # Errors
    /// [`SwatchError::Json`] for malformed JSON, [`SwatchError::InvalidConfig`]
    /// if any value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every range lies within `0..=100` and the lightness ramp stays
    /// in bounds for all slots.
    ///
    /// # Errors
    /// [`SwatchError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let comp = &self.complementary;
        if !comp.hue_step.is_finite() {
            return Err(SwatchError::InvalidConfig(format!(
                "complementary.hueStep must be finite, got {}",
                comp.hue_step
            )));
        }
        comp.saturation.validate("complementary.saturation")?;
        comp.lightness.validate("complementary.lightness")?;

        let mono = &self.monochromatic;
        mono.saturation.validate("monochromatic.saturation")?;
        let first = mono.lightness_at(0);
        let last = mono.lightness_at(SLOT_COUNT - 1);
        if !is_percent(first) || !is_percent(last) {
            return Err(SwatchError::InvalidConfig(format!(
                "monochromatic lightness ramp {first}..{last} leaves 0..=100"
            )));
        }
        Ok(())
    }
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
    fn test_default_is_valid() {
        GeneratorConfig::default().validate().unwrap();
    }

    #[test]
    fn test_default_ramp() {
        let mono = MonochromaticConfig::default();
        let ramp: Vec<f64> = (0..SLOT_COUNT).map(|i| mono.lightness_at(i)).collect();
        assert_eq!(ramp, vec![20.0, 35.0, 50.0, 65.0, 80.0]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GeneratorConfig::from_json(r#"{"complementary": {"hueStep": 30}}"#).unwrap();
        assert_eq!(config.complementary.hue_step, 30.0);
        assert_eq!(
            config.complementary.lightness,
            PercentRange::new(40.0, 80.0)
        );
        assert_eq!(config.monochromatic, MonochromaticConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            GeneratorConfig::from_json("{}").unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = GeneratorConfig::from_json(
            r#"{"complementary": {"saturation": {"min": 50, "max": 120}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SwatchError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = GeneratorConfig::from_json(
            r#"{"monochromatic": {"saturation": {"min": 90, "max": 60}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("inverted"), "{err}");
    }

    #[test]
    fn test_rejects_ramp_overflow() {
        let err =
            GeneratorConfig::from_json(r#"{"monochromatic": {"lightnessStep": 30}}"#).unwrap_err();
        assert!(err.to_string().contains("ramp"), "{err}");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GeneratorConfig::from_json("{"),
            Err(SwatchError::Json(_))
        ));
    }
}
