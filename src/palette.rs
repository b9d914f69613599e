//! Palette data model
//!
//! A [`Palette`] is exactly [`SLOT_COUNT`] [`Color`] slots in display order.
//! Values are never mutated in place: every transform returns a new palette
//! and the caller decides when to publish it.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SwatchError};
use crate::hex::HexColor;
use crate::random::{generate_random_hex, RandomSource};

/// Number of slots in every palette.
pub const SLOT_COUNT: usize = 5;

/// One palette slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Stable per-slot identifier (`color-0` .. `color-4` for generated palettes).
    pub id: String,
    pub hex: HexColor,
    /// Locked slots are skipped by every regeneration strategy.
    pub locked: bool,
}

impl Color {
    #[must_use]
    pub fn new(id: impl Into<String>, hex: HexColor) -> Self {
        Self {
            id: id.into(),
            hex,
            locked: false,
        }
    }

    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

/// Id given to slot `index` of a generated palette.
#[must_use]
pub fn slot_id(index: usize) -> String {
    format!("color-{index}")
}

/// Ordered set of five colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; SLOT_COUNT],
}

impl Palette {
    /// Fresh palette of random, unlocked colors.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            colors: std::array::from_fn(|i| Color::new(slot_id(i), generate_random_hex(rng))),
        }
    }

    /// Build a palette from explicit slots.
    ///
    /// # Errors
    /// [`SwatchError::InvalidPalette`] unless there are exactly five slots,
    /// [`SwatchError::DuplicateSlot`] if two slots share an id.
    pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
        let len = colors.len();
        {
            let mut seen = HashSet::with_capacity(len);
            for color in &colors {
                if !seen.insert(color.id.as_str()) {
                    return Err(SwatchError::DuplicateSlot(color.id.clone()));
                }
            }
        }
        let colors: [Color; SLOT_COUNT] = colors
            .try_into()
            .map_err(|_| SwatchError::InvalidPalette(len))?;
        Ok(Self { colors })
    }

    #[must_use]
    pub const fn colors(&self) -> &[Color; SLOT_COUNT] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Slot at `index`, if in range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Slot with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn hexes(&self) -> [HexColor; SLOT_COUNT] {
        self.colors.each_ref().map(|c| c.hex)
    }

    /// Copy with the lock on slot `id` flipped.
    ///
    /// # Errors
    /// [`SwatchError::UnknownSlot`] if no slot has that id.
    pub fn toggle_lock(&self, id: &str) -> Result<Self> {
        let mut next = self.clone();
        let slot = next
            .colors
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SwatchError::UnknownSlot(id.to_string()))?;
        slot.locked = !slot.locked;
        log::debug!("slot {id} locked={}", slot.locked);
        Ok(next)
    }

    /// Copy where every unlocked slot gets `recolor(index, slot)`; locked
    /// slots pass through untouched.
    pub(crate) fn recolor_unlocked<F>(&self, mut recolor: F) -> Self
    where
        F: FnMut(usize, &Color) -> HexColor,
    {
        let mut next = self.clone();
        for (index, slot) in next.colors.iter_mut().enumerate() {
            if !slot.locked {
                slot.hex = recolor(index, slot);
            }
        }
        next
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.colors.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let colors = Vec::<Color>::deserialize(deserializer)?;
        Self::from_colors(colors).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn test_random_palette_ids_and_locks() {
        let palette = Palette::random(&mut seeded(1));
        for (i, color) in palette.iter().enumerate() {
            assert_eq!(color.id, format!("color-{i}"));
            assert!(!color.locked);
        }
    }

    #[test]
    fn test_toggle_lock_returns_copy() {
        let palette = Palette::random(&mut seeded(2));
        let locked = palette.toggle_lock("color-3").unwrap();

        assert!(!palette.colors()[3].locked);
        assert!(locked.colors()[3].locked);
        assert_eq!(locked.hexes(), palette.hexes());

        let unlocked = locked.toggle_lock("color-3").unwrap();
        assert_eq!(unlocked, palette);
    }

    #[test]
    fn test_toggle_lock_unknown_slot() {
        let palette = Palette::random(&mut seeded(3));
        match palette.toggle_lock("color-9") {
            Err(SwatchError::UnknownSlot(id)) => assert_eq!(id, "color-9"),
            other => panic!("expected UnknownSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_from_colors_wrong_count() {
        let colors = vec![Color::new("a", HexColor::BLACK)];
        assert!(matches!(
            Palette::from_colors(colors),
            Err(SwatchError::InvalidPalette(1))
        ));
    }

    #[test]
    fn test_from_colors_duplicate_id() {
        let colors = (0..5).map(|_| Color::new("same", HexColor::WHITE)).collect();
        assert!(matches!(
            Palette::from_colors(colors),
            Err(SwatchError::DuplicateSlot(_))
        ));
    }

    #[test]
    fn test_recolor_skips_locked() {
        let palette = Palette::random(&mut seeded(4)).toggle_lock("color-0").unwrap();
        let next = palette.recolor_unlocked(|_, _| HexColor::WHITE);
        assert_eq!(next.colors()[0], palette.colors()[0]);
        for color in next.iter().skip(1) {
            assert_eq!(color.hex, HexColor::WHITE);
        }
    }

    #[test]
    fn test_lookup() {
        let palette = Palette::random(&mut seeded(5));
        assert_eq!(palette.get("color-2"), palette.slot(2));
        assert!(palette.get("nope").is_none());
        assert!(palette.slot(5).is_none());
    }
}
