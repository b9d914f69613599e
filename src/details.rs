//! Per-swatch display details.
//!
//! Everything a palette view shows next to a swatch: label, hex, rounded
//! HSL, RGB channels, overlay text color and lock state.

use std::fmt;

use serde::Serialize;

use crate::color::{rgb_to_hsl, text_color};
use crate::hex::HexColor;
use crate::palette::{Color, Palette};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchDetails {
    pub id: String,
    /// 1-based position, as shown to users.
    pub position: usize,
    pub hex: HexColor,
    /// Hue in whole degrees, saturation and lightness in whole percent.
    pub hsl: (u16, u8, u8),
    pub rgb: (u8, u8, u8),
    pub text_color: HexColor,
    pub locked: bool,
}

impl SwatchDetails {
    /// Details for the slot at zero-based `index`.
    #[must_use]
    pub fn of(index: usize, color: &Color) -> Self {
        Self {
            id: color.id.clone(),
            position: index + 1,
            hex: color.hex,
            hsl: rgb_to_hsl(color.hex).rounded(),
            rgb: color.hex.rgb(),
            text_color: text_color(color.hex),
            locked: color.locked,
        }
    }

    /// Text placed on the clipboard when the swatch is clicked.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        self.hex.to_string()
    }
}

impl fmt::Display for SwatchDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = self.hsl;
        let (r, g, b) = self.rgb;
        write!(f, "Color {}", self.position)?;
        if self.locked {
            f.write_str(" (locked)")?;
        }
        writeln!(f)?;
        writeln!(f, "HEX: {}", self.hex)?;
        writeln!(f, "HSL: {h}°, {s}%, {l}%")?;
        write!(f, "RGB: {r}, {g}, {b}")
    }
}

/// Details for every slot in display order.
#[must_use]
pub fn palette_details(palette: &Palette) -> Vec<SwatchDetails> {
    palette
        .iter()
        .enumerate()
        .map(|(index, color)| SwatchDetails::of(index, color))
        .collect()
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
    fn test_details_of_red() {
        let color = Color::new("color-0", HexColor::from_rgb(255, 0, 0)).with_locked(true);
        let details = SwatchDetails::of(0, &color);
        assert_eq!(details.position, 1);
        assert_eq!(details.hsl, (0, 100, 50));
        assert_eq!(details.rgb, (255, 0, 0));
        assert_eq!(details.text_color, HexColor::WHITE);
        assert_eq!(details.clipboard_text(), "#FF0000");
        assert_eq!(
            details.to_string(),
            "Color 1 (locked)\nHEX: #FF0000\nHSL: 0°, 100%, 50%\nRGB: 255, 0, 0"
        );
    }

    #[test]
    fn test_palette_details_order() {
        let palette = Palette::random(&mut seeded(12));
        let details = palette_details(&palette);
        assert_eq!(details.len(), 5);
        for (i, d) in details.iter().enumerate() {
            assert_eq!(d.position, i + 1);
            assert_eq!(d.hex, palette.colors()[i].hex);
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let color = Color::new("color-2", HexColor::WHITE);
        let json = serde_json::to_value(SwatchDetails::of(2, &color)).unwrap();
        assert_eq!(json["textColor"], "#000000");
        assert_eq!(json["hex"], "#FFFFFF");
        assert_eq!(json["hsl"], serde_json::json!([0, 0, 100]));
    }
}
