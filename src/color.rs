//! Color conversion utilities
//!
//! Handles HSL <-> hex conversion and readable text color selection.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hex::HexColor;

/// Hue in degrees `[0, 360)`, saturation and lightness as percentages
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to hex. See [`hsl_to_hex`].
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }

    /// Components rounded to whole degrees / percent for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn rounded(self) -> (u16, u8, u8) {
        // h can round up to 360
        (
            self.h.round().clamp(0.0, 360.0) as u16,
            self.s.round().clamp(0.0, 100.0) as u8,
            self.l.round().clamp(0.0, 100.0) as u8,
        )
    }
}

/// Convert HSL to an `#RRGGBB` color.
///
/// `h` may be any real number and is wrapped into `[0, 360)`; `s` and `l`
/// are clamped to `[0, 100]`. Channels round half up.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0);
    let l = l.clamp(0.0, 100.0) / 100.0;

    let a = s * l.min(1.0 - l) / 100.0;
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let c = a.mul_add(-(k - 3.0).min(9.0 - k).min(1.0).max(-1.0), l);
        unit_to_byte(c)
    };

    HexColor::from_rgb(channel(0.0), channel(8.0), channel(4.0))
}

/// Parse a `#RRGGBB` string and convert it to HSL.
///
/// Not an exact inverse of [`hsl_to_hex`]: a hex -> HSL -> hex round trip may
/// move a channel by one.
///
/// # Errors
/// Returns [`crate::SwatchError::InvalidFormat`] if `hex` is not `#RRGGBB`.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    HexColor::parse(hex).map(rgb_to_hsl)
}

/// Convert an already validated color to HSL.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn rgb_to_hsl(color: HexColor) -> Hsl {
    let (r8, g8, b8) = color.rgb();
    let max8 = r8.max(g8).max(b8);
    let min8 = r8.min(g8).min(b8);

    let r = f64::from(r8) / 255.0;
    let g = f64::from(g8) / 255.0;
    let b = f64::from(b8) / 255.0;
    let max = f64::from(max8) / 255.0;
    let min = f64::from(min8) / 255.0;
    let l = f64::midpoint(max, min);

    if max8 == min8 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max8 == r8 {
        (g - b) / d + if g8 < b8 { 6.0 } else { 0.0 }
    } else if max8 == g8 {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(
        (h * 60.0).rem_euclid(360.0),
        (s * 100.0).clamp(0.0, 100.0),
        (l * 100.0).clamp(0.0, 100.0),
    )
}

/// Perceived brightness on a 0-255 scale (ITU-R BT.601 luma weights).
#[must_use]
pub fn brightness(color: HexColor) -> f64 {
    f64::from(luma_weighted_sum(color)) / 1000.0
}

/// Black or white, whichever reads better on top of `background`.
#[must_use]
pub fn text_color(background: HexColor) -> HexColor {
    // brightness > 128 without leaving integer arithmetic
    if luma_weighted_sum(background) > 128_000 {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

/// String form of [`text_color`].
///
/// # Errors
/// Returns [`crate::SwatchError::InvalidFormat`] if `hex` is not `#RRGGBB`.
pub fn get_text_color(hex: &str) -> Result<HexColor> {
    HexColor::parse(hex).map(text_color)
}

fn luma_weighted_sum(color: HexColor) -> u32 {
    let (r, g, b) = color.rgb();
    u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn unit_to_byte(c: f64) -> u8 {
    // NaN saturates to 0
    (c * 255.0).round().clamp(0.0, 255.0) as u8
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
    fn test_hsl_to_hex_extremes() {
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0).to_string(), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0).to_string(), "#FFFFFF");
    }

    #[test]
    fn test_hsl_to_hex_primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0).to_string(), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0).to_string(), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0).to_string(), "#0000FF");
    }

    #[test]
    fn test_hsl_to_hex_wraps_hue() {
        assert_eq!(hsl_to_hex(480.0, 100.0, 50.0), hsl_to_hex(120.0, 100.0, 50.0));
        assert_eq!(hsl_to_hex(-240.0, 100.0, 50.0), hsl_to_hex(120.0, 100.0, 50.0));
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), hsl_to_hex(0.0, 100.0, 50.0));
    }

    #[test]
    fn test_hsl_to_hex_clamps_out_of_range() {
        assert_eq!(hsl_to_hex(0.0, 150.0, 50.0), hsl_to_hex(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_hex(0.0, 50.0, -10.0).to_string(), "#000000");
    }

    #[test]
    fn test_hsl_to_hex_rounds_half_up() {
        // l = 50% gray is 127.5, which rounds up
        assert_eq!(hsl_to_hex(0.0, 0.0, 50.0).to_string(), "#808080");
    }

    #[test]
    fn test_hex_to_hsl_red() {
        let hsl = hex_to_hsl("#FF0000").unwrap();
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        let hsl = hex_to_hsl("#808080").unwrap();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 50.196).abs() < 0.001);
    }

    #[test]
    fn test_hex_to_hsl_magenta_side_of_red() {
        // red max with blue > green lands in the 300-360 sector
        let hsl = hex_to_hsl("#FF0080").unwrap();
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    #[test]
    fn test_hex_to_hsl_invalid() {
        assert!(hex_to_hsl("red").is_err());
        assert!(hex_to_hsl("#12345").is_err());
    }

    #[test]
    fn test_text_color() {
        assert_eq!(text_color(HexColor::BLACK), HexColor::WHITE);
        assert_eq!(text_color(HexColor::WHITE), HexColor::BLACK);
        // exactly 128 is not "bright"
        assert_eq!(text_color(HexColor::from_rgb(128, 128, 128)), HexColor::WHITE);
        assert_eq!(text_color(HexColor::from_rgb(129, 129, 129)), HexColor::BLACK);
    }

    #[test]
    fn test_brightness() {
        assert_eq!(brightness(HexColor::WHITE), 255.0);
        assert_eq!(brightness(HexColor::from_rgb(255, 0, 0)), 76.245);
    }

    #[test]
    fn test_rounded() {
        let hsl = Hsl::new(210.4, 65.5, 49.49);
        assert_eq!(hsl.rounded(), (210, 66, 49));
    }
}
