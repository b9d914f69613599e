//! Validated `#RRGGBB` color values.
//!
//! [`HexColor`] is the only way colors move through the engine. It can be
//! built from three channels or parsed from text; parsing accepts exactly
//! `^#[0-9A-F]{6}$` and reports anything else as
//! [`SwatchError::InvalidFormat`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SwatchError};

/// An sRGB color whose textual form is always `#` followed by six uppercase
/// hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    ///
    /// # Errors
    /// Returns [`SwatchError::InvalidFormat`] unless `s` is a `#` followed by
    /// exactly six characters from `0-9A-F`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || SwatchError::InvalidFormat(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(is_upper_hex_digit) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Channels as an `(r, g, b)` tuple.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Largest per-channel difference between two colors.
    #[must_use]
    pub const fn channel_distance(self, other: Self) -> u8 {
        let dr = self.r.abs_diff(other.r);
        let dg = self.g.abs_diff(other.g);
        let db = self.b.abs_diff(other.b);
        let max = if dr > dg { dr } else { dg };
        if max > db {
            max
        } else {
            db
        }
    }
}

const fn is_upper_hex_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'A'..=b'F')
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
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

    #[test]
    fn test_parse_channels() {
        let c = HexColor::parse("#4472C4").unwrap();
        assert_eq!(c.rgb(), (0x44, 0x72, 0xC4));
        assert_eq!(c.to_string(), "#4472C4");
    }

    #[test]
    fn test_display_pads_and_uppercases() {
        assert_eq!(HexColor::from_rgb(0, 10, 255).to_string(), "#000AFF");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "", "#", "FF0000", "#FF000", "#FF00000", "#ff0000", "#GG0000", "#FF 000", "FFFF0000",
            "#+F0000", "#FF00é",
        ] {
            match HexColor::parse(input) {
                Err(SwatchError::InvalidFormat(s)) => assert_eq!(s, input),
                other => panic!("expected InvalidFormat for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_channel_distance() {
        let a = HexColor::from_rgb(10, 20, 30);
        let b = HexColor::from_rgb(11, 18, 30);
        assert_eq!(a.channel_distance(b), 2);
        assert_eq!(b.channel_distance(a), 2);
        assert_eq!(a.channel_distance(a), 0);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&HexColor::from_rgb(255, 0, 128)).unwrap();
        assert_eq!(json, "\"#FF0080\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HexColor::from_rgb(255, 0, 128));
        assert!(serde_json::from_str::<HexColor>("\"#ff0080\"").is_err());
    }
}
