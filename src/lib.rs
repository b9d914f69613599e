//! swatchkit - color palette engine for the web
//!
//! Converts between `#RRGGBB` hex colors and HSL and regenerates five-slot
//! palettes in the browser via WebAssembly:
//! - Random, complementary (hues 72° apart) and monochromatic strategies
//! - Per-slot locks that every strategy respects
//! - Readable black/white overlay text for any swatch
//! - Injectable, seedable randomness for reproducible palettes
//!
//! # Usage (Rust)
//!
//! ```
//! use swatchkit::{generate_complementary_palette, random, Palette};
//!
//! let mut rng = random::seeded(7);
//! let palette = Palette::random(&mut rng).toggle_lock("color-0")?;
//! let next = generate_complementary_palette(&palette, &mut rng);
//! assert_eq!(next.colors()[0], palette.colors()[0]);
//! # Ok::<(), swatchkit::SwatchError>(())
//! ```

pub mod color;
pub mod config;
pub mod details;
pub mod error;
pub mod hex;
pub mod palette;
pub mod random;
pub mod session;
pub mod strategy;

use wasm_bindgen::prelude::*;

pub use color::{get_text_color, hex_to_hsl, hsl_to_hex, text_color, Hsl};
pub use config::GeneratorConfig;
pub use details::SwatchDetails;
pub use error::{Result, SwatchError};
pub use hex::HexColor;
pub use palette::{Color, Palette, SLOT_COUNT};
pub use random::{generate_random_hex, RandomSource};
pub use session::PaletteSession;
pub use strategy::{
    generate_complementary_palette, generate_monochromatic_palette, generate_new_palette, Strategy,
};

/// Convert HSL (degrees, percent, percent) to an `#RRGGBB` string
#[must_use]
#[wasm_bindgen(js_name = hslToHex)]
pub fn hsl_to_hex_js(h: f64, s: f64, l: f64) -> String {
    hsl_to_hex(h, s, l).to_string()
}

/// Convert an `#RRGGBB` string to `{ h, s, l }`
///
/// # Errors
/// Returns an error if `hex` is not `#` followed by six uppercase hex digits.
#[wasm_bindgen(js_name = hexToHsl)]
pub fn hex_to_hsl_js(hex: &str) -> std::result::Result<JsValue, JsValue> {
    let hsl = hex_to_hsl(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&hsl)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// `#000000` or `#FFFFFF`, whichever is readable on `hex`
///
/// # Errors
/// Returns an error if `hex` is not `#` followed by six uppercase hex digits.
#[wasm_bindgen(js_name = textColor)]
pub fn text_color_js(hex: &str) -> std::result::Result<String, JsValue> {
    get_text_color(hex)
        .map(|c| c.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
