//! `PaletteSession` - the JavaScript-facing owner of the current palette.
//!
//! The engine itself is stateless; a session holds the published palette,
//! the random generator and the generator config, and swaps in the new
//! palette after every regeneration or lock toggle. UI event handlers call
//! into it:
//!
//! ```javascript
//! import init, { PaletteSession } from 'swatchkit';
//! await init();
//! const session = new PaletteSession();
//! session.apply("complementary");
//! session.toggleLock("color-2");
//! render(session.details());
//! ```

use wasm_bindgen::prelude::*;

use crate::config::GeneratorConfig;
use crate::details::{palette_details, SwatchDetails};
use crate::error::Result;
use crate::palette::Palette;
use crate::random::{self, PaletteRng};
use crate::strategy::Strategy;

#[wasm_bindgen]
pub struct PaletteSession {
    palette: Palette,
    rng: PaletteRng,
    config: GeneratorConfig,
}

impl PaletteSession {
    /// Session whose generator starts from `rng`, with a random initial
    /// palette drawn from it.
    #[must_use]
    pub fn with_rng(mut rng: PaletteRng) -> Self {
        let palette = Palette::random(&mut rng);
        Self {
            palette,
            rng,
            config: GeneratorConfig::default(),
        }
    }

    /// Reproducible session.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(random::seeded(seed))
    }

    /// Session seeded from platform entropy.
    ///
    /// # Errors
    /// [`crate::SwatchError::Entropy`] if no entropy source is available.
    pub fn from_entropy() -> Result<Self> {
        random::from_entropy().map(Self::with_rng)
    }

    /// Replace the generator config after validating it.
    ///
    /// # Errors
    /// [`crate::SwatchError::InvalidConfig`]; the previous config stays active.
    pub fn set_config(&mut self, config: GeneratorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Currently published palette.
    #[must_use]
    pub const fn current(&self) -> &Palette {
        &self.palette
    }

    /// Regenerate unlocked slots and publish the result.
    pub fn regenerate(&mut self, strategy: Strategy) -> &Palette {
        log::debug!("session: {strategy}");
        self.palette = strategy.apply(&self.palette, &mut self.rng, &self.config);
        &self.palette
    }

    /// Flip the lock on slot `id` and publish the result.
    ///
    /// # Errors
    /// [`crate::SwatchError::UnknownSlot`]; the palette is left unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<&Palette> {
        self.palette = self.palette.toggle_lock(id)?;
        Ok(&self.palette)
    }

    #[must_use]
    pub fn details(&self) -> Vec<SwatchDetails> {
        palette_details(&self.palette)
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn js_err(e: &crate::SwatchError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl PaletteSession {
    /// Create a session. Pass a seed for reproducible palettes; omit it to
    /// seed from `crypto.getRandomValues`.
    ///
    /// # Errors
    /// Returns an error if the entropy source is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> std::result::Result<PaletteSession, JsValue> {
        console_error_panic_hook::set_once();
        match seed {
            Some(seed) => Ok(Self::seeded(u64::from(seed))),
            None => Self::from_entropy().map_err(|e| js_err(&e)),
        }
    }

    /// Load a JSON generator config (see `GeneratorConfig`).
    ///
    /// # Errors
    /// Returns an error for malformed JSON or out-of-range values.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config_json(&mut self, json: &str) -> std::result::Result<(), JsValue> {
        let config = GeneratorConfig::from_json(json).map_err(|e| js_err(&e))?;
        self.config = config;
        Ok(())
    }

    /// "Generate Random" button.
    ///
    /// # Errors
    /// Returns an error if the palette cannot be serialized.
    #[wasm_bindgen(js_name = generateRandom)]
    pub fn generate_random(&mut self) -> std::result::Result<JsValue, JsValue> {
        to_js(self.regenerate(Strategy::Random))
    }

    /// "Complementary" button.
    ///
    /// # Errors
    /// Returns an error if the palette cannot be serialized.
    #[wasm_bindgen(js_name = generateComplementary)]
    pub fn generate_complementary(&mut self) -> std::result::Result<JsValue, JsValue> {
        to_js(self.regenerate(Strategy::Complementary))
    }

    /// "Monochromatic" button.
    ///
    /// # Errors
    /// Returns an error if the palette cannot be serialized.
    #[wasm_bindgen(js_name = generateMonochromatic)]
    pub fn generate_monochromatic(&mut self) -> std::result::Result<JsValue, JsValue> {
        to_js(self.regenerate(Strategy::Monochromatic))
    }

    /// Regenerate by strategy name (`random`, `complementary`, `monochromatic`).
    ///
    /// # Errors
    /// Returns an error for an unknown strategy name.
    pub fn apply(&mut self, strategy: &str) -> std::result::Result<JsValue, JsValue> {
        let strategy: Strategy = strategy.parse().map_err(|e| js_err(&e))?;
        to_js(self.regenerate(strategy))
    }

    /// # Errors
    /// Returns an error if no slot has this id.
    #[wasm_bindgen(js_name = toggleLock)]
    pub fn toggle_lock(&mut self, id: &str) -> std::result::Result<JsValue, JsValue> {
        let palette = self.toggle(id).map_err(|e| js_err(&e))?;
        to_js(palette)
    }

    /// Current palette as an array of `{ id, hex, locked }`.
    ///
    /// # Errors
    /// Returns an error if the palette cannot be serialized.
    #[wasm_bindgen(js_name = palette)]
    pub fn palette_js(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.palette)
    }

    /// Current palette as a JSON string.
    ///
    /// # Errors
    /// Returns an error if the palette cannot be serialized.
    #[wasm_bindgen(js_name = paletteJson)]
    pub fn palette_json(&self) -> std::result::Result<String, JsValue> {
        serde_json::to_string(&self.palette)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    /// Display details (hex, rounded HSL, RGB, text color) for every slot.
    ///
    /// # Errors
    /// Returns an error if the details cannot be serialized.
    #[wasm_bindgen(js_name = details)]
    pub fn details_js(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.details())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PaletteSession {
    /// Copy the hex code of slot `id` to the clipboard.
    ///
    /// # Errors
    /// Returns an error if no slot has this id or there is no window.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self, id: &str) -> std::result::Result<js_sys::Promise, JsValue> {
        let color = self
            .palette
            .get(id)
            .ok_or_else(|| crate::SwatchError::UnknownSlot(id.to_string()))?;
        let text = crate::details::SwatchDetails::of(0, color).clipboard_text();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        Ok(window.navigator().clipboard().write_text(&text))
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
    use crate::SwatchError;

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = PaletteSession::seeded(5);
        let mut b = PaletteSession::seeded(5);
        assert_eq!(a.current(), b.current());
        for strategy in Strategy::ALL {
            assert_eq!(a.regenerate(strategy).clone(), *b.regenerate(strategy));
        }
    }

    #[test]
    fn test_toggle_publishes() {
        let mut session = PaletteSession::seeded(6);
        session.toggle("color-1").unwrap();
        assert!(session.current().colors()[1].locked);
        let before = session.current().colors()[1].clone();
        session.regenerate(Strategy::Random);
        assert_eq!(session.current().colors()[1], before);
    }

    #[test]
    fn test_toggle_unknown_keeps_palette() {
        let mut session = PaletteSession::seeded(7);
        let before = session.current().clone();
        assert!(matches!(
            session.toggle("missing"),
            Err(SwatchError::UnknownSlot(_))
        ));
        assert_eq!(*session.current(), before);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut session = PaletteSession::seeded(8);
        let mut config = GeneratorConfig::default();
        config.complementary.lightness.max = 150.0;
        assert!(session.set_config(config).is_err());
        assert_eq!(*session.config(), GeneratorConfig::default());
    }

    #[test]
    fn test_palette_json() {
        let session = PaletteSession::seeded(9);
        let json = session.palette_json().unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *session.current());
    }
}
