//! Structured error types for swatchkit.
//!
//! Every fallible engine operation returns [`Result`]; malformed input is
//! surfaced to the caller and never coerced to a default color.

/// All errors that can occur while parsing colors or regenerating palettes.
#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    /// Hex string does not match `#RRGGBB` (uppercase digits).
    #[error("Invalid hex color: {0:?}")]
    InvalidFormat(String),

    /// Lock toggle referenced an id that is not in the palette.
    #[error("Unknown palette slot: {0}")]
    UnknownSlot(String),

    /// A deserialized palette did not contain exactly five slots.
    #[error("Palette must have 5 slots, got {0}")]
    InvalidPalette(usize),

    /// Two slots of a palette share the same id.
    #[error("Duplicate palette slot id: {0}")]
    DuplicateSlot(String),

    /// Generator configuration out of range.
    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),

    /// Strategy name not recognised.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform entropy source failed while seeding a generator.
    #[error("Entropy source: {0}")]
    Entropy(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SwatchError>;

impl From<getrandom::Error> for SwatchError {
    fn from(e: getrandom::Error) -> Self {
        Self::Entropy(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SwatchError> for wasm_bindgen::JsValue {
    fn from(e: SwatchError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
