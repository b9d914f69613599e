//! Browser tests for the JavaScript-facing bindings.
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use swatchkit::{hex_to_hsl_js, text_color_js, Palette, PaletteSession};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_regenerates_and_locks() {
    let mut session = PaletteSession::new(Some(42)).unwrap();
    session.toggle_lock("color-0").unwrap();
    let before = session.current().colors()[0].clone();

    session.apply("complementary").unwrap();
    session.generate_monochromatic().unwrap();

    assert_eq!(session.current().colors()[0], before);
    let json = session.palette_json().unwrap();
    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, session.current());
}

#[wasm_bindgen_test]
fn session_rejects_unknown_input() {
    let mut session = PaletteSession::new(Some(1)).unwrap();
    assert!(session.apply("triadic").is_err());
    assert!(session.toggle_lock("color-7").is_err());
    assert!(session.set_config_json("{\"monochromatic\": {\"lightnessStep\": 40}}").is_err());
}

#[wasm_bindgen_test]
fn free_functions() {
    assert!(hex_to_hsl_js("#FF0000").is_ok());
    assert!(hex_to_hsl_js("#ff0000").is_err());
    assert_eq!(text_color_js("#FFFFFF").unwrap(), "#000000");
}

#[wasm_bindgen_test]
fn entropy_seeded_session() {
    let session = PaletteSession::new(None).unwrap();
    assert_eq!(session.details().len(), 5);
}
