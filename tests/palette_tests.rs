//! Tests for the palette model: lock toggling and JSON shape
//!
//! Palettes cross into JavaScript as a JSON array of
//! `{ "id": "color-0", "hex": "#A1B2C3", "locked": false }`.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use swatchkit::details::palette_details;
use swatchkit::random::seeded;
use swatchkit::{Color, HexColor, Palette, SwatchError};
use test_case::test_case;

fn sample_json(hex0: &str) -> String {
    format!(
        r##"[
  {{"id": "color-0", "hex": "{hex0}", "locked": true}},
  {{"id": "color-1", "hex": "#00FF00", "locked": false}},
  {{"id": "color-2", "hex": "#0000FF", "locked": false}},
  {{"id": "color-3", "hex": "#FFFFFF", "locked": false}},
  {{"id": "color-4", "hex": "#000000", "locked": false}}
]"##
    )
}

#[test]
fn test_deserialize_palette() {
    let palette: Palette = serde_json::from_str(&sample_json("#FF0000")).unwrap();
    let first = &palette.colors()[0];
    assert_eq!(first.id, "color-0");
    assert_eq!(first.hex, HexColor::from_rgb(255, 0, 0));
    assert!(first.locked);
    assert_eq!(palette.colors()[4].hex, HexColor::BLACK);
}

#[test]
fn test_serialize_shape() {
    let palette = Palette::from_colors(vec![
        Color::new("color-0", HexColor::from_rgb(0xA1, 0xB2, 0xC3)),
        Color::new("color-1", HexColor::WHITE).with_locked(true),
        Color::new("color-2", HexColor::BLACK),
        Color::new("color-3", HexColor::BLACK),
        Color::new("color-4", HexColor::BLACK),
    ])
    .unwrap();

    let value = serde_json::to_value(&palette).unwrap();
    let slots = value.as_array().unwrap();
    assert_eq!(slots.len(), 5);
    assert_eq!(
        slots[0],
        serde_json::json!({"id": "color-0", "hex": "#A1B2C3", "locked": false})
    );
    assert_eq!(slots[1]["locked"], true);
}

#[test]
fn test_json_round_trip_preserves_locks() {
    let mut rng = seeded(11);
    let palette = Palette::random(&mut rng)
        .toggle_lock("color-2")
        .unwrap();
    let json = serde_json::to_string(&palette).unwrap();
    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(back, palette);
}

#[test_case("#ff0000" ; "lowercase")]
#[test_case("FF0000" ; "missing hash")]
#[test_case("#FF00" ; "too short")]
fn test_deserialize_rejects_bad_hex(hex: &str) {
    let err = serde_json::from_str::<Palette>(&sample_json(hex)).unwrap_err();
    assert!(err.to_string().contains("Invalid hex color"), "{err}");
}

#[test]
fn test_deserialize_rejects_wrong_slot_count() {
    let json = r##"[{"id": "color-0", "hex": "#FF0000", "locked": false}]"##;
    let err = serde_json::from_str::<Palette>(json).unwrap_err();
    assert!(err.to_string().contains("5 slots"), "{err}");
}

#[test]
fn test_toggle_lock_twice_is_identity() {
    let palette = Palette::random(&mut seeded(12));
    for i in 0..5 {
        let id = format!("color-{i}");
        let twice = palette.toggle_lock(&id).unwrap().toggle_lock(&id).unwrap();
        assert_eq!(twice, palette);
    }
}

#[test]
fn test_toggle_lock_only_touches_target() {
    let palette = Palette::random(&mut seeded(13));
    let next = palette.toggle_lock("color-3").unwrap();
    for (i, (a, b)) in palette.iter().zip(next.iter()).enumerate() {
        assert_eq!(a.hex, b.hex);
        assert_eq!(a.locked != b.locked, i == 3);
    }
}

#[test]
fn test_toggle_lock_unknown_id() {
    let palette = Palette::random(&mut seeded(14));
    assert!(matches!(
        palette.toggle_lock("color-5"),
        Err(SwatchError::UnknownSlot(_))
    ));
}

#[test]
fn test_details_follow_palette() {
    let palette: Palette = serde_json::from_str(&sample_json("#FF0000")).unwrap();
    let details = palette_details(&palette);
    assert_eq!(details[0].hsl, (0, 100, 50));
    assert!(details[0].locked);
    assert_eq!(details[1].hsl, (120, 100, 50));
    assert_eq!(details[3].text_color, HexColor::BLACK);
    assert_eq!(details[4].text_color, HexColor::WHITE);
}
