//! Tests for hex <-> HSL conversion and text color selection
//!
//! Covers the fixed reference colors, the output range guarantees of both
//! directions, and the one-step round trip tolerance.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_lossless
)]

use swatchkit::random::{seeded, RandomSource};
use swatchkit::{
    generate_random_hex, get_text_color, hex_to_hsl, hsl_to_hex, HexColor, SwatchError,
};
use test_case::test_case;

const TOLERANCE: f64 = 1e-9;

fn is_hex_pattern(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
}

// =========================================================================
// Reference values
// =========================================================================

#[test_case(0.0, 0.0, 0.0, "#000000" ; "black")]
#[test_case(0.0, 0.0, 100.0, "#FFFFFF" ; "white")]
#[test_case(0.0, 100.0, 50.0, "#FF0000" ; "red")]
#[test_case(120.0, 100.0, 50.0, "#00FF00" ; "green")]
#[test_case(240.0, 100.0, 50.0, "#0000FF" ; "blue")]
#[test_case(60.0, 100.0, 50.0, "#FFFF00" ; "yellow")]
#[test_case(180.0, 100.0, 50.0, "#00FFFF" ; "cyan")]
#[test_case(300.0, 100.0, 50.0, "#FF00FF" ; "magenta")]
#[test_case(180.0, 70.0, 40.0, "#1FADAD" ; "muted teal")]
fn test_hsl_to_hex_reference(h: f64, s: f64, l: f64, expected: &str) {
    assert_eq!(hsl_to_hex(h, s, l).to_string(), expected);
}

#[test_case("#FF0000", 0.0, 100.0, 50.0 ; "red")]
#[test_case("#00FF00", 120.0, 100.0, 50.0 ; "green")]
#[test_case("#0000FF", 240.0, 100.0, 50.0 ; "blue")]
#[test_case("#000000", 0.0, 0.0, 0.0 ; "black")]
#[test_case("#FFFFFF", 0.0, 0.0, 100.0 ; "white")]
#[test_case("#3366CC", 220.0, 60.0, 50.0 ; "steel blue")]
fn test_hex_to_hsl_reference(hex: &str, h: f64, s: f64, l: f64) {
    let hsl = hex_to_hsl(hex).unwrap();
    assert!((hsl.h - h).abs() < TOLERANCE, "h {} != {h}", hsl.h);
    assert!((hsl.s - s).abs() < TOLERANCE, "s {} != {s}", hsl.s);
    assert!((hsl.l - l).abs() < TOLERANCE, "l {} != {l}", hsl.l);
}

#[test_case("#000000", "#FFFFFF" ; "black background")]
#[test_case("#FFFFFF", "#000000" ; "white background")]
#[test_case("#FFFF00", "#000000" ; "yellow background")]
#[test_case("#0000FF", "#FFFFFF" ; "blue background")]
#[test_case("#808080", "#FFFFFF" ; "mid gray is dark")]
fn test_text_color(background: &str, expected: &str) {
    assert_eq!(get_text_color(background).unwrap().to_string(), expected);
}

// =========================================================================
// Invalid input
// =========================================================================

#[test_case("" ; "empty")]
#[test_case("FF0000" ; "missing hash")]
#[test_case("#ff0000" ; "lowercase")]
#[test_case("#F00" ; "short form")]
#[test_case("#FFFF0000" ; "argb")]
#[test_case("#XYZXYZ" ; "not hex")]
fn test_invalid_format(input: &str) {
    match hex_to_hsl(input) {
        Err(SwatchError::InvalidFormat(s)) => assert_eq!(s, input),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
    assert!(matches!(
        get_text_color(input),
        Err(SwatchError::InvalidFormat(_))
    ));
}

// =========================================================================
// Range guarantees
// =========================================================================

#[test]
fn test_hsl_to_hex_always_matches_pattern() {
    let mut h = 0.0;
    while h < 360.0 {
        for s in (0..=100).step_by(5) {
            for l in (0..=100).step_by(5) {
                let hex = hsl_to_hex(h, f64::from(s), f64::from(l)).to_string();
                assert!(is_hex_pattern(&hex), "{hex} for ({h}, {s}, {l})");
            }
        }
        h += 7.5;
    }
}

#[test]
fn test_hex_to_hsl_ranges() {
    let mut rng = seeded(2024);
    for _ in 0..20_000 {
        let hex = generate_random_hex(&mut rng).to_string();
        let hsl = hex_to_hsl(&hex).unwrap();
        assert!((0.0..360.0).contains(&hsl.h), "{hex}: h = {}", hsl.h);
        assert!((0.0..=100.0).contains(&hsl.s), "{hex}: s = {}", hsl.s);
        assert!((0.0..=100.0).contains(&hsl.l), "{hex}: l = {}", hsl.l);
    }
}

#[test]
fn test_round_trip_within_one_per_channel() {
    let mut rng = seeded(99);
    for _ in 0..20_000 {
        let original = generate_random_hex(&mut rng);
        let hsl = hex_to_hsl(&original.to_string()).unwrap();
        let back = hsl.to_hex();
        assert!(
            original.channel_distance(back) <= 1,
            "{original} -> {hsl:?} -> {back}"
        );
    }
}

#[test]
fn test_round_trip_grays_exact() {
    for v in 0..=255u8 {
        let gray = HexColor::from_rgb(v, v, v);
        let back = hex_to_hsl(&gray.to_string()).unwrap().to_hex();
        assert_eq!(back, gray);
    }
}

#[test]
fn test_random_hex_digits_cover_alphabet() {
    let mut rng = seeded(1);
    let mut seen = [false; 16];
    for _ in 0..1000 {
        seen[usize::from(rng.next_hex_digit())] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
