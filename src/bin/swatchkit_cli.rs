//! CLI tool for swatchkit - generates palettes and outputs JSON
//!
//! Usage:
//!   swatchkit_cli [random|complementary|monochromatic] [--seed N] [--lock I]... [--config FILE]
//!   swatchkit_cli inspect <#RRGGBB>
//!
//! Set `RUST_LOG=debug` to trace the generators.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;
use swatchkit::details::palette_details;
use swatchkit::random;
use swatchkit::{hex_to_hsl, Color, GeneratorConfig, HexColor, Hsl, Palette, Strategy, SwatchDetails};

const USAGE: &str = "Usage: swatchkit_cli [random|complementary|monochromatic] [--seed N] [--lock I]... [--config FILE]\n       swatchkit_cli inspect <#RRGGBB>";

#[derive(Serialize)]
struct GenerateOutput {
    strategy: Strategy,
    seed: Option<u64>,
    palette: Vec<SwatchDetails>,
}

#[derive(Serialize)]
struct InspectOutput {
    hsl: Hsl,
    details: SwatchDetails,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let json = if args.first().map(String::as_str) == Some("inspect") {
        if args.len() != 2 {
            fail(USAGE);
        }
        inspect(&args[1])
    } else {
        generate(&args)
    };

    io::stdout().write_all(json.as_bytes()).unwrap();
    println!();
}

fn inspect(input: &str) -> String {
    let hsl = match hex_to_hsl(input) {
        Ok(hsl) => hsl,
        Err(e) => fail(&format!("Error: {e}")),
    };
    // hex_to_hsl already validated the input
    let hex: HexColor = input.parse().unwrap();
    let output = InspectOutput {
        hsl,
        details: SwatchDetails::of(0, &Color::new("input", hex)),
    };
    to_json(&output)
}

fn generate(args: &[String]) -> String {
    let mut strategy = Strategy::Random;
    let mut seed = None;
    let mut locks = Vec::new();
    let mut config = GeneratorConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().unwrap_or_else(|| fail(USAGE));
                seed = Some(
                    value
                        .parse::<u64>()
                        .unwrap_or_else(|e| fail(&format!("Invalid seed {value}: {e}"))),
                );
            }
            "--lock" => {
                let value = iter.next().unwrap_or_else(|| fail(USAGE));
                locks.push(
                    value
                        .parse::<usize>()
                        .unwrap_or_else(|e| fail(&format!("Invalid slot {value}: {e}"))),
                );
            }
            "--config" => {
                let path = iter.next().unwrap_or_else(|| fail(USAGE));
                let text = match fs::read_to_string(path) {
                    Ok(t) => t,
                    Err(e) => fail(&format!("Error reading {path}: {e}")),
                };
                config = match GeneratorConfig::from_json(&text) {
                    Ok(c) => c,
                    Err(e) => fail(&format!("Error in {path}: {e}")),
                };
            }
            "-h" | "--help" => fail(USAGE),
            name => {
                strategy = match name.parse() {
                    Ok(s) => s,
                    Err(e) => fail(&format!("Error: {e}\n{USAGE}")),
                };
            }
        }
    }

    let mut rng = match seed {
        Some(seed) => random::seeded(seed),
        None => match random::from_entropy() {
            Ok(rng) => rng,
            Err(e) => fail(&format!("Error: {e}")),
        },
    };

    let mut palette = Palette::random(&mut rng);
    for index in locks {
        let Some(slot) = palette.slot(index) else {
            fail(&format!("Slot {index} out of range (0-4)"));
        };
        let id = slot.id.clone();
        palette = match palette.toggle_lock(&id) {
            Ok(p) => p,
            Err(e) => fail(&format!("Error: {e}")),
        };
    }

    let palette = strategy.apply(&palette, &mut rng, &config);
    for details in palette_details(&palette) {
        eprintln!("{details}\n");
    }

    to_json(&GenerateOutput {
        strategy,
        seed,
        palette: palette_details(&palette),
    })
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(j) => j,
        Err(e) => fail(&format!("Error serializing JSON: {e}")),
    }
}
