//! Build script for choreograph-player
//!
//! Validates the embedded player.toml at compile time, so a broken default
//! configuration never ships in a binary.

use std::fs;
use std::path::Path;

#[path = "build/report.rs"]
mod report;

/// Highest 7-bit bus address
const MAX_ADDRESS: i64 = 0x7F;

fn main() {
    println!("cargo:rerun-if-changed=player.toml");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/report.rs");

    let config_path = Path::new("player.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read player.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in player.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_playback(&config, &mut errors);
    validate_hardware(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in player.toml", &errors);
    }
}

/// Abort the build with a boxed error listing
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| report::box_line(line))
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

fn validate_playback(config: &toml::Value, errors: &mut Vec<String>) {
    let playback = match config.get("playback") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[playback] must be a table".to_string());
            return;
        }
        None => return,
    };

    match playback.get("devices") {
        Some(toml::Value::Array(devices)) => {
            if devices.is_empty() {
                errors.push("[playback] devices cannot be empty".to_string());
            }
            for device in devices {
                match device.as_integer() {
                    Some(a) if (0..=MAX_ADDRESS).contains(&a) => {}
                    _ => errors.push(format!("[playback] invalid device address {}", device)),
                }
            }
        }
        Some(_) => errors.push("[playback] devices must be an array".to_string()),
        None => {}
    }

    if let Some(period) = playback.get("clock_period_ms") {
        match period.as_integer() {
            Some(p) if p > 0 && p <= i64::from(u32::MAX) => {}
            _ => errors.push("[playback] clock_period_ms must be a positive integer".to_string()),
        }
    }

    if let Some(settle) = playback.get("reset_settle_ms") {
        match settle.as_integer() {
            Some(s) if s >= 0 && s <= i64::from(u32::MAX) => {}
            _ => errors.push("[playback] reset_settle_ms must be a non-negative integer".to_string()),
        }
    }

    if let Some(middle) = playback.get("middle_position") {
        match middle.as_integer() {
            Some(m) if (0..=i64::from(u16::MAX)).contains(&m) => {}
            _ => errors.push("[playback] middle_position must be 0-65535".to_string()),
        }
    }
}

fn validate_hardware(config: &toml::Value, errors: &mut Vec<String>) {
    let hardware = match config.get("hardware") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[hardware] must be a table".to_string());
            return;
        }
        None => return,
    };

    if let Some(bus) = hardware.get("i2c_bus") {
        match bus.as_integer() {
            Some(b) if (0..=255).contains(&b) => {}
            _ => errors.push("[hardware] i2c_bus must be 0-255".to_string()),
        }
    }

    if let Some(pin) = hardware.get("panic_pin") {
        let valid = pin
            .as_str()
            .map(|s| s.trim_start_matches(['^', '!']))
            .and_then(|s| s.strip_prefix("gpio"))
            .and_then(|n| n.parse::<u8>().ok())
            .is_some_and(|n| n <= 27);
        if !valid {
            errors.push(format!(
                "[hardware] panic_pin {} must look like \"^!gpio4\"",
                pin
            ));
        }
    }
}
