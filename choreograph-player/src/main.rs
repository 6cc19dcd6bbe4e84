//! Choreograph - I2C choreography player
//!
//! Replays a choreography file, one line per clock tick, to a chain of
//! servo controllers on the I2C bus. A panic switch polled before every
//! frame zeroes all slaves and restarts the show from the top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use choreograph_core::playback::{broadcast_position, Player};
use choreograph_core::traits::{BusTransport, PanicMonitor};
use choreograph_core::{Position, Timeline};
use choreograph_drivers::{I2cTransport, NoPanicInput, NullTransport};

use crate::args::Args;
use crate::clock::ThreadClock;
use crate::config::{FileConfig, Settings};

mod args;
mod clock;
mod config;
mod hardware;
mod logging;

#[cfg(test)]
#[path = "../build/report.rs"]
mod build_report;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_enabled(), args.dry_run())?;

    let settings = FileConfig::load(args.config.as_deref())?
        .resolve(args.i2c_slave_addresses.as_deref())?;

    match args.value {
        Some(position) => send_value(&settings, position, args.dry_run()),
        None => play_file(settings, &args.file_name, args.dry_run()),
    }
}

/// One-shot broadcast of a single position
fn send_value(settings: &Settings, position: Position, dry_run: bool) -> Result<()> {
    let report = if dry_run {
        broadcast_position(&mut NullTransport::new(), &settings.playback, position)
    } else {
        let bus = hardware::open_bus(settings.i2c).context("cannot open the I2C bus")?;
        broadcast_position(&mut I2cTransport::new(bus), &settings.playback, position)
    };

    if !report.is_clean() {
        warn!(
            "{} of {} writes failed",
            report.failed,
            report.attempted()
        );
    }
    Ok(())
}

/// Load a choreography and play it until the process is killed
fn play_file(settings: Settings, path: &Path, dry_run: bool) -> Result<()> {
    let timeline = load_timeline(path, settings.playback.device_count())?;

    if dry_run {
        info!("Dry run: nothing is written to the bus");
        match hardware::open_panic_button(&settings.panic_pin) {
            Ok(button) => play(settings, timeline, NullTransport::new(), button),
            Err(e) => {
                warn!("Panic switch unavailable ({}), dry run continues without it", e);
                play(settings, timeline, NullTransport::new(), NoPanicInput)
            }
        }
    } else {
        let bus = hardware::open_bus(settings.i2c).context("cannot open the I2C bus")?;
        let button = hardware::open_panic_button(&settings.panic_pin)
            .context("cannot open the panic switch")?;
        play(settings, timeline, I2cTransport::new(bus), button)
    }
}

fn load_timeline(path: &Path, device_count: usize) -> Result<Timeline> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read choreography {}", path.display()))?;
    let timeline = Timeline::parse(&text, device_count)
        .with_context(|| format!("invalid choreography {}", path.display()))?;

    info!(
        "Loaded {} frames for {} devices from {}",
        timeline.len(),
        device_count,
        path.display()
    );
    Ok(timeline)
}

fn play<T, P>(settings: Settings, timeline: Timeline, transport: T, panic: P) -> Result<()>
where
    T: BusTransport,
    P: PanicMonitor,
{
    let mut player = Player::new(settings.playback, timeline, transport, panic, ThreadClock)
        .context("cannot start playback")?;
    player.run()
}
