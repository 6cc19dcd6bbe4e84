//! Console logging setup

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Pick the console log level
///
/// Dry runs go one level deeper so every frame row is printed. Write
/// failures are warnings and stay visible with logging turned off.
pub fn level(enabled: bool, dry_run: bool) -> LevelFilter {
    match (enabled, dry_run) {
        (false, _) => LevelFilter::Warn,
        (true, false) => LevelFilter::Info,
        (true, true) => LevelFilter::Debug,
    }
}

/// Install the terminal logger
pub fn init(enabled: bool, dry_run: bool) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    TermLogger::init(
        level(enabled, dry_run),
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("failed to install console logger")
}
