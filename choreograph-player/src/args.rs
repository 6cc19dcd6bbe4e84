//! Command line interface

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Example usage
*************

Send value 0 to addresses 1 2 3:
    choreograph -v 0 --isa 1 2 3

Read choreography file test_file and send to all slaves:
    choreograph -f test_file";

#[derive(Parser, Debug)]
#[command(name = "choreograph", version)]
#[command(about = "Reads a choreography file and sends I2C messages to the slaves")]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Path to the choreography file
    #[arg(short, long, default_value = "test")]
    pub file_name: PathBuf,

    /// I2C addresses the choreography columns are sent to [default: 1..24]
    #[arg(long, visible_alias = "isa", num_args = 1.., value_name = "ADDR")]
    pub i2c_slave_addresses: Option<Vec<u8>>,

    /// Send a single position to every slave and exit
    #[arg(short, long, value_name = "POSITION")]
    pub value: Option<u16>,

    /// Do not touch the bus, only print what would be sent
    #[arg(short, long, overrides_with = "no_dry_run")]
    dry_run: bool,

    #[arg(long, overrides_with = "dry_run", hide = true)]
    no_dry_run: bool,

    /// Log to the console, including every bus write (default)
    #[arg(short, long, overrides_with = "no_log")]
    log: bool,

    /// Only report warnings and errors
    #[arg(long, overrides_with = "log")]
    no_log: bool,

    /// TOML configuration file (replaces the built-in defaults)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn log_enabled(&self) -> bool {
        !self.no_log
    }
}
