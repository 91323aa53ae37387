//! Keyshift binary.
//!
//! # Usage
//!
//! ```bash
//! # Rotate a whole buffer
//! keyshift 81 --left 1                    # 03
//!
//! # Rotate a 28-bit half key stored in 4 bytes
//! keyshift 0f0ccaaf --left 1 --bit-length 28
//!
//! # Single-step shift with carry
//! keyshift 80 --shift-left                # 00, carry=true
//! ```

use std::{io::Write, process::ExitCode};

use clap::{ArgGroup, Parser};
use keyshift_cli::{Action, CliError, RunConfig};
use keyshift_core::Direction;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keyshift bit engine
#[derive(Parser, Debug)]
#[command(name = "keyshift")]
#[command(about = "Bit-level rotations and shifts over hex buffers")]
#[command(version)]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .args(["left", "right", "shift_left", "shift_right"])
))]
struct Args {
    /// Buffer as hex (optional 0x prefix, `_` separators allowed)
    buffer: String,

    /// Rotate toward the front by this many bits
    #[arg(short, long, allow_negative_numbers = true)]
    left: Option<i64>,

    /// Rotate toward the back by this many bits
    #[arg(short, long, allow_negative_numbers = true)]
    right: Option<i64>,

    /// Confine the rotation to the trailing bits of the buffer
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        conflicts_with_all = ["shift_left", "shift_right"]
    )]
    bit_length: Option<i64>,

    /// Shift toward the front by one bit and report the carry
    #[arg(long)]
    shift_left: bool,

    /// Shift toward the back by one bit and report the carry
    #[arg(long)]
    shift_right: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn action(&self) -> Action {
        match (self.left, self.right) {
            (Some(count), _) => {
                Action::Rotate { direction: Direction::Left, count, bit_len: self.bit_length }
            },
            (None, Some(count)) => {
                Action::Rotate { direction: Direction::Right, count, bit_len: self.bit_length }
            },
            (None, None) if self.shift_left => Action::Shift(Direction::Left),
            (None, None) => Action::Shift(Direction::Right),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout carries the result, logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = RunConfig { buffer: args.buffer.clone(), action: args.action() };

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            exit_code(&err)
        },
    }
}

/// Status 2 for usage errors, 1 for everything else.
fn exit_code(err: &CliError) -> ExitCode {
    if err.is_usage_error() { ExitCode::from(2) } else { ExitCode::FAILURE }
}

fn execute(config: &RunConfig) -> Result<(), CliError> {
    let outcome = keyshift_cli::run(config)?;
    writeln!(std::io::stdout().lock(), "{outcome}")?;
    Ok(())
}
