//! Keyshift command-line front end.
//!
//! Parses a hex buffer and one operation, runs it through the bit engine and
//! renders the result. The binary in `main.rs` only handles argument parsing
//! and logging setup; everything testable lives here.
//!
//! ## Flow
//!
//! ```text
//! Args (clap) ──► RunConfig ──► run() ──► Outcome ──► stdout
//!                                 │
//!                                 ├─ parse_hex
//!                                 ├─ Rotation::from_signed / shift
//!                                 └─ BitEngine
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

use std::fmt;

pub use error::CliError;
use keyshift_core::{BitEngine, BitOperator, Direction, Rotation};

/// What to do with the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Circular rotation, optionally confined to a trailing window.
    ///
    /// Count and window are signed so that negative input from the command
    /// line reaches validation instead of failing to parse.
    Rotate {
        /// Direction to rotate.
        direction: Direction,
        /// Number of single-bit steps.
        count: i64,
        /// Trailing window in bits.
        bit_len: Option<i64>,
    },

    /// Single-step shift; the carried-out bit is reported.
    Shift(Direction),
}

/// Configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Buffer as hex text.
    pub buffer: String,
    /// Operation to perform.
    pub action: Action,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            action: Action::Rotate { direction: Direction::Left, count: 0, bit_len: None },
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Buffer after the operation.
    pub bytes: Vec<u8>,
    /// Carry flag, for shifts only.
    pub carry: Option<bool>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))?;
        if let Some(carry) = self.carry {
            write!(f, "\ncarry={carry}")?;
        }
        Ok(())
    }
}

/// Parses a hex buffer.
///
/// Accepts an optional `0x` prefix and ignores `_` and whitespace, so
/// `0x0f0c_caaf` and `0f 0c ca af` both parse.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = text.trim();
    let digits =
        trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);
    let cleaned: String = digits.chars().filter(|c| *c != '_' && !c.is_whitespace()).collect();
    Ok(hex::decode(cleaned)?)
}

/// Runs one operation.
///
/// # Errors
///
/// - `CliError::InvalidHex` if the buffer does not parse
/// - `CliError::Bits` if the engine rejects the count or window
pub fn run(config: &RunConfig) -> Result<Outcome, CliError> {
    let mut bytes = parse_hex(&config.buffer)?;
    let engine = BitEngine::new();

    tracing::debug!(len = bytes.len(), action = ?config.action, "applying");

    let carry = match config.action {
        Action::Rotate { direction, count, bit_len } => {
            let rotation = Rotation::from_signed(direction, count, bit_len, bytes.len())?;
            tracing::debug!(
                effective = rotation.effective_count(bytes.len()),
                period = rotation.period(bytes.len()),
                "normalized rotation"
            );
            rotation.apply(&mut bytes)?;
            None
        },
        Action::Shift(Direction::Left) => Some(engine.shift_left(&mut bytes)),
        Action::Shift(Direction::Right) => Some(engine.shift_right(&mut bytes)),
    };

    Ok(Outcome { bytes, carry })
}
