//! CLI error types.

use keyshift_core::BitError;
use thiserror::Error;

/// Errors from running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Buffer argument is not valid hex.
    #[error("invalid hex buffer: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The engine rejected the request.
    #[error("{0}")]
    Bits(#[from] BitError),

    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns true if the error was caused by the command line itself.
    ///
    /// Usage errors exit with status 2, everything else with status 1.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Self::InvalidHex(_) | Self::Bits(_) => true,
            Self::Io(_) => false,
        }
    }
}
