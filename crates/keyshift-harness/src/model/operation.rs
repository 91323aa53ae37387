//! Operations for model-based testing.
//!
//! Operations represent every call the engine exposes. They are generated
//! randomly by proptest or the fuzzer and applied to both the model and the
//! real engine.

use arbitrary::Arbitrary;

/// Operations that can be applied to a buffer.
///
/// Counts and windows are `u16` so generated values stay small enough to
/// hit interesting boundaries (zero, exact period, just over capacity)
/// often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Single-step shift toward the front.
    ShiftLeft,

    /// Single-step shift toward the back.
    ShiftRight,

    /// Whole-buffer rotation toward the front.
    RotateLeft {
        /// Steps before normalization.
        count: u16,
    },

    /// Whole-buffer rotation toward the back.
    RotateRight {
        /// Steps before normalization.
        count: u16,
    },

    /// Windowed rotation toward the front.
    RotateLeftWithin {
        /// Steps before normalization.
        count: u16,
        /// Trailing window in bits.
        bit_len: u16,
    },

    /// Windowed rotation toward the back.
    RotateRightWithin {
        /// Steps before normalization.
        count: u16,
        /// Trailing window in bits.
        bit_len: u16,
    },
}

/// Result of applying an operation.
///
/// Used to compare model and engine behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Rotation succeeded.
    Ok,

    /// Shift succeeded with this carry.
    Carry(bool),

    /// Operation was rejected.
    Error(OperationError),
}

/// Expected rejections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Window wider than the buffer.
    InvalidWindow,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
