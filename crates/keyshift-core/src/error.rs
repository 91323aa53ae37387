//! Engine error types.

use thiserror::Error;

/// Errors from shift and rotation operations.
///
/// Every variant is raised before the buffer is written to, so a failed call
/// leaves the caller's bytes exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitError {
    /// Rotation count was negative.
    #[error("rotation count must be non-negative, got {count}")]
    NegativeRotationCount {
        /// The rejected count.
        count: i64,
    },

    /// Window is negative or wider than the buffer.
    #[error("bit length {bit_len} is outside 0..={capacity}")]
    InvalidWindowLength {
        /// The rejected window length in bits.
        bit_len: i64,
        /// Bit capacity of the buffer (`8 * len`).
        capacity: usize,
    },
}

impl BitError {
    pub(crate) fn window_too_wide(bit_len: usize, capacity: usize) -> Self {
        Self::InvalidWindowLength { bit_len: i64::try_from(bit_len).unwrap_or(i64::MAX), capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_count_display() {
        let err = BitError::NegativeRotationCount { count: -3 };
        assert_eq!(err.to_string(), "rotation count must be non-negative, got -3");
    }

    #[test]
    fn window_display() {
        let err = BitError::InvalidWindowLength { bit_len: 17, capacity: 16 };
        assert_eq!(err.to_string(), "bit length 17 is outside 0..=16");
    }

    #[test]
    fn huge_window_saturates() {
        let err = BitError::window_too_wide(usize::MAX, 8);
        assert_eq!(err, BitError::InvalidWindowLength { bit_len: i64::MAX, capacity: 8 });
    }
}
