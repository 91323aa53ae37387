//! Rotation requests.
//!
//! A [`Rotation`] bundles a direction, a count and an optional window so a
//! rotation can be built once, validated, inverted and applied to any
//! number of buffers.

use crate::{
    error::BitError,
    rotate::{bit_capacity, rotate_left, rotate_left_within, rotate_right, rotate_right_within},
};

/// Direction of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward byte 0's most significant bit.
    Left,
    /// Toward the last byte's least significant bit.
    Right,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A circular rotation of a byte buffer.
///
/// Without a window the whole buffer rotates. With a window of `bit_len`
/// bits only the trailing `bit_len` bits rotate and the leading padding is
/// left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// Direction to rotate.
    pub direction: Direction,
    /// Number of single-bit steps before normalization.
    pub count: usize,
    /// Trailing window in bits, `None` for the whole buffer.
    pub window: Option<usize>,
}

impl Rotation {
    /// Whole-buffer rotation toward the front.
    pub fn left(count: usize) -> Self {
        Self { direction: Direction::Left, count, window: None }
    }

    /// Whole-buffer rotation toward the back.
    pub fn right(count: usize) -> Self {
        Self { direction: Direction::Right, count, window: None }
    }

    /// Confines the rotation to the trailing `bit_len` bits.
    #[must_use]
    pub fn within(self, bit_len: usize) -> Self {
        Self { window: Some(bit_len), ..self }
    }

    /// Builds a rotation from signed inputs for a buffer of `len` bytes.
    ///
    /// Used by untyped surfaces (command lines, config files) where a
    /// negative value can actually be supplied.
    ///
    /// # Errors
    ///
    /// - `BitError::NegativeRotationCount` if `count < 0`
    /// - `BitError::InvalidWindowLength` if `window` is outside `0..=8 * len`
    pub fn from_signed(
        direction: Direction,
        count: i64,
        window: Option<i64>,
        len: usize,
    ) -> Result<Self, BitError> {
        let count =
            usize::try_from(count).map_err(|_| BitError::NegativeRotationCount { count })?;

        let capacity = bit_capacity(len);
        let window = window
            .map(|bit_len| {
                usize::try_from(bit_len)
                    .ok()
                    .filter(|&w| w <= capacity)
                    .ok_or(BitError::InvalidWindowLength { bit_len, capacity })
            })
            .transpose()?;

        Ok(Self { direction, count, window })
    }

    /// Rotation period for a buffer of `len` bytes.
    ///
    /// This is the window size, or `8 * len` without a window. Rotating by a
    /// multiple of the period is the identity.
    pub fn period(&self, len: usize) -> usize {
        self.window.unwrap_or_else(|| bit_capacity(len))
    }

    /// Number of single-bit steps actually performed on a buffer of `len`
    /// bytes.
    pub fn effective_count(&self, len: usize) -> usize {
        self.count.checked_rem(self.period(len)).unwrap_or(0)
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self { direction: self.direction.reverse(), ..*self }
    }

    /// Applies the rotation to `buffer` in place.
    ///
    /// # Errors
    ///
    /// Returns `BitError::InvalidWindowLength` if the window is wider than
    /// the buffer. The buffer is not modified in that case.
    pub fn apply(&self, buffer: &mut [u8]) -> Result<(), BitError> {
        match (self.direction, self.window) {
            (Direction::Left, None) => {
                rotate_left(buffer, self.count);
                Ok(())
            },
            (Direction::Right, None) => {
                rotate_right(buffer, self.count);
                Ok(())
            },
            (Direction::Left, Some(bit_len)) => rotate_left_within(buffer, self.count, bit_len),
            (Direction::Right, Some(bit_len)) => rotate_right_within(buffer, self.count, bit_len),
        }
    }
}
