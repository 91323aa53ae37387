//! Rotation Controller
//!
//! Realizes circular rotations by repeating the single-step shift and
//! re-inserting the carried bit at the opposite end.
//!
//! ## Windows
//!
//! A windowed rotation is confined to the trailing `bit_len` bits of the
//! buffer, the bits that end at the LSB of the last byte. Everything in
//! front of the window is padding and is never modified:
//!
//! ```text
//!  bit_len = 10, len = 2
//!
//!  byte 0            byte 1
//!  p p p p p p w w   w w w w w w w w
//!  └── padding ┘└──────── window ───┘
//! ```
//!
//! Whole bytes of padding are skipped; padding that shares a byte with the
//! start of the window is masked out before the shift and restored after.
//!
//! ## Normalization
//!
//! The count is reduced modulo the rotation period (`8 * len` for a
//! full-buffer rotation, `bit_len` for a windowed one) before any work
//! happens, so each call performs fewer than `period` single-bit steps.

use crate::{
    error::BitError,
    shift::{LSB, MSB, shift_left, shift_right},
};

/// Number of bits in one buffer byte.
pub const BITS_PER_BYTE: usize = 8;

/// Bit capacity of a buffer of `len` bytes.
pub const fn bit_capacity(len: usize) -> usize {
    len.saturating_mul(BITS_PER_BYTE)
}

/// Rotates the whole buffer one bit toward the front.
///
/// The old MSB of byte 0 becomes the LSB of the last byte.
pub fn rotate_left_once(buffer: &mut [u8]) {
    if shift_left(buffer) {
        if let Some(last) = buffer.last_mut() {
            *last |= LSB;
        }
    }
}

/// Rotates the whole buffer one bit toward the back.
///
/// The old LSB of the last byte becomes the MSB of byte 0.
pub fn rotate_right_once(buffer: &mut [u8]) {
    if shift_right(buffer) {
        if let Some(first) = buffer.first_mut() {
            *first |= MSB;
        }
    }
}

/// Rotates the whole buffer `count` bits toward the front.
///
/// `count` is reduced modulo `8 * len`. An empty buffer is left alone.
pub fn rotate_left(buffer: &mut [u8], count: usize) {
    let steps = normalize(count, bit_capacity(buffer.len()));
    tracing::trace!(len = buffer.len(), count, steps, "rotate left");

    for _ in 0..steps {
        rotate_left_once(buffer);
    }
}

/// Rotates the whole buffer `count` bits toward the back.
///
/// `count` is reduced modulo `8 * len`. An empty buffer is left alone.
pub fn rotate_right(buffer: &mut [u8], count: usize) {
    let steps = normalize(count, bit_capacity(buffer.len()));
    tracing::trace!(len = buffer.len(), count, steps, "rotate right");

    for _ in 0..steps {
        rotate_right_once(buffer);
    }
}

/// Rotates the trailing `bit_len` bits of the buffer `count` bits toward the
/// front, leaving the leading padding bits untouched.
///
/// # Errors
///
/// Returns `BitError::InvalidWindowLength` if `bit_len > 8 * len`. The
/// buffer is not modified in that case.
pub fn rotate_left_within(
    buffer: &mut [u8],
    count: usize,
    bit_len: usize,
) -> Result<(), BitError> {
    let Some(window) = Window::new(buffer.len(), bit_len)? else {
        tracing::debug!(len = buffer.len(), count, "empty window, nothing to rotate");
        return Ok(());
    };

    let steps = normalize(count, bit_len);
    tracing::trace!(len = buffer.len(), count, bit_len, steps, "rotate left within window");

    for _ in 0..steps {
        window.step_left(buffer);
    }
    Ok(())
}

/// Rotates the trailing `bit_len` bits of the buffer `count` bits toward the
/// back, leaving the leading padding bits untouched.
///
/// # Errors
///
/// Returns `BitError::InvalidWindowLength` if `bit_len > 8 * len`. The
/// buffer is not modified in that case.
pub fn rotate_right_within(
    buffer: &mut [u8],
    count: usize,
    bit_len: usize,
) -> Result<(), BitError> {
    let Some(window) = Window::new(buffer.len(), bit_len)? else {
        tracing::debug!(len = buffer.len(), count, "empty window, nothing to rotate");
        return Ok(());
    };

    let steps = normalize(count, bit_len);
    tracing::trace!(len = buffer.len(), count, bit_len, steps, "rotate right within window");

    for _ in 0..steps {
        window.step_right(buffer);
    }
    Ok(())
}

/// Reduces `count` modulo `period`; a zero period means nothing to do.
fn normalize(count: usize, period: usize) -> usize {
    count.checked_rem(period).unwrap_or(0)
}

/// Location of a non-empty trailing window inside a buffer.
#[derive(Debug, Clone, Copy)]
struct Window {
    /// Index of the byte holding the window's first bit.
    first: usize,
    /// Bits of `buffer[first]` that belong to the window.
    mask: u8,
    /// The window's first bit within `buffer[first]`.
    head: u8,
}

impl Window {
    /// Validates `bit_len` against a buffer of `len` bytes.
    ///
    /// Returns `None` for an empty window.
    fn new(len: usize, bit_len: usize) -> Result<Option<Self>, BitError> {
        let capacity = bit_capacity(len);
        if bit_len > capacity {
            return Err(BitError::window_too_wide(bit_len, capacity));
        }
        if bit_len == 0 {
            return Ok(None);
        }

        let padding = capacity - bit_len;
        let offset = padding % BITS_PER_BYTE;

        Ok(Some(Self { first: padding / BITS_PER_BYTE, mask: 0xFF >> offset, head: MSB >> offset }))
    }

    fn step_left(self, buffer: &mut [u8]) {
        // first < len because the window is non-empty
        let span = &mut buffer[self.first..];
        let padding = span[0] & !self.mask;
        let wrapped = span[0] & self.head != 0;

        span[0] &= self.mask;
        shift_left(span);
        span[0] = (span[0] & self.mask) | padding;

        if wrapped {
            if let Some(last) = span.last_mut() {
                *last |= LSB;
            }
        }
    }

    fn step_right(self, buffer: &mut [u8]) {
        let span = &mut buffer[self.first..];
        let padding = span[0] & !self.mask;

        span[0] &= self.mask;
        let wrapped = shift_right(span);
        span[0] |= padding;

        if wrapped {
            span[0] |= self.head;
        }
    }
}
