//! Keyshift Bit Engine
//!
//! Bit-level shifts and circular rotations over byte buffers of any length,
//! including rotations confined to a trailing window of the buffer's bits.
//! These are the moving parts of classical block-cipher key schedules, where
//! 28-bit half keys are rotated inside byte buffers without disturbing the
//! unused bits around them.
//!
//! # Design
//!
//! A buffer is one big-endian bit string: the MSB of byte 0 comes first, the
//! LSB of the last byte comes last. All operations mutate a caller-owned
//! `&mut [u8]` in place and keep no state between calls.
//!
//! ```text
//! Rotation ──► rotate_{left,right}[_within] ──► Window::step / rotate_*_once
//!                                                        │
//!                                                        ▼
//!                                          shift_{left,right} → carry
//! ```
//!
//! # Invariants
//!
//! - Periodicity: rotating by `8 * len` (or by the window size) is the
//!   identity
//! - Reversibility: a left rotation by `n` is undone by a right rotation by
//!   `n` with the same window
//! - Padding isolation: a windowed rotation never changes bits outside the
//!   window
//! - Validate-then-mutate: an `Err` return means the buffer is untouched

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod operator;
mod rotate;
mod rotation;
mod shift;

pub use error::BitError;
pub use operator::{BitEngine, BitOperator};
pub use rotate::{
    BITS_PER_BYTE, bit_capacity, rotate_left, rotate_left_once, rotate_left_within, rotate_right,
    rotate_right_once, rotate_right_within,
};
pub use rotation::{Direction, Rotation};
pub use shift::{shift_left, shift_right};
