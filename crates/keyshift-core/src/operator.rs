//! Bit operator abstraction.
//!
//! The `BitOperator` trait is the seam between the rotation engine and its
//! consumers (key schedules and other bit-twiddling collaborators). Consumers
//! depend on the trait so tests can substitute an instrumented operator.
//!
//! # Invariants
//!
//! - Statelessness: an operator holds no state between calls
//! - Validate-then-mutate: a call that returns `Err` has not written to the
//!   buffer
//! - Periodicity: rotating by the rotation period is the identity

use crate::{error::BitError, rotate, shift};

/// Shift and rotation operations over big-endian bit buffers.
///
/// Every method has a default implementation backed by the free functions in
/// this crate; implementors only override what they need to observe or
/// replace.
pub trait BitOperator {
    /// Shifts one bit toward the front, returning the bit that fell off.
    fn shift_left(&self, buffer: &mut [u8]) -> bool {
        shift::shift_left(buffer)
    }

    /// Shifts one bit toward the back, returning the bit that fell off.
    fn shift_right(&self, buffer: &mut [u8]) -> bool {
        shift::shift_right(buffer)
    }

    /// Rotates the whole buffer one bit toward the front.
    fn rotate_left_once(&self, buffer: &mut [u8]) {
        rotate::rotate_left_once(buffer);
    }

    /// Rotates the whole buffer one bit toward the back.
    fn rotate_right_once(&self, buffer: &mut [u8]) {
        rotate::rotate_right_once(buffer);
    }

    /// Rotates the whole buffer `count` bits toward the front.
    fn rotate_left(&self, buffer: &mut [u8], count: usize) {
        rotate::rotate_left(buffer, count);
    }

    /// Rotates the whole buffer `count` bits toward the back.
    fn rotate_right(&self, buffer: &mut [u8], count: usize) {
        rotate::rotate_right(buffer, count);
    }

    /// Rotates the trailing `bit_len` bits `count` bits toward the front.
    fn rotate_left_within(
        &self,
        buffer: &mut [u8],
        count: usize,
        bit_len: usize,
    ) -> Result<(), BitError> {
        rotate::rotate_left_within(buffer, count, bit_len)
    }

    /// Rotates the trailing `bit_len` bits `count` bits toward the back.
    fn rotate_right_within(
        &self,
        buffer: &mut [u8],
        count: usize,
        bit_len: usize,
    ) -> Result<(), BitError> {
        rotate::rotate_right_within(buffer, count, bit_len)
    }
}

/// The stock `BitOperator`.
///
/// Zero-sized and stateless; copy it freely or share it across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitEngine;

impl BitEngine {
    /// Create a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BitOperator for BitEngine {}
