//! Model bit string.
//!
//! One `bool` per bit, so every operation is a one-liner over `Vec`.
//! Slow and obviously correct.

use super::operation::{Operation, OperationError, OperationResult};

/// Reference bit string, MSB of byte 0 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBits {
    bits: Vec<bool>,
}

impl ModelBits {
    /// Unpack bytes into bits.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bits =
            bytes.iter().flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1)).collect();
        Self { bits }
    }

    /// Pack bits back into bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
            .collect()
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the bit string is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Apply an operation.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match *op {
            Operation::ShiftLeft => OperationResult::Carry(self.shift_left()),
            Operation::ShiftRight => OperationResult::Carry(self.shift_right()),
            Operation::RotateLeft { count } => {
                self.rotate_window(usize::from(count), self.len(), true)
            },
            Operation::RotateRight { count } => {
                self.rotate_window(usize::from(count), self.len(), false)
            },
            Operation::RotateLeftWithin { count, bit_len } => {
                self.rotate_window(usize::from(count), usize::from(bit_len), true)
            },
            Operation::RotateRightWithin { count, bit_len } => {
                self.rotate_window(usize::from(count), usize::from(bit_len), false)
            },
        }
    }

    fn shift_left(&mut self) -> bool {
        if self.bits.is_empty() {
            return false;
        }
        let carry = self.bits.remove(0);
        self.bits.push(false);
        carry
    }

    fn shift_right(&mut self) -> bool {
        let Some(carry) = self.bits.pop() else {
            return false;
        };
        self.bits.insert(0, false);
        carry
    }

    fn rotate_window(&mut self, count: usize, bit_len: usize, left: bool) -> OperationResult {
        if bit_len > self.bits.len() {
            return OperationResult::Error(OperationError::InvalidWindow);
        }
        if bit_len == 0 {
            return OperationResult::Ok;
        }

        let start = self.bits.len() - bit_len;
        let window = &mut self.bits[start..];
        if left {
            window.rotate_left(count % bit_len);
        } else {
            window.rotate_right(count % bit_len);
        }
        OperationResult::Ok
    }
}
