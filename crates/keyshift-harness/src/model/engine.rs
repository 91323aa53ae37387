//! Engine side of the comparison.
//!
//! Wraps a byte buffer and a `BitOperator` behind the same `apply` interface
//! as [`ModelBits`](super::ModelBits).

use keyshift_core::{BitError, BitOperator};

use super::operation::{Operation, OperationError, OperationResult};

/// A byte buffer driven through a `BitOperator`.
#[derive(Debug, Clone)]
pub struct EngineBuffer<O> {
    operator: O,
    bytes: Vec<u8>,
}

impl<O: BitOperator> EngineBuffer<O> {
    /// Wrap `bytes` with `operator`.
    pub fn new(operator: O, bytes: Vec<u8>) -> Self {
        Self { operator, bytes }
    }

    /// Current buffer contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Apply an operation.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        let buffer = self.bytes.as_mut_slice();
        match *op {
            Operation::ShiftLeft => OperationResult::Carry(self.operator.shift_left(buffer)),
            Operation::ShiftRight => OperationResult::Carry(self.operator.shift_right(buffer)),
            Operation::RotateLeft { count } => {
                self.operator.rotate_left(buffer, usize::from(count));
                OperationResult::Ok
            },
            Operation::RotateRight { count } => {
                self.operator.rotate_right(buffer, usize::from(count));
                OperationResult::Ok
            },
            Operation::RotateLeftWithin { count, bit_len } => {
                convert(self.operator.rotate_left_within(
                    buffer,
                    usize::from(count),
                    usize::from(bit_len),
                ))
            },
            Operation::RotateRightWithin { count, bit_len } => {
                convert(self.operator.rotate_right_within(
                    buffer,
                    usize::from(count),
                    usize::from(bit_len),
                ))
            },
        }
    }
}

// Counts are unsigned here, so the window is the only thing the engine can
// reject.
fn convert(result: Result<(), BitError>) -> OperationResult {
    match result {
        Ok(()) => OperationResult::Ok,
        Err(_) => OperationResult::Error(OperationError::InvalidWindow),
    }
}
