//! Fuzz target for the rotation engine
//!
//! Drive the engine and the reference model with the same operation
//! sequence and require them to agree bit for bit.
//!
//! # Strategy
//!
//! - Buffers: arbitrary bytes, including empty and single-byte buffers
//! - Windows: unclamped `u16`, so oversized windows are exercised
//! - Counts: unclamped `u16`, so normalization wraps many times
//!
//! # Invariants
//!
//! - Every operation returns the same result as the model
//! - Buffers match the model after every operation
//! - Rejected operations leave the buffer unchanged
//! - Rotations followed by their mirror restore the buffer
//! - NEVER panic on any window or count

#![no_main]

use arbitrary::Arbitrary;
use keyshift_core::BitEngine;
use keyshift_harness::{EngineBuffer, ModelBits, Operation};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: starting buffer plus operation sequence.
#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    ops: Vec<Operation>,
}

fn mirror(op: Operation) -> Option<Operation> {
    match op {
        Operation::RotateLeft { count } => Some(Operation::RotateRight { count }),
        Operation::RotateRight { count } => Some(Operation::RotateLeft { count }),
        Operation::RotateLeftWithin { count, bit_len } => {
            Some(Operation::RotateRightWithin { count, bit_len })
        },
        Operation::RotateRightWithin { count, bit_len } => {
            Some(Operation::RotateLeftWithin { count, bit_len })
        },
        Operation::ShiftLeft | Operation::ShiftRight => None,
    }
}

fuzz_target!(|input: FuzzInput| {
    // Keep iterations cheap: rotations cost O(count * len).
    if input.bytes.len() > 64 || input.ops.len() > 64 {
        return;
    }

    let mut model = ModelBits::from_bytes(&input.bytes);
    let mut engine = EngineBuffer::new(BitEngine::new(), input.bytes.clone());

    for op in &input.ops {
        let before = engine.bytes().to_vec();

        let model_result = model.apply(op);
        let engine_result = engine.apply(op);
        assert_eq!(model_result, engine_result, "result mismatch on {op:?}");
        assert_eq!(model.to_bytes(), engine.bytes(), "buffer mismatch after {op:?}");

        if engine_result.is_err() {
            assert_eq!(engine.bytes(), before.as_slice(), "rejected {op:?} mutated buffer");
        }

        if let Some(undo) = mirror(*op) {
            let mut probe = EngineBuffer::new(BitEngine::new(), before.clone());
            probe.apply(op);
            probe.apply(&undo);
            assert_eq!(probe.bytes(), before.as_slice(), "{op:?} not undone by {undo:?}");
        }
    }
});
