//! Reference model for model-based testing.
//!
//! The model is a bit-per-`bool` rendition of the engine's contract with
//! none of the byte-level carry handling. It serves as the oracle against
//! which the real engine is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Contract not implementation: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

mod bits;
mod engine;
pub mod operation;

pub use bits::ModelBits;
pub use engine::EngineBuffer;
pub use operation::{Operation, OperationError, OperationResult};
