//! Test harness for the keyshift engine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and the real engine,
//! and the resulting buffers and carries are compared.
//!
//! # Seeded Fixtures
//!
//! `SeededBuffers` produces reproducible buffers and windows from a `u64`
//! seed for regression tests that need more than a handful of literals.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod seeded;

pub use model::{EngineBuffer, ModelBits, Operation, OperationError, OperationResult};
pub use seeded::SeededBuffers;
