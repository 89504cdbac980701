//! Validation chain system
//!
//! Mutations are gated by ordered chains of small predicate stages. Chains are
//! built once per operation and shared by every request on that operation.

pub mod chain;
pub mod validators;

pub use chain::{StageResult, Submission, ValidationChain};
