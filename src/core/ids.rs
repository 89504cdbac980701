//! Identifier generation for new records

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh record identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier that has not been handed out before
    fn next_id(&self) -> String;
}

/// 32 lowercase hex characters of randomness (16 random bytes)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomHexIdGenerator;

impl IdGenerator for RandomHexIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Counts up from 1; predictable ids for tests and demos
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after `last`, e.g. past the ids of seeded records
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        (self.last.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}
