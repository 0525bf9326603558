//! Id generators for new graph nodes
//!
//! Generators are passed explicitly to the graph's add operations so that
//! graph construction stays deterministic under test.

use crate::domain::value_objects::NodeId;

/// Source of fresh node ids
pub trait IdGenerator {
    fn next_id(&mut self) -> NodeId;
}

/// Monotonic `node-1`, `node-2`, … ids
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::with_prefix("node")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Continue counting after `start - 1` ids were already issued
    pub fn starting_at(mut self, start: u64) -> Self {
        self.next = start;
        self
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> NodeId {
        NodeId::new(uuid::Uuid::new_v4().to_string())
    }
}
