//! Id generation for created records.

use scribe_core::EntityKind;
use uuid::Uuid;

/// Source of fresh record ids.
///
/// Implementations must never hand out the same token twice for a kind.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self, kind: EntityKind) -> String;
}

/// Random v4 UUIDs. The default for a running service.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _kind: EntityKind) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic decimal counter shared across kinds. Deterministic, for tests
/// and fixtures.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, _kind: EntityKind) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
