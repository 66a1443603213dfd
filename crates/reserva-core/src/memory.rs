//! Turn memory
//!
//! A fixed-capacity, insertion-ordered record of recent user utterances
//! attached to a persona. Inserting beyond capacity evicts the oldest
//! entry. Nothing in the loop's control flow reads it back; it is
//! contextual scratch space for tools that consult persona memory.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Default number of entries kept per persona
pub const DEFAULT_MEMORY_CAPACITY: usize = 100;

/// One remembered utterance
#[derive(Debug, Clone)]
pub struct MemoryEntry {
    /// The utterance content
    pub content: String,
    /// When it was recorded
    pub timestamp: DateTime<Utc>,
}

/// Fixed-capacity FIFO of recent user utterances
///
/// Shared personas record into this from the turn loop, so the store is
/// internally synchronized.
pub struct TurnMemory {
    entries: Mutex<VecDeque<MemoryEntry>>,
    capacity: usize,
}

impl Default for TurnMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}

impl TurnMemory {
    /// Create a memory store with the given capacity (minimum 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Record an utterance, evicting the oldest entry beyond capacity
    pub fn add(&self, content: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push_back(MemoryEntry {
            content: content.into(),
            timestamp: Utc::now(),
        });
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Entries in insertion order, oldest first
    #[must_use]
    pub fn recent(&self) -> Vec<MemoryEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_recent_order() {
        let memory = TurnMemory::new(10);
        memory.add("first");
        memory.add("second");

        let entries = memory.recent();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "first");
        assert_eq!(entries[1].content, "second");
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let capacity = 3;
        let memory = TurnMemory::new(capacity);
        for i in 0..=capacity {
            memory.add(format!("utterance {i}"));
        }

        // never exceeds capacity; the first entry is gone
        assert_eq!(memory.len(), capacity);
        let entries = memory.recent();
        assert_eq!(entries[0].content, "utterance 1");
        assert_eq!(entries[capacity - 1].content, format!("utterance {capacity}"));
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let memory = TurnMemory::new(0);
        memory.add("kept");
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.capacity(), 1);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(TurnMemory::default().capacity(), DEFAULT_MEMORY_CAPACITY);
    }
}
