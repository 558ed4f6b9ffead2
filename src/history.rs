//! Linear undo history backed by full-content snapshots.
//!
//! Every mutation of the buffer records a complete copy of its content here.
//! The stack is append-only at the back and is never empty: the bottom entry
//! is the content the buffer was constructed with, so undo can always stop at
//! the initial state. Reverting discards the top entry (the state being
//! reverted *away from*) and hands back the entry beneath it.
//!
//! Full-content snapshots cost O(len) space per edit and O(len) time per
//! revert. That is deliberate: it keeps single-level sequential undo trivially
//! correct. Diff-based entries or an inverse-operation log would scale better
//! for large buffers but are not worth the complexity at this buffer's size.

use tracing::trace;

/// Chronological stack of full-content snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Push/pop at the back only; `snapshots[0]` is the initial state.
    snapshots: Vec<String>,
}

impl History {
    /// Create a history seeded with the initial content.
    pub fn new(initial: String) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    /// Number of snapshots currently held. Always at least 1.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// The snapshot describing the current buffer content.
    pub fn current(&self) -> &str {
        self.snapshots.last().map(String::as_str).unwrap_or("")
    }

    /// Record the content reached after a mutation.
    pub fn record(&mut self, snapshot: String) {
        trace!(depth = self.snapshots.len() + 1, "recording snapshot");
        self.snapshots.push(snapshot);
    }

    /// Step back one snapshot.
    ///
    /// Discards the top entry and returns the one now on top, or `None` when
    /// only the initial state remains. Each call moves exactly one level back.
    pub fn revert(&mut self) -> Option<&str> {
        if self.snapshots.len() <= 1 {
            return None;
        }

        self.snapshots.pop();
        trace!(depth = self.snapshots.len(), "reverted to snapshot");
        self.snapshots.last().map(String::as_str)
    }
}
