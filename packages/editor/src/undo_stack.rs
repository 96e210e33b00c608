//! # Undo/Redo History
//!
//! Tracks text snapshots of the template being edited.
//!
//! ## Design
//!
//! - Both stacks are bounded sliding windows: pushing onto a full stack
//!   drops its oldest entry
//! - An edit records the text as it was *before* the change
//! - Undo hands back the last recorded snapshot and parks the live text
//!   on the redo stack; redo does the reverse
//! - Whether a fresh edit discards pending redo entries is governed by
//!   [`RedoPolicy`]
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = EditHistory::new();
//! history.record_edit("Dear".to_string());
//! // live text is now "Dear Acme"
//!
//! let restored = history.undo("Dear Acme");
//! assert_eq!(restored.as_deref(), Some("Dear"));
//!
//! let again = history.redo("Dear");
//! assert_eq!(again.as_deref(), Some("Dear Acme"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of snapshots kept on each stack unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 6;

/// What happens to the redo stack when a new edit is recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedoPolicy {
    /// Redo entries survive new edits
    #[default]
    Retain,

    /// A new edit invalidates everything on the redo stack
    ClearOnEdit,
}

/// Undo/redo history for one editing session
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Snapshots to return to on undo (most recent last)
    undo_stack: VecDeque<String>,

    /// Snapshots to return to on redo (most recent last)
    redo_stack: VecDeque<String>,

    capacity: usize,

    policy: RedoPolicy,
}

impl EditHistory {
    /// Create a history with the default capacity and policy
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a history keeping at most `capacity` snapshots per stack.
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::with_capacity(capacity),
            capacity,
            policy: RedoPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RedoPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record the text as it was before an edit
    pub fn record_edit(&mut self, previous_text: String) {
        push_bounded(&mut self.undo_stack, previous_text, self.capacity);

        if self.policy == RedoPolicy::ClearOnEdit {
            self.redo_stack.clear();
        }
    }

    /// Step back one snapshot. `current_text` is the live text, which
    /// moves onto the redo stack. Returns the text to display, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self, current_text: &str) -> Option<String> {
        let previous = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, current_text.to_string(), self.capacity);
        Some(previous)
    }

    /// Step forward one snapshot. Mirror image of [`EditHistory::undo`].
    pub fn redo(&mut self, current_text: &str) -> Option<String> {
        let next = self.redo_stack.pop_back()?;
        push_bounded(&mut self.undo_stack, current_text.to_string(), self.capacity);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> RedoPolicy {
        self.policy
    }

    /// Snapshots on the undo stack, oldest first
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().map(String::as_str)
    }

    /// Drop all history (e.g. when a different document is opened)
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded(stack: &mut VecDeque<String>, text: String, capacity: usize) {
    if stack.len() >= capacity {
        stack.pop_front();
    }
    stack.push_back(text);
}
