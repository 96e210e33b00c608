//! # Edit Session
//!
//! Per-document editing state: the live template text, its undo/redo
//! history, the override values typed into the sidebar and the fields
//! discovered by the last scan.
//!
//! Every open document gets its own session; nothing here is shared
//! between documents. Calls into a session must be serialized by the
//! caller (an undo is a pop followed by a push, not one atomic step).

use crate::{
    scan, EditHistory, EditorOptions, EditorResult, FieldEntry, OverrideStore, RenderPipeline,
    TemplateEngine,
};
use covlet_profile::Profile;
use tracing::debug;

/// Single document being edited
#[derive(Debug, Clone)]
pub struct EditSession {
    text: String,
    history: EditHistory,
    overrides: OverrideStore,
    fields: Vec<String>,
}

impl EditSession {
    /// Empty session
    pub fn new(options: &EditorOptions) -> Self {
        Self::with_text(String::new(), options)
    }

    /// Session over an existing template
    pub fn with_text(text: impl Into<String>, options: &EditorOptions) -> Self {
        let text = text.into();
        let fields = scan(&text);
        Self {
            text,
            history: EditHistory::with_capacity(options.history_capacity)
                .with_policy(options.redo_policy),
            overrides: OverrideStore::new(),
            fields,
        }
    }

    /// Apply a user edit
    ///
    /// The previous text is recorded for undo before it is replaced.
    /// Setting identical text records nothing.
    pub fn edit(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        if new_text == self.text {
            return;
        }

        let previous = std::mem::replace(&mut self.text, new_text);
        self.history.record_edit(previous);
        self.rescan();
        debug!(
            undo_levels = self.history.undo_levels(),
            fields = self.fields.len(),
            "recorded edit"
        );
    }

    /// Swap in a different document (open, new). History is dropped;
    /// overrides belong to the session and are kept.
    pub fn replace_document(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.history.clear();
        self.rescan();
    }

    /// Returns true if the text changed
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.text) {
            Some(previous) => {
                self.text = previous;
                self.rescan();
                debug!(undo_levels = self.history.undo_levels(), "undo");
                true
            }
            None => false,
        }
    }

    /// Returns true if the text changed
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.text) {
            Some(next) => {
                self.text = next;
                self.rescan();
                debug!(redo_levels = self.history.redo_levels(), "redo");
                true
            }
            None => false,
        }
    }

    /// Render the live text with this session's overrides
    pub fn render<E: TemplateEngine>(
        &self,
        pipeline: &RenderPipeline<E>,
        base: &Profile,
    ) -> EditorResult<String> {
        pipeline.render(&self.text, base, self.overrides.as_map())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fields referenced by the live text, in first-seen order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Sidebar rows: each discovered field with its override (or blank)
    pub fn field_entries(&self) -> Vec<FieldEntry> {
        self.overrides.entries_for(&self.fields)
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut OverrideStore {
        &mut self.overrides
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    fn rescan(&mut self) {
        self.fields = scan(&self.text);
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}
