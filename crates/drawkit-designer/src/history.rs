//! Undo/redo history for composite edits.

use crate::commands::{CompositeCommand, UndoableEditSink};
use drawkit_core::DrawingView;
use std::collections::VecDeque;

/// Default number of edits kept on the undo stack.
pub const DEFAULT_UNDO_LIMIT: usize = 50;

/// Bounded undo/redo stacks of composite edits.
///
/// Edits arrive through [`UndoableEditSink`]; the shapes have already been
/// mutated when an edit is closed, so recording never re-applies it.
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    // oldest edit at the front
    undo_stack: VecDeque<CompositeCommand>,
    redo_stack: Vec<CompositeCommand>,
    limit: usize,
    open_edit: Option<String>,
}

impl UndoRedoManager {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
            open_edit: None,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the edit `undo` would revert.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.name.as_str())
    }

    /// Label of the edit `redo` would re-apply.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.name.as_str())
    }

    /// Label of the edit currently open, if any.
    pub fn open_edit(&self) -> Option<&str> {
        self.open_edit.as_deref()
    }

    /// Reverts the most recent edit, returning its label.
    pub fn undo(&mut self, view: &mut dyn DrawingView) -> Option<String> {
        let mut edit = self.undo_stack.pop_back()?;
        edit.undo(view);
        tracing::debug!("Undid '{}'", edit.name);
        let name = edit.name.clone();
        self.redo_stack.push(edit);
        Some(name)
    }

    /// Re-applies the most recently undone edit, returning its label.
    pub fn redo(&mut self, view: &mut dyn DrawingView) -> Option<String> {
        let mut edit = self.redo_stack.pop()?;
        edit.apply(view);
        tracing::debug!("Redid '{}'", edit.name);
        let name = edit.name.clone();
        self.undo_stack.push_back(edit);
        Some(name)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

impl UndoableEditSink for UndoRedoManager {
    fn begin_edit(&mut self, label: &str) {
        if let Some(open) = &self.open_edit {
            tracing::warn!("Edit '{}' opened while '{}' is still open", label, open);
        }
        self.open_edit = Some(label.to_string());
    }

    fn end_edit(&mut self, edit: CompositeCommand) {
        self.open_edit = None;
        if edit.is_empty() {
            tracing::debug!("Discarding empty edit '{}'", edit.name);
            return;
        }
        self.undo_stack.push_back(edit);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.limit {
            if let Some(dropped) = self.undo_stack.pop_front() {
                tracing::debug!("Undo limit reached, dropping '{}'", dropped.name);
            }
        }
    }
}
