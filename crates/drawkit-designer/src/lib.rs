//! # DrawKit Designer
//!
//! Editing tools for the DrawKit vector editor: selection, alignment of the
//! selected shapes, and undo/redo of the resulting edits.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (UI integration)
//!   ├── Drawing (shapes + SelectionManager, implements DrawingView)
//!   ├── AlignActions (one AlignAction per AlignStrategy)
//!   ├── ShortcutMap (key stroke -> action key)
//!   └── UndoRedoManager (CompositeCommand history)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drawkit_core::Rect;
//! use drawkit_designer::{AlignStrategy, DesignerState};
//!
//! let mut state = DesignerState::new();
//! let a = state.add_shape(Rect::new(0.0, 0.0, 10.0, 10.0));
//! let b = state.add_shape(Rect::new(5.0, 20.0, 10.0, 10.0));
//! state.select_only(&[a, b]).unwrap();
//!
//! let report = state.align(AlignStrategy::West).unwrap();
//! assert_eq!(report.moved, 1);
//! assert_eq!(state.drawing().get_shape(b).unwrap().bounds.x, 0.0);
//! ```

pub mod align_action;
pub mod alignment;
pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod history;
pub mod selection_manager;
pub mod shortcuts;

pub use align_action::{AlignAction, AlignActions, AlignReport, ALIGN_EDIT_KEY};
pub use alignment::AlignStrategy;
pub use canvas::{Drawing, DrawingObject};
pub use commands::{
    CompositeCommand, CompositeEditScope, DesignerCommand, MoveShapes, UndoableEditSink,
};
pub use designer_state::DesignerState;
pub use history::UndoRedoManager;
pub use selection_manager::SelectionManager;
pub use shortcuts::{Key, KeyStroke, Modifiers, ParseKeyStrokeError, ShortcutMap};
