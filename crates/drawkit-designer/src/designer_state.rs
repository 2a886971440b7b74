//! Designer state manager for UI integration.
//! Owns the drawing, its undo history and the alignment actions, and keeps
//! action enablement in sync with selection and view changes.

use crate::align_action::{AlignActions, AlignReport};
use crate::alignment::AlignStrategy;
use crate::canvas::{Drawing, DrawingObject};
use crate::history::UndoRedoManager;
use crate::shortcuts::{KeyStroke, ShortcutMap};
use drawkit_core::{DrawingView, FigureId, Rect, Result};
use drawkit_settings::{Config, Labels};

/// Name of the input map the alignment shortcuts are registered on.
pub const DRAWING_VIEW_CONTAINER: &str = "drawing-view";

/// Designer state for UI integration
///
/// The drawing is only reachable mutably through methods that keep action
/// enablement current.
#[derive(Debug, Clone)]
pub struct DesignerState {
    drawing: Drawing,
    pub is_modified: bool,
    history: UndoRedoManager,
    align_actions: AlignActions,
    shortcuts: ShortcutMap,
    labels: Labels,
    view_attached: bool,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_drawing(Drawing::new(), config)
    }

    /// Wraps an existing drawing. The view starts attached.
    pub fn with_drawing(drawing: Drawing, config: &Config) -> Self {
        let labels = config.labels();
        let align_actions = AlignActions::new(&labels);
        let mut shortcuts = ShortcutMap::new(DRAWING_VIEW_CONTAINER);
        align_actions.register_shortcuts(&mut shortcuts);

        let mut state = Self {
            drawing,
            is_modified: false,
            history: UndoRedoManager::new(config.undo.limit),
            align_actions,
            shortcuts,
            labels,
            view_attached: true,
        };
        state.update_enabled_state();
        state
    }

    /// Re-evaluates every action's enabled flag.
    pub fn update_enabled_state(&mut self) {
        let view = if self.view_attached {
            Some(&self.drawing as &dyn DrawingView)
        } else {
            None
        };
        self.align_actions.update_enabled_state(view);
    }

    pub fn attach_view(&mut self) {
        self.view_attached = true;
        self.update_enabled_state();
    }

    pub fn detach_view(&mut self) {
        self.view_attached = false;
        self.update_enabled_state();
    }

    pub fn set_view_enabled(&mut self, enabled: bool) {
        self.drawing.set_enabled(enabled);
        self.update_enabled_state();
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn add_shape(&mut self, bounds: Rect) -> FigureId {
        let id = self.drawing.add_shape(bounds);
        self.is_modified = true;
        id
    }

    /// Adds a prepared object under a fresh id.
    pub fn add_object(&mut self, object: DrawingObject) -> FigureId {
        let id = self.drawing.add_object(object);
        self.is_modified = true;
        id
    }

    /// Removes a shape; a selected shape leaves the selection too.
    pub fn remove_shape(&mut self, id: FigureId) -> Option<DrawingObject> {
        let removed = self.drawing.remove_shape(id)?;
        self.is_modified = true;
        self.update_enabled_state();
        Some(removed)
    }

    pub fn select(&mut self, id: FigureId) -> Result<bool> {
        let changed = self.drawing.select(id)?;
        self.update_enabled_state();
        Ok(changed)
    }

    pub fn deselect(&mut self, id: FigureId) -> bool {
        let changed = self.drawing.deselect(id);
        self.update_enabled_state();
        changed
    }

    pub fn toggle_selection(&mut self, id: FigureId) -> Result<bool> {
        let selected = self.drawing.toggle_selection(id)?;
        self.update_enabled_state();
        Ok(selected)
    }

    pub fn select_only(&mut self, ids: &[FigureId]) -> Result<()> {
        self.drawing.select_only(ids)?;
        self.update_enabled_state();
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.drawing.select_all();
        self.update_enabled_state();
    }

    pub fn deselect_all(&mut self) {
        self.drawing.deselect_all();
        self.update_enabled_state();
    }

    pub fn actions(&self) -> &AlignActions {
        &self.align_actions
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn history(&self) -> &UndoRedoManager {
        &self.history
    }

    /// Aligns the selection if the action is enabled.
    ///
    /// Returns `None` when the action is disabled.
    pub fn align(&mut self, strategy: AlignStrategy) -> Option<AlignReport> {
        let action = self.align_actions.get(strategy);
        if !action.is_enabled() {
            tracing::debug!("Align {} ignored: action disabled", strategy);
            return None;
        }
        let report = action.perform(&mut self.drawing, &mut self.history);
        if report.moved > 0 {
            self.is_modified = true;
        }
        Some(report)
    }

    /// Dispatches a key stroke to the bound action.
    ///
    /// Returns `None` if nothing is bound to the stroke or the bound action
    /// is disabled.
    pub fn handle_key(&mut self, stroke: KeyStroke) -> Option<AlignReport> {
        let key = self.shortcuts.lookup(&stroke)?;
        let strategy = AlignStrategy::from_resource_key(key)?;
        self.align(strategy)
    }

    /// Undo last change
    pub fn undo(&mut self) -> Option<String> {
        let label = self.history.undo(&mut self.drawing)?;
        self.is_modified = true;
        Some(label)
    }

    /// Redo last undo
    pub fn redo(&mut self) -> Option<String> {
        let label = self.history.redo(&mut self.drawing)?;
        self.is_modified = true;
        Some(label)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
