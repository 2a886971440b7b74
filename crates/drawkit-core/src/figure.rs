//! Collaborator interfaces for figures and drawing views.
//!
//! Commands never own figures. They reach them by id through a
//! [`DrawingView`] that is passed into each invocation.

use crate::geometry::{Rect, Translation};

/// Identifier of a figure within a drawing.
pub type FigureId = u64;

/// A drawable object with a position and size.
pub trait Figure {
    /// The figure's axis-aligned bounding rectangle.
    fn bounds(&self) -> Rect;

    /// Whether the figure accepts geometric transformations.
    ///
    /// Locked figures and children of a group report `false`.
    fn is_transformable(&self) -> bool;

    /// Called before the figure is mutated.
    fn will_change(&mut self) {}

    /// Called after the figure has been mutated.
    fn changed(&mut self) {}

    /// Moves the figure by `t`.
    fn translate(&mut self, t: Translation);
}

/// The view a command operates on: enablement plus the current selection.
pub trait DrawingView {
    /// Whether the view accepts editing.
    fn is_enabled(&self) -> bool;

    /// Ids of the selected figures, in selection order.
    fn selected_ids(&self) -> Vec<FigureId>;

    /// Number of selected figures.
    fn selection_count(&self) -> usize {
        self.selected_ids().len()
    }

    fn figure(&self, id: FigureId) -> Option<&dyn Figure>;

    fn figure_mut(&mut self, id: FigureId) -> Option<&mut dyn Figure>;

    /// Union bounding box of the selected figures, `None` when nothing is selected.
    fn selection_bounds(&self) -> Option<Rect> {
        Rect::union_all(
            self.selected_ids()
                .into_iter()
                .filter_map(|id| self.figure(id))
                .map(|f| f.bounds()),
        )
    }
}

/// Applies `t` to a figure, bracketed by its change notifications.
pub fn transform_figure(figure: &mut dyn Figure, t: Translation) {
    figure.will_change();
    figure.translate(t);
    figure.changed();
}
