use drawkit_core::FigureId;

/// Manages shape selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking which shapes are selected, in the order they were selected
/// - Designating the most recently selected shape as the "primary" selection
/// - Multi-select operations (toggle, select all, select only)
///
/// # Selection Model
///
/// - **Ordered Set**: A shape appears at most once; order is selection order
/// - **Primary Selection**: The last shape in the order, if any
///
/// The manager only stores ids. Whether an id still refers to a live shape is
/// the owning drawing's concern (see `Drawing::remove_shape`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Vec<FigureId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// assert_eq!(manager.count(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Returns the primary (most recently selected) shape.
    pub fn primary(&self) -> Option<FigureId> {
        self.selected.last().copied()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[FigureId] {
        &self.selected
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: FigureId) -> bool {
        self.selected.contains(&id)
    }

    /// Adds `id` to the selection.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn select(&mut self, id: FigureId) -> bool {
        if self.is_selected(id) {
            return false;
        }
        self.selected.push(id);
        true
    }

    /// Removes `id` from the selection, returning `true` if it was selected.
    pub fn deselect(&mut self, id: FigureId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| *s != id);
        self.selected.len() != before
    }

    /// Toggles `id` (Shift+click behavior).
    ///
    /// # Returns
    ///
    /// `true` if `id` is selected afterwards.
    pub fn toggle(&mut self, id: FigureId) -> bool {
        if self.deselect(id) {
            false
        } else {
            self.selected.push(id);
            true
        }
    }

    /// Replaces the selection with `ids`, dropping duplicates.
    pub fn select_only<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = FigureId>,
    {
        self.selected.clear();
        for id in ids {
            self.select(id);
        }
    }

    /// Selects every id in `ids` (typically the full draw order).
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = FigureId>,
    {
        for id in ids {
            self.select(id);
        }
    }

    /// Deselects all shapes.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }
}
