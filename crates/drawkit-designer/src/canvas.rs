//! In-memory drawing: shapes in draw order plus the current selection.

use crate::selection_manager::SelectionManager;
use drawkit_core::{DrawingView, Error, Figure, FigureId, Rect, Result, Translation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Drawing object on the canvas that can be selected and manipulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: FigureId,
    #[serde(default)]
    pub name: String,
    pub bounds: Rect,
    /// Locked shapes refuse geometric transformations.
    #[serde(default)]
    pub locked: bool,
    /// Children of a group move with the group, never on their own.
    #[serde(default)]
    pub group_id: Option<u64>,
    #[serde(skip)]
    revision: u64,
    #[serde(skip)]
    changing: bool,
}

impl DrawingObject {
    /// Creates a new drawing object.
    pub fn new(id: FigureId, bounds: Rect) -> Self {
        Self {
            id,
            name: format!("Shape {}", id),
            bounds,
            locked: false,
            group_id: None,
            revision: 0,
            changing: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Number of completed changes since the object was created or loaded.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True between `will_change` and `changed`.
    pub fn is_changing(&self) -> bool {
        self.changing
    }
}

impl Figure for DrawingObject {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_transformable(&self) -> bool {
        !self.locked && self.group_id.is_none()
    }

    fn will_change(&mut self) {
        self.changing = true;
    }

    fn changed(&mut self) {
        self.changing = false;
        self.revision += 1;
    }

    fn translate(&mut self, t: Translation) {
        self.bounds = self.bounds.translated(t);
    }
}

fn default_enabled() -> bool {
    true
}

/// Canvas state managing shapes and the selection.
///
/// Deserializing rejects drawings in which two shapes share an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DrawingFile")]
pub struct Drawing {
    shapes: Vec<DrawingObject>,
    enabled: bool,
    #[serde(skip)]
    next_id: FigureId,
    #[serde(skip)]
    selection: SelectionManager,
}

/// On-disk form of a [`Drawing`].
#[derive(Deserialize)]
struct DrawingFile {
    shapes: Vec<DrawingObject>,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

impl TryFrom<DrawingFile> for Drawing {
    type Error = Error;

    fn try_from(file: DrawingFile) -> Result<Self> {
        let mut seen = HashSet::with_capacity(file.shapes.len());
        if let Some(shape) = file.shapes.iter().find(|s| !seen.insert(s.id)) {
            return Err(Error::DuplicateShape { id: shape.id });
        }
        let next_id = file.shapes.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Ok(Self {
            shapes: file.shapes,
            enabled: file.enabled,
            next_id,
            selection: SelectionManager::new(),
        })
    }
}

impl Drawing {
    /// Creates an empty, enabled drawing.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            enabled: true,
            next_id: 1,
            selection: SelectionManager::new(),
        }
    }

    /// Parses a drawing from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.shapes.iter()
    }

    /// Adds a shape with the given bounds and returns its id.
    pub fn add_shape(&mut self, bounds: Rect) -> FigureId {
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.push(DrawingObject::new(id, bounds));
        id
    }

    /// Adds a prepared object, assigning it a fresh id.
    pub fn add_object(&mut self, mut object: DrawingObject) -> FigureId {
        let id = self.next_id;
        self.next_id += 1;
        object.id = id;
        self.shapes.push(object);
        id
    }

    /// Removes a shape, dropping it from the selection as well.
    pub fn remove_shape(&mut self, id: FigureId) -> Option<DrawingObject> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        self.selection.deselect(id);
        Some(self.shapes.remove(index))
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: FigureId) -> Option<&DrawingObject> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_shape_mut(&mut self, id: FigureId) -> Option<&mut DrawingObject> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    fn ensure_exists(&self, id: FigureId) -> Result<()> {
        if self.get_shape(id).is_some() {
            Ok(())
        } else {
            Err(Error::UnknownShape { id })
        }
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Adds a shape to the selection.
    pub fn select(&mut self, id: FigureId) -> Result<bool> {
        self.ensure_exists(id)?;
        Ok(self.selection.select(id))
    }

    pub fn deselect(&mut self, id: FigureId) -> bool {
        self.selection.deselect(id)
    }

    pub fn toggle_selection(&mut self, id: FigureId) -> Result<bool> {
        self.ensure_exists(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Replaces the selection. Fails without changing anything if an id is unknown.
    pub fn select_only(&mut self, ids: &[FigureId]) -> Result<()> {
        for id in ids {
            self.ensure_exists(*id)?;
        }
        self.selection.select_only(ids.iter().copied());
        Ok(())
    }

    pub fn select_all(&mut self) {
        let ids: Vec<FigureId> = self.shapes.iter().map(|s| s.id).collect();
        self.selection.select_all(ids);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingView for Drawing {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn selected_ids(&self) -> Vec<FigureId> {
        self.selection.ids().to_vec()
    }

    fn selection_count(&self) -> usize {
        self.selection.count()
    }

    fn figure(&self, id: FigureId) -> Option<&dyn Figure> {
        self.get_shape(id).map(|s| s as &dyn Figure)
    }

    fn figure_mut(&mut self, id: FigureId) -> Option<&mut dyn Figure> {
        self.get_shape_mut(id).map(|s| s as &mut dyn Figure)
    }
}
