//! Canvas: the scene model.
//!
//! Owns the shape list (paint order, later entries on top), the groups and
//! the selection. Every mutation keeps the selection and the groups pointing
//! at live shapes only. Operations addressing a missing identity are silent
//! no-ops.

mod operations;
mod types;

pub use types::Group;

use crate::model::{GroupId, IdGenerator, Shape, ShapeId};
use crate::selection_manager::SelectionManager;

/// Canvas state managing shapes, groups and selection.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    groups: Vec<Group>,
    selection: SelectionManager,
    ids: IdGenerator,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    /// Gets a reference to a shape by ID.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub(crate) fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The group that contains `shape`, if any.
    pub fn group_of(&self, shape: ShapeId) -> Option<GroupId> {
        self.groups.iter().find(|g| g.contains(shape)).map(|g| g.id)
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Selected shapes in selection order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.selection
            .selected()
            .iter()
            .filter_map(move |id| self.shape(*id))
    }

    /// The sole selected shape, if exactly one is selected.
    pub fn sole_selected(&self) -> Option<&Shape> {
        self.selection.sole().and_then(|id| self.shape(id))
    }

    /// The identity generator shared by shapes and groups.
    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Applies a pointer click to the selection; returns whether it changed.
    pub fn click_select(&mut self, hit: Option<ShapeId>, multi: bool) -> bool {
        let hit = hit.filter(|id| self.shape(*id).is_some());
        self.selection.click(hit, multi)
    }

    /// Selects a shape by identity (hierarchy click). Without `multi` the
    /// selection is replaced, with it membership is toggled.
    pub fn select_by_id(&mut self, id: ShapeId, multi: bool) -> bool {
        if self.shape(id).is_none() {
            return false;
        }
        if multi {
            self.selection.toggle(id);
        } else {
            self.selection.select_only(id);
        }
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = !self.selection.is_empty();
        self.selection.clear();
        changed
    }

    /// Removes every shape and group and clears the selection. The identity
    /// generator keeps counting.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.groups.clear();
        self.selection.clear();
    }
}
