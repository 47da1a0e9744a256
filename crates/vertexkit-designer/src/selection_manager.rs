use crate::model::ShapeId;

/// Manages the ordered set of selected shapes.
///
/// `SelectionManager` is responsible for:
/// - Keeping selection entries unique and in selection order
/// - Applying click semantics (replace vs. toggle)
/// - Pruning entries that no longer reference a live shape
///
/// # Selection Model
///
/// - **Single click**: a hit replaces the selection with that shape, a miss
///   clears it
/// - **Multi-select** (Shift+click): a hit toggles membership, a miss does
///   nothing
/// - **Sole selection**: tools such as vertex editing and duplication only
///   act when exactly one shape is selected
///
/// # Design
///
/// The manager only stores identities. The canvas owns the shapes and calls
/// [`SelectionManager::remove`] or [`SelectionManager::prune`] whenever a
/// shape disappears so stale entries never survive a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Vec<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use vertexkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected identities in selection order.
    pub fn selected(&self) -> &[ShapeId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns the selected shape when exactly one is selected.
    pub fn sole(&self) -> Option<ShapeId> {
        match self.selected.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replaces the selection with exactly `id`.
    pub fn select_only(&mut self, id: ShapeId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Toggles membership of `id`.
    ///
    /// # Returns
    ///
    /// `true` if the shape is selected afterwards.
    pub fn toggle(&mut self, id: ShapeId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.selected.push(id);
            true
        }
    }

    /// Applies a pointer click to the selection.
    ///
    /// # Arguments
    ///
    /// * `hit` - The shape under the pointer, if any
    /// * `multi` - If `true`, enables multi-select mode (Shift+click behavior)
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vertexkit_designer::model::ShapeId;
    /// use vertexkit_designer::selection_manager::SelectionManager;
    ///
    /// let mut manager = SelectionManager::new();
    /// manager.click(Some(ShapeId(1)), false);
    /// manager.click(Some(ShapeId(2)), true);
    /// assert_eq!(manager.selected(), &[ShapeId(1), ShapeId(2)]);
    ///
    /// manager.click(None, true);
    /// assert_eq!(manager.len(), 2);
    /// manager.click(None, false);
    /// assert!(manager.is_empty());
    /// ```
    pub fn click(&mut self, hit: Option<ShapeId>, multi: bool) -> bool {
        match (hit, multi) {
            (Some(id), true) => {
                self.toggle(id);
                true
            }
            (Some(id), false) => {
                if self.sole() == Some(id) {
                    false
                } else {
                    self.select_only(id);
                    true
                }
            }
            (None, true) => false,
            (None, false) => {
                let changed = !self.selected.is_empty();
                self.clear();
                changed
            }
        }
    }

    /// Removes `id` from the selection.
    ///
    /// # Returns
    ///
    /// `true` if it was selected.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| *s != id);
        before != self.selected.len()
    }

    /// Drops every entry for which `is_live` returns `false`.
    pub fn prune(&mut self, mut is_live: impl FnMut(ShapeId) -> bool) {
        self.selected.retain(|id| is_live(*id));
    }
}
