//! Canvas mutations: add/remove, move, vertex edits, regeneration, groups.

use std::collections::HashSet;

use tracing::debug;
use vertexkit_core::constants::DUPLICATE_OFFSET;
use vertexkit_core::Color;

use super::{Canvas, Group};
use crate::model::{GroupId, Point, Shape, ShapeId, ShapeMetadata, Topology};

impl Canvas {
    /// Appends a shape on top of the paint order.
    ///
    /// A shape without an identity, or whose identity is already taken, gets
    /// a fresh one; a blank name is derived from the kind and identity.
    /// Vertices are clamped into `[-1, 1]`.
    pub fn add_shape(&mut self, mut shape: Shape) -> ShapeId {
        if !shape.id.is_assigned() || self.shape(shape.id).is_some() {
            shape.id = self.ids.next_shape_id();
        } else {
            self.ids.observe(shape.id.0);
        }
        if shape.name.trim().is_empty() {
            shape.name = format!("{}_{}", shape.kind.name_prefix(), shape.id.0);
        }
        for v in &mut shape.vertices {
            *v = v.clamped();
        }
        let id = shape.id;
        debug!("Added {} '{}' ({} vertices)", shape.kind, shape.name, shape.vertices.len());
        self.shapes.push(shape);
        id
    }

    /// Adds a shape and makes it the only selected one.
    pub fn commit_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.add_shape(shape);
        self.selection.select_only(id);
        id
    }

    /// Removes a shape together with its group membership and selection entry.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        let shape = self.shapes.remove(index);
        for group in &mut self.groups {
            group.remove(id);
        }
        self.selection.remove(id);
        Some(shape)
    }

    /// Removes every selected shape; returns how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        let doomed: HashSet<ShapeId> = self.selection.selected().iter().copied().collect();
        if doomed.is_empty() {
            return 0;
        }
        let before = self.shapes.len();
        self.shapes.retain(|s| !doomed.contains(&s.id));
        for group in &mut self.groups {
            group.shape_ids.retain(|id| !doomed.contains(id));
        }
        self.selection.clear();
        before - self.shapes.len()
    }

    /// Translates every vertex of every selected shape, clamping per axis.
    pub fn translate_selected(&mut self, dx: f64, dy: f64) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let selected: HashSet<ShapeId> = self.selection.selected().iter().copied().collect();
        for shape in self.shapes.iter_mut().filter(|s| selected.contains(&s.id)) {
            shape.translate_clamped(dx, dy);
        }
        true
    }

    /// Overwrites one vertex of a shape with a clamped point.
    pub fn set_vertex(&mut self, id: ShapeId, index: usize, point: Point) -> bool {
        self.shape_mut(id)
            .map(|s| s.set_vertex(index, point))
            .unwrap_or(false)
    }

    /// Rebuilds a generated shape in place with new parameters.
    pub fn regenerate(&mut self, id: ShapeId, metadata: ShapeMetadata) -> bool {
        self.shape_mut(id)
            .map(|s| s.regenerate(metadata))
            .unwrap_or(false)
    }

    /// Copies the sole selected shape with a fresh identity, offset by
    /// `(+0.05, +0.05)`, and selects only the copy.
    pub fn duplicate_selected(&mut self) -> Option<ShapeId> {
        let source = self.sole_selected()?.clone();
        let mut copy = source;
        copy.id = self.ids.next_shape_id();
        copy.name = format!("{}_copy", copy.name);
        copy.translate_clamped(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        Some(self.commit_shape(copy))
    }

    /// Renames a shape; blank names are ignored.
    pub fn rename(&mut self, id: ShapeId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.shape_mut(id) {
            Some(shape) => {
                shape.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, id: ShapeId, color: Color) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.color = color;
                true
            }
            None => false,
        }
    }

    /// Changes how a shape's vertices are assembled. The kind is left as is.
    pub fn set_topology(&mut self, id: ShapeId, topology: Topology) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.topology = topology;
                true
            }
            None => false,
        }
    }

    /// Creates an empty group; a blank name becomes `group_<n>`.
    pub fn add_group(&mut self, name: &str) -> GroupId {
        let id = self.ids.next_group_id();
        let name = match name.trim() {
            "" => id.to_string(),
            other => other.to_string(),
        };
        self.groups.push(Group::new(id, name));
        id
    }

    /// Moves a shape into a group, leaving any previous group.
    pub fn assign_to_group(&mut self, shape: ShapeId, group: GroupId) -> bool {
        if self.shape(shape).is_none() || self.group(group).is_none() {
            return false;
        }
        for g in &mut self.groups {
            if g.id == group {
                if !g.contains(shape) {
                    g.shape_ids.push(shape);
                }
            } else {
                g.remove(shape);
            }
        }
        true
    }

    /// Removes a shape from whatever group holds it.
    pub fn ungroup_shape(&mut self, shape: ShapeId) -> bool {
        self.groups
            .iter_mut()
            .fold(false, |changed, g| g.remove(shape) || changed)
    }

    /// Deletes a group; its member shapes stay in the scene.
    pub fn delete_group(&mut self, group: GroupId) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != group);
        before != self.groups.len()
    }

    /// Rebuilds a canvas from loaded parts, repairing anything inconsistent.
    ///
    /// Vertices are clamped, duplicate shape identities are reassigned,
    /// group entries for missing shapes and second memberships are dropped,
    /// and the identity generator is advanced past every loaded identity.
    pub fn from_parts(shapes: Vec<Shape>, groups: Vec<Group>) -> Self {
        let mut canvas = Canvas::new();
        for shape in &shapes {
            canvas.ids.observe(shape.id.0);
        }
        for group in &groups {
            canvas.ids.observe(group.id.0);
        }
        for shape in shapes {
            canvas.add_shape(shape);
        }

        let mut claimed = HashSet::new();
        let mut seen_groups = HashSet::new();
        for mut group in groups {
            if !seen_groups.insert(group.id) {
                group.id = canvas.ids.next_group_id();
            }
            group
                .shape_ids
                .retain(|id| canvas.shape(*id).is_some() && claimed.insert(*id));
            canvas.groups.push(group);
        }
        canvas
    }
}
