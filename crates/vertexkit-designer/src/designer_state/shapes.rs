//! Shape commands (delete, duplicate, inspector edits, groups) for designer state.

use tracing::{debug, info};
use vertexkit_core::Color;

use super::{DesignerState, Outcome, ToolSession};
use crate::model::{GroupId, ShapeId, ShapeKind, ShapeMetadata, Topology};

fn changed(changed: bool) -> Outcome {
    if changed {
        Outcome::commit()
    } else {
        Outcome::none()
    }
}

impl DesignerState {
    /// Deletes the selected shape(s).
    pub fn delete_selected(&mut self) -> Outcome {
        let removed = self.canvas.remove_selected();
        if removed > 0 {
            info!("Deleted {} shape(s)", removed);
            self.drop_stale_focus();
        }
        changed(removed > 0)
    }

    /// Deletes one shape by identity; missing shapes are ignored.
    pub fn delete_shape(&mut self, id: ShapeId) -> Outcome {
        let removed = self.canvas.remove_shape(id).is_some();
        if removed {
            info!("Deleted {}", id);
            self.drop_stale_focus();
        }
        changed(removed)
    }

    /// Duplicates the sole selected shape.
    pub fn duplicate_selected(&mut self) -> Outcome {
        match self.canvas.duplicate_selected() {
            Some(id) => {
                debug!("Duplicated selection as {}", id);
                self.drop_stale_focus();
                Outcome::commit()
            }
            None => Outcome::none(),
        }
    }

    pub fn rename_shape(&mut self, id: ShapeId, name: &str) -> Outcome {
        changed(self.canvas.rename(id, name))
    }

    pub fn set_shape_color(&mut self, id: ShapeId, color: Color) -> Outcome {
        changed(self.canvas.set_color(id, color))
    }

    pub fn set_shape_topology(&mut self, id: ShapeId, topology: Topology) -> Outcome {
        changed(self.canvas.set_topology(id, topology))
    }

    /// Rebuilds a rounded rectangle with a new corner radius ratio and
    /// segment count, keeping its bounding box.
    pub fn regenerate_corners(&mut self, id: ShapeId, radius_ratio: f64, segments: u32) -> Outcome {
        let is_rounded = self
            .canvas
            .shape(id)
            .is_some_and(|s| s.kind == ShapeKind::RoundedRectangle);
        if !is_rounded {
            return Outcome::none();
        }
        let metadata = ShapeMetadata::RoundedCorners {
            radius_ratio,
            segments,
        };
        let outcome = changed(self.canvas.regenerate(id, metadata));
        self.drop_stale_focus();
        outcome
    }

    /// Rebuilds a circle (segments) or polygon (sides) around its centre,
    /// keeping its radius.
    pub fn regenerate_ring(&mut self, id: ShapeId, count: u32) -> Outcome {
        let Some(shape) = self.canvas.shape(id) else {
            return Outcome::none();
        };
        let metadata = match (shape.kind, shape.ring_radius()) {
            (ShapeKind::Circle, Some(radius)) => ShapeMetadata::Circle {
                segments: count,
                radius,
            },
            (ShapeKind::Polygon, Some(radius)) => ShapeMetadata::Polygon {
                sides: count,
                radius,
            },
            _ => return Outcome::none(),
        };
        let outcome = changed(self.canvas.regenerate(id, metadata));
        self.drop_stale_focus();
        outcome
    }

    /// Hierarchy click: replace or toggle the selection.
    pub fn select_shape(&mut self, id: ShapeId, multi: bool) -> Outcome {
        if self.canvas.select_by_id(id, multi) {
            Outcome::redraw()
        } else {
            Outcome::none()
        }
    }

    pub fn add_group(&mut self, name: &str) -> (GroupId, Outcome) {
        (self.canvas.add_group(name), Outcome::commit())
    }

    pub fn assign_to_group(&mut self, shape: ShapeId, group: GroupId) -> Outcome {
        changed(self.canvas.assign_to_group(shape, group))
    }

    pub fn ungroup_shape(&mut self, shape: ShapeId) -> Outcome {
        changed(self.canvas.ungroup_shape(shape))
    }

    pub fn delete_group(&mut self, group: GroupId) -> Outcome {
        changed(self.canvas.delete_group(group))
    }

    /// Clears a vertex focus or hover that no longer points at a vertex of
    /// the sole selected shape.
    fn drop_stale_focus(&mut self) {
        let sole = self.canvas.sole_selected();
        let valid = |shape_id: ShapeId, index: usize| {
            sole.is_some_and(|s| s.id == shape_id && index < s.vertices.len())
        };
        if let ToolSession::EditingVertex {
            shape_id,
            vertex_index,
        } = self.session
        {
            if !valid(shape_id, vertex_index) {
                self.session = ToolSession::Idle;
            }
        }
        if let Some(index) = self.hovered_vertex {
            if sole.is_none_or(|s| index >= s.vertices.len()) {
                self.hovered_vertex = None;
            }
        }
    }
}
