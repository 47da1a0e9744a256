//! Canvas type definitions: Group.

use serde::{Deserialize, Serialize};

use crate::model::{GroupId, ShapeId};

/// A named set of shapes. A shape belongs to at most one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub shape_ids: Vec<ShapeId>,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            shape_ids: Vec::new(),
        }
    }

    pub fn contains(&self, shape: ShapeId) -> bool {
        self.shape_ids.contains(&shape)
    }

    pub(crate) fn remove(&mut self, shape: ShapeId) -> bool {
        let before = self.shape_ids.len();
        self.shape_ids.retain(|id| *id != shape);
        before != self.shape_ids.len()
    }
}
