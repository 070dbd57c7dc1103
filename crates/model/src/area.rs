//! Polygonal areas assembled from closed ways or multipolygon relations.
//!
//! An area owns its outer rings, and every outer ring owns the inner rings
//! (holes) that lie inside it. Inner rings therefore can never exist on their
//! own.

use serde::{Deserialize, Serialize};

use crate::item_type::ItemType;
use crate::object::{Metadata, NodeRef, ObjectId};
use crate::tag::TagList;

/// Converts the id of a way or relation into the id of the area built from it.
///
/// Areas from ways get even ids, areas from relations get odd ids. The sign
/// of the original id is kept.
pub fn object_id_to_area_id(id: ObjectId, item_type: ItemType) -> ObjectId {
    let area_id = id.abs() * 2 + i64::from(item_type == ItemType::Relation);
    if id < 0 { -area_id } else { area_id }
}

/// Inverse of [`object_id_to_area_id`].
pub fn area_id_to_object_id(id: ObjectId) -> ObjectId {
    id / 2
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerRing {
    #[serde(default)]
    pub nodes: Vec<NodeRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OuterRing {
    #[serde(default)]
    pub nodes: Vec<NodeRef>,
    #[serde(default)]
    pub inner_rings: Vec<InnerRing>,
}

impl OuterRing {
    pub fn new(nodes: Vec<NodeRef>) -> Self {
        Self {
            nodes,
            inner_rings: Vec::new(),
        }
    }

    pub fn with_inner_rings(nodes: Vec<NodeRef>, inner_rings: Vec<InnerRing>) -> Self {
        Self { nodes, inner_rings }
    }

    /// The holes of this ring, in stored order.
    pub fn inner_rings(&self) -> std::slice::Iter<'_, InnerRing> {
        self.inner_rings.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: ObjectId,
    #[serde(flatten)]
    pub meta: Metadata,
    #[serde(default)]
    pub outer_rings: Vec<OuterRing>,
    #[serde(default)]
    pub tags: TagList,
}

impl Area {
    /// True if this area was built from a closed way.
    pub fn from_way(&self) -> bool {
        self.id.abs() & 0x1 == 0
    }

    /// Id of the way or relation this area was built from.
    pub fn orig_id(&self) -> ObjectId {
        area_id_to_object_id(self.id)
    }

    /// Number of (outer, inner) rings.
    pub fn num_rings(&self) -> (usize, usize) {
        let inner = self.outer_rings.iter().map(|r| r.inner_rings.len()).sum();
        (self.outer_rings.len(), inner)
    }

    pub fn is_multipolygon(&self) -> bool {
        self.outer_rings.len() > 1
    }
}
