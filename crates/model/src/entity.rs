//! The closed set of entity kinds and buffers of them.

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::changeset::Changeset;
use crate::item_type::ItemType;
use crate::object::{Node, Relation, Way};

/// Any entity that can appear in a buffer.
///
/// In JSON the kind is given by a `"type"` member next to the entity's own
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Node(Node),
    Way(Way),
    Relation(Relation),
    Area(Area),
    Changeset(Changeset),
}

impl Entity {
    pub fn item_type(&self) -> ItemType {
        match self {
            Entity::Node(_) => ItemType::Node,
            Entity::Way(_) => ItemType::Way,
            Entity::Relation(_) => ItemType::Relation,
            Entity::Area(_) => ItemType::Area,
            Entity::Changeset(_) => ItemType::Changeset,
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Entity {
                fn from(value: $variant) -> Self {
                    Entity::$variant(value)
                }
            }
        )*
    };
}

impl_from_entity!(Node, Way, Relation, Area, Changeset);

/// An ordered batch of entities written as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityBuffer {
    entities: Vec<Entity>,
}

impl EntityBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }
}

impl From<Vec<Entity>> for EntityBuffer {
    fn from(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

impl FromIterator<Entity> for EntityBuffer {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntityBuffer {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
