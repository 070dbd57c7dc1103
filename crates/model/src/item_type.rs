//! Kinds of entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The kind of an entity or of the target of a relation member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Undefined,
    #[serde(alias = "n")]
    Node,
    #[serde(alias = "w")]
    Way,
    #[serde(alias = "r")]
    Relation,
    #[serde(alias = "a")]
    Area,
    #[serde(alias = "c")]
    Changeset,
}

impl ItemType {
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Undefined => "undefined",
            ItemType::Node => "node",
            ItemType::Way => "way",
            ItemType::Relation => "relation",
            ItemType::Area => "area",
            ItemType::Changeset => "changeset",
        }
    }

    /// Returns the name used for this kind in a relation `<member>`.
    ///
    /// Only nodes, ways and relations can be relation members.
    pub fn member_name(&self) -> Option<&'static str> {
        match self {
            ItemType::Node | ItemType::Way | ItemType::Relation => Some(self.name()),
            ItemType::Undefined | ItemType::Area | ItemType::Changeset => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(ItemType::Undefined),
            "n" | "node" => Ok(ItemType::Node),
            "w" | "way" => Ok(ItemType::Way),
            "r" | "relation" => Ok(ItemType::Relation),
            "a" | "area" => Ok(ItemType::Area),
            "c" | "changeset" => Ok(ItemType::Changeset),
            _ => Err(ModelError::InvalidItemType(s.to_string())),
        }
    }
}
