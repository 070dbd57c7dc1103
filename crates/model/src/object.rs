//! Nodes, ways, relations and the metadata they share.

use serde::{Deserialize, Serialize};

use crate::item_type::ItemType;
use crate::location::Location;
use crate::tag::TagList;
use crate::timestamp::Timestamp;

pub type ObjectId = i64;
pub type ObjectVersion = u32;
pub type ChangesetId = u32;
pub type UserId = u32;

/// Descriptive attributes common to nodes, ways, relations and areas.
///
/// Every field uses its zero value as the "unset" marker: version 0,
/// timestamp 0, changeset 0, uid 0 and an empty user name.
///
/// In JSON a deletion is given either as `"deleted": true` or as
/// `"visible": false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MetadataRepr")]
pub struct Metadata {
    pub version: ObjectVersion,
    pub timestamp: Timestamp,
    pub changeset: ChangesetId,
    pub uid: UserId,
    pub user: String,
    pub deleted: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetadataRepr {
    version: ObjectVersion,
    timestamp: Timestamp,
    changeset: ChangesetId,
    uid: UserId,
    user: String,
    deleted: bool,
    visible: Option<bool>,
}

impl From<MetadataRepr> for Metadata {
    fn from(repr: MetadataRepr) -> Self {
        Self {
            version: repr.version,
            timestamp: repr.timestamp,
            changeset: repr.changeset,
            uid: repr.uid,
            user: repr.user,
            deleted: repr.deleted || repr.visible == Some(false),
        }
    }
}

impl Metadata {
    pub fn visible(&self) -> bool {
        !self.deleted
    }

    /// An empty user name marks an anonymous or unknown author.
    pub fn user_is_anonymous(&self) -> bool {
        self.user.is_empty()
    }
}

/// Access to the parts every versioned object has.
pub trait OsmObject {
    fn id(&self) -> ObjectId;
    fn meta(&self) -> &Metadata;
    fn tags(&self) -> &TagList;

    fn version(&self) -> ObjectVersion {
        self.meta().version
    }

    fn visible(&self) -> bool {
        self.meta().visible()
    }
}

macro_rules! impl_osm_object {
    ($($ty:ty),*) => {
        $(
            impl OsmObject for $ty {
                fn id(&self) -> ObjectId {
                    self.id
                }

                fn meta(&self) -> &Metadata {
                    &self.meta
                }

                fn tags(&self) -> &TagList {
                    &self.tags
                }
            }
        )*
    };
}

impl_osm_object!(Node, Way, Relation, crate::area::Area);

/// A reference from a way or ring to a node, optionally with its location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    #[serde(rename = "ref")]
    pub id: ObjectId,
    #[serde(default)]
    pub location: Location,
}

impl NodeRef {
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            location: Location::undefined(),
        }
    }

    pub fn with_location(id: ObjectId, location: Location) -> Self {
        Self { id, location }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: ObjectId,
    #[serde(flatten)]
    pub meta: Metadata,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub tags: TagList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Way {
    pub id: ObjectId,
    #[serde(flatten)]
    pub meta: Metadata,
    #[serde(default)]
    pub nodes: Vec<NodeRef>,
    #[serde(default)]
    pub tags: TagList,
}

/// One member of a relation. Member order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(rename = "ref")]
    pub id: ObjectId,
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn new(item_type: ItemType, id: ObjectId, role: impl Into<String>) -> Self {
        Self {
            item_type,
            id,
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub id: ObjectId,
    #[serde(flatten)]
    pub meta: Metadata,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub tags: TagList,
}
