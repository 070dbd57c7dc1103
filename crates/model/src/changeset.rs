//! Changesets and their discussions.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::object::{ChangesetId, UserId};
use crate::tag::TagList;
use crate::timestamp::Timestamp;

/// A comment in a changeset discussion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangesetComment {
    pub date: Timestamp,
    pub uid: UserId,
    pub user: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Changeset {
    pub id: ChangesetId,
    pub created_at: Timestamp,
    /// Unset while the changeset is still open.
    pub closed_at: Timestamp,
    pub uid: UserId,
    pub user: String,
    pub num_changes: u32,
    pub num_comments: u32,
    pub bounds: BoundingBox,
    pub tags: TagList,
    pub discussion: Vec<ChangesetComment>,
}

impl Changeset {
    pub fn is_open(&self) -> bool {
        !self.closed_at.is_set()
    }

    pub fn user_is_anonymous(&self) -> bool {
        self.uid == 0
    }
}
