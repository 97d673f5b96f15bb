use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Unique identifier for an [`Item`](crate::Item).
///
/// An `ItemId` is a UUID v7, generated by the store when an item is
/// inserted and immutable thereafter. Ids are never reused after deletion.
///
/// Parsing distinguishes two failure categories the API must keep apart: a
/// string that is not a syntactically valid UUID fails here with
/// [`TypeError::InvalidId`] (the "malformed identifier" case), while a
/// well-formed id with no matching record is a store-level miss.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh id. UUID v7 keeps ids roughly insertion-ordered.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse from the canonical hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| TypeError::InvalidId(s.to_string()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
