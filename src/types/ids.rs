use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a row or column, independent of its display position.
///
/// Ids are opaque strings (UUIDs or UUID prefixes). Two entities never share
/// an id, and an entity keeps its id for as long as the grid it belongs to
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StableId(String);

impl StableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StableId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StableId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StableId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
