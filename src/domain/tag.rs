use serde::Deserialize;

use crate::domain::release::Release;

/// Commit a tag points at, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRef {
    pub id: String,
}

/// A version tag as listed by the remote host.
///
/// The tag name is opaque to this system; the host is authoritative for
/// uniqueness. Tags are only ever read and created, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub commit: Option<CommitRef>,
    #[serde(default)]
    pub release: Option<Release>,
}

impl Tag {
    /// Create a bare tag with just a name, as test fixtures do.
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            message: None,
            commit: None,
            release: None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
