//! Hierarchical tree paths

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between path segments
pub(crate) const SEPARATOR: char = '.';

/// A dot-joined hierarchical path into the object tree.
///
/// Paths are case-sensitive and compared byte-for-byte. Segment content is
/// the caller's responsibility; path building for externally-supplied names
/// goes through the sanitizer in the sync layer first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath(String);

impl TreePath {
    /// A single-segment root path
    pub fn root(segment: impl Into<String>) -> Self {
        Self(segment.into())
    }

    /// Append one segment
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref();
        let mut path = String::with_capacity(self.0.len() + 1 + segment.len());
        path.push_str(&self.0);
        path.push(SEPARATOR);
        path.push_str(segment);
        Self(path)
    }

    /// The path with the last segment removed, or `None` for a root
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rfind(SEPARATOR)
            .map(|idx| Self(self.0[..idx].to_string()))
    }

    /// The final segment
    pub fn last_segment(&self) -> &str {
        match self.0.rfind(SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// True if `prefix` is this path or a strict ancestor of it.
    ///
    /// Matches whole segments only: `rooms.Kitchen2` does not start with
    /// `rooms.Kitchen`.
    pub fn starts_with(&self, prefix: &TreePath) -> bool {
        if self.0 == prefix.0 {
            return true;
        }
        self.0.starts_with(&prefix.0)
            && self.0.as_bytes().get(prefix.0.len()) == Some(&(SEPARATOR as u8))
    }

    /// Iterate the segments in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// The raw path string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TreePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for TreePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_display() {
        let path = TreePath::root("rooms").join("Kitchen").join("udn");
        assert_eq!(path.to_string(), "rooms.Kitchen.udn");
        assert_eq!(path.last_segment(), "udn");
    }

    #[test]
    fn test_parent() {
        let path = TreePath::root("rooms").join("Kitchen");
        assert_eq!(path.parent(), Some(TreePath::root("rooms")));
        assert_eq!(TreePath::root("rooms").parent(), None);
    }

    #[test]
    fn test_starts_with_matches_whole_segments() {
        let rooms = TreePath::root("rooms");
        let kitchen = rooms.join("Kitchen");
        let kitchen2 = rooms.join("Kitchen2");

        assert!(kitchen.starts_with(&rooms));
        assert!(kitchen.starts_with(&kitchen));
        assert!(kitchen.join("name").starts_with(&kitchen));
        assert!(!kitchen2.starts_with(&kitchen));
        assert!(!rooms.starts_with(&kitchen));
    }

    #[test]
    fn test_segments() {
        let path = TreePath::from("rooms.Kitchen.name");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, ["rooms", "Kitchen", "name"]);
    }
}
