//! Canonical path derivation for topology entities

use raumfeld_topology::Room;
use raumfeld_tree::TreePath;

/// Which room field keys the room's tree path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySource {
    /// Key by the human-facing room name. The observed behavior of the
    /// control layer's tree; collides when two rooms share a name.
    #[default]
    RoomName,
    /// Key by the room's UDN, collision-resistant across same-named rooms
    Udn,
}

/// Derives deterministic, collision-resistant paths for rooms.
///
/// The same logical room always yields the same path across passes; the
/// name is carried into the path verbatim apart from sanitization, never
/// coerced through any numeric representation.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    root: TreePath,
    key: KeySource,
}

impl PathBuilder {
    /// A builder rooted at `root`, keying rooms by `key`
    pub fn new(root: TreePath, key: KeySource) -> Self {
        Self { root, key }
    }

    /// A builder over the canonical `rooms` root, keyed by room name
    pub fn rooms() -> Self {
        Self::new(TreePath::root("rooms"), KeySource::default())
    }

    /// The root under which all room containers live
    pub fn root(&self) -> &TreePath {
        &self.root
    }

    /// The container path for `room`, or `None` when the keying field is
    /// missing or empty (a malformed entity, skipped by the caller)
    pub fn room_path(&self, room: &Room) -> Option<TreePath> {
        let key = match self.key {
            KeySource::RoomName => room.name.as_deref(),
            KeySource::Udn => room.udn.as_deref(),
        }?;
        if key.is_empty() {
            return None;
        }
        Some(self.root.join(sanitize_segment(key)))
    }
}

/// Map a display name to a path-safe segment.
///
/// The separator, whitespace, control characters, and punctuation the
/// backend reserves are each replaced with `_`. Case is preserved.
pub fn sanitize_segment(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() || is_reserved(c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '.' | '*' | '?' | '"' | '\'' | '[' | ']' | ';' | ',' | '<' | '>' | '\\' | '/' | '|' | '~' | '`'
    )
}
