//! Combined topology state report

use serde::{Deserialize, Serialize};

use crate::{Room, Zone};

/// One complete topology state report from the control layer.
///
/// Contains every zone (with its rooms), every room not assigned to a zone,
/// and every room the provider considers available regardless of zone
/// assignment. The same room routinely appears in more than one list.
///
/// A snapshot is immutable for the duration of one reconciliation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Zones currently playing together, each carrying its member rooms
    #[serde(default)]
    pub zones: Vec<Zone>,

    /// Rooms not currently assigned to any zone
    #[serde(default)]
    pub unassigned_rooms: Vec<Room>,

    /// Rooms reported as available, independent of zone assignment
    #[serde(default)]
    pub available_rooms: Vec<Room>,
}

impl Snapshot {
    /// Iterate every room in the report in canonical order: each zone's
    /// rooms in zone order, then unassigned rooms, then available rooms.
    ///
    /// Duplicates are yielded as-is; callers that need distinct rooms
    /// deduplicate by identity themselves.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.zones
            .iter()
            .flat_map(|zone| zone.rooms.iter())
            .chain(self.unassigned_rooms.iter())
            .chain(self.available_rooms.iter())
    }

    /// Total number of room entries across all lists, duplicates included
    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    /// True if the report carries no rooms at all
    pub fn is_empty(&self) -> bool {
        self.rooms().next().is_none()
    }
}
