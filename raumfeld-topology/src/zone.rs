//! Zone type

use serde::{Deserialize, Serialize};

use crate::Room;

/// A grouping of rooms currently playing audio together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Globally unique zone identifier, when the provider reports one
    #[serde(default)]
    pub udn: Option<String>,

    /// Display name of the zone, when the provider reports one
    #[serde(default)]
    pub name: Option<String>,

    /// Rooms assigned to this zone, in provider order
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Zone {
    /// Number of rooms assigned to this zone
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_zone() {
        let zone: Zone = serde_json::from_str("{}").unwrap();
        assert!(zone.udn.is_none());
        assert_eq!(zone.room_count(), 0);
    }

    #[test]
    fn test_deserialize_zone_with_rooms() {
        let zone: Zone = serde_json::from_str(
            r#"{
                "udn": "uuid:zone-1",
                "rooms": [{ "name": "Wohnzimmer" }, { "name": "Küche" }]
            }"#,
        )
        .unwrap();
        assert_eq!(zone.udn.as_deref(), Some("uuid:zone-1"));
        assert_eq!(zone.room_count(), 2);
    }
}
