//! Room type

use serde::{Deserialize, Serialize};

use crate::Renderer;

/// A physical location hosting one or more renderer devices.
///
/// Rooms appear nested under a zone or standalone in the unassigned and
/// available lists. The `name` is the human-facing identifier and is not
/// guaranteed unique across the topology; the `udn` is globally unique
/// when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Human-facing room name
    #[serde(default)]
    pub name: Option<String>,

    /// Power state as reported by the provider. Open string set
    /// (e.g. `ACTIVE`, `AUTOMATIC_STANDBY`); unknown values pass through.
    #[serde(default)]
    pub power_state: Option<String>,

    /// Globally unique device identifier
    #[serde(default)]
    pub udn: Option<String>,

    /// Renderer devices hosted in this room
    #[serde(default)]
    pub renderers: Vec<Renderer>,
}

impl Room {
    /// Room with just a name, for building snapshots programmatically
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The preferred stable identity of this room: the UDN when present and
    /// non-empty, otherwise the name. `None` when neither is usable.
    pub fn key(&self) -> Option<&str> {
        match self.udn.as_deref() {
            Some(udn) if !udn.is_empty() => Some(udn),
            _ => self.name.as_deref().filter(|n| !n.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_room() {
        let room: Room = serde_json::from_str(r#"{ "name": "Bad" }"#).unwrap();
        assert_eq!(room.name.as_deref(), Some("Bad"));
        assert!(room.power_state.is_none());
        assert!(room.udn.is_none());
        assert!(room.renderers.is_empty());
    }

    #[test]
    fn test_unknown_power_state_passes_through() {
        let room: Room =
            serde_json::from_str(r#"{ "name": "Bad", "powerState": "SOMETHING_NEW" }"#).unwrap();
        assert_eq!(room.power_state.as_deref(), Some("SOMETHING_NEW"));
    }

    #[test]
    fn test_key_prefers_udn() {
        let room: Room =
            serde_json::from_str(r#"{ "name": "Bad", "udn": "uuid:77aa" }"#).unwrap();
        assert_eq!(room.key(), Some("uuid:77aa"));
    }

    #[test]
    fn test_key_falls_back_to_name() {
        assert_eq!(Room::named("Bad").key(), Some("Bad"));

        let empty_udn: Room = serde_json::from_str(r#"{ "name": "Bad", "udn": "" }"#).unwrap();
        assert_eq!(empty_udn.key(), Some("Bad"));
    }

    #[test]
    fn test_key_absent_for_anonymous_room() {
        let room: Room = serde_json::from_str("{}").unwrap();
        assert_eq!(room.key(), None);

        let blank: Room = serde_json::from_str(r#"{ "name": "" }"#).unwrap();
        assert_eq!(blank.key(), None);
    }
}
