//! Raumfeld Topology Model
//!
//! Data types for the combined topology state reports emitted by the
//! Raumfeld control layer: zones, the rooms inside them, and the renderer
//! devices inside the rooms.
//!
//! Reports arrive as externally-produced JSON with no schema guarantees.
//! Every field a provider might omit is modeled as `Option`; validation of
//! what is actually required happens downstream, where a missing field can
//! be skipped with context instead of failing deserialization wholesale.
//!
//! # Quick Start
//!
//! ```rust
//! use raumfeld_topology::Snapshot;
//!
//! let snapshot: Snapshot = serde_json::from_str(r#"{
//!     "zones": [{
//!         "udn": "uuid:zone-1",
//!         "rooms": [{ "name": "Kitchen", "powerState": "ACTIVE", "udn": "uuid:room-1" }]
//!     }],
//!     "availableRooms": []
//! }"#).unwrap();
//!
//! for room in snapshot.rooms() {
//!     println!("{:?}", room.name);
//! }
//! ```

mod renderer;
mod room;
mod snapshot;
mod zone;

pub use renderer::Renderer;
pub use room::Room;
pub use snapshot::Snapshot;
pub use zone::Zone;
