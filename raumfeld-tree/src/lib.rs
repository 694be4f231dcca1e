//! Raumfeld Object Tree
//!
//! The persistence seam of the mirror: a hierarchical tree of named
//! container nodes and typed leaf values, addressed by dot-joined paths.
//!
//! The backend itself (an external object store with get/set/delete by path
//! and no transactions) is abstracted behind the [`ObjectTree`] trait; the
//! reconciliation engine only ever talks to that trait. [`MemoryTree`] is
//! the in-process reference implementation used by tests and demos.
//!
//! # Path grammar
//!
//! Segments are joined by `.`. A node's path is a strict prefix of the paths
//! of all leaves it owns; writing a leaf never implicitly creates its
//! ancestor node.
//!
//! ```rust
//! use raumfeld_tree::TreePath;
//!
//! let rooms = TreePath::root("rooms");
//! let leaf = rooms.join("Kitchen").join("powerState");
//! assert_eq!(leaf.to_string(), "rooms.Kitchen.powerState");
//! assert!(leaf.starts_with(&rooms));
//! ```

mod descriptor;
mod error;
mod memory;
mod path;
mod tree;
mod value;

pub use descriptor::{Descriptor, NodeType, ValueType};
pub use error::{Result, TreeError};
pub use memory::MemoryTree;
pub use path::TreePath;
pub use tree::ObjectTree;
pub use value::{PersistedValue, StateValue};
