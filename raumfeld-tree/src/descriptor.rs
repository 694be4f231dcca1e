//! Node and leaf descriptors

use serde::{Deserialize, Serialize};

/// Declared target type of a leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// String values
    Text,
    /// Numeric values
    Number,
    /// Boolean values
    Boolean,
    /// Structured values, stored without transformation
    Json,
}

/// Type tag of a container node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// A device-like grouping
    Device,
    /// A channel-like grouping below a device
    Channel,
}

/// What a tree entry declares itself to be.
///
/// A `Node` is a container; a `Leaf` is a typed state with capability flags.
/// Descriptors are created once per path and only replaced when a caller
/// explicitly forces an overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Descriptor {
    /// Container node
    Node {
        /// Human-facing name
        display_name: String,
        /// Grouping kind
        node_type: NodeType,
    },
    /// Typed leaf
    Leaf {
        /// Human-facing name
        display_name: String,
        /// Declared value type
        value_type: ValueType,
        /// Role tag, backend-specific semantics
        role: String,
        /// Value is readable
        read: bool,
        /// Value is writable
        write: bool,
    },
}

impl Descriptor {
    /// A container node descriptor
    pub fn node(display_name: impl Into<String>, node_type: NodeType) -> Self {
        Descriptor::Node {
            display_name: display_name.into(),
            node_type,
        }
    }

    /// A readable and writable leaf descriptor
    pub fn leaf(
        display_name: impl Into<String>,
        value_type: ValueType,
        role: impl Into<String>,
    ) -> Self {
        Descriptor::Leaf {
            display_name: display_name.into(),
            value_type,
            role: role.into(),
            read: true,
            write: true,
        }
    }

    /// True for container nodes
    pub fn is_node(&self) -> bool {
        matches!(self, Descriptor::Node { .. })
    }

    /// The display name
    pub fn display_name(&self) -> &str {
        match self {
            Descriptor::Node { display_name, .. } | Descriptor::Leaf { display_name, .. } => {
                display_name
            }
        }
    }
}
