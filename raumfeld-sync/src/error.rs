//! Error types for the reconciliation engine

use thiserror::Error;

use raumfeld_tree::TreeError;

/// Errors that can occur while synchronizing snapshots into the tree
#[derive(Error, Debug)]
pub enum SyncError {
    /// The object tree backend failed a call
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A snapshot entity is missing the field needed to place it
    #[error("Malformed room entity: {reason}")]
    MalformedRoom {
        /// Which requirement the entity failed
        reason: String,
    },

    /// The intake channel has been closed; no further snapshots can be queued
    #[error("Snapshot intake has been closed")]
    IntakeClosed,
}

/// Result type for reconciliation operations
pub type Result<T> = std::result::Result<T, SyncError>;
