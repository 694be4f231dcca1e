//! Error types for the object tree

use thiserror::Error;

use crate::TreePath;

/// Errors surfaced by an [`crate::ObjectTree`] backend
#[derive(Error, Debug)]
pub enum TreeError {
    /// The backend could not be reached or rejected the call
    #[error("Object tree backend unavailable: {0}")]
    Unavailable(String),

    /// No entry exists at the addressed path
    #[error("No entry at path {0}")]
    NoSuchPath(TreePath),

    /// A non-recursive delete hit a node that still has descendants
    #[error("Node {0} has descendants, delete requires recursive")]
    NotDeletable(TreePath),
}

/// Result type for object tree operations
pub type Result<T> = std::result::Result<T, TreeError>;
