//! The object tree trait

use async_trait::async_trait;

use crate::{Descriptor, PersistedValue, Result, StateValue, TreePath};

/// The persistence backend seam.
///
/// Exposes the minimal set of path-addressed primitives the reconciliation
/// engine needs. The backend offers no transactions; each call is an
/// independent asynchronous operation and ordering guarantees are the
/// caller's responsibility.
///
/// Implementations must uphold:
/// - `create_if_absent` never replaces an existing descriptor.
/// - `write_value` never implicitly creates the addressed entry; writing to
///   a path with no descriptor fails with [`crate::TreeError::NoSuchPath`].
/// - `delete_value` clears the value but keeps the descriptor.
/// - `list_children` returns direct children only, in deterministic order.
#[async_trait]
pub trait ObjectTree: Send + Sync {
    /// Create the entry at `path` if none exists.
    ///
    /// Returns `true` if the entry was created, `false` if one was already
    /// present (in which case the existing descriptor is left untouched).
    async fn create_if_absent(&self, path: &TreePath, descriptor: Descriptor) -> Result<bool>;

    /// Create or unconditionally replace the descriptor at `path`
    async fn create_or_replace(&self, path: &TreePath, descriptor: Descriptor) -> Result<()>;

    /// Write a value to the leaf at `path`, stamping it with the current
    /// time and the given acknowledged flag
    async fn write_value(
        &self,
        path: &TreePath,
        value: StateValue,
        acknowledged: bool,
    ) -> Result<()>;

    /// Read the current value at `path`, `None` if no value has been written
    async fn read_value(&self, path: &TreePath) -> Result<Option<PersistedValue>>;

    /// Clear the value at `path`, keeping the descriptor
    async fn delete_value(&self, path: &TreePath) -> Result<()>;

    /// Remove the entry at `path`; with `recursive` also remove every
    /// strict descendant
    async fn delete_node(&self, path: &TreePath, recursive: bool) -> Result<()>;

    /// Direct children of `prefix`, in deterministic order
    async fn list_children(&self, prefix: &TreePath) -> Result<Vec<TreePath>>;
}
