//! Idempotent container node registration

use std::sync::Arc;

use raumfeld_tree::{Descriptor, NodeType, ObjectTree, TreePath};

use crate::error::Result;

/// Ensures container nodes exist in the tree.
///
/// Each call issues exactly one backend write, conditional by default. Leaf
/// values are never read or touched. Backend failure propagates to the
/// caller, which decides containment; there are no retries here.
pub struct TreeNodeRegistrar {
    tree: Arc<dyn ObjectTree>,
}

impl TreeNodeRegistrar {
    /// A registrar over the given backend
    pub fn new(tree: Arc<dyn ObjectTree>) -> Self {
        Self { tree }
    }

    /// Ensure a container node exists at `path`.
    ///
    /// With `force_overwrite` false (the default posture) an existing node
    /// is left untouched; with it true the descriptor is replaced
    /// unconditionally.
    pub async fn ensure_node(
        &self,
        path: &TreePath,
        display_name: &str,
        node_type: NodeType,
        force_overwrite: bool,
    ) -> Result<()> {
        let descriptor = Descriptor::node(display_name, node_type);
        if force_overwrite {
            self.tree.create_or_replace(path, descriptor).await?;
            tracing::debug!(path = %path, "replaced node descriptor");
        } else {
            let created = self.tree.create_if_absent(path, descriptor).await?;
            if created {
                tracing::debug!(path = %path, name = display_name, "registered node");
            }
        }
        Ok(())
    }
}
