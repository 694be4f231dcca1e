//! Idempotent typed leaf synchronization

use std::sync::Arc;

use raumfeld_tree::{Descriptor, ObjectTree, StateValue, TreePath, ValueType};

use crate::convert::coerce;
use crate::error::Result;

/// One leaf synchronization request.
///
/// Defaults: empty role, delete-on-null active, value writes allowed.
#[derive(Debug, Clone)]
pub struct LeafSync {
    /// Full path of the leaf
    pub path: TreePath,
    /// Human-facing name for the descriptor
    pub display_name: String,
    /// Declared target type
    pub value_type: ValueType,
    /// Role tag for the descriptor
    pub role: String,
    /// The value to write; `Null` signals absence
    pub value: StateValue,
    /// Remove the leaf entirely when the value is `Null`
    pub delete_on_null: bool,
    /// Write the value at all; false syncs only the descriptor
    pub allow_write: bool,
}

impl LeafSync {
    /// A request with default policies
    pub fn new(
        path: TreePath,
        display_name: impl Into<String>,
        value_type: ValueType,
        value: StateValue,
    ) -> Self {
        Self {
            path,
            display_name: display_name.into(),
            value_type,
            role: String::new(),
            value,
            delete_on_null: true,
            allow_write: true,
        }
    }

    /// Set the role tag
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Keep the leaf in place when the value is `Null`
    pub fn keep_on_null(mut self) -> Self {
        self.delete_on_null = false;
        self
    }

    /// Sync the descriptor only, never the value
    pub fn descriptor_only(mut self) -> Self {
        self.allow_write = false;
        self
    }
}

/// Ensures typed leaves exist and carry the snapshot's values.
///
/// The descriptor is created once and never overwritten here; values are
/// written acknowledged, converted to the leaf's declared type first. A
/// `Null` value under the delete-on-null policy removes the value AND the
/// descriptor, so a later recreation starts from a clean object.
pub struct LeafValueSynchronizer {
    tree: Arc<dyn ObjectTree>,
}

impl LeafValueSynchronizer {
    /// A synchronizer over the given backend
    pub fn new(tree: Arc<dyn ObjectTree>) -> Self {
        Self { tree }
    }

    /// Run one leaf synchronization to completion
    pub async fn sync_leaf(&self, request: LeafSync) -> Result<()> {
        let descriptor = Descriptor::leaf(&request.display_name, request.value_type, &request.role);
        self.tree.create_if_absent(&request.path, descriptor).await?;

        if !request.allow_write {
            return Ok(());
        }

        if request.value.is_null() && request.delete_on_null {
            tracing::debug!(path = %request.path, "removing leaf on null value");
            self.tree.delete_value(&request.path).await?;
            self.tree.delete_node(&request.path, false).await?;
            return Ok(());
        }

        if request.value.is_null() {
            // Null with deletion disabled: keep descriptor and value as-is
            return Ok(());
        }

        let converted = coerce(request.value, request.value_type);
        self.tree.write_value(&request.path, converted, true).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raumfeld_tree::MemoryTree;

    fn setup() -> (Arc<MemoryTree>, LeafValueSynchronizer) {
        let tree = Arc::new(MemoryTree::new());
        let sync = LeafValueSynchronizer::new(tree.clone());
        (tree, sync)
    }

    #[tokio::test]
    async fn test_sync_writes_acknowledged_value() {
        let (tree, sync) = setup();
        let path = TreePath::from("rooms.Bad.powerState");

        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "powerState",
            ValueType::Text,
            "ACTIVE".into(),
        ))
        .await
        .unwrap();

        let persisted = tree.value_at(&path).unwrap();
        assert_eq!(persisted.value, StateValue::Text("ACTIVE".into()));
        assert!(persisted.acknowledged);
    }

    #[tokio::test]
    async fn test_descriptor_is_never_overwritten() {
        let (tree, sync) = setup();
        let path = TreePath::from("rooms.Bad.powerState");

        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "powerState",
            ValueType::Text,
            "ACTIVE".into(),
        ))
        .await
        .unwrap();

        // Second sync with a different display name: value updates,
        // descriptor stays as first created
        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "renamed",
            ValueType::Text,
            "MANUAL_STANDBY".into(),
        ))
        .await
        .unwrap();

        assert_eq!(tree.descriptor_at(&path).unwrap().display_name(), "powerState");
        assert_eq!(
            tree.value_at(&path).unwrap().value,
            StateValue::Text("MANUAL_STANDBY".into())
        );
    }

    #[tokio::test]
    async fn test_null_with_delete_policy_removes_value_and_descriptor() {
        let (tree, sync) = setup();
        let path = TreePath::from("rooms.Bad.powerState");

        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "powerState",
            ValueType::Text,
            "ACTIVE".into(),
        ))
        .await
        .unwrap();
        assert!(tree.contains(&path));

        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "powerState",
            ValueType::Text,
            StateValue::Null,
        ))
        .await
        .unwrap();

        assert!(tree.value_at(&path).is_none());
        assert!(tree.descriptor_at(&path).is_none());
    }

    #[tokio::test]
    async fn test_null_with_keep_policy_leaves_leaf_alone() {
        let (tree, sync) = setup();
        let path = TreePath::from("rooms.Bad.powerState");

        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "powerState",
            ValueType::Text,
            "ACTIVE".into(),
        ))
        .await
        .unwrap();

        sync.sync_leaf(
            LeafSync::new(path.clone(), "powerState", ValueType::Text, StateValue::Null)
                .keep_on_null(),
        )
        .await
        .unwrap();

        assert_eq!(
            tree.value_at(&path).unwrap().value,
            StateValue::Text("ACTIVE".into())
        );
    }

    #[tokio::test]
    async fn test_descriptor_only_sync_skips_value() {
        let (tree, sync) = setup();
        let path = TreePath::from("rooms.Bad.volume");

        sync.sync_leaf(
            LeafSync::new(path.clone(), "volume", ValueType::Number, "35".into())
                .descriptor_only(),
        )
        .await
        .unwrap();

        assert!(tree.descriptor_at(&path).is_some());
        assert!(tree.value_at(&path).is_none());
    }

    #[tokio::test]
    async fn test_value_is_converted_to_declared_type() {
        let (tree, sync) = setup();
        let path = TreePath::from("rooms.Bad.volume");

        sync.sync_leaf(LeafSync::new(
            path.clone(),
            "volume",
            ValueType::Number,
            "35".into(),
        ))
        .await
        .unwrap();

        assert_eq!(tree.value_at(&path).unwrap().value, StateValue::Number(35.0));
    }
}
