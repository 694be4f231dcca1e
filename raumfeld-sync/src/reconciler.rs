//! Snapshot reconciliation

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use raumfeld_topology::{Room, Snapshot};
use raumfeld_tree::{NodeType, ObjectTree, StateValue, TreePath, ValueType};

use crate::error::SyncError;
use crate::leaf::{LeafSync, LeafValueSynchronizer};
use crate::path::PathBuilder;
use crate::registrar::TreeNodeRegistrar;

/// Leaf field names mirrored for every room
const FIELD_NAME: &str = "name";
const FIELD_POWER_STATE: &str = "powerState";
const FIELD_UDN: &str = "udn";

/// Outcome counts of one reconciliation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Room entries fully synchronized
    pub synchronized: usize,
    /// Room entries skipped for missing identity
    pub malformed: usize,
    /// Room entries abandoned mid-sync on backend failure
    pub failed: usize,
    /// Stale room containers removed by the diff step
    pub removed: usize,
}

/// Drives one snapshot at a time into the object tree.
///
/// For every room in the snapshot the reconciler registers a device
/// container and synchronizes the `name`, `powerState` and `udn` leaves,
/// then deletes any container under the root that no room in the snapshot
/// claims. Failures are contained per entity; a pass never aborts and the
/// next snapshot corrects whatever a failed pass left behind.
pub struct TopologyReconciler {
    paths: PathBuilder,
    registrar: TreeNodeRegistrar,
    leaves: LeafValueSynchronizer,
    tree: Arc<dyn ObjectTree>,
}

impl TopologyReconciler {
    /// A reconciler writing under the canonical `rooms` root
    pub fn new(tree: Arc<dyn ObjectTree>) -> Self {
        Self::with_paths(tree, PathBuilder::rooms())
    }

    /// A reconciler with a custom root or key source
    pub fn with_paths(tree: Arc<dyn ObjectTree>, paths: PathBuilder) -> Self {
        Self {
            paths,
            registrar: TreeNodeRegistrar::new(tree.clone()),
            leaves: LeafValueSynchronizer::new(tree.clone()),
            tree,
        }
    }

    /// Run one full reconciliation pass.
    ///
    /// Never fails the pass as a whole: malformed entities are skipped,
    /// backend failures abandon the current entity only, and the outcome
    /// counts are returned for logging and inspection.
    pub async fn reconcile(&self, snapshot: &Snapshot) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        let mut expected: HashMap<TreePath, Option<String>> = HashMap::new();

        for room in snapshot.rooms() {
            let Some(path) = self.paths.room_path(room) else {
                tracing::warn!(
                    udn = room.udn.as_deref().unwrap_or("<none>"),
                    "skipping room without a usable path key"
                );
                summary.malformed += 1;
                continue;
            };

            match expected.entry(path.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(room.udn.clone());
                }
                Entry::Occupied(slot) => {
                    // Duplicates of the same room are expected; a different
                    // UDN on the same path is a distinct room and last
                    // writer wins this pass
                    if slot.get() != &room.udn {
                        tracing::warn!(path = %path, "path collision between distinct rooms");
                    }
                }
            }

            match self.sync_room(room, &path).await {
                Ok(()) => summary.synchronized += 1,
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "room sync abandoned");
                    summary.failed += 1;
                }
            }
        }

        let expected_paths: HashSet<TreePath> = expected.into_keys().collect();
        summary.removed = self.remove_stale(&expected_paths).await;

        tracing::info!(
            synchronized = summary.synchronized,
            malformed = summary.malformed,
            failed = summary.failed,
            removed = summary.removed,
            "reconciliation pass complete"
        );
        summary
    }

    /// Register the room container and synchronize its leaves.
    ///
    /// The first backend failure aborts the remaining fields of this room;
    /// a partially synchronized room is corrected by the next pass.
    async fn sync_room(&self, room: &Room, path: &TreePath) -> Result<(), SyncError> {
        let display_name = room.name.as_deref().unwrap_or_else(|| path.last_segment());

        self.registrar
            .ensure_node(path, display_name, NodeType::Device, false)
            .await?;

        self.leaves
            .sync_leaf(LeafSync::new(
                path.join(FIELD_NAME),
                FIELD_NAME,
                ValueType::Text,
                StateValue::from(room.name.clone()),
            ))
            .await?;

        self.leaves
            .sync_leaf(LeafSync::new(
                path.join(FIELD_POWER_STATE),
                FIELD_POWER_STATE,
                ValueType::Text,
                StateValue::from(room.power_state.clone()),
            ))
            .await?;

        self.leaves
            .sync_leaf(LeafSync::new(
                path.join(FIELD_UDN),
                FIELD_UDN,
                ValueType::Text,
                StateValue::from(room.udn.clone()),
            ))
            .await?;

        Ok(())
    }

    /// Delete containers under the root that this pass did not claim.
    ///
    /// A failing listing skips removal for this pass; stale entries survive
    /// until a later snapshot.
    async fn remove_stale(&self, expected: &HashSet<TreePath>) -> usize {
        let children = match self.tree.list_children(self.paths.root()).await {
            Ok(children) => children,
            Err(err) => {
                tracing::warn!(error = %err, "listing existing rooms failed, skipping removal");
                return 0;
            }
        };

        let mut removed = 0;
        for child in children {
            if expected.contains(&child) {
                continue;
            }
            match self.tree.delete_node(&child, true).await {
                Ok(()) => {
                    tracing::info!(path = %child, "removed room absent from snapshot");
                    removed += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %child, error = %err, "removing stale room failed");
                }
            }
        }
        removed
    }
}
