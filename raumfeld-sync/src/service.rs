//! Serialized snapshot intake
//!
//! The control layer emits combined topology reports at its own pace,
//! sometimes in bursts. Passes racing on the same paths would interleave
//! partial writes, so snapshots are queued on an unbounded channel and a
//! single background task runs one reconciliation to completion before
//! taking the next. The emitting side never blocks.

use raumfeld_topology::Snapshot;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{Result, SyncError};
use crate::reconciler::TopologyReconciler;

/// Cloneable inbound handle for submitting snapshots
#[derive(Clone)]
pub struct SnapshotSender {
    tx: mpsc::UnboundedSender<Snapshot>,
}

impl SnapshotSender {
    /// Queue one snapshot for reconciliation.
    ///
    /// Returns immediately; fails only once the service has shut down.
    pub fn submit(&self, snapshot: Snapshot) -> Result<()> {
        self.tx
            .send(snapshot)
            .map_err(|_| SyncError::IntakeClosed)
    }
}

/// Owns the reconciliation task and its intake queue.
///
/// Spawned onto the current tokio runtime. Dropping the service (or calling
/// [`MirrorService::shutdown`]) closes the intake; `shutdown` additionally
/// waits until every already-queued snapshot has been reconciled.
pub struct MirrorService {
    tx: mpsc::UnboundedSender<Snapshot>,
    task: JoinHandle<()>,
}

impl MirrorService {
    /// Spawn the reconciliation task
    pub fn spawn(reconciler: TopologyReconciler) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_intake_loop(reconciler, rx));
        Self { tx, task }
    }

    /// A handle for submitting snapshots
    pub fn handle(&self) -> SnapshotSender {
        SnapshotSender {
            tx: self.tx.clone(),
        }
    }

    /// Close the intake and wait for queued snapshots to drain
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "intake task ended abnormally");
        }
    }
}

async fn run_intake_loop(
    reconciler: TopologyReconciler,
    mut rx: mpsc::UnboundedReceiver<Snapshot>,
) {
    tracing::info!("snapshot intake started");

    while let Some(snapshot) = rx.recv().await {
        tracing::debug!(rooms = snapshot.room_count(), "snapshot received");
        reconciler.reconcile(&snapshot).await;
    }

    tracing::info!("snapshot intake stopped");
}
