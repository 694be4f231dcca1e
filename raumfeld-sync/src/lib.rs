//! Raumfeld Topology Reconciliation
//!
//! Maintains a faithful, typed mirror of the Raumfeld control layer's
//! zone/room topology inside a persistent, path-addressed object tree.
//!
//! # Architecture
//!
//! ```text
//! Snapshot events → MirrorService → TopologyReconciler
//!                   (serialized)      ├─ PathBuilder          (where)
//!                                     ├─ TreeNodeRegistrar    (containers)
//!                                     └─ LeafValueSynchronizer (typed leaves)
//!                                               └─ convert::coerce
//! ```
//!
//! Each received [`raumfeld_topology::Snapshot`] is reconciled in full:
//! every room gets a device container and `name`/`powerState`/`udn` leaves,
//! and containers no room claims anymore are deleted. Passes are idempotent
//! and serialized; failures are contained per entity and corrected by the
//! next snapshot.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use raumfeld_sync::{MirrorService, TopologyReconciler};
//! use raumfeld_tree::MemoryTree;
//!
//! let tree = Arc::new(MemoryTree::new());
//! let service = MirrorService::spawn(TopologyReconciler::new(tree.clone()));
//! let handle = service.handle();
//!
//! // From the provider's event callback:
//! handle.submit(snapshot)?;
//! ```

pub mod convert;
pub mod leaf;
pub mod path;
pub mod reconciler;
pub mod registrar;
pub mod service;

// Error types
pub mod error;

// Logging infrastructure
pub mod logging;

pub use error::{Result, SyncError};
pub use leaf::{LeafSync, LeafValueSynchronizer};
pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
pub use path::{sanitize_segment, KeySource, PathBuilder};
pub use reconciler::{ReconcileSummary, TopologyReconciler};
pub use registrar::TreeNodeRegistrar;
pub use service::{MirrorService, SnapshotSender};
