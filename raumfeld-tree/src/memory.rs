//! In-process reference backend

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{
    Descriptor, ObjectTree, PersistedValue, Result, StateValue, TreeError, TreePath,
};

#[derive(Debug, Clone)]
struct Entry {
    descriptor: Descriptor,
    value: Option<PersistedValue>,
}

/// In-memory [`ObjectTree`] over an ordered path map.
///
/// The reference implementation of the backend contract: used by tests,
/// demos, and as the executable definition of the trait's semantics. The
/// ordered map keeps `list_children` deterministic.
#[derive(Default)]
pub struct MemoryTree {
    entries: RwLock<BTreeMap<String, Entry>>,
}

impl MemoryTree {
    /// An empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries (nodes and leaves) in the tree
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when the tree holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// True if any entry exists at `path`
    pub fn contains(&self, path: &TreePath) -> bool {
        self.entries.read().contains_key(path.as_str())
    }

    /// The descriptor at `path`, if any
    pub fn descriptor_at(&self, path: &TreePath) -> Option<Descriptor> {
        self.entries
            .read()
            .get(path.as_str())
            .map(|e| e.descriptor.clone())
    }

    /// The persisted value at `path`, if one has been written
    pub fn value_at(&self, path: &TreePath) -> Option<PersistedValue> {
        self.entries
            .read()
            .get(path.as_str())
            .and_then(|e| e.value.clone())
    }

    /// All entry paths in order, for test assertions
    pub fn paths(&self) -> Vec<TreePath> {
        self.entries
            .read()
            .keys()
            .map(|k| TreePath::from(k.as_str()))
            .collect()
    }
}

#[async_trait]
impl ObjectTree for MemoryTree {
    async fn create_if_absent(&self, path: &TreePath, descriptor: Descriptor) -> Result<bool> {
        let mut entries = self.entries.write();
        if entries.contains_key(path.as_str()) {
            return Ok(false);
        }
        tracing::trace!(path = %path, "creating entry");
        entries.insert(
            path.as_str().to_string(),
            Entry {
                descriptor,
                value: None,
            },
        );
        Ok(true)
    }

    async fn create_or_replace(&self, path: &TreePath, descriptor: Descriptor) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.get_mut(path.as_str()) {
            Some(entry) => entry.descriptor = descriptor,
            None => {
                entries.insert(
                    path.as_str().to_string(),
                    Entry {
                        descriptor,
                        value: None,
                    },
                );
            }
        }
        Ok(())
    }

    async fn write_value(
        &self,
        path: &TreePath,
        value: StateValue,
        acknowledged: bool,
    ) -> Result<()> {
        let mut entries = self.entries.write();
        let entry = entries
            .get_mut(path.as_str())
            .ok_or_else(|| TreeError::NoSuchPath(path.clone()))?;
        entry.value = Some(PersistedValue::now(value, acknowledged));
        Ok(())
    }

    async fn read_value(&self, path: &TreePath) -> Result<Option<PersistedValue>> {
        let entries = self.entries.read();
        let entry = entries
            .get(path.as_str())
            .ok_or_else(|| TreeError::NoSuchPath(path.clone()))?;
        Ok(entry.value.clone())
    }

    async fn delete_value(&self, path: &TreePath) -> Result<()> {
        let mut entries = self.entries.write();
        let entry = entries
            .get_mut(path.as_str())
            .ok_or_else(|| TreeError::NoSuchPath(path.clone()))?;
        entry.value = None;
        Ok(())
    }

    async fn delete_node(&self, path: &TreePath, recursive: bool) -> Result<()> {
        let mut entries = self.entries.write();

        // Descendant keys all share the "path." prefix and are contiguous
        // in the ordered map.
        let descendant_prefix = format!("{}.", path.as_str());
        let descendants: Vec<String> = entries
            .range(descendant_prefix.clone()..)
            .map(|(k, _)| k.clone())
            .take_while(|k| k.starts_with(&descendant_prefix))
            .collect();

        if !descendants.is_empty() && !recursive {
            return Err(TreeError::NotDeletable(path.clone()));
        }

        if entries.remove(path.as_str()).is_none() && descendants.is_empty() {
            return Err(TreeError::NoSuchPath(path.clone()));
        }

        for key in descendants {
            entries.remove(&key);
        }
        Ok(())
    }

    async fn list_children(&self, prefix: &TreePath) -> Result<Vec<TreePath>> {
        let entries = self.entries.read();
        let descendant_prefix = format!("{}.", prefix.as_str());
        let children = entries
            .range(descendant_prefix.clone()..)
            .map(|(k, _)| k.as_str())
            .take_while(|k| k.starts_with(&descendant_prefix))
            .map(TreePath::from)
            .filter(|p| p.parent().as_ref() == Some(prefix))
            .collect();
        Ok(children)
    }
}
