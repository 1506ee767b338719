use serde::{Deserialize, Serialize};

use partbin_core::{InventoryError, InventoryResult, MAX_CAPACITY};

/// A named slot holding a bounded count of identical parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    name: String,
    count: u32,
}

impl Bin {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Read-only `(name, count)` pair handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinSnapshot {
    pub name: String,
    pub count: u32,
}

impl From<&Bin> for BinSnapshot {
    fn from(bin: &Bin) -> Self {
        Self {
            name: bin.name.clone(),
            count: bin.count,
        }
    }
}

/// Ordered collection of bins, kept in insertion order.
///
/// Names are unique and every count stays within `0..=MAX_CAPACITY`. A rejected
/// operation never touches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    bins: Vec<Bin>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a bin by exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Option<&Bin> {
        self.bins.iter().find(|bin| bin.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Append a new bin at the end of the store.
    pub fn create_bin(
        &mut self,
        name: impl Into<String>,
        initial_count: u32,
    ) -> InventoryResult<()> {
        let name = name.into();
        if self.contains(&name) {
            tracing::debug!(bin = %name, "rejected duplicate bin");
            return Err(InventoryError::duplicate(name));
        }
        if initial_count > MAX_CAPACITY {
            tracing::debug!(bin = %name, initial_count, "rejected bin over capacity");
            return Err(InventoryError::capacity_exceeded(name, u64::from(initial_count)));
        }

        tracing::debug!(bin = %name, initial_count, "bin created");
        self.bins.push(Bin {
            name,
            count: initial_count,
        });
        Ok(())
    }

    /// Add `delta` parts to a bin, returning its new count.
    pub fn add_parts(&mut self, name: &str, delta: u32) -> InventoryResult<u32> {
        let bin = self.bin_mut(name)?;

        let requested = u64::from(bin.count) + u64::from(delta);
        if requested > u64::from(MAX_CAPACITY) {
            tracing::debug!(bin = %name, count = bin.count, delta, "rejected add over capacity");
            return Err(InventoryError::capacity_exceeded(name, requested));
        }

        // Bounded by MAX_CAPACITY above, so this fits in u32.
        bin.count += delta;
        tracing::debug!(bin = %name, count = bin.count, delta, "parts added");
        Ok(bin.count)
    }

    /// Remove `delta` parts from a bin, returning its new count.
    pub fn remove_parts(&mut self, name: &str, delta: u32) -> InventoryResult<u32> {
        let bin = self.bin_mut(name)?;

        let Some(remaining) = bin.count.checked_sub(delta) else {
            tracing::debug!(bin = %name, count = bin.count, delta, "rejected removal below zero");
            return Err(InventoryError::insufficient(name, bin.count, delta));
        };

        bin.count = remaining;
        tracing::debug!(bin = %name, count = bin.count, delta, "parts removed");
        Ok(remaining)
    }

    /// Snapshot of every bin in store order.
    pub fn list(&self) -> Vec<BinSnapshot> {
        self.iter().map(BinSnapshot::from).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    fn bin_mut(&mut self, name: &str) -> InventoryResult<&mut Bin> {
        self.bins
            .iter_mut()
            .find(|bin| bin.name == name)
            .ok_or_else(|| InventoryError::not_found(name))
    }
}
