//! Inventory error model.

use thiserror::Error;

/// Result type used by every store operation.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// A rejected store operation.
///
/// Every variant means the store was left exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A bin with this name already exists.
    #[error("bin '{name}' already exists")]
    DuplicateBin { name: String },

    /// The resulting count would exceed the bin capacity.
    #[error("bin '{name}' cannot hold {requested} parts (max {max})")]
    CapacityExceeded { name: String, requested: u64, max: u32 },

    /// Removal would drive the count below zero.
    #[error("bin '{name}' has {available} parts, cannot remove {requested}")]
    InsufficientParts {
        name: String,
        available: u32,
        requested: u32,
    },

    /// No bin with this name exists.
    #[error("no bin named '{name}'")]
    BinNotFound { name: String },
}

impl InventoryError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateBin { name: name.into() }
    }

    pub fn capacity_exceeded(name: impl Into<String>, requested: u64) -> Self {
        Self::CapacityExceeded {
            name: name.into(),
            requested,
            max: crate::MAX_CAPACITY,
        }
    }

    pub fn insufficient(name: impl Into<String>, available: u32, requested: u32) -> Self {
        Self::InsufficientParts {
            name: name.into(),
            available,
            requested,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::BinNotFound { name: name.into() }
    }
}
