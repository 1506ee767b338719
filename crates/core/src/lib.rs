//! `partbin-core` — shared domain primitives.
//!
//! Holds the inventory error model and the capacity limit every bin obeys.
//! No IO lives here.

pub mod error;

pub use error::{InventoryError, InventoryResult};

/// Upper bound on the number of parts a single bin may hold.
pub const MAX_CAPACITY: u32 = 30;
