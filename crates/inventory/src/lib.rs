//! Parts-bin inventory domain.
//!
//! The store itself is pure in-memory logic. The loader and renderer are the
//! thin text adapters around it (load file in, fixed-width listing out).

pub mod display;
pub mod loader;
pub mod store;

pub use display::{render, render_line};
pub use loader::{LoadError, load_from_path, load_from_reader};
pub use store::{Bin, BinSnapshot, InventoryStore};
