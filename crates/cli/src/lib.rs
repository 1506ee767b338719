//! `partbin-cli`
//!
//! Interactive front end for the parts-bin inventory: startup file
//! resolution plus the text menu session.

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{Session, open_inventory};
