//! # hassgen-adapter-json-inventory
//!
//! Reads the inventory snapshot exported from the home-automation server.
//!
//! The snapshot is a JSON document with `floors`, `areas`, `labels`, and
//! `entities` arrays. Loading validates the structural invariants of the
//! domain model and records, for every entity id, the line it first appears
//! on so naming violations can point back at the raw data.

pub mod error;
pub mod loader;

pub use error::InventoryError;
pub use loader::{LoadedInventory, index_source_lines, load_inventory, parse_inventory};
