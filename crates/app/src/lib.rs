//! # hassgen-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PackageWriter`: persist packages, the naming report, and the entity reference
//!   - `GenerationObserver`: receive progress events (emitted packages, skipped partitions, …)
//! - Provide the pure derivations over an inventory snapshot:
//!   - `naming_check`: canonical area prefixes and naming violations
//!   - `generators`: area, floor, and label light-group packages
//!   - `reference`: the entity reference catalogue
//! - Orchestrate them in `GenerationService` without knowing *how* IO works
//!
//! ## Dependency rule
//! Depends on `hassgen-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod generators;
pub mod naming_check;
pub mod ports;
pub mod reference;
pub mod services;
