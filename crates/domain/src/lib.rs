//! # hassgen-domain
//!
//! Pure domain model for the hassgen package generator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **inventory** records (floors, areas, labels, entities)
//! - Derive **naming prefixes** from entity identifiers
//! - Sanitize arbitrary ids into identifier-safe tokens
//! - Define **packages** (generated output units) and the **naming report**
//! - Define the per-area **override configuration**
//! - Contain all invariant enforcement (unique ids, floor references, …)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod area;
pub mod entity;
pub mod floor;
pub mod inventory;
pub mod label;
pub mod naming;
pub mod overrides;
pub mod package;
pub mod prefix;
pub mod reference;
pub mod sanitize;
