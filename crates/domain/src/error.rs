//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HassGenError`] via `From` at the crate boundary.

use std::error::Error as StdError;

/// Boxed source error carried across layer boundaries.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Top-level error for a generation run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum HassGenError {
    /// The inventory snapshot could not be located.
    #[error("inventory not found at {path}; export the inventory snapshot first")]
    MissingInput { path: String },

    /// An input file (inventory or overrides) could be read but not understood.
    #[error("malformed input")]
    MalformedInput(#[source] BoxError),

    /// The inventory violates a structural invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An output artifact could not be written.
    #[error("failed to write {path}")]
    WriteFailure {
        path: String,
        #[source]
        source: BoxError,
    },
}

/// Structural invariant violations detected in domain objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },

    /// An area points at a floor that is not part of the inventory.
    #[error("area `{area_id}` references unknown floor `{floor_id}`")]
    UnknownFloor { area_id: String, floor_id: String },

    /// An entity id has no `domain.` part.
    #[error("entity id `{entity_id}` has no domain separator")]
    MissingDomainSeparator { entity_id: String },

    /// A duration string is not `HH:MM:SS`.
    #[error("invalid duration `{0}`, expected HH:MM:SS")]
    InvalidDuration(String),
}
