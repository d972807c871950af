//! Inventory adapter error types.

use std::path::PathBuf;

use hassgen_domain::error::{HassGenError, ValidationError};

/// Errors raised while loading the inventory snapshot.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// No file at the configured path.
    #[error("inventory not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read inventory at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not JSON, or lacks a required collection.
    #[error("failed to parse inventory")]
    Parse(#[from] serde_json::Error),

    /// The snapshot parsed but breaks a domain invariant.
    #[error("invalid inventory")]
    Invalid(#[from] ValidationError),
}

impl From<InventoryError> for HassGenError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound { path } => Self::MissingInput {
                path: path.display().to_string(),
            },
            InventoryError::Invalid(err) => Self::Validation(err),
            other => Self::MalformedInput(Box::new(other)),
        }
    }
}
