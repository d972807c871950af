//! File writer error types.

use std::path::Path;

use hassgen_domain::error::HassGenError;

/// Errors raised while rendering or writing an output file.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Creating a directory or writing a file failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Rendering YAML failed.
    #[error("failed to render YAML")]
    Yaml(#[from] serde_yaml::Error),

    /// Rendering JSON failed.
    #[error("failed to render JSON")]
    Json(#[from] serde_json::Error),
}

impl WriterError {
    /// Attach the destination path, producing a fatal [`HassGenError::WriteFailure`].
    #[must_use]
    pub fn at(self, path: &Path) -> HassGenError {
        HassGenError::WriteFailure {
            path: path.display().to_string(),
            source: Box::new(self),
        }
    }
}
