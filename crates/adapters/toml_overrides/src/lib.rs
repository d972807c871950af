//! # hassgen-adapter-toml-overrides
//!
//! Loads the per-area override file:
//!
//! ```toml
//! default_vacancy_duration = "00:10:00"
//!
//! [areas.kitchen]
//! vacancy_timer_duration = "00:05:00"
//! include_in_group = ["switch.kt_cabinet_lights"]
//! exclude_from_group = ["light.kt_notification"]
//! ```
//!
//! A missing file is not an error: the run proceeds with
//! [`GeneratorConfig::default`] and logs a hint.

use std::path::Path;

use hassgen_domain::error::HassGenError;
use hassgen_domain::overrides::GeneratorConfig;

/// Where the returned configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridesSource {
    File,
    Defaults,
}

/// Errors raised while loading the override file.
#[derive(Debug, thiserror::Error)]
pub enum OverridesError {
    /// The file exists but could not be read.
    #[error("failed to read override file")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or holds an invalid value.
    #[error("failed to parse override file")]
    Parse(#[from] toml::de::Error),
}

impl From<OverridesError> for HassGenError {
    fn from(err: OverridesError) -> Self {
        Self::MalformedInput(Box::new(err))
    }
}

/// Load overrides from `path`, or the empty configuration when it is absent.
///
/// # Errors
///
/// Returns [`OverridesError::Io`] when the file exists but cannot be read,
/// and [`OverridesError::Parse`] when it is malformed.
pub fn load_overrides(path: &Path) -> Result<(GeneratorConfig, OverridesSource), OverridesError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let config: GeneratorConfig = toml::from_str(&content)?;
            tracing::info!(
                path = %path.display(),
                areas = config.areas.len(),
                "loaded area overrides"
            );
            Ok((config, OverridesSource::File))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(
                path = %path.display(),
                "no override file found, using defaults; run `hassgen reference` to create a starter file"
            );
            Ok((GeneratorConfig::default(), OverridesSource::Defaults))
        }
        Err(err) => Err(OverridesError::Io(err)),
    }
}
