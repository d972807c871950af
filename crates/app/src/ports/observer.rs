//! Progress port: the event stream a host-level reporter consumes.
//!
//! The core never prints. It reports what happened through these callbacks,
//! all of which default to doing nothing.

use std::path::Path;

use hassgen_domain::naming::NamingSummary;
use hassgen_domain::package::Package;
use hassgen_domain::reference::StarterConfig;

use crate::generators::Diagnostic;
use crate::naming_check::NamingOutcome;

pub trait GenerationObserver: Send + Sync {
    fn on_package_emitted(&self, _package: &Package, _location: &Path) {}

    fn on_diagnostic(&self, _diagnostic: &Diagnostic) {}

    fn on_naming_checked(&self, _outcome: &NamingOutcome) {}

    fn on_report_written(&self, _location: &Path, _summary: &NamingSummary) {}

    fn on_reference_written(&self, _location: &Path, _starter: StarterConfig) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
