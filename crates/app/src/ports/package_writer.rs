//! Output port: persists generated artifacts.

use std::future::Future;
use std::path::PathBuf;

use hassgen_domain::error::HassGenError;
use hassgen_domain::naming::NamingReport;
use hassgen_domain::package::Package;
use hassgen_domain::reference::{EntityReference, StarterConfig};

/// Sink for every artifact a run produces.
///
/// Each method returns the location it wrote to. Writes overwrite whatever
/// was there before; nothing is ever deleted.
pub trait PackageWriter: Send + Sync {
    /// Persist one package together with its header comment.
    fn write_package(
        &self,
        package: &Package,
    ) -> impl Future<Output = Result<PathBuf, HassGenError>> + Send;

    /// Persist the naming-violation report.
    fn write_report(
        &self,
        report: &NamingReport,
    ) -> impl Future<Output = Result<PathBuf, HassGenError>> + Send;

    /// Persist the entity reference catalogue.
    fn write_reference(
        &self,
        reference: &EntityReference,
    ) -> impl Future<Output = Result<PathBuf, HassGenError>> + Send;

    /// Write `contents` as the operator's override file unless one exists.
    fn ensure_starter_config(
        &self,
        contents: &str,
    ) -> impl Future<Output = Result<StarterConfig, HassGenError>> + Send;
}
