//! Narrates a run through `tracing`.

use std::path::Path;

use hassgen_app::generators::{Diagnostic, SkipReason};
use hassgen_app::naming_check::NamingOutcome;
use hassgen_app::ports::GenerationObserver;
use hassgen_domain::id::AreaId;
use hassgen_domain::naming::{NO_PREFIX_MARKER, NamingSummary};
use hassgen_domain::package::Package;
use hassgen_domain::reference::StarterConfig;

/// Observer that turns generation events into log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

fn describe(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NoLights => "no lights",
        SkipReason::NoAreas => "no areas",
        SkipReason::NoResolvablePrefixes => "no area has a naming prefix",
    }
}

impl GenerationObserver for LogReporter {
    fn on_package_emitted(&self, package: &Package, location: &Path) {
        tracing::info!(
            scope = %package.scope,
            key = %package.key,
            group = %package.group_id,
            members = package.group.entities.len(),
            path = %location.display(),
            "package written"
        );
    }

    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::NoPartitions { scope } => {
                tracing::warn!(%scope, "inventory defines none; no packages of this kind");
            }
            Diagnostic::PartitionSkipped {
                scope,
                key,
                name,
                reason,
            } => {
                tracing::warn!(%scope, %key, %name, reason = describe(*reason), "skipped");
            }
            Diagnostic::UnknownIncludedEntity { area_id, entity_id } => {
                tracing::warn!(
                    area = %area_id,
                    entity = %entity_id,
                    "include_in_group names an entity missing from the inventory; ignored"
                );
            }
            Diagnostic::GroupIdCollision { group_id, areas } => {
                let areas: Vec<&str> = areas.iter().map(AreaId::as_str).collect();
                tracing::warn!(
                    group = %group_id,
                    areas = ?areas,
                    "areas share a naming prefix; their packages define the same group id"
                );
            }
        }
    }

    fn on_naming_checked(&self, outcome: &NamingOutcome) {
        match outcome {
            NamingOutcome::NothingToCheck => {
                tracing::warn!("no entities have an area assigned; nothing to check");
            }
            NamingOutcome::Clean { areas_checked } => {
                tracing::info!(areas_checked, "all entities follow their area's naming prefix");
            }
            NamingOutcome::Violations(report) => {
                for violation in &report.violations {
                    tracing::warn!(
                        entity = %violation.entity_id,
                        area = %violation.area_id,
                        expected = %violation.expected_prefix,
                        actual = violation.actual_prefix.as_deref().unwrap_or(NO_PREFIX_MARKER),
                        line = ?violation.line_in_source,
                        "naming violation"
                    );
                }
            }
        }
    }

    fn on_report_written(&self, location: &Path, summary: &NamingSummary) {
        tracing::warn!(
            violations = summary.total_violations,
            areas = summary.areas_with_violations,
            path = %location.display(),
            "naming report written"
        );
    }

    fn on_reference_written(&self, location: &Path, starter: StarterConfig) {
        tracing::info!(path = %location.display(), "entity reference written");
        match starter {
            StarterConfig::Created => {
                tracing::info!("created starter override file; edit it to customise areas");
            }
            StarterConfig::Preserved => tracing::debug!("existing override file left untouched"),
        }
    }
}
