//! Generation service: runs the checker and generators and persists results.

use chrono::{DateTime, Utc};
use hassgen_domain::error::HassGenError;
use hassgen_domain::inventory::Inventory;
use hassgen_domain::naming::SourceLines;
use hassgen_domain::overrides::GeneratorConfig;
use hassgen_domain::package::PackageScope;
use hassgen_domain::reference::StarterConfig;

use crate::generators::{
    GeneratorOutcome, generate_area_packages, generate_floor_packages, generate_label_packages,
};
use crate::naming_check::{NamingOutcome, check_naming};
use crate::ports::{GenerationObserver, PackageWriter};
use crate::reference::{STARTER_OVERRIDES, build_entity_reference};

/// Counts of what a package run wrote and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub area_packages: usize,
    pub floor_packages: usize,
    pub label_packages: usize,
    pub diagnostics: usize,
}

impl GenerationSummary {
    #[must_use]
    pub fn total_packages(&self) -> usize {
        self.area_packages + self.floor_packages + self.label_packages
    }
}

/// Orchestrates one generation run over an immutable inventory snapshot.
///
/// Every package is derived before anything is written, and the first write
/// failure aborts the run.
pub struct GenerationService<W, O> {
    writer: W,
    observer: O,
}

impl<W: PackageWriter, O: GenerationObserver> GenerationService<W, O> {
    /// Create a new service writing through `writer` and reporting to `observer`.
    pub fn new(writer: W, observer: O) -> Self {
        Self { writer, observer }
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Generate and write area, floor, and label packages.
    ///
    /// # Errors
    ///
    /// Returns [`HassGenError::WriteFailure`] (or whatever the writer reports)
    /// when a package cannot be persisted.
    #[tracing::instrument(skip_all, fields(areas = inventory.areas.len()))]
    pub async fn generate_packages(
        &self,
        inventory: &Inventory,
        config: &GeneratorConfig,
    ) -> Result<GenerationSummary, HassGenError> {
        let outcomes = [
            generate_area_packages(inventory, config),
            generate_floor_packages(inventory),
            generate_label_packages(inventory),
        ];

        let mut summary = GenerationSummary::default();
        for outcome in &outcomes {
            self.emit(outcome, &mut summary).await?;
        }

        tracing::debug!(
            packages = summary.total_packages(),
            diagnostics = summary.diagnostics,
            "package generation finished"
        );
        Ok(summary)
    }

    async fn emit(
        &self,
        outcome: &GeneratorOutcome,
        summary: &mut GenerationSummary,
    ) -> Result<(), HassGenError> {
        for diagnostic in &outcome.diagnostics {
            self.observer.on_diagnostic(diagnostic);
        }
        summary.diagnostics += outcome.diagnostics.len();

        for package in &outcome.packages {
            let location = self.writer.write_package(package).await?;
            tracing::debug!(location = %location.display(), "package written");
            self.observer.on_package_emitted(package, &location);
            match package.scope {
                PackageScope::Area => summary.area_packages += 1,
                PackageScope::Floor => summary.floor_packages += 1,
                PackageScope::Label => summary.label_packages += 1,
            }
        }
        Ok(())
    }

    /// Run the naming check and write the report when violations exist.
    ///
    /// # Errors
    ///
    /// Returns the writer's error when the report cannot be persisted.
    /// Violations themselves are not errors.
    #[tracing::instrument(skip_all, fields(entities = inventory.entities.len()))]
    pub async fn check_naming(
        &self,
        inventory: &Inventory,
        lines: Option<&SourceLines>,
        generated_at: DateTime<Utc>,
    ) -> Result<NamingOutcome, HassGenError> {
        let outcome = check_naming(inventory, lines, generated_at);

        if let NamingOutcome::Violations(report) = &outcome {
            let location = self.writer.write_report(report).await?;
            self.observer.on_report_written(&location, &report.summary);
        }
        self.observer.on_naming_checked(&outcome);

        Ok(outcome)
    }

    /// Write the entity reference and create the starter override file if
    /// it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns the writer's error when either file cannot be persisted.
    #[tracing::instrument(skip_all)]
    pub async fn write_reference(
        &self,
        inventory: &Inventory,
    ) -> Result<StarterConfig, HassGenError> {
        let reference = build_entity_reference(inventory);
        let location = self.writer.write_reference(&reference).await?;
        let starter = self.writer.ensure_starter_config(STARTER_OVERRIDES).await?;
        self.observer.on_reference_written(&location, starter);
        Ok(starter)
    }
}
