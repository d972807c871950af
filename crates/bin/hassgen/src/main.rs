//! # hassgen: inventory-to-package generator
//!
//! Composition root that wires all adapters together and runs one pass.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise logging
//! - Load the inventory snapshot and the per-area overrides (adapters)
//! - Construct the generation service, injecting the writer and reporter
//! - Run the naming check, the entity reference, and the package generators
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod cli;
mod config;
mod reporter;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use hassgen_adapter_json_inventory::{LoadedInventory, load_inventory};
use hassgen_adapter_toml_overrides::load_overrides;
use hassgen_adapter_yaml_files::{FileLayout, YamlFileWriter};
use hassgen_app::naming_check::NamingOutcome;
use hassgen_app::services::generation_service::GenerationService;
use hassgen_domain::error::HassGenError;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::reporter::LogReporter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply_to(&mut config.paths);
    config.validate()?;

    init_tracing(&config.logging.filter);

    run(cli.selected_command(), &config).await
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {filter:?}: {err}");
        EnvFilter::new("hassgen=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let LoadedInventory {
        inventory,
        source_lines,
    } = load_inventory(&config.paths.inventory).map_err(HassGenError::from)?;

    let writer = YamlFileWriter::new(FileLayout {
        output_dir: config.paths.output_dir.clone(),
        report_path: config.report_path(),
        starter_config_path: config.paths.overrides.clone(),
    });
    let service = GenerationService::new(writer, LogReporter);

    if command.runs_check() {
        let outcome = service
            .check_naming(&inventory, Some(&source_lines), chrono::Utc::now())
            .await?;
        let report_path = config.report_path();
        if is_stale_report(&outcome, &report_path) {
            tracing::warn!(
                path = %report_path.display(),
                "naming report from an earlier run no longer applies; delete it"
            );
        }
    }

    if command.runs_reference() {
        service.write_reference(&inventory).await?;
    }

    if command.runs_generate() {
        let (overrides, _) =
            load_overrides(&config.paths.overrides).map_err(HassGenError::from)?;
        let summary = service.generate_packages(&inventory, &overrides).await?;
        tracing::info!(
            areas = summary.area_packages,
            floors = summary.floor_packages,
            labels = summary.label_packages,
            diagnostics = summary.diagnostics,
            "generation complete"
        );
    }

    Ok(())
}

/// Reports are only written when violations exist, so one left on disk after
/// a clean check describes an older inventory.
fn is_stale_report(outcome: &NamingOutcome, report_path: &Path) -> bool {
    !matches!(outcome, NamingOutcome::Violations(_)) && report_path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flag_leftover_report_after_clean_check() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("naming-violations.json");
        std::fs::write(&report, "{}").unwrap();

        assert!(is_stale_report(&NamingOutcome::Clean { areas_checked: 1 }, &report));
        assert!(is_stale_report(&NamingOutcome::NothingToCheck, &report));
    }

    #[test]
    fn should_not_flag_when_no_report_exists() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("naming-violations.json");

        assert!(!is_stale_report(&NamingOutcome::Clean { areas_checked: 1 }, &report));
    }
}
