//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::PathsConfig;

#[derive(Debug, Parser)]
#[command(
    name = "hassgen",
    version,
    about = "Generate light-group packages and a naming report from a home-automation inventory"
)]
pub struct Cli {
    /// Configuration file (defaults to `hassgen.toml` when present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Inventory snapshot to read.
    #[arg(long, global = true, value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Per-area override file.
    #[arg(long, global = true, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Directory receiving packages and the entity reference.
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check entity naming prefixes and write the violation report.
    Check,
    /// Generate area, floor, and label packages.
    Generate,
    /// Write the entity reference and the starter override file.
    Reference,
    /// Run check, reference, then generate.
    All,
}

impl Command {
    #[must_use]
    pub fn runs_check(self) -> bool {
        matches!(self, Self::Check | Self::All)
    }

    #[must_use]
    pub fn runs_reference(self) -> bool {
        matches!(self, Self::Reference | Self::All)
    }

    #[must_use]
    pub fn runs_generate(self) -> bool {
        matches!(self, Self::Generate | Self::All)
    }
}

impl Cli {
    /// The subcommand to run; `all` when none was given.
    #[must_use]
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::All)
    }

    /// Flags given on the command line replace configured paths.
    pub fn apply_to(&self, paths: &mut PathsConfig) {
        if let Some(inventory) = &self.inventory {
            paths.inventory.clone_from(inventory);
        }
        if let Some(overrides) = &self.overrides {
            paths.overrides.clone_from(overrides);
        }
        if let Some(output_dir) = &self.output_dir {
            paths.output_dir.clone_from(output_dir);
        }
    }
}
