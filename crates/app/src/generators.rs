//! Package generators: one per partition kind.
//!
//! Each generator partitions the inventory (by area, floor, or label), derives
//! a sorted light-group membership per partition, and returns the packages
//! together with diagnostics for the partitions it skipped. Generators are
//! pure: they never write, log, or fail.

pub mod area;
pub mod floor;
pub mod label;

use hassgen_domain::id::{AreaId, EntityId};
use hassgen_domain::inventory::Inventory;
use hassgen_domain::package::{Package, PackageScope};
use hassgen_domain::sanitize::sanitize;

pub use area::generate_area_packages;
pub use floor::generate_floor_packages;
pub use label::generate_label_packages;

/// Why a partition produced no package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No light (or opted-in) entities remain after overrides.
    NoLights,
    /// The floor has no areas assigned.
    NoAreas,
    /// None of the floor's areas has a resolvable naming prefix.
    NoResolvablePrefixes,
}

/// A non-fatal observation made while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The inventory defines no partitions of this kind at all.
    NoPartitions { scope: PackageScope },
    /// A partition was skipped instead of producing an empty package.
    PartitionSkipped {
        scope: PackageScope,
        key: String,
        name: String,
        reason: SkipReason,
    },
    /// An `include_in_group` override names an entity missing from the inventory.
    UnknownIncludedEntity { area_id: AreaId, entity_id: EntityId },
    /// Several area packages define the same group id because their areas
    /// share a naming prefix. Packages are still emitted.
    GroupIdCollision { group_id: String, areas: Vec<AreaId> },
}

/// Packages and diagnostics from one generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOutcome {
    /// In inventory order of their partitions.
    pub packages: Vec<Package>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratorOutcome {
    fn skip(&mut self, scope: PackageScope, key: &str, name: &str, reason: SkipReason) {
        self.diagnostics.push(Diagnostic::PartitionSkipped {
            scope,
            key: key.to_string(),
            name: name.to_string(),
            reason,
        });
    }
}

/// Leading part of an area's group ids: its sanitized naming prefix when it
/// has one, else `area_<sanitized id>_`.
#[must_use]
pub fn area_group_base(inventory: &Inventory, area: &AreaId) -> String {
    match inventory.area_prefix(area) {
        Some(prefix) => prefix_group_base(prefix),
        None => format!("area_{}_", sanitize(area.as_str())),
    }
}

fn prefix_group_base(prefix: &str) -> String {
    sanitize(prefix)
}

fn light_group_id(base: &str) -> String {
    format!("{base}lights")
}

fn display_name(name: &str) -> String {
    format!("{name} Lights")
}
