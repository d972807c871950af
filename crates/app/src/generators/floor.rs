//! Floor packages: one group per floor referencing its areas' light groups.

use hassgen_domain::inventory::Inventory;
use hassgen_domain::package::{GroupDefinition, Package, PackageScope};
use hassgen_domain::sanitize::sanitize;

use super::{
    Diagnostic, GeneratorOutcome, SkipReason, display_name, light_group_id, prefix_group_base,
};

/// Build one package per floor whose areas contribute at least one group
/// reference.
///
/// An area contributes `group.<prefix>lights` only when it has a naming
/// prefix. Areas without one are dropped rather than falling back to the
/// sanitized area id the area generator would use.
#[must_use]
pub fn generate_floor_packages(inventory: &Inventory) -> GeneratorOutcome {
    let mut outcome = GeneratorOutcome::default();

    if inventory.floors.is_empty() {
        outcome.diagnostics.push(Diagnostic::NoPartitions {
            scope: PackageScope::Floor,
        });
        return outcome;
    }

    for floor in &inventory.floors {
        let mut areas = inventory.areas_on_floor(&floor.id).peekable();
        if areas.peek().is_none() {
            outcome.skip(PackageScope::Floor, floor.id.as_str(), &floor.name, SkipReason::NoAreas);
            continue;
        }

        let references = areas.filter_map(|area| {
            inventory
                .area_prefix(&area.id)
                .map(|prefix| format!("group.{}", light_group_id(&prefix_group_base(prefix))))
        });
        let Some(group) = GroupDefinition::new(display_name(&floor.name), references) else {
            outcome.skip(
                PackageScope::Floor,
                floor.id.as_str(),
                &floor.name,
                SkipReason::NoResolvablePrefixes,
            );
            continue;
        };

        let base = format!("floor_{}_", sanitize(floor.id.as_str()));
        outcome.packages.push(Package {
            scope: PackageScope::Floor,
            key: floor.id.to_string(),
            display_name: floor.name.clone(),
            group_id: light_group_id(&base),
            group,
            timer: None,
        });
    }

    outcome
}
