//! Area packages: one light group and one vacancy timer per area.

use std::collections::{BTreeMap, BTreeSet};

use hassgen_domain::area::Area;
use hassgen_domain::id::AreaId;
use hassgen_domain::inventory::Inventory;
use hassgen_domain::overrides::GeneratorConfig;
use hassgen_domain::package::{GroupDefinition, Package, PackageScope, TimerDefinition};

use super::{
    Diagnostic, GeneratorOutcome, SkipReason, area_group_base, display_name, light_group_id,
};

/// Build one package per area that ends up with at least one member.
///
/// Members are the area's `light` entities, plus `include_in_group`
/// entities that exist in the inventory, minus `exclude_from_group`.
/// Exclusion wins over inclusion. Overrides for unknown areas are ignored.
#[must_use]
pub fn generate_area_packages(inventory: &Inventory, config: &GeneratorConfig) -> GeneratorOutcome {
    let mut outcome = GeneratorOutcome::default();

    if inventory.areas.is_empty() {
        outcome.diagnostics.push(Diagnostic::NoPartitions {
            scope: PackageScope::Area,
        });
        return outcome;
    }

    for area in &inventory.areas {
        let members = select_members(inventory, config, area, &mut outcome);
        let Some(group) = GroupDefinition::new(
            display_name(&area.name),
            members.into_iter().map(str::to_string),
        ) else {
            outcome.skip(PackageScope::Area, area.id.as_str(), &area.name, SkipReason::NoLights);
            continue;
        };

        let base = area_group_base(inventory, &area.id);
        let timer = TimerDefinition {
            name: format!("{} Vacancy", area.name),
            duration: config.vacancy_duration(&area.id),
        };

        outcome.packages.push(Package {
            scope: PackageScope::Area,
            key: area.id.to_string(),
            display_name: area.name.clone(),
            group_id: light_group_id(&base),
            group,
            timer: Some((format!("{base}vacancy"), timer)),
        });
    }

    report_collisions(&mut outcome);
    outcome
}

fn report_collisions(outcome: &mut GeneratorOutcome) {
    let mut owners: BTreeMap<&str, Vec<AreaId>> = BTreeMap::new();
    for package in &outcome.packages {
        owners
            .entry(package.group_id.as_str())
            .or_default()
            .push(AreaId::new(package.key.as_str()));
    }
    let collisions: Vec<Diagnostic> = owners
        .into_iter()
        .filter(|(_, areas)| areas.len() > 1)
        .map(|(group_id, areas)| Diagnostic::GroupIdCollision {
            group_id: group_id.to_string(),
            areas,
        })
        .collect();
    outcome.diagnostics.extend(collisions);
}

fn select_members<'a>(
    inventory: &'a Inventory,
    config: &'a GeneratorConfig,
    area: &'a Area,
    outcome: &mut GeneratorOutcome,
) -> BTreeSet<&'a str> {
    let mut members: BTreeSet<&str> = inventory
        .entities_in_area(&area.id)
        .filter(|e| e.is_light())
        .map(|e| e.entity_id.as_str())
        .collect();

    let Some(overrides) = config.area(&area.id) else {
        return members;
    };

    for entity_id in &overrides.include_in_group {
        if inventory.contains_entity(entity_id) {
            members.insert(entity_id.as_str());
        } else {
            outcome.diagnostics.push(Diagnostic::UnknownIncludedEntity {
                area_id: area.id.clone(),
                entity_id: entity_id.clone(),
            });
        }
    }
    for entity_id in &overrides.exclude_from_group {
        members.remove(entity_id.as_str());
    }

    members
}
