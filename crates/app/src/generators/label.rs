//! Label packages: one group per label containing its tagged lights.

use hassgen_domain::inventory::Inventory;
use hassgen_domain::package::{GroupDefinition, Package, PackageScope};
use hassgen_domain::sanitize::sanitize;

use super::{Diagnostic, GeneratorOutcome, SkipReason, display_name, light_group_id};

/// Build one package per label tagging at least one `light` entity.
#[must_use]
pub fn generate_label_packages(inventory: &Inventory) -> GeneratorOutcome {
    let mut outcome = GeneratorOutcome::default();

    if inventory.labels.is_empty() {
        outcome.diagnostics.push(Diagnostic::NoPartitions {
            scope: PackageScope::Label,
        });
        return outcome;
    }

    for label in &inventory.labels {
        let lights = inventory
            .entities
            .iter()
            .filter(|e| e.is_light() && e.has_label(&label.id))
            .map(|e| e.entity_id.to_string());
        let Some(group) = GroupDefinition::new(display_name(&label.name), lights) else {
            outcome.skip(PackageScope::Label, label.id.as_str(), &label.name, SkipReason::NoLights);
            continue;
        };

        let base = format!("label_{}_", sanitize(label.id.as_str()));
        outcome.packages.push(Package {
            scope: PackageScope::Label,
            key: label.id.to_string(),
            display_name: label.name.clone(),
            group_id: light_group_id(&base),
            group,
            timer: None,
        });
    }

    outcome
}
