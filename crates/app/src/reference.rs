//! Entity reference catalogue and the starter override file.

use std::collections::BTreeMap;

use hassgen_domain::inventory::Inventory;
use hassgen_domain::reference::{EntityReference, ReferenceSection, UNASSIGNED_SECTION};

/// Contents of the override file created for operators who have none.
pub const STARTER_OVERRIDES: &str = r#"# hassgen per-area overrides - YOUR EDITS GO HERE
# This file is never overwritten by the generator.
# Browse output/entity-reference.yaml to find entity ids.

# Vacancy timer duration used when an area sets none (HH:MM:SS).
default_vacancy_duration = "00:10:00"

# Only define areas you want to customize; others use the defaults.
#
# [areas.kitchen]
# vacancy_timer_duration = "00:05:00"
# include_in_group = ["switch.kt_cabinet_lights"]
# exclude_from_group = ["light.kt_notification"]
"#;

/// Group every entity id by area, sorted within each area.
///
/// Entities without an area, or whose area is missing from the inventory,
/// land in the `_unassigned` section.
#[must_use]
pub fn build_entity_reference(inventory: &Inventory) -> EntityReference {
    let mut sections: BTreeMap<String, ReferenceSection> = BTreeMap::new();

    for entity in &inventory.entities {
        let area = entity.area_id.as_ref().and_then(|id| inventory.area(id));
        let (key, name) = match area {
            Some(area) => (area.id.to_string(), area.name.clone()),
            None => (UNASSIGNED_SECTION.to_string(), "Unassigned".to_string()),
        };
        sections
            .entry(key)
            .or_insert_with(|| ReferenceSection {
                name,
                entities: Vec::new(),
            })
            .entities
            .push(entity.entity_id.clone());
    }

    for section in sections.values_mut() {
        section.entities.sort();
    }

    EntityReference { sections }
}
