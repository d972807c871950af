//! Inventory: the immutable snapshot every generation run reads from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::entity::Entity;
use crate::error::ValidationError;
use crate::floor::Floor;
use crate::id::{AreaId, EntityId, FloorId};
use crate::label::Label;

/// Already-resolved floors, areas, labels, and entities.
///
/// Collections keep their source order; several derivations (canonical
/// prefixes, area naming prefixes) are defined in terms of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub floors: Vec<Floor>,
    pub areas: Vec<Area>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub entities: Vec<Entity>,
}

/// Record counts, logged after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub floors: usize,
    pub areas: usize,
    pub labels: usize,
    pub entities: usize,
}

impl Inventory {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateId`] when two records of one kind
    /// share an id, [`ValidationError::UnknownFloor`] when an area references
    /// a floor that does not exist, and
    /// [`ValidationError::MissingDomainSeparator`] when an entity id has no `.`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_unique("floor", self.floors.iter().map(|f| f.id.as_str()))?;
        ensure_unique("area", self.areas.iter().map(|a| a.id.as_str()))?;
        ensure_unique("label", self.labels.iter().map(|l| l.id.as_str()))?;
        ensure_unique("entity", self.entities.iter().map(|e| e.entity_id.as_str()))?;

        for area in &self.areas {
            if let Some(floor_id) = &area.floor_id
                && self.floor(floor_id).is_none()
            {
                return Err(ValidationError::UnknownFloor {
                    area_id: area.id.to_string(),
                    floor_id: floor_id.to_string(),
                });
            }
        }

        if let Some(entity) = self.entities.iter().find(|e| e.domain().is_none()) {
            return Err(ValidationError::MissingDomainSeparator {
                entity_id: entity.entity_id.to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            floors: self.floors.len(),
            areas: self.areas.len(),
            labels: self.labels.len(),
            entities: self.entities.len(),
        }
    }

    #[must_use]
    pub fn floor(&self, id: &FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| &f.id == id)
    }

    #[must_use]
    pub fn area(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| &a.id == id)
    }

    #[must_use]
    pub fn contains_entity(&self, id: &EntityId) -> bool {
        self.entities.iter().any(|e| &e.entity_id == id)
    }

    /// Areas assigned to `floor`, in inventory order.
    pub fn areas_on_floor<'a>(&'a self, floor: &'a FloorId) -> impl Iterator<Item = &'a Area> {
        self.areas.iter().filter(move |a| a.is_on_floor(floor))
    }

    /// Entities assigned to `area`, in inventory order.
    pub fn entities_in_area<'a>(&'a self, area: &'a AreaId) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(move |e| e.is_in_area(area))
    }

    /// Naming prefix of the first entity in `area`, by inventory order, that
    /// has one.
    #[must_use]
    pub fn area_prefix<'a>(&'a self, area: &AreaId) -> Option<&'a str> {
        self.entities
            .iter()
            .filter(|e| e.is_in_area(area))
            .find_map(|e| e.entity_id.prefix())
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        Inventory {
            floors: vec![Floor::new("ground", "Ground Floor")],
            areas: vec![
                Area::builder("kitchen").name("Kitchen").floor_id("ground").build(),
                Area::builder("garage").name("Garage").build(),
            ],
            labels: vec![Label::new("outdoor", "Outdoor")],
            entities: vec![
                Entity::builder("sensor.temperature").area_id("kitchen").build(),
                Entity::builder("light.kt_lamp").area_id("kitchen").build(),
                Entity::builder("light.lr_lamp").area_id("kitchen").build(),
                Entity::builder("light.garage").area_id("garage").build(),
            ],
        }
    }

    #[test]
    fn should_accept_consistent_inventory() {
        assert!(inventory().validate().is_ok());
    }

    #[test]
    fn should_reject_duplicate_area_ids() {
        let mut inv = inventory();
        inv.areas.push(Area::builder("kitchen").build());
        assert_eq!(
            inv.validate(),
            Err(ValidationError::DuplicateId {
                kind: "area",
                id: "kitchen".to_string(),
            })
        );
    }

    #[test]
    fn should_reject_area_on_unknown_floor() {
        let mut inv = inventory();
        inv.areas.push(Area::builder("attic").floor_id("roof").build());
        assert!(matches!(
            inv.validate(),
            Err(ValidationError::UnknownFloor { .. })
        ));
    }

    #[test]
    fn should_reject_entity_without_domain_separator() {
        let mut inv = inventory();
        inv.entities.push(Entity::builder("kt_lamp").build());
        assert!(matches!(
            inv.validate(),
            Err(ValidationError::MissingDomainSeparator { .. })
        ));
    }

    #[test]
    fn should_take_area_prefix_from_first_prefixed_entity() {
        let inv = inventory();
        assert_eq!(inv.area_prefix(&AreaId::new("kitchen")), Some("kt_"));
        assert_eq!(inv.area_prefix(&AreaId::new("garage")), None);
    }

    #[test]
    fn should_return_area_prefix_borrowed_from_inventory_only() {
        let inv = inventory();
        let prefix = {
            let kitchen = AreaId::new("kitchen");
            inv.area_prefix(&kitchen)
        };
        assert_eq!(prefix, Some("kt_"));
    }

    #[test]
    fn should_list_areas_on_floor_in_order() {
        let inv = inventory();
        let floor = FloorId::new("ground");
        let ids: Vec<&str> = inv.areas_on_floor(&floor).map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["kitchen"]);
    }

    #[test]
    fn should_summarize_counts() {
        let summary = inventory().summary();
        assert_eq!(summary.floors, 1);
        assert_eq!(summary.areas, 2);
        assert_eq!(summary.labels, 1);
        assert_eq!(summary.entities, 4);
    }

    #[test]
    fn should_fail_to_parse_without_entities() {
        let result: Result<Inventory, _> =
            serde_json::from_str(r#"{"floors":[],"areas":[],"labels":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_minimal_snapshot() {
        let inv: Inventory = serde_json::from_str(
            r#"{
                "areas": [{"id": "kitchen", "name": "Kitchen", "floor_id": null}],
                "entities": [{"entity_id": "light.kt_lamp", "area_id": "kitchen", "domain": "light"}]
            }"#,
        )
        .unwrap();
        assert!(inv.floors.is_empty());
        assert!(inv.labels.is_empty());
        assert_eq!(inv.entities.len(), 1);
    }
}
