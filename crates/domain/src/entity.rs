//! Entity: an addressable point in the inventory, `domain.object_id`.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, EntityId, LabelId};

/// Domain of light entities, the only domain that joins light groups by default.
pub const LIGHT_DOMAIN: &str = "light";

/// A controllable or observable point such as `light.kt_ceiling`.
///
/// The domain is always derived from `entity_id`; a `domain` field present in
/// the source snapshot is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: EntityId,
    /// Absent, `null`, and `""` all mean "no area".
    #[serde(default, deserialize_with = "blank_area")]
    pub area_id: Option<AreaId>,
    /// Absent and `null` both mean "no labels".
    #[serde(default, deserialize_with = "nullable_labels")]
    pub labels: Vec<LabelId>,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder(entity_id: impl Into<EntityId>) -> EntityBuilder {
        EntityBuilder {
            entity_id: entity_id.into(),
            area_id: None,
            labels: Vec::new(),
        }
    }

    /// Substring of the id before the first `.`.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.entity_id.domain()
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.domain() == Some(LIGHT_DOMAIN)
    }

    #[must_use]
    pub fn is_in_area(&self, area: &AreaId) -> bool {
        self.area_id.as_ref() == Some(area)
    }

    #[must_use]
    pub fn has_label(&self, label: &LabelId) -> bool {
        self.labels.contains(label)
    }
}

fn blank_area<'de, D>(deserializer: D) -> Result<Option<AreaId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let area = Option::<String>::deserialize(deserializer)?;
    Ok(area.filter(|id| !id.is_empty()).map(AreaId::from))
}

fn nullable_labels<'de, D>(deserializer: D) -> Result<Vec<LabelId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<LabelId>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug)]
pub struct EntityBuilder {
    entity_id: EntityId,
    area_id: Option<AreaId>,
    labels: Vec<LabelId>,
}

impl EntityBuilder {
    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<LabelId>) -> Self {
        self.labels.push(label.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Entity {
        Entity {
            entity_id: self.entity_id,
            area_id: self.area_id,
            labels: self.labels,
        }
    }
}
