//! Area: a room or zone, optionally placed on a floor.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, FloorId};

/// A room or zone such as `kitchen` or `living_room`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    /// Weak back-reference used for lookup only.
    #[serde(default)]
    pub floor_id: Option<FloorId>,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder(id: impl Into<AreaId>) -> AreaBuilder {
        AreaBuilder {
            id: id.into(),
            name: None,
            floor_id: None,
        }
    }

    /// Whether this area sits on `floor`.
    #[must_use]
    pub fn is_on_floor(&self, floor: &FloorId) -> bool {
        self.floor_id.as_ref() == Some(floor)
    }
}

/// Step-by-step builder for [`Area`].
#[derive(Debug)]
pub struct AreaBuilder {
    id: AreaId,
    name: Option<String>,
    floor_id: Option<FloorId>,
}

impl AreaBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn floor_id(mut self, floor_id: impl Into<FloorId>) -> Self {
        self.floor_id = Some(floor_id.into());
        self
    }

    /// Consume the builder. The name defaults to the id.
    #[must_use]
    pub fn build(self) -> Area {
        let name = self.name.unwrap_or_else(|| self.id.to_string());
        Area {
            id: self.id,
            name,
            floor_id: self.floor_id,
        }
    }
}
