//! Floor: a physical building level.

use serde::{Deserialize, Serialize};

use crate::id::FloorId;

/// A building level that areas may be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
}

impl Floor {
    #[must_use]
    pub fn new(id: impl Into<FloorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
