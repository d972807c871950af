//! Label: a cross-cutting tag attached to entities.

use serde::{Deserialize, Serialize};

use crate::id::LabelId;

/// A tag such as `outdoor` or `christmas` that groups entities across areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
}

impl Label {
    #[must_use]
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
