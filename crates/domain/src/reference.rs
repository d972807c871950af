//! Entity reference: a browsable catalogue of entity ids by area, used by
//! operators to look up ids for the override file.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::id::EntityId;

/// Section key for entities without an area.
pub const UNASSIGNED_SECTION: &str = "_unassigned";

/// Entities of one area, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceSection {
    pub name: String,
    pub entities: Vec<EntityId>,
}

/// Every entity id, grouped by area id and sorted within each area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityReference {
    pub sections: BTreeMap<String, ReferenceSection>,
}

/// What happened to the operator-owned starter override file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterConfig {
    /// The file did not exist and was written.
    Created,
    /// The file existed and was left untouched.
    Preserved,
}
