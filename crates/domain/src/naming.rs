//! Naming-consistency report types.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::id::{AreaId, EntityId};

/// Written in place of `actual_prefix` when the entity has none.
pub const NO_PREFIX_MARKER: &str = "(no prefix)";

/// 1-based line of each entity id's first occurrence in the raw snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines(HashMap<EntityId, usize>);

impl SourceLines {
    /// Record `line` for `entity_id` unless an earlier line is already known.
    pub fn record(&mut self, entity_id: EntityId, line: usize) {
        self.0.entry(entity_id).or_insert(line);
    }

    #[must_use]
    pub fn line_of(&self, entity_id: &EntityId) -> Option<usize> {
        self.0.get(entity_id).copied()
    }
}

/// An entity whose prefix disagrees with its area's canonical prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingViolation {
    pub entity_id: EntityId,
    pub area_id: AreaId,
    pub expected_prefix: String,
    #[serde(serialize_with = "serialize_actual_prefix")]
    pub actual_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_in_source: Option<usize>,
}

#[allow(clippy::ref_option)]
fn serialize_actual_prefix<S: Serializer>(
    prefix: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(prefix.as_deref().unwrap_or(NO_PREFIX_MARKER))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamingSummary {
    pub total_areas_checked: usize,
    pub areas_with_violations: usize,
    pub total_violations: usize,
}

/// Report written when at least one violation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingReport {
    pub generated_at: DateTime<Utc>,
    pub summary: NamingSummary,
    /// Canonical prefix of every checked area.
    pub area_prefixes: BTreeMap<AreaId, String>,
    /// In inventory entity order.
    pub violations: Vec<NamingViolation>,
}

impl NamingReport {
    #[must_use]
    pub fn new(
        generated_at: DateTime<Utc>,
        area_prefixes: BTreeMap<AreaId, String>,
        violations: Vec<NamingViolation>,
    ) -> Self {
        let areas_with_violations = violations
            .iter()
            .map(|v| &v.area_id)
            .collect::<BTreeSet<_>>()
            .len();
        Self {
            generated_at,
            summary: NamingSummary {
                total_areas_checked: area_prefixes.len(),
                areas_with_violations,
                total_violations: violations.len(),
            },
            area_prefixes,
            violations,
        }
    }
}
