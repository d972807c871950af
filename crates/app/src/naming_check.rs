//! Naming consistency check.
//!
//! Each area's **canonical prefix** is the naming prefix of the first entity,
//! in inventory order, that is assigned to the area and has a prefix. Every
//! other entity in that area must share it. "First entity wins" assumes most
//! of an area already follows convention, so the result depends on input
//! order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hassgen_domain::id::AreaId;
use hassgen_domain::inventory::Inventory;
use hassgen_domain::naming::{NamingReport, NamingViolation, SourceLines};

/// Result of a naming check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingOutcome {
    /// No entity has an area assigned.
    NothingToCheck,
    /// Every checked entity matches its area's canonical prefix.
    Clean { areas_checked: usize },
    /// At least one violation; the report should be written.
    Violations(NamingReport),
}

/// Check every area-assigned entity against its area's canonical prefix.
///
/// `lines` maps entity ids to their line in the raw snapshot; violations
/// carry no line when it is absent.
#[must_use]
pub fn check_naming(
    inventory: &Inventory,
    lines: Option<&SourceLines>,
    generated_at: DateTime<Utc>,
) -> NamingOutcome {
    let assigned: Vec<_> = inventory
        .entities
        .iter()
        .filter_map(|e| e.area_id.as_ref().map(|area| (e, area)))
        .collect();

    if assigned.is_empty() {
        return NamingOutcome::NothingToCheck;
    }

    let mut canonical: BTreeMap<AreaId, String> = BTreeMap::new();
    for (entity, area) in &assigned {
        if canonical.contains_key(*area) {
            continue;
        }
        if let Some(prefix) = entity.entity_id.prefix() {
            canonical.insert((*area).clone(), prefix.to_string());
        }
    }

    let violations: Vec<NamingViolation> = assigned
        .iter()
        .filter_map(|(entity, area)| {
            let expected = canonical.get(*area)?;
            let actual = entity.entity_id.prefix();
            if actual == Some(expected.as_str()) {
                return None;
            }
            Some(NamingViolation {
                entity_id: entity.entity_id.clone(),
                area_id: (*area).clone(),
                expected_prefix: expected.clone(),
                actual_prefix: actual.map(ToString::to_string),
                line_in_source: lines.and_then(|l| l.line_of(&entity.entity_id)),
            })
        })
        .collect();

    if violations.is_empty() {
        return NamingOutcome::Clean {
            areas_checked: canonical.len(),
        };
    }

    NamingOutcome::Violations(NamingReport::new(generated_at, canonical, violations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hassgen_domain::entity::Entity;
    use hassgen_domain::id::EntityId;

    fn inventory(entities: &[(&str, Option<&str>)]) -> Inventory {
        Inventory {
            entities: entities
                .iter()
                .map(|(id, area)| {
                    let builder = Entity::builder(*id);
                    match area {
                        Some(area) => builder.area_id(*area).build(),
                        None => builder.build(),
                    }
                })
                .collect(),
            ..Inventory::default()
        }
    }

    fn report(outcome: NamingOutcome) -> NamingReport {
        match outcome {
            NamingOutcome::Violations(report) => report,
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn should_report_nothing_to_check_without_area_assignments() {
        let inv = inventory(&[("light.kt_lamp", None)]);
        assert_eq!(check_naming(&inv, None, Utc::now()), NamingOutcome::NothingToCheck);
    }

    #[test]
    fn should_pick_first_prefixed_entity_as_canonical() {
        let inv = inventory(&[
            ("light.other_device", Some("kitchen")),
            ("light.kt_lamp", Some("kitchen")),
        ]);
        let report = report(check_naming(&inv, None, Utc::now()));

        assert_eq!(report.area_prefixes[&AreaId::new("kitchen")], "other_");
        assert_eq!(report.violations[0].entity_id, EntityId::new("light.kt_lamp"));
    }

    #[test]
    fn should_skip_unprefixed_entities_when_choosing_canonical() {
        let inv = inventory(&[
            ("light.lamp", Some("kitchen")),
            ("light.kt_lamp", Some("kitchen")),
        ]);
        let report = report(check_naming(&inv, None, Utc::now()));

        assert_eq!(report.area_prefixes[&AreaId::new("kitchen")], "kt_");
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].actual_prefix, None);
    }

    #[test]
    fn should_flag_entity_with_foreign_prefix() {
        let inv = inventory(&[
            ("light.kt_lamp", Some("kitchen")),
            ("switch.lr_fan", Some("kitchen")),
        ]);
        let report = report(check_naming(&inv, None, Utc::now()));

        assert_eq!(
            report.violations,
            [NamingViolation {
                entity_id: EntityId::new("switch.lr_fan"),
                area_id: AreaId::new("kitchen"),
                expected_prefix: "kt_".to_string(),
                actual_prefix: Some("lr_".to_string()),
                line_in_source: None,
            }]
        );
    }

    #[test]
    fn should_report_clean_when_all_prefixes_match() {
        let inv = inventory(&[
            ("light.kt_lamp", Some("kitchen")),
            ("switch.kt_fan", Some("kitchen")),
            ("light.lr_ceiling", Some("living_room")),
        ]);
        assert_eq!(
            check_naming(&inv, None, Utc::now()),
            NamingOutcome::Clean { areas_checked: 2 }
        );
    }

    #[test]
    fn should_exclude_areas_without_any_prefix() {
        let inv = inventory(&[
            ("light.lamp", Some("garage")),
            ("light.ceiling", Some("garage")),
        ]);
        assert_eq!(
            check_naming(&inv, None, Utc::now()),
            NamingOutcome::Clean { areas_checked: 0 }
        );
    }

    #[test]
    fn should_keep_input_order_and_summarize() {
        let inv = inventory(&[
            ("light.kt_lamp", Some("kitchen")),
            ("light.mb_lamp", Some("bedroom")),
            ("light.xx_b", Some("kitchen")),
            ("light.yy_c", Some("bedroom")),
            ("light.xx_a", Some("kitchen")),
        ]);
        let report = report(check_naming(&inv, None, Utc::now()));
        let ids: Vec<&str> = report.violations.iter().map(|v| v.entity_id.as_str()).collect();

        assert_eq!(ids, ["light.xx_b", "light.yy_c", "light.xx_a"]);
        assert_eq!(report.summary.total_areas_checked, 2);
        assert_eq!(report.summary.areas_with_violations, 2);
        assert_eq!(report.summary.total_violations, 3);
    }

    #[test]
    fn should_attach_source_lines_when_known() {
        let inv = inventory(&[
            ("light.kt_lamp", Some("kitchen")),
            ("switch.lr_fan", Some("kitchen")),
        ]);
        let mut lines = SourceLines::default();
        lines.record(EntityId::new("switch.lr_fan"), 42);
        let report = report(check_naming(&inv, Some(&lines), Utc::now()));

        assert_eq!(report.violations[0].line_in_source, Some(42));
    }
}
