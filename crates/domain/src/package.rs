//! Package: one deterministic generated output unit.
//!
//! A package holds a single light group (plus, for areas, a vacancy timer).
//! Member lists are sorted and deduplicated at construction, and an empty
//! member list cannot form a group, so empty packages are never built.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::overrides::VacancyDuration;
use crate::sanitize::sanitize;

/// Which partition of the inventory a package was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageScope {
    Area,
    Floor,
    Label,
}

impl PackageScope {
    /// Directory under `packages/` holding this scope's files.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Area => "areas",
            Self::Floor => "floors",
            Self::Label => "labels",
        }
    }

    /// Leading token of file names and group ids in this scope.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Floor => "floor",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for PackageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A named group and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDefinition {
    pub name: String,
    pub entities: Vec<String>,
}

impl GroupDefinition {
    /// Build a group from `members`, sorted byte-wise and deduplicated.
    ///
    /// Returns `None` when there are no members.
    #[must_use]
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = String>) -> Option<Self> {
        let entities: Vec<String> = members
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if entities.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            entities,
        })
    }
}

/// A countdown started when an area becomes vacant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerDefinition {
    pub name: String,
    pub duration: VacancyDuration,
}

/// A generated output unit. Owns no reference back to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub scope: PackageScope,
    /// Id of the area, floor, or label this package was built from.
    pub key: String,
    /// Human name of the partition, used in the header comment.
    pub display_name: String,
    pub group_id: String,
    pub group: GroupDefinition,
    pub timer: Option<(String, TimerDefinition)>,
}

/// Serializable body of a [`Package`], with keys in a stable order.
#[derive(Debug, Serialize)]
pub struct PackageDocument<'a> {
    pub group: BTreeMap<&'a str, &'a GroupDefinition>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub timer: BTreeMap<&'a str, &'a TimerDefinition>,
}

impl Package {
    /// `<scope>_<sanitized key>`, the file name without extension.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.scope.token(), sanitize(&self.key))
    }

    /// Comment block written above the package body.
    ///
    /// Control characters in the name and key become spaces so each stays on
    /// its comment line.
    #[must_use]
    pub fn header(&self) -> String {
        let scope = match self.scope {
            PackageScope::Area => "Area",
            PackageScope::Floor => "Floor",
            PackageScope::Label => "Label",
        };
        format!(
            "# Auto-generated by hassgen\n# {scope}: {} ({})\n# Do not edit manually - changes will be overwritten\n",
            comment_safe(&self.display_name),
            comment_safe(&self.key)
        )
    }

    #[must_use]
    pub fn document(&self) -> PackageDocument<'_> {
        let mut group = BTreeMap::new();
        group.insert(self.group_id.as_str(), &self.group);
        let timer = self
            .timer
            .iter()
            .map(|(id, timer)| (id.as_str(), timer))
            .collect();
        PackageDocument { group, timer }
    }
}

fn comment_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn should_sort_and_deduplicate_members() {
        let group = GroupDefinition::new(
            "Kitchen Lights",
            members(&["light.kt_b", "light.kt_a", "light.kt_b"]),
        )
        .unwrap();
        assert_eq!(group.entities, ["light.kt_a", "light.kt_b"]);
    }

    #[test]
    fn should_refuse_group_without_members() {
        assert!(GroupDefinition::new("Empty", Vec::new()).is_none());
    }

    #[test]
    fn should_derive_sanitized_file_stem() {
        let package = Package {
            scope: PackageScope::Floor,
            key: "Ground Floor".to_string(),
            display_name: "Ground Floor".to_string(),
            group_id: "floor_ground_floor_lights".to_string(),
            group: GroupDefinition::new("Ground Floor Lights", members(&["group.kt_lights"]))
                .unwrap(),
            timer: None,
        };
        assert_eq!(package.file_stem(), "floor_ground_floor");
        assert!(package.header().contains("# Floor: Ground Floor (Ground Floor)"));
    }

    #[test]
    fn should_keep_multiline_names_inside_header_comment() {
        let package = Package {
            scope: PackageScope::Area,
            key: "k\r\nx".to_string(),
            display_name: "Kit\nevil: 1".to_string(),
            group_id: "kt_lights".to_string(),
            group: GroupDefinition::new("Kitchen Lights", members(&["light.kt_a"])).unwrap(),
            timer: None,
        };
        let header = package.header();

        assert!(header.contains("# Area: Kit evil: 1 (k  x)\n"));
        assert_eq!(header.lines().count(), 3);
        assert!(header.lines().all(|line| line.starts_with('#')));
    }

    #[test]
    fn should_omit_timer_section_when_absent() {
        let package = Package {
            scope: PackageScope::Label,
            key: "outdoor".to_string(),
            display_name: "Outdoor".to_string(),
            group_id: "label_outdoor_lights".to_string(),
            group: GroupDefinition::new("Outdoor Lights", members(&["light.out_porch"])).unwrap(),
            timer: None,
        };
        let json = serde_json::to_value(package.document()).unwrap();
        assert!(json.get("timer").is_none());
        assert_eq!(
            json["group"]["label_outdoor_lights"]["entities"],
            serde_json::json!(["light.out_porch"])
        );
    }
}
