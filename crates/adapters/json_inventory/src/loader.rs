//! Snapshot loading and source-line indexing.

use std::path::Path;
use std::sync::LazyLock;

use hassgen_domain::id::EntityId;
use hassgen_domain::inventory::Inventory;
use hassgen_domain::naming::SourceLines;
use regex::Regex;

use crate::error::InventoryError;

static ENTITY_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""entity_id"\s*:\s*"([^"]+)""#).expect("entity id pattern is valid")
});

/// A validated inventory plus where each entity id sits in the raw text.
#[derive(Debug, Clone)]
pub struct LoadedInventory {
    pub inventory: Inventory,
    pub source_lines: SourceLines,
}

/// Read, parse, and validate the snapshot at `path`.
///
/// # Errors
///
/// Returns [`InventoryError::NotFound`] when the file does not exist,
/// [`InventoryError::Io`] when it cannot be read, and the errors of
/// [`parse_inventory`] otherwise.
pub fn load_inventory(path: &Path) -> Result<LoadedInventory, InventoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(InventoryError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(InventoryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let loaded = parse_inventory(&content)?;
    let summary = loaded.inventory.summary();
    tracing::info!(
        path = %path.display(),
        floors = summary.floors,
        areas = summary.areas,
        labels = summary.labels,
        entities = summary.entities,
        "loaded inventory"
    );
    Ok(loaded)
}

/// Parse and validate a snapshot held in memory.
///
/// # Errors
///
/// Returns [`InventoryError::Parse`] when `content` is not JSON or misses the
/// `areas` or `entities` collection, and [`InventoryError::Invalid`] when the
/// inventory breaks a domain invariant.
pub fn parse_inventory(content: &str) -> Result<LoadedInventory, InventoryError> {
    let inventory: Inventory = serde_json::from_str(content)?;
    inventory.validate()?;
    Ok(LoadedInventory {
        inventory,
        source_lines: index_source_lines(content),
    })
}

/// Map every `"entity_id": "<id>"` occurrence to its 1-based line; the first
/// occurrence of an id wins.
#[must_use]
pub fn index_source_lines(content: &str) -> SourceLines {
    let mut lines = SourceLines::default();
    for (index, line) in content.lines().enumerate() {
        for captures in ENTITY_ID_PATTERN.captures_iter(line) {
            lines.record(EntityId::new(&captures[1]), index + 1);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
  "floors": [{ "id": "ground", "name": "Ground Floor" }],
  "areas": [{ "id": "kitchen", "name": "Kitchen", "floor_id": "ground" }],
  "labels": [],
  "entities": [
    {
      "entity_id": "light.kt_lamp",
      "area_id": "kitchen",
      "labels": [],
      "domain": "light"
    },
    {
      "entity_id": "switch.lr_fan",
      "area_id": "kitchen",
      "domain": "switch"
    }
  ]
}"#;

    #[test]
    fn should_parse_snapshot_and_index_lines() {
        let loaded = parse_inventory(SNAPSHOT).unwrap();

        assert_eq!(loaded.inventory.entities.len(), 2);
        assert_eq!(
            loaded.source_lines.line_of(&EntityId::new("light.kt_lamp")),
            Some(7)
        );
        assert_eq!(
            loaded.source_lines.line_of(&EntityId::new("switch.lr_fan")),
            Some(13)
        );
    }

    #[test]
    fn should_index_first_occurrence_on_compact_lines() {
        let lines = index_source_lines(
            "{\"entity_id\":\"light.a\"}\n{\"entity_id\": \"light.b\"} {\"entity_id\":\"light.a\"}",
        );
        assert_eq!(lines.line_of(&EntityId::new("light.a")), Some(1));
        assert_eq!(lines.line_of(&EntityId::new("light.b")), Some(2));
    }

    #[test]
    fn should_reject_snapshot_without_entities() {
        let result = parse_inventory(r#"{"floors": [], "areas": []}"#);
        assert!(matches!(result, Err(InventoryError::Parse(_))));
    }

    #[test]
    fn should_reject_invalid_snapshot() {
        let result = parse_inventory(
            r#"{"areas": [{"id": "kitchen", "name": "Kitchen", "floor_id": "roof"}], "entities": []}"#,
        );
        assert!(matches!(result, Err(InventoryError::Invalid(_))));
    }

    #[test]
    fn should_return_not_found_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_inventory(&dir.path().join("hass-data.json"));
        assert!(matches!(result, Err(InventoryError::NotFound { .. })));
    }

    #[test]
    fn should_load_snapshot_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let loaded = load_inventory(file.path()).unwrap();
        assert_eq!(loaded.inventory.areas[0].name, "Kitchen");
    }
}
