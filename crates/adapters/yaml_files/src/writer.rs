//! Filesystem implementation of the package writer port.

use std::future::Future;
use std::path::{Path, PathBuf};

use hassgen_app::ports::PackageWriter;
use hassgen_domain::error::HassGenError;
use hassgen_domain::naming::NamingReport;
use hassgen_domain::package::Package;
use hassgen_domain::reference::{EntityReference, StarterConfig};
use tokio::io::AsyncWriteExt;

use crate::error::WriterError;

const REFERENCE_HEADER: &str = "# Entity reference - browse entity ids by area\n\
# Regenerated on every run - do not edit\n\
# Use it to find entity ids for the override file\n";

/// Where each artifact goes.
#[derive(Debug, Clone)]
pub struct FileLayout {
    /// Root of generated output; packages live under `packages/`.
    pub output_dir: PathBuf,
    /// Destination of the naming-violation report.
    pub report_path: PathBuf,
    /// Operator-owned override file, created only when missing.
    pub starter_config_path: PathBuf,
}

impl FileLayout {
    #[must_use]
    pub fn package_path(&self, package: &Package) -> PathBuf {
        self.output_dir
            .join("packages")
            .join(package.scope.dir_name())
            .join(format!("{}.yaml", package.file_stem()))
    }

    #[must_use]
    pub fn reference_path(&self) -> PathBuf {
        self.output_dir.join("entity-reference.yaml")
    }
}

/// Writes packages and the reference as YAML and the report as JSON.
#[derive(Debug, Clone)]
pub struct YamlFileWriter {
    layout: FileLayout,
}

impl YamlFileWriter {
    #[must_use]
    pub fn new(layout: FileLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> &FileLayout {
        &self.layout
    }
}

/// Header comment followed by the package body.
///
/// # Errors
///
/// Returns [`WriterError::Yaml`] when the body cannot be rendered.
pub fn render_package(package: &Package) -> Result<String, WriterError> {
    let body = serde_yaml::to_string(&package.document())?;
    Ok(format!("{}\n{body}", package.header()))
}

fn render_reference(reference: &EntityReference) -> Result<String, WriterError> {
    let body = serde_yaml::to_string(reference)?;
    Ok(format!("{REFERENCE_HEADER}\n{body}"))
}

async fn write_file(path: &Path, contents: String) -> Result<(), WriterError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

async fn write_rendered(
    path: PathBuf,
    rendered: Result<String, WriterError>,
) -> Result<PathBuf, HassGenError> {
    let contents = rendered.map_err(|err| err.at(&path))?;
    write_file(&path, contents)
        .await
        .map_err(|err| err.at(&path))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(path)
}

async fn create_if_missing(path: &Path, contents: &[u8]) -> Result<StarterConfig, WriterError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;
    match file {
        Ok(mut file) => {
            file.write_all(contents).await?;
            file.flush().await?;
            Ok(StarterConfig::Created)
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(StarterConfig::Preserved),
        Err(err) => Err(err.into()),
    }
}

impl PackageWriter for YamlFileWriter {
    fn write_package(
        &self,
        package: &Package,
    ) -> impl Future<Output = Result<PathBuf, HassGenError>> + Send {
        write_rendered(self.layout.package_path(package), render_package(package))
    }

    fn write_report(
        &self,
        report: &NamingReport,
    ) -> impl Future<Output = Result<PathBuf, HassGenError>> + Send {
        let rendered = serde_json::to_string_pretty(report).map_err(WriterError::from);
        write_rendered(self.layout.report_path.clone(), rendered)
    }

    fn write_reference(
        &self,
        reference: &EntityReference,
    ) -> impl Future<Output = Result<PathBuf, HassGenError>> + Send {
        write_rendered(self.layout.reference_path(), render_reference(reference))
    }

    fn ensure_starter_config(
        &self,
        contents: &str,
    ) -> impl Future<Output = Result<StarterConfig, HassGenError>> + Send {
        let path = self.layout.starter_config_path.clone();
        let contents = contents.as_bytes().to_vec();
        async move {
            create_if_missing(&path, &contents)
                .await
                .map_err(|err| err.at(&path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hassgen_domain::id::{AreaId, EntityId};
    use hassgen_domain::naming::NamingViolation;
    use hassgen_domain::package::{GroupDefinition, PackageScope, TimerDefinition};
    use hassgen_domain::reference::ReferenceSection;
    use std::collections::BTreeMap;

    fn layout(root: &Path) -> FileLayout {
        FileLayout {
            output_dir: root.join("output"),
            report_path: root.join("naming-violations.json"),
            starter_config_path: root.join("hassgen-overrides.toml"),
        }
    }

    fn kitchen_package() -> Package {
        Package {
            scope: PackageScope::Area,
            key: "kitchen".to_string(),
            display_name: "Kitchen".to_string(),
            group_id: "kt_lights".to_string(),
            group: GroupDefinition::new(
                "Kitchen Lights",
                ["light.kt_pendant".to_string(), "light.kt_ceiling".to_string()],
            )
            .unwrap(),
            timer: Some((
                "kt_vacancy".to_string(),
                TimerDefinition {
                    name: "Kitchen Vacancy".to_string(),
                    duration: "00:05:00".parse().unwrap(),
                },
            )),
        }
    }

    #[test]
    fn should_render_header_then_sorted_group() {
        let rendered = render_package(&kitchen_package()).unwrap();

        assert!(rendered.starts_with("# Auto-generated by hassgen\n# Area: Kitchen (kitchen)\n"));
        let body: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
        let entities = &body["group"]["kt_lights"]["entities"];
        assert_eq!(entities[0].as_str(), Some("light.kt_ceiling"));
        assert_eq!(entities[1].as_str(), Some("light.kt_pendant"));
        assert_eq!(body["timer"]["kt_vacancy"]["duration"].as_str(), Some("00:05:00"));
    }

    #[test]
    fn should_render_identically_twice() {
        assert_eq!(
            render_package(&kitchen_package()).unwrap(),
            render_package(&kitchen_package()).unwrap()
        );
    }

    #[tokio::test]
    async fn should_write_package_under_scope_directory() {
        let dir = tempfile::tempdir().unwrap();
        let writer = YamlFileWriter::new(layout(dir.path()));

        let path = writer.write_package(&kitchen_package()).await.unwrap();

        assert_eq!(
            path,
            dir.path().join("output/packages/areas/area_kitchen.yaml")
        );
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("kt_lights"));
    }

    #[tokio::test]
    async fn should_overwrite_existing_package() {
        let dir = tempfile::tempdir().unwrap();
        let writer = YamlFileWriter::new(layout(dir.path()));
        let path = writer.layout().package_path(&kitchen_package());
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "stale").await.unwrap();

        writer.write_package(&kitchen_package()).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!contents.contains("stale"));
    }

    #[tokio::test]
    async fn should_write_report_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let writer = YamlFileWriter::new(layout(dir.path()));
        let mut prefixes = BTreeMap::new();
        prefixes.insert(AreaId::new("kitchen"), "kt_".to_string());
        let report = NamingReport::new(
            chrono::Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            prefixes,
            vec![NamingViolation {
                entity_id: EntityId::new("switch.lr_fan"),
                area_id: AreaId::new("kitchen"),
                expected_prefix: "kt_".to_string(),
                actual_prefix: Some("lr_".to_string()),
                line_in_source: Some(17),
            }],
        );

        let path = writer.write_report(&report).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(json["summary"]["total_violations"], 1);
        assert_eq!(json["area_prefixes"]["kitchen"], "kt_");
        assert_eq!(json["violations"][0]["line_in_source"], 17);
    }

    #[tokio::test]
    async fn should_write_reference_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let writer = YamlFileWriter::new(layout(dir.path()));
        let mut sections = BTreeMap::new();
        sections.insert(
            "kitchen".to_string(),
            ReferenceSection {
                name: "Kitchen".to_string(),
                entities: vec![EntityId::new("light.kt_lamp")],
            },
        );

        let path = writer
            .write_reference(&EntityReference { sections })
            .await
            .unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.starts_with("# Entity reference"));
        let body: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();
        assert_eq!(body["kitchen"]["entities"][0].as_str(), Some("light.kt_lamp"));
    }

    #[tokio::test]
    async fn should_create_starter_config_then_preserve_edits() {
        let dir = tempfile::tempdir().unwrap();
        let writer = YamlFileWriter::new(layout(dir.path()));

        let first = writer.ensure_starter_config("# starter\n").await.unwrap();
        tokio::fs::write(&writer.layout().starter_config_path, "# my edits\n")
            .await
            .unwrap();
        let second = writer.ensure_starter_config("# starter\n").await.unwrap();

        assert_eq!(first, StarterConfig::Created);
        assert_eq!(second, StarterConfig::Preserved);
        let contents = tokio::fs::read_to_string(&writer.layout().starter_config_path)
            .await
            .unwrap();
        assert_eq!(contents, "# my edits\n");
    }

    #[tokio::test]
    async fn should_fail_with_path_when_destination_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("output");
        tokio::fs::write(&blocker, "not a directory").await.unwrap();
        let writer = YamlFileWriter::new(layout(dir.path()));

        let result = writer.write_package(&kitchen_package()).await;

        match result {
            Err(HassGenError::WriteFailure { path, .. }) => {
                assert!(path.ends_with("area_kitchen.yaml"));
            }
            other => panic!("expected write failure, got {other:?}"),
        }
    }
}
