//! The idempotent installer.
//!
//! Orchestrates one install run: directory layout, configuration collection,
//! then the generated files. Every file-creating step goes through
//! [`write_if_absent`], so re-running after an interruption completes the
//! install without touching anything that already exists.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Local};

use seedbed_core::ConfigOverrides;

use crate::error::{Error, Result};
use crate::prompts;
use crate::report::{Artifact, ArtifactStatus, InstallReport, Reporter};
use crate::templates::{renderer, TemplateId};

/// Directories materialized under the install root.
pub const SCAFFOLD_DIRS: [&str; 9] = [
    "config",
    "public",
    "src",
    "migrations",
    "scripts",
    "tests",
    "docs",
    "docker",
    "data",
];

/// Root-relative path of the generated server bootstrap.
pub const ENTRYPOINT_PATH: &str = "src/bin/server.rs";

/// How one install run behaves.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Walk the operator through the questionnaire instead of using defaults.
    pub interactive: bool,
    /// Flag overrides applied on top of defaults in non-interactive mode.
    pub overrides: ConfigOverrides,
}

/// Create each directory under `root` if absent. Never truncates or deletes
/// existing content; safe to call repeatedly.
pub fn ensure_directories(root: &Utf8Path, names: &[&str]) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::with_capacity(names.len());

    for name in names {
        let path = root.join(name);
        let status = if path.is_dir() {
            ArtifactStatus::Skipped
        } else {
            std::fs::create_dir_all(&path).map_err(|e| Error::filesystem(path.clone(), e))?;
            ArtifactStatus::Created
        };
        artifacts.push(Artifact {
            path: Utf8PathBuf::from(format!("{name}/")),
            status,
        });
    }

    Ok(artifacts)
}

/// Write `content` to `path` only if no file exists there already, creating
/// parent directories as needed. Returns whether a write occurred.
///
/// This is the idempotency primitive behind every file-creating step.
pub fn write_if_absent(path: &Utf8Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::filesystem(parent.to_path_buf(), e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::filesystem(path.to_path_buf(), e))?;

    Ok(true)
}

/// File name for the initial migration, timestamped so that names sort in
/// creation order across installs.
pub fn migration_filename(now: DateTime<Local>) -> String {
    format!("Version{}.sql", now.format("%Y%m%d%H%M%S"))
}

/// Run one install: layout, configuration, generated files.
pub fn install(
    root: &Utf8Path,
    options: &InstallOptions,
    reporter: &dyn Reporter,
) -> Result<InstallReport> {
    reporter.section("Project layout");
    let directories = ensure_directories(root, &SCAFFOLD_DIRS)?;
    for artifact in &directories {
        reporter.artifact(&artifact.path, artifact.status);
    }

    let config = prompts::collect_config(root, options.interactive, &options.overrides)?;
    let mut report = InstallReport::new(config);
    report.artifacts = directories;

    reporter.section("Configuration files");
    write_artifact(root, ".env", TemplateId::Env, &mut report, reporter)?;
    write_artifact(
        root,
        ENTRYPOINT_PATH,
        TemplateId::Entrypoint,
        &mut report,
        reporter,
    )?;

    if report.config.use_docker {
        let compose = TemplateId::compose_for(report.config.db_driver);
        write_artifact(root, "docker-compose.yml", compose, &mut report, reporter)?;
        write_artifact(
            root,
            "docker/Dockerfile",
            TemplateId::Dockerfile,
            &mut report,
            reporter,
        )?;
    } else {
        reporter.info("docker-compose.yml skipped (containerized dev disabled)");
    }

    write_artifact(root, "README.md", TemplateId::Readme, &mut report, reporter)?;

    reporter.section("Database");
    write_initial_migration(root, &mut report, reporter)?;

    Ok(report)
}

/// Render one template and write it with create-if-absent semantics.
fn write_artifact(
    root: &Utf8Path,
    relative: &str,
    template: TemplateId,
    report: &mut InstallReport,
    reporter: &dyn Reporter,
) -> Result<()> {
    let content = renderer::render(template, &report.config, root);
    let created = write_if_absent(&root.join(relative), &content)?;

    let status = if created {
        ArtifactStatus::Created
    } else {
        ArtifactStatus::Skipped
    };
    report.record(relative, status);
    reporter.artifact(Utf8Path::new(relative), status);

    Ok(())
}

/// Write the timestamped initial migration, unless one exists from a
/// previous run. A fresh timestamp per run would defeat idempotence, so any
/// `Version*` file under `migrations/` counts as the initial migration.
fn write_initial_migration(
    root: &Utf8Path,
    report: &mut InstallReport,
    reporter: &dyn Reporter,
) -> Result<()> {
    if let Some(existing) = existing_migration(root)? {
        let relative = format!("migrations/{existing}");
        report.record(relative.as_str(), ArtifactStatus::Skipped);
        reporter.artifact(Utf8Path::new(&relative), ArtifactStatus::Skipped);
        return Ok(());
    }

    let relative = format!("migrations/{}", migration_filename(Local::now()));
    let content = renderer::render(TemplateId::InitialMigration, &report.config, root);
    write_if_absent(&root.join(&relative), &content)?;

    report.record(relative.as_str(), ArtifactStatus::Created);
    reporter.artifact(Utf8Path::new(&relative), ArtifactStatus::Created);

    Ok(())
}

/// File name of an existing `Version*` migration, if any.
fn existing_migration(root: &Utf8Path) -> Result<Option<String>> {
    let migrations_dir = root.join("migrations");
    if !migrations_dir.is_dir() {
        return Ok(None);
    }

    let mut found: Vec<String> = Vec::new();
    for entry in migrations_dir
        .read_dir_utf8()
        .map_err(|e| Error::filesystem(migrations_dir.clone(), e))?
    {
        let entry = entry.map_err(|e| Error::filesystem(migrations_dir.clone(), e))?;
        let name = entry.file_name();
        if name.starts_with("Version") {
            found.push(name.to_string());
        }
    }

    found.sort();
    Ok(found.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_migration_filenames_sort_chronologically() {
        let earlier = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let later = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 54).unwrap();

        let first = migration_filename(earlier);
        let second = migration_filename(later);

        assert_eq!(first, "Version20260314092653.sql");
        assert!(first < second);
    }

    #[test]
    fn test_migration_filename_across_year_boundary() {
        let december = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let january = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(migration_filename(december) < migration_filename(january));
    }
}
