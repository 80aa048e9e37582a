//! Install reporting: the per-artifact report returned by the installer and
//! the reporter interface used for live progress lines.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use seedbed_core::ProjectConfig;

/// Outcome for a single artifact (directory or file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// Written by this run.
    Created,
    /// Already present; left untouched.
    Skipped,
}

impl std::fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactStatus::Created => write!(f, "created"),
            ArtifactStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// One entry in the install report.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    /// Path relative to the install root.
    pub path: Utf8PathBuf,
    pub status: ArtifactStatus,
}

/// What one installer run did, artifact by artifact.
#[derive(Debug, Serialize)]
pub struct InstallReport {
    /// The configuration the artifacts were rendered with.
    pub config: ProjectConfig,
    pub artifacts: Vec<Artifact>,
}

impl InstallReport {
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            artifacts: Vec::new(),
        }
    }

    /// Record an artifact outcome.
    pub fn record(&mut self, path: impl Into<Utf8PathBuf>, status: ArtifactStatus) {
        self.artifacts.push(Artifact {
            path: path.into(),
            status,
        });
    }

    pub fn created_count(&self) -> usize {
        self.count(ArtifactStatus::Created)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(ArtifactStatus::Skipped)
    }

    /// Status of a recorded artifact, by root-relative path.
    pub fn status_of(&self, path: &str) -> Option<ArtifactStatus> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.path == path)
            .map(|artifact| artifact.status)
    }

    fn count(&self, status: ArtifactStatus) -> usize {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.status == status)
            .count()
    }
}

/// Live progress sink for installer runs.
///
/// The console implementation lives in the CLI crate; [`SilentReporter`] is
/// for library consumers and tests.
pub trait Reporter {
    /// Start a new phase of the install.
    fn section(&self, title: &str);

    /// An artifact was created or found already present.
    fn artifact(&self, path: &Utf8Path, status: ArtifactStatus);

    /// Free-form progress note.
    fn info(&self, msg: &str);
}

/// Reporter that discards everything.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn section(&self, _title: &str) {}
    fn artifact(&self, _path: &Utf8Path, _status: ArtifactStatus) {}
    fn info(&self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedbed_core::ProjectConfig;

    #[test]
    fn test_report_counts() {
        let mut report = InstallReport::new(ProjectConfig::default());
        report.record(".env", ArtifactStatus::Created);
        report.record("README.md", ArtifactStatus::Created);
        report.record("docker-compose.yml", ArtifactStatus::Skipped);

        assert_eq!(report.created_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.status_of(".env"), Some(ArtifactStatus::Created));
        assert_eq!(report.status_of("missing"), None);
    }

    #[test]
    fn test_report_serializes_status_lowercase() {
        let mut report = InstallReport::new(ProjectConfig::default());
        report.record(".env", ArtifactStatus::Skipped);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"skipped\""));
        assert!(json.contains("\"project_name\""));
    }
}
