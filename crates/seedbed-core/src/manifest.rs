//! Prerequisite checks against the target package manifest.
//!
//! The installer augments an existing Cargo package that already declares the
//! web framework it bootstraps. Both checks run before anything is written:
//! the manifest must exist, and the framework crate must be listed under
//! `[dependencies]`.

use camino::Utf8Path;

use crate::error::{Error, Result};

/// Crate the generated server bootstrap is written against.
pub const FRAMEWORK_CRATE: &str = "axum";

/// Verify the target root is ready for an install.
pub fn check_prerequisites(root: &Utf8Path) -> Result<()> {
    let manifest_path = root.join("Cargo.toml");
    if !manifest_path.exists() {
        return Err(Error::manifest_not_found(manifest_path));
    }

    let raw = std::fs::read_to_string(&manifest_path)?;
    let manifest: toml::Value = toml::from_str(&raw)?;

    if !lists_dependency(&manifest, FRAMEWORK_CRATE) {
        return Err(Error::framework_dependency_missing(
            manifest_path,
            FRAMEWORK_CRATE,
        ));
    }

    tracing::debug!(root = %root, "prerequisites satisfied");
    Ok(())
}

/// Whether a parsed manifest lists `name` as a direct or workspace dependency.
fn lists_dependency(manifest: &toml::Value, name: &str) -> bool {
    let tables = [
        manifest.get("dependencies"),
        manifest
            .get("workspace")
            .and_then(|ws| ws.get("dependencies")),
    ];

    tables
        .into_iter()
        .flatten()
        .filter_map(|table| table.as_table())
        .any(|table| table.contains_key(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_manifest_is_rejected() {
        let (_dir, root) = temp_root();
        let err = check_prerequisites(&root).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
        assert!(err.to_string().contains("Cargo.toml"));
    }

    #[test]
    fn test_manifest_without_framework_is_rejected() {
        let (_dir, root) = temp_root();
        std::fs::write(
            root.join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[dependencies]\nserde = \"1\"\n",
        )
        .unwrap();

        let err = check_prerequisites(&root).unwrap_err();
        assert!(matches!(err, Error::FrameworkDependencyMissing { .. }));
        assert!(err.to_string().contains(FRAMEWORK_CRATE));
    }

    #[test]
    fn test_manifest_with_framework_passes() {
        let (_dir, root) = temp_root();
        std::fs::write(
            root.join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[dependencies]\naxum = \"0.8\"\n",
        )
        .unwrap();

        assert!(check_prerequisites(&root).is_ok());
    }

    #[test]
    fn test_workspace_dependency_counts() {
        let (_dir, root) = temp_root();
        std::fs::write(
            root.join("Cargo.toml"),
            "[workspace]\nmembers = [\"app\"]\n\n[workspace.dependencies]\naxum = \"0.8\"\n",
        )
        .unwrap();

        assert!(check_prerequisites(&root).is_ok());
    }

    #[test]
    fn test_unparseable_manifest_is_rejected() {
        let (_dir, root) = temp_root();
        std::fs::write(root.join("Cargo.toml"), "not [valid toml").unwrap();
        assert!(matches!(
            check_prerequisites(&root).unwrap_err(),
            Error::ManifestParse(_)
        ));
    }
}
