//! Fixed template registry.
//!
//! Every template id carries an embedded body compiled into the binary. An
//! operator can shadow any body by dropping a file with the matching name
//! into `<root>/templates/`; a missing override falls back to the embedded
//! body rather than failing.

pub mod renderer;

use std::str::FromStr;

use camino::Utf8Path;

use crate::error::Error;

/// Identifies one of the fixed set of generated-file templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Env,
    Entrypoint,
    Dockerfile,
    ComposeMysql,
    ComposePostgresql,
    ComposeSqlite,
    Readme,
    InitialMigration,
}

impl TemplateId {
    /// All template ids, in install order.
    pub const ALL: [TemplateId; 8] = [
        TemplateId::Env,
        TemplateId::Entrypoint,
        TemplateId::Dockerfile,
        TemplateId::ComposeMysql,
        TemplateId::ComposePostgresql,
        TemplateId::ComposeSqlite,
        TemplateId::Readme,
        TemplateId::InitialMigration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Env => "env",
            TemplateId::Entrypoint => "entrypoint",
            TemplateId::Dockerfile => "dockerfile",
            TemplateId::ComposeMysql => "compose-mysql",
            TemplateId::ComposePostgresql => "compose-postgresql",
            TemplateId::ComposeSqlite => "compose-sqlite",
            TemplateId::Readme => "readme",
            TemplateId::InitialMigration => "initial-migration",
        }
    }

    /// File name that shadows this template under `<root>/templates/`.
    pub fn override_file(&self) -> &'static str {
        match self {
            TemplateId::Env => "env.tmpl",
            TemplateId::Entrypoint => "server.rs.tmpl",
            TemplateId::Dockerfile => "Dockerfile.tmpl",
            TemplateId::ComposeMysql => "docker-compose.mysql.yml",
            TemplateId::ComposePostgresql => "docker-compose.postgresql.yml",
            TemplateId::ComposeSqlite => "docker-compose.sqlite.yml",
            TemplateId::Readme => "README.md.tmpl",
            TemplateId::InitialMigration => "migration.sql.tmpl",
        }
    }

    /// Embedded template body.
    pub fn builtin(&self) -> &'static str {
        match self {
            TemplateId::Env => include_str!("../../templates/env.tmpl"),
            TemplateId::Entrypoint => include_str!("../../templates/server.rs.tmpl"),
            TemplateId::Dockerfile => include_str!("../../templates/Dockerfile.tmpl"),
            TemplateId::ComposeMysql => {
                include_str!("../../templates/docker-compose.mysql.yml")
            }
            TemplateId::ComposePostgresql => {
                include_str!("../../templates/docker-compose.postgresql.yml")
            }
            TemplateId::ComposeSqlite => {
                include_str!("../../templates/docker-compose.sqlite.yml")
            }
            TemplateId::Readme => include_str!("../../templates/README.md.tmpl"),
            TemplateId::InitialMigration => include_str!("../../templates/migration.sql.tmpl"),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Env => "Environment file (.env)",
            TemplateId::Entrypoint => "HTTP server bootstrap (src/bin/server.rs)",
            TemplateId::Dockerfile => "Container build file (docker/Dockerfile)",
            TemplateId::ComposeMysql => "Compose topology with a MySQL service",
            TemplateId::ComposePostgresql => "Compose topology with a PostgreSQL service",
            TemplateId::ComposeSqlite => "Compose topology without a database service",
            TemplateId::Readme => "Project README",
            TemplateId::InitialMigration => "Initial SQL migration (users, health_status)",
        }
    }

    /// Compose template matching a database driver.
    pub fn compose_for(driver: seedbed_core::DbDriver) -> TemplateId {
        match driver {
            seedbed_core::DbDriver::Mysql => TemplateId::ComposeMysql,
            seedbed_core::DbDriver::Postgresql => TemplateId::ComposePostgresql,
            seedbed_core::DbDriver::Sqlite => TemplateId::ComposeSqlite,
        }
    }

    /// Body to render: the on-disk override when present, the embedded body
    /// otherwise. An unreadable override also falls back.
    pub fn load(&self, root: &Utf8Path) -> String {
        let override_path = root.join("templates").join(self.override_file());
        match std::fs::read_to_string(&override_path) {
            Ok(body) => {
                tracing::debug!(template = self.as_str(), path = %override_path, "using template override");
                body
            }
            Err(_) => self.builtin().to_string(),
        }
    }
}

impl FromStr for TemplateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::template_not_found(s))
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use seedbed_core::DbDriver;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_round_trips() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_id() {
        let err = "compose-oracle".parse::<TemplateId>().unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
        assert!(err.to_string().contains("compose-oracle"));
    }

    #[test]
    fn test_compose_selection_follows_driver() {
        assert_eq!(
            TemplateId::compose_for(DbDriver::Mysql),
            TemplateId::ComposeMysql
        );
        assert_eq!(
            TemplateId::compose_for(DbDriver::Postgresql),
            TemplateId::ComposePostgresql
        );
        assert_eq!(
            TemplateId::compose_for(DbDriver::Sqlite),
            TemplateId::ComposeSqlite
        );
    }

    #[test]
    fn test_builtin_bodies_are_nonempty() {
        for id in TemplateId::ALL {
            assert!(!id.builtin().is_empty(), "empty builtin for {id}");
        }
    }

    #[test]
    fn test_override_shadows_builtin() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        std::fs::create_dir_all(root.join("templates")).unwrap();
        std::fs::write(root.join("templates/env.tmpl"), "CUSTOM={{PROJECT_NAME}}\n").unwrap();

        assert_eq!(
            TemplateId::Env.load(&root),
            "CUSTOM={{PROJECT_NAME}}\n".to_string()
        );
        // No override on disk: embedded body.
        assert_eq!(
            TemplateId::Readme.load(&root),
            TemplateId::Readme.builtin().to_string()
        );
    }
}
