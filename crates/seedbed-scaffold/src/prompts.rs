//! The install questionnaire.
//!
//! Interactive mode walks the operator through every configuration field with
//! a documented default; driver and channel come from closed select lists, so
//! invalid input cannot get past the widget. Non-interactive mode resolves
//! defaults plus CLI overrides in `seedbed-core`.

use camino::Utf8Path;
use dialoguer::{Confirm, Input, Password, Select};

use seedbed_core::{ConfigOverrides, DbDriver, NotificationChannel, ProjectConfig};

use crate::error::Result;

/// Collect the install configuration.
pub fn collect_config(
    root: &Utf8Path,
    interactive: bool,
    overrides: &ConfigOverrides,
) -> Result<ProjectConfig> {
    if interactive {
        questionnaire(root)
    } else {
        let config = ProjectConfig::resolve(&default_name(root), overrides)?;
        Ok(config)
    }
}

/// Default project name: the root directory's file name.
fn default_name(root: &Utf8Path) -> String {
    root.file_name()
        .map(|name| name.to_string())
        .unwrap_or_else(|| "my-project".to_string())
}

fn questionnaire(root: &Utf8Path) -> Result<ProjectConfig> {
    let project_name: String = Input::new()
        .with_prompt("Project name")
        .default(default_name(root))
        .interact_text()?;

    let driver_index = Select::new()
        .with_prompt("Database driver")
        .items(&DbDriver::ALL)
        .default(0)
        .interact()?;
    let driver = DbDriver::ALL[driver_index];

    let mut config = ProjectConfig::with_driver(project_name, driver);

    config.db_name = Input::new()
        .with_prompt("Database name")
        .default(config.db_name)
        .interact_text()?;

    if driver.has_server() {
        config.db_user = Input::new()
            .with_prompt("Database user")
            .default(config.db_user)
            .interact_text()?;

        let pass = Password::new()
            .with_prompt(format!(
                "Database password (empty keeps '{}')",
                ProjectConfig::DEFAULT_DB_PASS
            ))
            .allow_empty_password(true)
            .interact()?;
        if !pass.is_empty() {
            config.db_pass = pass;
        }
    }

    config.admin_email = Input::new()
        .with_prompt("Administrator email")
        .default(config.admin_email)
        .interact_text()?;

    let channel_index = Select::new()
        .with_prompt("Notification channel")
        .items(&NotificationChannel::ALL)
        .default(0)
        .interact()?;
    config.notification_channel = NotificationChannel::ALL[channel_index];

    config.use_docker = Confirm::new()
        .with_prompt("Use Docker for development? (recommended)")
        .default(true)
        .interact()?;

    // Local setup talks to a database outside the compose network.
    if !config.use_docker {
        config.db_host = Input::new()
            .with_prompt("Database host")
            .default("localhost".to_string())
            .interact_text()?;
        config.db_port = Input::new()
            .with_prompt("Database port")
            .default(config.db_port)
            .interact_text()?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_default_name_from_root_dir() {
        assert_eq!(default_name(Utf8Path::new("/work/acme-crm")), "acme-crm");
    }

    #[test]
    fn test_non_interactive_uses_root_name() {
        let root = Utf8PathBuf::from("/work/acme-crm");
        let config = collect_config(&root, false, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.project_name, "acme-crm");
        assert!(config.use_docker);
    }

    #[test]
    fn test_non_interactive_override_wins() {
        let root = Utf8PathBuf::from("/work/acme-crm");
        let overrides = ConfigOverrides {
            name: Some("Acme".to_string()),
            driver: Some("sqlite".to_string()),
            no_docker: true,
            ..Default::default()
        };
        let config = collect_config(&root, false, &overrides).unwrap();
        assert_eq!(config.project_name, "Acme");
        assert_eq!(config.db_driver, DbDriver::Sqlite);
        assert!(!config.use_docker);
    }

    #[test]
    fn test_non_interactive_invalid_driver_is_config_error() {
        let root = Utf8PathBuf::from("/work/acme-crm");
        let overrides = ConfigOverrides {
            driver: Some("mongodb".to_string()),
            ..Default::default()
        };
        let err = collect_config(&root, false, &overrides).unwrap_err();
        assert!(err.to_string().contains("mongodb"));
    }
}
