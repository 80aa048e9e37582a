//! Install-time project configuration.
//!
//! A [`ProjectConfig`] is collected once per installer run, either from the
//! interactive questionnaire or from defaults overlaid with CLI flag
//! overrides, and is then passed by value into every template rendering call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Database engine the scaffolded service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbDriver {
    #[default]
    Mysql,
    Postgresql,
    Sqlite,
}

impl DbDriver {
    /// All supported drivers, in questionnaire order.
    pub const ALL: [DbDriver; 3] = [DbDriver::Mysql, DbDriver::Postgresql, DbDriver::Sqlite];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbDriver::Mysql => "mysql",
            DbDriver::Postgresql => "postgresql",
            DbDriver::Sqlite => "sqlite",
        }
    }

    /// Default host for the containerized database service.
    ///
    /// SQLite is file-backed; host and port are carried in the `.env` for
    /// uniformity but nothing connects to them.
    pub fn default_host(&self) -> &'static str {
        match self {
            DbDriver::Mysql => "mysql",
            DbDriver::Postgresql => "postgres",
            DbDriver::Sqlite => "localhost",
        }
    }

    /// Default connection port inside the compose network.
    pub fn default_port(&self) -> u16 {
        match self {
            DbDriver::Mysql | DbDriver::Sqlite => 3306,
            DbDriver::Postgresql => 5432,
        }
    }

    /// Whether this driver runs as a server process with credentials.
    pub fn has_server(&self) -> bool {
        !matches!(self, DbDriver::Sqlite)
    }
}

impl FromStr for DbDriver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(DbDriver::Mysql),
            "postgresql" | "postgres" => Ok(DbDriver::Postgresql),
            "sqlite" => Ok(DbDriver::Sqlite),
            _ => Err(Error::invalid_driver(s)),
        }
    }
}

impl fmt::Display for DbDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where operational notifications from the scaffolded service are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Slack,
}

impl NotificationChannel {
    /// All supported channels, in questionnaire order.
    pub const ALL: [NotificationChannel; 2] =
        [NotificationChannel::Email, NotificationChannel::Slack];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Slack => "slack",
        }
    }
}

impl FromStr for NotificationChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "slack" => Ok(NotificationChannel::Slack),
            _ => Err(Error::invalid_channel(s)),
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the installer needs to parameterize the generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub db_driver: DbDriver,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_pass: String,
    pub admin_email: String,
    pub notification_channel: NotificationChannel,
    /// Generate docker-compose.yml and docker/Dockerfile for containerized dev.
    pub use_docker: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::with_driver("my-project", DbDriver::default())
    }
}

impl ProjectConfig {
    pub const DEFAULT_DB_NAME: &'static str = "app_db";
    pub const DEFAULT_DB_USER: &'static str = "app_user";
    pub const DEFAULT_DB_PASS: &'static str = "app_pass";
    pub const DEFAULT_ADMIN_EMAIL: &'static str = "admin@example.com";

    /// Defaults for a given driver (host and port follow the driver).
    pub fn with_driver(project_name: impl Into<String>, driver: DbDriver) -> Self {
        Self {
            project_name: project_name.into(),
            db_driver: driver,
            db_host: driver.default_host().to_string(),
            db_port: driver.default_port(),
            db_name: Self::DEFAULT_DB_NAME.to_string(),
            db_user: Self::DEFAULT_DB_USER.to_string(),
            db_pass: Self::DEFAULT_DB_PASS.to_string(),
            admin_email: Self::DEFAULT_ADMIN_EMAIL.to_string(),
            notification_channel: NotificationChannel::default(),
            use_docker: true,
        }
    }

    /// Resolve a non-interactive configuration: defaults overlaid with flag
    /// overrides. Invalid driver or channel strings are rejected here.
    pub fn resolve(default_name: &str, overrides: &ConfigOverrides) -> Result<Self> {
        let driver = match &overrides.driver {
            Some(value) => value.parse::<DbDriver>()?,
            None => DbDriver::default(),
        };

        let name = overrides
            .name
            .clone()
            .unwrap_or_else(|| default_name.to_string());

        let mut config = Self::with_driver(name, driver);

        if let Some(db_name) = &overrides.db_name {
            config.db_name = db_name.clone();
        }
        if let Some(admin_email) = &overrides.admin_email {
            config.admin_email = admin_email.clone();
        }
        if let Some(channel) = &overrides.channel {
            config.notification_channel = channel.parse()?;
        }
        config.use_docker = !overrides.no_docker;

        Ok(config)
    }

    /// Lowercased identifier used for container and volume names.
    ///
    /// Runs of non-alphanumeric characters collapse to a single underscore.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.project_name.len());
        let mut last_was_sep = false;
        for ch in self.project_name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_was_sep = false;
            } else if !last_was_sep && !slug.is_empty() {
                slug.push('_');
                last_was_sep = true;
            }
        }
        while slug.ends_with('_') {
            slug.pop();
        }
        if slug.is_empty() {
            slug.push_str("app");
        }
        slug
    }
}

/// Optional field overrides for non-interactive installs, mapped from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub driver: Option<String>,
    pub db_name: Option<String>,
    pub admin_email: Option<String>,
    pub channel: Option<String>,
    pub no_docker: bool,
}

impl ConfigOverrides {
    /// True when any override field is set.
    pub fn any_set(&self) -> bool {
        self.name.is_some()
            || self.driver.is_some()
            || self.db_name.is_some()
            || self.admin_email.is_some()
            || self.channel.is_some()
            || self.no_docker
    }
}
