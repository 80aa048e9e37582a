//! Install command

use anyhow::{anyhow, Result};
use camino::Utf8PathBuf;
use tabled::{settings::Style, Table, Tabled};

use seedbed_core::{manifest, ConfigOverrides, DbDriver};
use seedbed_scaffold::installer::{install, InstallOptions};
use seedbed_scaffold::report::InstallReport;

use crate::cli::InstallArgs;
use crate::output;

pub fn run(args: InstallArgs) -> Result<()> {
    let root = resolve_root(args.root)?;

    output::header("Seedbed Installer");
    output::kv("Target", root.as_str());

    let spinner = output::spinner("Checking prerequisites...");
    let prereq = manifest::check_prerequisites(&root);
    spinner.finish_and_clear();
    prereq?;

    let overrides = ConfigOverrides {
        name: args.name,
        driver: args.driver,
        db_name: args.db_name,
        admin_email: args.admin_email,
        channel: args.notify,
        no_docker: args.no_docker,
    };
    let options = InstallOptions {
        // Any override flag opts out of the questionnaire.
        interactive: !args.defaults && !overrides.any_set(),
        overrides,
    };

    let report = install(&root, &options, &output::ConsoleReporter)?;
    tracing::debug!(
        created = report.created_count(),
        skipped = report.skipped_count(),
        "install finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    print_next_steps(&report);

    Ok(())
}

/// Explicit root, or the current directory.
fn resolve_root(root: Option<Utf8PathBuf>) -> Result<Utf8PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir()?;
            Utf8PathBuf::from_path_buf(cwd)
                .map_err(|path| anyhow!("Current directory is not UTF-8: {}", path.display()))
        }
    }
}

#[derive(Tabled)]
struct SummaryRow {
    setting: &'static str,
    value: String,
}

fn print_summary(report: &InstallReport) {
    let config = &report.config;

    output::header("Project Summary");

    let mut rows = vec![
        SummaryRow {
            setting: "Project name",
            value: config.project_name.clone(),
        },
        SummaryRow {
            setting: "Database driver",
            value: config.db_driver.to_string(),
        },
        SummaryRow {
            setting: "Database",
            value: config.db_name.clone(),
        },
    ];
    if config.db_driver.has_server() {
        rows.push(SummaryRow {
            setting: "Database user",
            value: config.db_user.clone(),
        });
        rows.push(SummaryRow {
            setting: "Database host",
            value: format!("{}:{}", config.db_host, config.db_port),
        });
    }
    rows.push(SummaryRow {
        setting: "Admin email",
        value: config.admin_email.clone(),
    });
    rows.push(SummaryRow {
        setting: "Notifications",
        value: config.notification_channel.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);

    println!();
    output::kv("Created", &report.created_count().to_string());
    output::kv("Skipped", &report.skipped_count().to_string());
}

fn print_next_steps(report: &InstallReport) {
    let config = &report.config;

    println!();
    output::success("Installation complete");
    println!();
    output::info("Next steps:");

    if config.use_docker {
        println!("   1. Review the generated .env");
        println!("   2. Start the stack: docker compose up -d");
        println!("   3. Apply the initial migration from migrations/");
        println!("   4. Visit: http://localhost:8081/health");
    } else {
        if config.db_driver == DbDriver::Sqlite {
            println!("   1. SQLite storage is file-backed under data/");
        } else {
            println!(
                "   1. Point .env at your local {} instance",
                config.db_driver
            );
        }
        println!("   2. Apply the initial migration from migrations/");
        println!("   3. Start the server: cargo run --bin server");
        println!("   4. Visit: http://localhost:8080/health");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    fn defaults_args(root: &Utf8PathBuf) -> InstallArgs {
        InstallArgs {
            root: Some(root.clone()),
            defaults: true,
            name: None,
            driver: None,
            db_name: None,
            admin_email: None,
            notify: None,
            no_docker: false,
            json: false,
        }
    }

    #[test]
    fn test_install_fails_without_manifest() {
        let (_dir, root) = temp_root();
        let err = run(defaults_args(&root)).unwrap_err();
        assert!(err.to_string().contains("Cargo.toml"));
        // Aborted before any layout work.
        assert!(!root.join("config").exists());
    }

    #[test]
    fn test_install_fails_without_framework_dependency() {
        let (_dir, root) = temp_root();
        std::fs::write(
            root.join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let err = run(defaults_args(&root)).unwrap_err();
        assert!(err.to_string().contains("axum"));
    }

    #[test]
    fn test_install_with_defaults_scaffolds_project() {
        let (_dir, root) = temp_root();
        std::fs::write(
            root.join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[dependencies]\naxum = \"0.8\"\n",
        )
        .unwrap();

        run(defaults_args(&root)).unwrap();

        assert!(root.join(".env").exists());
        assert!(root.join("docker-compose.yml").exists());
        assert!(root.join("README.md").exists());
    }
}
