//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Seedbed - scaffolding installer for containerized web services
#[derive(Parser, Debug)]
#[command(name = "seedbed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold the project layout and configuration files
    Install(InstallArgs),

    /// Inspect the built-in templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Install command
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Target project root (default: current directory)
    #[arg(short, long)]
    pub root: Option<Utf8PathBuf>,

    /// Accept defaults without prompting
    #[arg(short = 'y', long)]
    pub defaults: bool,

    /// Project name (implies --defaults)
    #[arg(long)]
    pub name: Option<String>,

    /// Database driver: mysql, postgresql, or sqlite (implies --defaults)
    #[arg(long)]
    pub driver: Option<String>,

    /// Database name (implies --defaults)
    #[arg(long)]
    pub db_name: Option<String>,

    /// Administrator email (implies --defaults)
    #[arg(long)]
    pub admin_email: Option<String>,

    /// Notification channel: email or slack (implies --defaults)
    #[arg(long)]
    pub notify: Option<String>,

    /// Skip docker-compose.yml and docker/Dockerfile generation
    #[arg(long)]
    pub no_docker: bool,

    /// Output the install report as JSON
    #[arg(long)]
    pub json: bool,
}

// Template commands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List template ids and what they generate
    List(TemplateListArgs),

    /// Print a built-in template body
    Show(TemplateShowArgs),
}

#[derive(Args, Debug)]
pub struct TemplateListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TemplateShowArgs {
    /// Template id (e.g. env, compose-postgresql)
    pub id: String,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_install_flags_parse() {
        let cli = Cli::parse_from([
            "seedbed",
            "install",
            "--driver",
            "postgresql",
            "--name",
            "Acme",
            "--no-docker",
        ]);
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.driver.as_deref(), Some("postgresql"));
                assert_eq!(args.name.as_deref(), Some("Acme"));
                assert!(args.no_docker);
                assert!(!args.defaults);
            }
            _ => panic!("expected install command"),
        }
    }
}
