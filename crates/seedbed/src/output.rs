//! Terminal output utilities

use camino::Utf8Path;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use seedbed_scaffold::report::{ArtifactStatus, Reporter};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Installer progress sink that writes styled lines to standard output.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn section(&self, title: &str) {
        header(title);
    }

    fn artifact(&self, path: &Utf8Path, status: ArtifactStatus) {
        match status {
            ArtifactStatus::Created => success(&format!("Created: {path}")),
            ArtifactStatus::Skipped => {
                println!("{} Exists:  {}", style("·").dim(), style(path).dim())
            }
        }
    }

    fn info(&self, msg: &str) {
        info(msg);
    }
}
