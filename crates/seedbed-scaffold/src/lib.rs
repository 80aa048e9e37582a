//! # seedbed-scaffold
//!
//! Scaffolding library for the Seedbed CLI providing:
//! - A fixed template registry with embedded bodies and on-disk overrides
//! - Placeholder rendering from the project configuration
//! - The idempotent installer and its per-artifact report
//!
//! Every file-creating step goes through [`installer::write_if_absent`], so a
//! partial install can always be completed by running the installer again.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use seedbed_scaffold::installer::{install, InstallOptions};
//! use seedbed_scaffold::report::SilentReporter;
//!
//! # fn example() -> seedbed_scaffold::Result<()> {
//! let options = InstallOptions::default();
//! let report = install(Utf8Path::new("/tmp/my-service"), &options, &SilentReporter)?;
//! println!("{} artifacts created", report.created_count());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod installer;
pub mod prompts;
pub mod report;
pub mod templates;

pub use error::{Error, Result};
pub use installer::{install, InstallOptions};
pub use report::{Artifact, ArtifactStatus, InstallReport, Reporter, SilentReporter};
pub use templates::TemplateId;
