//! # seedbed-core
//!
//! Core library for the Seedbed CLI providing:
//! - The install-time project configuration record and its defaults
//! - Database driver and notification channel types
//! - Prerequisite checks against the target package manifest
//!
//! The configuration record is transient: it is built once per installer run,
//! passed by value into template rendering, and discarded. No ambient state.

pub mod config;
pub mod error;
pub mod manifest;

pub use config::{ConfigOverrides, DbDriver, NotificationChannel, ProjectConfig};
pub use error::{Error, Result};
