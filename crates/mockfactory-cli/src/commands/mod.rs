//! CLI command implementations.
//!
//! Each submodule implements a command family:
//! - [`run`] - Sandboxed code execution
//! - [`auth`] - Login, signup, logout
//! - [`status`] - Authentication status and usage counters
//! - [`config`] - Configuration management
//! - resource modules ([`organization`], [`user`], [`mail`], ...) - local
//!   mock-resource construction
//! - [`generate`] - Synthetic test-data generators
//! - [`utilities`] - Local conversion and encoding helpers

pub mod api;
pub mod auth;
pub mod cloud;
pub mod config;
pub mod container;
pub mod domain;
pub mod generate;
pub mod group;
pub mod iam;
pub mod mail;
pub mod network;
pub mod organization;
pub mod profile;
pub mod project;
pub mod run;
pub mod sms;
pub mod status;
pub mod user;
pub mod utilities;
pub mod workflow;

pub use api::ApiCommand;
pub use auth::AuthCommand;
pub use cloud::CloudCommand;
pub use config::ConfigCommand;
pub use container::ContainerCommand;
pub use domain::DomainCommand;
pub use generate::GenerateCommand;
pub use group::GroupCommand;
pub use iam::IamCommand;
pub use mail::{MailClientCommand, MailServerCommand, MailboxCommand};
pub use network::NetworkCommand;
pub use organization::OrganizationCommand;
pub use profile::ProfileCommand;
pub use project::ProjectCommand;
pub use run::RunCommand;
pub use sms::SmsCommand;
pub use status::StatusCommand;
pub use user::UserCommand;
pub use utilities::UtilitiesCommand;
pub use workflow::WorkflowCommand;

use std::io::{self, BufRead, Write};

use crate::error::CliError;

/// Ask the user to confirm a destructive action on the terminal.
///
/// `assume_yes` (the `--yes` flag) skips the prompt. Anything other than
/// `y`/`yes` cancels.
pub(crate) fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }
    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt} [y/N]: ")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Prompt for a value on the terminal.
pub(crate) fn prompt_line(label: &str) -> Result<String, CliError> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{label}: ")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Fresh identifier for a locally constructed mock resource.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC time in RFC 3339 with second precision.
pub(crate) fn now_utc() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
