//! # mockfactory-cli
//!
//! MockFactory command-line interface.
//!
//! Provides commands for:
//! - Sandboxed code execution across seven languages
//! - Account management (login, signup, usage)
//! - Local mock infrastructure (organizations, clouds, mail, SMS, IAM, ...)
//! - Test-data generation and conversion utilities
//!
//! # Architecture
//!
//! Execution and account commands talk to the MockFactory backend over
//! HTTPS using [`mockfactory_client::ApiClient`]. Mock-resource commands
//! construct their records locally and never touch the network.
//!
//! ```text
//! ┌─────────────────┐      HTTPS/JSON      ┌──────────────────────┐
//! │ mockfactory-cli │◄────────────────────►│  MockFactory backend │
//! └─────────────────┘   (bearer-auth API)  └──────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format, RunArgs};
pub use error::CliError;
pub use output::OutputFormat;
