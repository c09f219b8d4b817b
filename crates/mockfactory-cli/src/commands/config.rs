//! Configuration management commands.

use std::io::Write;

use mockfactory_config::ConfigStore;

use crate::cli::ConfigCommands;
use crate::error::CliError;
use crate::output::{Message, OutputFormat, ResourceRecord};

/// Handler for config subcommands.
pub struct ConfigCommand<'a> {
    store: &'a ConfigStore,
}

impl<'a> ConfigCommand<'a> {
    /// Creates a new config command handler.
    #[must_use]
    pub const fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Executes the config subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys, rejected values, or store failures.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &ConfigCommands,
    ) -> Result<(), CliError> {
        match command {
            ConfigCommands::Show => self.show(out, format),
            ConfigCommands::Set { key, value } => self.set(out, format, key, value),
            ConfigCommands::Reset => self.reset(out, format),
        }
    }

    fn show<W: Write>(&self, out: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let config = self.store.load();
        let record = ResourceRecord::new("Configuration")
            .field("api_url", config.api_url)
            .field("timeout", config.timeout_secs.to_string())
            .optional_field("session_id", config.session_id)
            .field("file", self.store.config_path().display().to_string());
        format.write(out, &record)?;
        Ok(())
    }

    fn set<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        key: &str,
        value: &str,
    ) -> Result<(), CliError> {
        let mut config = self.store.load();
        config.set(key, value)?;
        self.store.save(&config)?;
        format.write(out, &Message::success(format!("{key} set to {value}")))?;
        Ok(())
    }

    fn reset<W: Write>(&self, out: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        self.store.reset()?;
        format.write(out, &Message::success("Configuration reset to defaults"))?;
        Ok(())
    }
}
