//! Mock user commands.

use std::io::Write;

use crate::cli::UserCommands;
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for user subcommands.
pub struct UserCommand;

impl UserCommand {
    /// Executes the user subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &UserCommands,
    ) -> Result<(), CliError> {
        match command {
            UserCommands::Create {
                username,
                email,
                full_name,
                role,
                organization,
                cloud,
                domain,
                project_id,
            } => {
                // Email falls back to username@domain when a domain is given.
                let email = email.clone().or_else(|| {
                    domain
                        .as_ref()
                        .map(|domain| format!("{username}@{domain}"))
                });
                let record = ResourceRecord::new(format!("Mock user '{username}' created"))
                    .field("user_id", new_id())
                    .field("username", username)
                    .field("role", role)
                    .optional_field("email", email)
                    .optional_field("full_name", full_name.clone())
                    .optional_field("organization", organization.clone())
                    .optional_field("cloud", cloud.clone())
                    .optional_field("project_id", project_id.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            UserCommands::List { role } => {
                let mut table = RecordTable::new(
                    vec!["USERNAME", "EMAIL", "FULL NAME", "ROLE", "ORGANIZATION"],
                    "user",
                );
                if let Some(role) = role {
                    table = table.empty_message(format!("No mock users with role '{role}'"));
                }
                format.write(out, &table)?;
            }
            UserCommands::Get { username } => {
                let record =
                    ResourceRecord::new(format!("User: {username}")).field("username", username);
                format.write(out, &record)?;
            }
            UserCommands::Delete { username, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete user '{username}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock user '{username}' deleted")),
                )?;
            }
        }
        Ok(())
    }
}
