//! Mock organization commands.
//!
//! Organizations are synthetic objects constructed locally; ids and
//! timestamps are assigned on the spot and nothing is persisted.

use std::io::Write;

use crate::cli::OrganizationCommands;
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for organization subcommands.
pub struct OrganizationCommand;

impl OrganizationCommand {
    /// Executes the organization subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &OrganizationCommands,
    ) -> Result<(), CliError> {
        match command {
            OrganizationCommands::Create {
                name,
                description,
                owner,
                plan,
            } => {
                let record = ResourceRecord::new(format!("Mock organization '{name}' created"))
                    .field("org_id", new_id())
                    .field("name", name)
                    .field("plan", plan.as_str())
                    .optional_field("description", description.clone())
                    .optional_field("owner", owner.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            OrganizationCommands::List { plan } => {
                let table = RecordTable::new(
                    vec![
                        "ORG ID", "NAME", "PLAN", "USERS", "DOMAINS", "PROJECTS", "OWNER",
                    ],
                    "organization",
                )
                .empty_message(match plan {
                    Some(plan) => format!("No mock organizations on the {} plan", plan.as_str()),
                    None => "No mock organizations found".to_string(),
                });
                format.write(out, &table)?;
            }
            OrganizationCommands::Get { name } => {
                let record =
                    ResourceRecord::new(format!("Organization: {name}")).field("name", name);
                format.write(out, &record)?;
            }
            OrganizationCommands::Delete { name, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete organization '{name}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock organization '{name}' deleted")),
                )?;
            }
            OrganizationCommands::AddUser {
                org_name,
                username,
                role,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Added user '{username}' to organization '{org_name}' as {}",
                        role.as_str()
                    )),
                )?;
            }
            OrganizationCommands::RemoveUser { org_name, username } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Removed user '{username}' from organization '{org_name}'"
                    )),
                )?;
            }
        }
        Ok(())
    }
}
