//! Mock container commands.

use std::io::Write;

use crate::cli::ContainerCommands;
use crate::commands::{new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for container subcommands.
pub struct ContainerCommand;

impl ContainerCommand {
    /// Executes the container subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &ContainerCommands,
    ) -> Result<(), CliError> {
        match command {
            ContainerCommands::Create {
                name,
                image,
                network,
                user,
                group,
            } => {
                let record = ResourceRecord::new(format!("Mock container '{name}' created"))
                    .field("container_id", new_id())
                    .field("name", name)
                    .field("image", image)
                    .optional_field("network", network.clone())
                    .optional_field("user", user.clone())
                    .optional_field("group", group.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            ContainerCommands::List { network, user } => {
                let mut table = RecordTable::new(
                    vec!["NAME", "IMAGE", "NETWORK", "USER", "STATUS"],
                    "container",
                );
                if let Some(network) = network {
                    table = table.empty_message(format!(
                        "No mock containers on network '{network}'"
                    ));
                } else if let Some(user) = user {
                    table = table
                        .empty_message(format!("No mock containers bound to user '{user}'"));
                }
                format.write(out, &table)?;
            }
            ContainerCommands::BindUser {
                container_name,
                username,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Bound user '{username}' to container '{container_name}'"
                    )),
                )?;
            }
            ContainerCommands::UnbindUser {
                container_name,
                username,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Unbound user '{username}' from container '{container_name}'"
                    )),
                )?;
            }
        }
        Ok(())
    }
}
