//! Mock group commands.

use std::io::Write;

use crate::cli::GroupCommands;
use crate::commands::{new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for group subcommands.
pub struct GroupCommand;

impl GroupCommand {
    /// Executes the group subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &GroupCommands,
    ) -> Result<(), CliError> {
        match command {
            GroupCommands::Create { name, description } => {
                let record = ResourceRecord::new(format!("Mock group '{name}' created"))
                    .field("group_id", new_id())
                    .field("name", name)
                    .optional_field("description", description.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            GroupCommands::List => {
                let table =
                    RecordTable::new(vec!["NAME", "DESCRIPTION", "MEMBERS"], "group");
                format.write(out, &table)?;
            }
            GroupCommands::AddUser {
                group_name,
                username,
            } => {
                format.write(
                    out,
                    &Message::success(format!("Added user '{username}' to group '{group_name}'")),
                )?;
            }
            GroupCommands::RemoveUser {
                group_name,
                username,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Removed user '{username}' from group '{group_name}'"
                    )),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn render(command: &GroupCommands) -> String {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        GroupCommand.execute(&mut buf, &fmt, command).expect("execute");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn create_includes_description_when_given() {
        let output = render(&GroupCommands::Create {
            name: "developers".into(),
            description: Some("Engineering team".into()),
        });
        assert!(output.contains("Mock group 'developers' created"));
        assert!(output.contains("Engineering team"));
    }

    #[test]
    fn add_and_remove_user_report_membership() {
        let output = render(&GroupCommands::AddUser {
            group_name: "developers".into(),
            username: "jane".into(),
        });
        assert!(output.contains("Added user 'jane' to group 'developers'"));

        let output = render(&GroupCommands::RemoveUser {
            group_name: "developers".into(),
            username: "jane".into(),
        });
        assert!(output.contains("Removed user 'jane' from group 'developers'"));
    }
}
