//! Mock project commands.

use std::io::Write;

use crate::cli::ProjectCommands;
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for project subcommands.
pub struct ProjectCommand;

impl ProjectCommand {
    /// Executes the project subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &ProjectCommands,
    ) -> Result<(), CliError> {
        match command {
            ProjectCommands::Create {
                name,
                organization,
                description,
                environment,
            } => {
                let record = ResourceRecord::new(format!("Mock project '{name}' created"))
                    .field("project_id", new_id())
                    .field("name", name)
                    .field("environment", environment.as_str())
                    .optional_field("organization", organization.clone())
                    .optional_field("description", description.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            ProjectCommands::List {
                organization,
                environment,
            } => {
                let mut table = RecordTable::new(
                    vec![
                        "PROJECT ID",
                        "NAME",
                        "ENVIRONMENT",
                        "ORGANIZATION",
                        "RESOURCES",
                    ],
                    "project",
                );
                if let Some(env) = environment {
                    table = table
                        .empty_message(format!("No {} mock projects found", env.as_str()));
                } else if let Some(org) = organization {
                    table = table.empty_message(format!(
                        "No mock projects found for organization '{org}'"
                    ));
                }
                format.write(out, &table)?;
            }
            ProjectCommands::Get { project_id } => {
                let record = ResourceRecord::new(format!("Project: {project_id}"))
                    .field("project_id", project_id);
                format.write(out, &record)?;
            }
            ProjectCommands::BindResource {
                project_id,
                resource_type,
                resource_id,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Bound {resource_type} '{resource_id}' to project '{project_id}'"
                    )),
                )?;
            }
            ProjectCommands::UnbindResource {
                project_id,
                resource_type,
                resource_id,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Unbound {resource_type} '{resource_id}' from project '{project_id}'"
                    )),
                )?;
            }
            ProjectCommands::Delete {
                project_id,
                yes,
                delete_resources,
            } => {
                let prompt = if *delete_resources {
                    format!(
                        "Are you sure you want to delete project '{project_id}' and all bound resources?"
                    )
                } else {
                    format!("Are you sure you want to delete project '{project_id}'?")
                };
                if !confirm(&prompt, *yes)? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                let message = if *delete_resources {
                    format!("Mock project '{project_id}' and its bound resources deleted")
                } else {
                    format!("Mock project '{project_id}' deleted")
                };
                format.write(out, &Message::success(message))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EnvironmentArg, Format};

    fn render(command: &ProjectCommands) -> String {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        ProjectCommand.execute(&mut buf, &fmt, command).expect("execute");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn create_defaults_to_development() {
        let output = render(&ProjectCommands::Create {
            name: "web-app".into(),
            organization: None,
            description: None,
            environment: EnvironmentArg::Development,
        });
        assert!(output.contains("Mock project 'web-app' created"));
        assert!(output.contains("development"));
    }

    #[test]
    fn bind_resource_names_both_sides() {
        let output = render(&ProjectCommands::BindResource {
            project_id: "proj-1".into(),
            resource_type: "container".into(),
            resource_id: "web-1".into(),
        });
        assert!(output.contains("Bound container 'web-1' to project 'proj-1'"));
    }

    #[test]
    fn delete_with_resources_mentions_them() {
        let output = render(&ProjectCommands::Delete {
            project_id: "proj-1".into(),
            yes: true,
            delete_resources: true,
        });
        assert!(output.contains("bound resources deleted"));
    }
}
