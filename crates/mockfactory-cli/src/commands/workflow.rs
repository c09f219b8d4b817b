//! Mock verification workflow commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::WorkflowCommands;
use crate::commands::{new_id, now_utc};
use crate::error::CliError;
use crate::output::{OutputFormat, RecordTable, ResourceRecord, TableDisplay};

/// Handler for workflow subcommands.
pub struct WorkflowCommand;

/// Rendered dry run of a registration workflow.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationTestReport {
    /// Workflow name.
    pub workflow: String,
    /// Username registered during the test.
    pub username: String,
    /// Email a verification message was "sent" to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number a verification SMS was "sent" to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Ordered workflow steps executed.
    pub steps: Vec<String>,
}

impl RegistrationTestReport {
    fn new(
        workflow: &str,
        username: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Self {
        let mut steps = vec!["User registration initiated".to_string()];
        if let Some(email) = email {
            steps.push(format!("Email verification sent to {email}"));
        }
        if let Some(phone) = phone {
            steps.push(format!("SMS verification sent to {phone}"));
        }
        steps.push("Registration complete".to_string());

        Self {
            workflow: workflow.to_string(),
            username: username.to_string(),
            email: email.map(ToString::to_string),
            phone: phone.map(ToString::to_string),
            steps,
        }
    }
}

impl TableDisplay for RegistrationTestReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(
            writer,
            "✓ Tested registration workflow '{}' for user '{}'",
            self.workflow, self.username
        )?;
        writeln!(writer)?;
        writeln!(writer, "Workflow steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(writer, "  {}. {step}", i + 1)?;
        }
        Ok(())
    }
}

impl WorkflowCommand {
    /// Executes the workflow subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &WorkflowCommands,
    ) -> Result<(), CliError> {
        match command {
            WorkflowCommands::CreateRegistration {
                name,
                email_verification,
                sms_verification,
                mail_server,
                sms_provider,
            } => {
                let mut record = ResourceRecord::new(format!(
                    "Registration workflow '{name}' created"
                ))
                .field("workflow_id", new_id())
                .field("name", name)
                .field("type", "registration")
                .field(
                    "email_verification",
                    if *email_verification { "enabled" } else { "disabled" },
                )
                .field(
                    "sms_verification",
                    if *sms_verification { "enabled" } else { "disabled" },
                );
                if *email_verification {
                    record = record.optional_field("mail_server", mail_server.clone());
                }
                if *sms_verification {
                    record = record.optional_field("sms_provider", sms_provider.clone());
                }
                record = record.field("created_at", now_utc());
                format.write(out, &record)?;
            }
            WorkflowCommands::TestRegistration {
                workflow_name,
                username,
                email,
                phone,
            } => {
                let report = RegistrationTestReport::new(
                    workflow_name,
                    username,
                    email.as_deref(),
                    phone.as_deref(),
                );
                format.write(out, &report)?;
            }
            WorkflowCommands::List => {
                let table = RecordTable::new(
                    vec!["ID", "NAME", "TYPE", "EMAIL", "SMS", "TESTS RUN"],
                    "workflow",
                );
                format.write(out, &table)?;
            }
        }
        Ok(())
    }
}
