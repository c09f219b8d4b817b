//! Mock cloud environment commands.

use std::io::Write;

use crate::cli::CloudCommands;
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for cloud subcommands.
pub struct CloudCommand;

impl CloudCommand {
    /// Executes the cloud subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &CloudCommands,
    ) -> Result<(), CliError> {
        match command {
            CloudCommands::Create {
                name,
                provider,
                organization,
                region,
            } => {
                let record = ResourceRecord::new(format!("Mock cloud '{name}' created"))
                    .field("cloud_id", new_id())
                    .field("name", name)
                    .field("provider", provider.as_str())
                    .field("region", region)
                    .optional_field("organization", organization.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            CloudCommands::List {
                provider,
                organization,
            } => {
                let mut table = RecordTable::new(
                    vec!["NAME", "PROVIDER", "REGION", "ORGANIZATION", "RESOURCES"],
                    "cloud environment",
                )
                .empty_message("No mock cloud environments found");
                if let Some(provider) = provider {
                    table = table.empty_message(format!(
                        "No {} mock cloud environments found",
                        provider.as_str()
                    ));
                } else if let Some(org) = organization {
                    table = table.empty_message(format!(
                        "No mock cloud environments found for organization '{org}'"
                    ));
                }
                format.write(out, &table)?;
            }
            CloudCommands::Get { name } => {
                let record = ResourceRecord::new(format!("Cloud: {name}")).field("name", name);
                format.write(out, &record)?;
            }
            CloudCommands::Delete { name, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete cloud environment '{name}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock cloud environment '{name}' deleted")),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CloudProviderArg, Format};

    fn render(command: &CloudCommands) -> String {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        CloudCommand.execute(&mut buf, &fmt, command).expect("execute");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn create_reports_provider_and_region() {
        let output = render(&CloudCommands::Create {
            name: "dev-cloud".into(),
            provider: CloudProviderArg::Gcp,
            organization: None,
            region: "us-central1".into(),
        });
        assert!(output.contains("Mock cloud 'dev-cloud' created"));
        assert!(output.contains("gcp"));
        assert!(output.contains("us-central1"));
    }

    #[test]
    fn list_with_provider_filter_adjusts_empty_message() {
        let output = render(&CloudCommands::List {
            provider: Some(CloudProviderArg::Azure),
            organization: None,
        });
        assert!(output.contains("No azure mock cloud environments found"));
    }
}
