//! Mock domain commands.

use std::io::Write;

use crate::cli::DomainCommands;
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for domain subcommands.
pub struct DomainCommand;

impl DomainCommand {
    /// Executes the domain subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &DomainCommands,
    ) -> Result<(), CliError> {
        match command {
            DomainCommands::Create {
                domain_name,
                organization,
                verified,
                dns_records,
            } => {
                let mut record = ResourceRecord::new(format!("Mock domain '{domain_name}' created"))
                    .field("domain_id", new_id())
                    .field("domain", domain_name)
                    .field("verified", if *verified { "yes" } else { "no" })
                    .optional_field("organization", organization.clone());
                if let Some(records) = dns_records {
                    let kinds: Vec<&str> =
                        records.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
                    record = record.field("dns_records", kinds.join(", "));
                }
                record = record.field("created_at", now_utc());
                format.write(out, &record)?;
            }
            DomainCommands::List {
                organization,
                verified,
            } => {
                let mut table = RecordTable::new(
                    vec!["DOMAIN", "ORGANIZATION", "VERIFIED", "DNS RECORDS"],
                    "domain",
                );
                if *verified {
                    table = table.empty_message("No verified mock domains found");
                } else if let Some(org) = organization {
                    table = table.empty_message(format!(
                        "No mock domains found for organization '{org}'"
                    ));
                }
                format.write(out, &table)?;
            }
            DomainCommands::Get { domain_name } => {
                let record = ResourceRecord::new(format!("Domain: {domain_name}"))
                    .field("domain", domain_name);
                format.write(out, &record)?;
            }
            DomainCommands::Verify { domain_name } => {
                format.write(
                    out,
                    &Message::success(format!("Mock domain '{domain_name}' marked as verified")),
                )?;
            }
            DomainCommands::Delete { domain_name, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete domain '{domain_name}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock domain '{domain_name}' deleted")),
                )?;
            }
        }
        Ok(())
    }
}
