//! Mock API and webhook commands.

use std::io::Write;

use crate::cli::ApiCommands;
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for API subcommands.
pub struct ApiCommand;

impl ApiCommand {
    /// Executes the API subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] when a `--response` or
    /// `--payload` value is not valid JSON.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &ApiCommands,
    ) -> Result<(), CliError> {
        match command {
            ApiCommands::Create {
                name,
                api_type,
                base_url,
                auth,
            } => {
                let record = ResourceRecord::new(format!("Mock API '{name}' created"))
                    .field("api_id", new_id())
                    .field("name", name)
                    .field("type", api_type.as_str())
                    .field("auth", auth.as_str())
                    .field(
                        "base_url",
                        base_url
                            .clone()
                            .unwrap_or_else(|| format!("https://{name}.mock.local")),
                    )
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            ApiCommands::AddEndpoint {
                api_name,
                path,
                method,
                response,
                status,
            } => {
                let mut record = ResourceRecord::new(format!(
                    "Endpoint {} {path} added to API '{api_name}'",
                    method.as_str()
                ))
                .field("endpoint_id", new_id())
                .field("api", api_name)
                .field("method", method.as_str())
                .field("path", path)
                .field("status", status.to_string());
                if let Some(response) = response {
                    let value: serde_json::Value =
                        serde_json::from_str(response).map_err(|e| {
                            CliError::InvalidArgument(format!("invalid response JSON: {e}"))
                        })?;
                    record = record.field_value("response", value);
                }
                format.write(out, &record)?;
            }
            ApiCommands::List { api_type } => {
                let mut table = RecordTable::new(
                    vec!["NAME", "TYPE", "BASE URL", "AUTH", "ENDPOINTS"],
                    "API",
                );
                if let Some(api_type) = api_type {
                    table = table
                        .empty_message(format!("No {} mock APIs found", api_type.as_str()));
                }
                format.write(out, &table)?;
            }
            ApiCommands::ListRequests { api_name, limit } => {
                let table = RecordTable::new(
                    vec!["REQUEST ID", "METHOD", "PATH", "STATUS", "RECEIVED"],
                    "request",
                )
                .empty_message(format!(
                    "No captured requests for API '{api_name}' (showing up to {limit})"
                ));
                format.write(out, &table)?;
            }
            ApiCommands::Delete { name, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete API '{name}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(out, &Message::success(format!("Mock API '{name}' deleted")))?;
            }
            ApiCommands::CreateWebhook {
                name,
                url,
                events,
                secret,
            } => {
                let mut record = ResourceRecord::new(format!("Mock webhook '{name}' created"))
                    .field("webhook_id", new_id())
                    .field("name", name)
                    .field("url", url);
                if let Some(events) = events {
                    let names: Vec<&str> = events
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .collect();
                    record = record.field("events", names.join(", "));
                }
                record = record
                    .field(
                        "secret",
                        secret.as_deref().map_or("auto-generated", |_| "configured"),
                    )
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            ApiCommands::TriggerWebhook {
                webhook_name,
                event,
                payload,
            } => {
                let mut record = ResourceRecord::new(format!(
                    "Event '{event}' delivered to webhook '{webhook_name}'"
                ))
                .field("delivery_id", new_id())
                .field("webhook", webhook_name)
                .field("event", event);
                if let Some(payload) = payload {
                    let value: serde_json::Value =
                        serde_json::from_str(payload).map_err(|e| {
                            CliError::InvalidArgument(format!("invalid payload JSON: {e}"))
                        })?;
                    record = record.field_value("payload", value);
                }
                record = record.field("delivered_at", now_utc());
                format.write(out, &record)?;
            }
        }
        Ok(())
    }
}
