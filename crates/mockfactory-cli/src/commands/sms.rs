//! Mock SMS commands: providers, phone numbers, and messages.

use std::io::Write;

use crate::cli::SmsCommands;
use crate::commands::{new_id, now_utc};
use crate::error::CliError;
use crate::output::{OutputFormat, RecordTable, ResourceRecord};

/// Handler for SMS subcommands.
pub struct SmsCommand;

impl SmsCommand {
    /// Executes the SMS subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &SmsCommands,
    ) -> Result<(), CliError> {
        match command {
            SmsCommands::CreateProvider {
                name,
                provider,
                api_key,
            } => {
                let record = ResourceRecord::new(format!("Mock SMS provider '{name}' created"))
                    .field("provider_id", new_id())
                    .field("name", name)
                    .field("provider", provider.as_str())
                    .field(
                        "api_key",
                        api_key.as_deref().map_or("auto-generated", |_| "configured"),
                    )
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            SmsCommands::ListProviders => {
                let table = RecordTable::new(
                    vec!["NAME", "PROVIDER", "NUMBERS", "MESSAGES"],
                    "SMS provider",
                );
                format.write(out, &table)?;
            }
            SmsCommands::Send {
                from_number,
                to_number,
                message,
                provider,
            } => {
                let record = ResourceRecord::new(format!(
                    "Mock SMS sent from '{from_number}' to '{to_number}'"
                ))
                .field("message_id", new_id())
                .field("from", from_number)
                .field("to", to_number)
                .field("message", message)
                .field("segments", segment_count(message).to_string())
                .optional_field("provider", provider.clone())
                .field("sent_at", now_utc());
                format.write(out, &record)?;
            }
            SmsCommands::ListMessages {
                phone_number,
                provider,
                limit,
            } => {
                let mut table = RecordTable::new(
                    vec!["MESSAGE ID", "FROM", "TO", "MESSAGE", "SENT"],
                    "message",
                )
                .empty_message(format!("No mock SMS messages (showing up to {limit})"));
                if let Some(number) = phone_number {
                    table = table
                        .empty_message(format!("No mock SMS messages for '{number}'"));
                } else if let Some(provider) = provider {
                    table = table.empty_message(format!(
                        "No mock SMS messages via provider '{provider}'"
                    ));
                }
                format.write(out, &table)?;
            }
            SmsCommands::CreateNumber {
                phone_number,
                user,
                provider,
            } => {
                let record =
                    ResourceRecord::new(format!("Mock phone number '{phone_number}' created"))
                        .field("number_id", new_id())
                        .field("phone_number", phone_number)
                        .optional_field("user", user.clone())
                        .optional_field("provider", provider.clone())
                        .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            SmsCommands::ListNumbers { user, provider } => {
                let mut table = RecordTable::new(
                    vec!["PHONE NUMBER", "USER", "PROVIDER"],
                    "phone number",
                );
                if let Some(user) = user {
                    table = table
                        .empty_message(format!("No mock phone numbers bound to user '{user}'"));
                } else if let Some(provider) = provider {
                    table = table.empty_message(format!(
                        "No mock phone numbers via provider '{provider}'"
                    ));
                }
                format.write(out, &table)?;
            }
        }
        Ok(())
    }
}

/// GSM-7 style segmentation: 160 chars for a single segment, 153 per
/// segment afterwards.
fn segment_count(message: &str) -> usize {
    let len = message.chars().count();
    if len <= 160 {
        1
    } else {
        len.div_ceil(153)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Format, SmsProviderArg};

    fn render(command: &SmsCommands) -> String {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        SmsCommand.execute(&mut buf, &fmt, command).expect("execute");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn create_provider_hides_api_key() {
        let output = render(&SmsCommands::CreateProvider {
            name: "main-sms".into(),
            provider: SmsProviderArg::Twilio,
            api_key: Some("sk_secret_value".into()),
        });
        assert!(output.contains("Mock SMS provider 'main-sms' created"));
        assert!(output.contains("configured"));
        assert!(!output.contains("sk_secret_value"));
    }

    #[test]
    fn send_reports_single_segment() {
        let output = render(&SmsCommands::Send {
            from_number: "+15550001".into(),
            to_number: "+15550002".into(),
            message: "Your code is 123456".into(),
            provider: None,
        });
        assert!(output.contains("Mock SMS sent from '+15550001' to '+15550002'"));
        assert!(output.contains("segments"));
    }

    #[test]
    fn long_message_splits_into_segments() {
        assert_eq!(segment_count(&"x".repeat(160)), 1);
        assert_eq!(segment_count(&"x".repeat(161)), 2);
        assert_eq!(segment_count(&"x".repeat(306)), 2);
        assert_eq!(segment_count(&"x".repeat(307)), 3);
    }
}
