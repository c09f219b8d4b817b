//! Mock mail system commands: servers, clients, and mailboxes.

use std::io::Write;

use crate::cli::{MailClientCommands, MailServerCommands, MailboxCommands};
use crate::commands::{confirm, new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord};

/// Handler for mail-server subcommands.
pub struct MailServerCommand;

impl MailServerCommand {
    /// Executes the mail-server subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &MailServerCommands,
    ) -> Result<(), CliError> {
        match command {
            MailServerCommands::Create {
                name,
                host,
                port,
                protocol,
                tls,
            } => {
                let record = ResourceRecord::new(format!("Mock mail server '{name}' created"))
                    .field("server_id", new_id())
                    .field("name", name)
                    .field("host", host)
                    .field("port", port.to_string())
                    .field("protocol", protocol.as_str())
                    .field("tls", if *tls { "enabled" } else { "disabled" })
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            MailServerCommands::List { protocol } => {
                let mut table = RecordTable::new(
                    vec!["NAME", "HOST", "PORT", "PROTOCOL", "TLS"],
                    "mail server",
                );
                if let Some(protocol) = protocol {
                    table = table.empty_message(format!(
                        "No {} mock mail servers found",
                        protocol.as_str()
                    ));
                }
                format.write(out, &table)?;
            }
            MailServerCommands::Get { name } => {
                let record =
                    ResourceRecord::new(format!("Mail server: {name}")).field("name", name);
                format.write(out, &record)?;
            }
            MailServerCommands::Delete { name, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete mail server '{name}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock mail server '{name}' deleted")),
                )?;
            }
        }
        Ok(())
    }
}

/// Handler for mail-client subcommands.
pub struct MailClientCommand;

impl MailClientCommand {
    /// Executes the mail-client subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &MailClientCommands,
    ) -> Result<(), CliError> {
        match command {
            MailClientCommands::Create {
                name,
                user,
                server,
                mailbox,
            } => {
                let record = ResourceRecord::new(format!("Mock mail client '{name}' created"))
                    .field("client_id", new_id())
                    .field("name", name)
                    .optional_field("user", user.clone())
                    .optional_field("server", server.clone())
                    .optional_field("mailbox", mailbox.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            MailClientCommands::List { user, server } => {
                let mut table = RecordTable::new(
                    vec!["NAME", "USER", "SERVER", "MAILBOX"],
                    "mail client",
                );
                if let Some(user) = user {
                    table = table
                        .empty_message(format!("No mock mail clients bound to user '{user}'"));
                } else if let Some(server) = server {
                    table = table
                        .empty_message(format!("No mock mail clients on server '{server}'"));
                }
                format.write(out, &table)?;
            }
            MailClientCommands::Delete { name, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete mail client '{name}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock mail client '{name}' deleted")),
                )?;
            }
        }
        Ok(())
    }
}

/// Handler for mailbox subcommands.
pub struct MailboxCommand;

impl MailboxCommand {
    /// Executes the mailbox subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &MailboxCommands,
    ) -> Result<(), CliError> {
        match command {
            MailboxCommands::Create { email, user, quota } => {
                let record = ResourceRecord::new(format!("Mock mailbox '{email}' created"))
                    .field("mailbox_id", new_id())
                    .field("email", email)
                    .field("quota_mb", quota.to_string())
                    .optional_field("user", user.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            MailboxCommands::List { user } => {
                let mut table = RecordTable::new(
                    vec!["EMAIL", "USER", "QUOTA (MB)", "MESSAGES"],
                    "mailbox",
                )
                .empty_message("No mock mailboxes found");
                if let Some(user) = user {
                    table =
                        table.empty_message(format!("No mock mailboxes bound to user '{user}'"));
                }
                format.write(out, &table)?;
            }
            MailboxCommands::Get { email } => {
                let record =
                    ResourceRecord::new(format!("Mailbox: {email}")).field("email", email);
                format.write(out, &record)?;
            }
            MailboxCommands::Delete { email, yes } => {
                if !confirm(
                    &format!("Are you sure you want to delete mailbox '{email}'?"),
                    *yes,
                )? {
                    format.write(out, &Message::info("Cancelled"))?;
                    return Ok(());
                }
                format.write(
                    out,
                    &Message::success(format!("Mock mailbox '{email}' deleted")),
                )?;
            }
            MailboxCommands::Send {
                from_email,
                to_email,
                subject,
                body,
                attachments,
            } => {
                let mut record = ResourceRecord::new(format!(
                    "Mock email sent from '{from_email}' to '{to_email}'"
                ))
                .field("message_id", new_id())
                .field("from", from_email)
                .field("to", to_email)
                .field("subject", subject)
                .field("body_bytes", body.len().to_string());
                if let Some(attachments) = attachments {
                    let names: Vec<&str> = attachments
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .collect();
                    record = record.field("attachments", names.join(", "));
                }
                record = record.field("sent_at", now_utc());
                format.write(out, &record)?;
            }
            MailboxCommands::ListMessages {
                email,
                folder,
                limit,
            } => {
                let table = RecordTable::new(
                    vec!["MESSAGE ID", "FROM", "SUBJECT", "RECEIVED"],
                    "message",
                )
                .empty_message(format!(
                    "No messages in {} of '{email}' (showing up to {limit})",
                    folder.as_str()
                ));
                format.write(out, &table)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{FolderArg, Format, MailProtocolArg};

    #[test]
    fn mail_server_create_reports_tls() {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        MailServerCommand
            .execute(
                &mut buf,
                &fmt,
                &MailServerCommands::Create {
                    name: "mail-1".into(),
                    host: "mail.example.com".into(),
                    port: 587,
                    protocol: MailProtocolArg::Smtp,
                    tls: true,
                },
            )
            .expect("execute");
        let output = String::from_utf8(buf).expect("utf8");
        assert!(output.contains("Mock mail server 'mail-1' created"));
        assert!(output.contains("587"));
        assert!(output.contains("enabled"));
    }

    #[test]
    fn mailbox_send_lists_attachments() {
        let fmt = OutputFormat::new(Format::Json);
        let mut buf = Vec::new();
        MailboxCommand
            .execute(
                &mut buf,
                &fmt,
                &MailboxCommands::Send {
                    from_email: "a@x.com".into(),
                    to_email: "b@x.com".into(),
                    subject: "Hi".into(),
                    body: "Hello there".into(),
                    attachments: Some("report.pdf, data.csv".into()),
                },
            )
            .expect("execute");
        let parsed: serde_json::Value =
            serde_json::from_str(&String::from_utf8(buf).expect("utf8")).expect("json");
        assert_eq!(parsed["from"], "a@x.com");
        assert_eq!(parsed["attachments"], "report.pdf, data.csv");
    }

    #[test]
    fn list_messages_names_the_folder() {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        MailboxCommand
            .execute(
                &mut buf,
                &fmt,
                &MailboxCommands::ListMessages {
                    email: "a@x.com".into(),
                    folder: FolderArg::Drafts,
                    limit: 10,
                },
            )
            .expect("execute");
        let output = String::from_utf8(buf).expect("utf8");
        assert!(output.contains("drafts"));
        assert!(output.contains("a@x.com"));
    }
}
