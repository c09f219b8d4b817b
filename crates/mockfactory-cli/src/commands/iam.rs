//! Mock IAM commands: users, groups, roles, policies, and permission
//! simulation.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::cli::IamCommands;
use crate::commands::{new_id, now_utc};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, RecordTable, ResourceRecord, TableDisplay};

/// Handler for IAM subcommands.
pub struct IamCommand;

/// Outcome of a policy simulation or permission check.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Action that was evaluated.
    pub action: String,
    /// Resource the action targets.
    pub resource: String,
    /// Whether the action is allowed.
    pub allowed: bool,
    /// Human-readable explanation of the decision.
    pub detail: String,
}

impl TableDisplay for EvaluationReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let verdict = if self.allowed { "✓ ALLOWED" } else { "✗ DENIED" };
        writeln!(writer, "{verdict}: {} on {}", self.action, self.resource)?;
        writeln!(writer, "{}", self.detail)?;
        Ok(())
    }
}

/// Freshly minted access key with a one-time secret.
#[derive(Debug, Clone, Serialize)]
pub struct AccessKeyReport {
    /// Owning IAM username.
    pub username: String,
    /// Access key identifier.
    pub access_key_id: String,
    /// Secret access key, shown exactly once.
    pub secret_access_key: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl TableDisplay for AccessKeyReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "✓ Access key created for '{}'", self.username)?;
        writeln!(writer)?;
        writeln!(writer, "  Access key ID:     {}", self.access_key_id)?;
        writeln!(writer, "  Secret access key: {}", self.secret_access_key)?;
        writeln!(writer)?;
        writeln!(
            writer,
            "Save the secret access key now. It will not be shown again."
        )?;
        Ok(())
    }
}

impl IamCommand {
    /// Executes the IAM subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for malformed policy
    /// documents, and [`CliError::Io`] when an `@file.json` reference
    /// cannot be read.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &IamCommands,
    ) -> Result<(), CliError> {
        match command {
            IamCommands::CreateUser {
                username,
                organization,
                cloud,
                path,
            } => {
                let record = ResourceRecord::new(format!("IAM user '{username}' created"))
                    .field("user_id", new_id())
                    .field("username", username)
                    .field("path", path)
                    .optional_field("organization", organization.clone())
                    .optional_field("cloud", cloud.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            IamCommands::CreateGroup {
                group_name,
                organization,
                cloud,
                description,
            } => {
                let record = ResourceRecord::new(format!("IAM group '{group_name}' created"))
                    .field("group_id", new_id())
                    .field("group_name", group_name)
                    .optional_field("description", description.clone())
                    .optional_field("organization", organization.clone())
                    .optional_field("cloud", cloud.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            IamCommands::CreateRole {
                role_name,
                trust_policy,
                organization,
                cloud,
                description,
            } => {
                let trust = load_policy_document(trust_policy)?;
                let record = ResourceRecord::new(format!("IAM role '{role_name}' created"))
                    .field("role_id", new_id())
                    .field("role_name", role_name)
                    .field_value("trust_policy", trust)
                    .optional_field("description", description.clone())
                    .optional_field("organization", organization.clone())
                    .optional_field("cloud", cloud.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            IamCommands::CreatePolicy {
                policy_name,
                policy_document,
                description,
                organization,
                cloud,
            } => {
                let document = load_policy_document(policy_document)?;
                let statements = statement_count(&document);
                let record = ResourceRecord::new(format!("IAM policy '{policy_name}' created"))
                    .field("policy_id", new_id())
                    .field("policy_name", policy_name)
                    .field("statements", statements.to_string())
                    .optional_field("description", description.clone())
                    .optional_field("organization", organization.clone())
                    .optional_field("cloud", cloud.clone())
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            IamCommands::AttachUserPolicy {
                username,
                policy_name,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Policy '{policy_name}' attached to user '{username}'"
                    )),
                )?;
            }
            IamCommands::AttachGroupPolicy {
                group_name,
                policy_name,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Policy '{policy_name}' attached to group '{group_name}'"
                    )),
                )?;
            }
            IamCommands::AttachRolePolicy {
                role_name,
                policy_name,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "Policy '{policy_name}' attached to role '{role_name}'"
                    )),
                )?;
            }
            IamCommands::AddUserToGroup {
                username,
                group_name,
            } => {
                format.write(
                    out,
                    &Message::success(format!(
                        "User '{username}' added to group '{group_name}'"
                    )),
                )?;
            }
            IamCommands::CreateAccessKey { username, .. } => {
                let report = AccessKeyReport {
                    username: username.clone(),
                    access_key_id: generate_access_key_id(),
                    secret_access_key: generate_secret_key(),
                    created_at: now_utc(),
                };
                format.write(out, &report)?;
            }
            IamCommands::ListUsers {
                organization,
                cloud,
            } => {
                let mut table = RecordTable::new(
                    vec!["USERNAME", "PATH", "GROUPS", "POLICIES", "CREATED"],
                    "IAM user",
                );
                if let Some(org) = organization {
                    table = table
                        .empty_message(format!("No IAM users in organization '{org}'"));
                } else if let Some(cloud) = cloud {
                    table = table.empty_message(format!("No IAM users in cloud '{cloud}'"));
                }
                format.write(out, &table)?;
            }
            IamCommands::ListPolicies {
                organization,
                cloud,
            } => {
                let mut table = RecordTable::new(
                    vec!["POLICY NAME", "STATEMENTS", "ATTACHED TO", "CREATED"],
                    "IAM policy",
                )
                .empty_message("No IAM policies found");
                if let Some(org) = organization {
                    table = table
                        .empty_message(format!("No IAM policies in organization '{org}'"));
                } else if let Some(cloud) = cloud {
                    table =
                        table.empty_message(format!("No IAM policies in cloud '{cloud}'"));
                }
                format.write(out, &table)?;
            }
            IamCommands::GetPolicy { policy_name } => {
                let document = json!({
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": ["s3:GetObject", "s3:ListBucket"],
                        "Resource": "*",
                    }],
                });
                let record = ResourceRecord::new(format!("IAM policy: {policy_name}"))
                    .field("policy_name", policy_name)
                    .field_value("document", document);
                format.write(out, &record)?;
            }
            IamCommands::SimulatePolicy {
                policy_name,
                action,
                resource,
                user,
            } => {
                let mut detail = format!(
                    "Matching statement: Statement[0]\nEffect: Allow\nPolicy: '{policy_name}'"
                );
                if let Some(user) = user {
                    detail.push_str(&format!("\nEvaluated as user '{user}'"));
                }
                let report = EvaluationReport {
                    action: action.clone(),
                    resource: resource.clone(),
                    allowed: true,
                    detail,
                };
                format.write(out, &report)?;
            }
            IamCommands::CreateResourcePolicy {
                resource_type,
                resource_id,
                policy_document,
            } => {
                let document = load_policy_document(policy_document)?;
                let record = ResourceRecord::new(format!(
                    "Resource policy attached to {resource_type} '{resource_id}'"
                ))
                .field("policy_id", new_id())
                .field("resource_type", resource_type)
                .field("resource_id", resource_id)
                .field("statements", statement_count(&document).to_string())
                .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            IamCommands::CheckPermission {
                username,
                action,
                resource,
                cloud,
            } => {
                let mut detail = String::from(
                    "Granted via: Policy 's3-read-only' attached to group 'developers'",
                );
                if let Some(cloud) = cloud {
                    detail.push_str(&format!("\nCloud: '{cloud}'"));
                }
                detail.push_str(&format!("\nUser: '{username}'"));
                let report = EvaluationReport {
                    action: action.clone(),
                    resource: resource.clone(),
                    allowed: true,
                    detail,
                };
                format.write(out, &report)?;
            }
        }
        Ok(())
    }
}

/// Parses an inline policy document, or reads it from disk when the
/// value starts with `@`.
fn load_policy_document(value: &str) -> Result<serde_json::Value, CliError> {
    let text = if let Some(path) = value.strip_prefix('@') {
        std::fs::read_to_string(Path::new(path))?
    } else {
        value.to_string()
    };
    serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidArgument(format!("invalid policy document: {e}")))
}

fn statement_count(document: &serde_json::Value) -> usize {
    document
        .get("Statement")
        .and_then(serde_json::Value::as_array)
        .map_or(0, Vec::len)
}

fn generate_access_key_id() -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..16)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("AKIA{suffix}")
}

fn generate_secret_key() -> String {
    use rand::Rng;
    const ALPHABET: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut rng = rand::thread_rng();
    (0..40)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn render(format: Format, command: &IamCommands) -> Result<String, CliError> {
        let fmt = OutputFormat::new(format);
        let mut buf = Vec::new();
        IamCommand.execute(&mut buf, &fmt, command)?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn create_policy_counts_statements() {
        let output = render(
            Format::Json,
            &IamCommands::CreatePolicy {
                policy_name: "s3-read-only".into(),
                policy_document: r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow"},{"Effect":"Deny"}]}"#.into(),
                description: None,
                organization: None,
                cloud: None,
            },
        )
        .expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(parsed["statements"], "2");
    }

    #[test]
    fn policy_document_can_come_from_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("policy.json");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(file, r#"{{"Version":"2012-10-17","Statement":[{{"Effect":"Allow"}}]}}"#)
            .expect("write");

        let document =
            load_policy_document(&format!("@{}", path.display())).expect("load");
        assert_eq!(document["Version"], "2012-10-17");
    }

    #[test]
    fn malformed_policy_document_is_rejected() {
        let err = load_policy_document("{broken").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn simulate_policy_reports_allowed() {
        let output = render(
            Format::Table,
            &IamCommands::SimulatePolicy {
                policy_name: "s3-read-only".into(),
                action: "s3:GetObject".into(),
                resource: "arn:aws:s3:::bucket/key".into(),
                user: Some("jane".into()),
            },
        )
        .expect("render");
        assert!(output.contains("✓ ALLOWED: s3:GetObject"));
        assert!(output.contains("Matching statement: Statement[0]"));
        assert!(output.contains("Evaluated as user 'jane'"));
    }

    #[test]
    fn empty_policy_listing_pluralizes_correctly() {
        let output = render(
            Format::Table,
            &IamCommands::ListPolicies {
                organization: None,
                cloud: None,
            },
        )
        .expect("render");
        assert!(output.contains("No IAM policies found"));
        assert!(!output.contains("policys"));
    }

    #[test]
    fn access_key_has_akia_prefix() {
        let key = generate_access_key_id();
        assert!(key.starts_with("AKIA"));
        assert_eq!(key.len(), 20);
        assert_eq!(generate_secret_key().len(), 40);
    }

    #[test]
    fn check_permission_names_the_granting_policy() {
        let output = render(
            Format::Table,
            &IamCommands::CheckPermission {
                username: "jane".into(),
                action: "s3:GetObject".into(),
                resource: "reports-bucket".into(),
                cloud: None,
            },
        )
        .expect("render");
        assert!(output.contains("Granted via: Policy 's3-read-only'"));
    }
}
