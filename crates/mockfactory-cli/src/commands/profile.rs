//! Mock user profile commands.

use std::io::Write;

use crate::cli::ProfileCommands;
use crate::commands::now_utc;
use crate::error::CliError;
use crate::output::{OutputFormat, ResourceRecord};

/// Handler for profile subcommands.
pub struct ProfileCommand;

impl ProfileCommand {
    /// Executes the profile subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] when `--preferences` is not
    /// valid JSON.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &ProfileCommands,
    ) -> Result<(), CliError> {
        match command {
            ProfileCommands::Create {
                username,
                bio,
                avatar,
                preferences,
            } => {
                let mut record =
                    ResourceRecord::new(format!("Profile created for '{username}'"))
                        .field("username", username)
                        .optional_field("bio", bio.clone())
                        .optional_field("avatar", avatar.clone());
                if let Some(preferences) = preferences {
                    let value: serde_json::Value =
                        serde_json::from_str(preferences).map_err(|e| {
                            CliError::InvalidArgument(format!("invalid preferences JSON: {e}"))
                        })?;
                    record = record.field_value("preferences", value);
                }
                record = record.field("created_at", now_utc());
                format.write(out, &record)?;
            }
            ProfileCommands::Get { username } => {
                let record = ResourceRecord::new(format!("Profile: {username}"))
                    .field("username", username);
                format.write(out, &record)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn render(format: Format, command: &ProfileCommands) -> Result<String, CliError> {
        let fmt = OutputFormat::new(format);
        let mut buf = Vec::new();
        ProfileCommand.execute(&mut buf, &fmt, command)?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn preferences_must_be_json() {
        let err = render(
            Format::Table,
            &ProfileCommands::Create {
                username: "jane".into(),
                bio: None,
                avatar: None,
                preferences: Some("not json".into()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn valid_preferences_survive_into_json_output() {
        let output = render(
            Format::Json,
            &ProfileCommands::Create {
                username: "jane".into(),
                bio: Some("Engineer".into()),
                avatar: None,
                preferences: Some(r#"{"theme":"dark"}"#.into()),
            },
        )
        .expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(parsed["preferences"]["theme"], "dark");
        assert_eq!(parsed["bio"], "Engineer");
    }
}
