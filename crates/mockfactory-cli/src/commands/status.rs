//! Status and usage commands.

use std::io::Write;

use serde::Serialize;

use mockfactory_client::{ApiClient, ApiError, Tier, UsageSnapshot};

use crate::error::CliError;
use crate::output::{OutputFormat, TableDisplay};

/// Handler for the status and usage commands.
pub struct StatusCommand<'a> {
    client: &'a ApiClient,
}

/// Authentication state shown by `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// A stored token was accepted by the backend.
    Authenticated,
    /// A stored token was rejected; re-login needed.
    Expired,
    /// No stored token.
    Anonymous,
}

/// Rendered view of the status command.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Configured backend URL.
    pub api_url: String,
    /// Session state.
    pub session: SessionState,
    /// Account email, when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Subscription tier.
    pub tier: Tier,
    /// Executions used in the current window.
    pub runs_used: u32,
    /// Execution quota for the current window.
    pub runs_limit: u32,
    /// Executions remaining.
    pub runs_remaining: u32,
}

impl TableDisplay for StatusReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "MockFactory Status")?;
        writeln!(writer, "══════════════════════════════════")?;
        writeln!(writer, "API URL:     {}", self.api_url)?;
        match self.session {
            SessionState::Authenticated => {
                writeln!(writer, "Session:     ✓ Authenticated")?;
                if let Some(ref email) = self.email {
                    writeln!(writer, "Account:     {email}")?;
                }
            }
            SessionState::Expired => {
                writeln!(writer, "Session:     ✗ Expired (run 'mockfactory login')")?;
            }
            SessionState::Anonymous => {
                writeln!(writer, "Session:     Anonymous")?;
            }
        }
        writeln!(writer, "Tier:        {}", self.tier)?;
        writeln!(writer)?;
        writeln!(writer, "Usage")?;
        writeln!(writer, "  Used:      {}", self.runs_used)?;
        writeln!(writer, "  Limit:     {}", self.runs_limit)?;
        writeln!(writer, "  Remaining: {}", self.runs_remaining)?;
        Ok(())
    }
}

/// Rendered view of the usage command.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    /// Subscription tier.
    pub tier: Tier,
    /// Executions used in the current window.
    pub runs_used: u32,
    /// Execution quota for the current window.
    pub runs_limit: u32,
    /// Executions remaining.
    pub runs_remaining: u32,
    /// Whether the counters belong to an authenticated account.
    pub authenticated: bool,
}

impl From<&UsageSnapshot> for UsageReport {
    fn from(usage: &UsageSnapshot) -> Self {
        Self {
            tier: usage.tier,
            runs_used: usage.runs_used,
            runs_limit: usage.runs_limit,
            runs_remaining: usage.remaining(),
            authenticated: usage.authenticated,
        }
    }
}

impl TableDisplay for UsageReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Usage ({} tier)", self.tier)?;
        writeln!(writer, "══════════════════════════════════")?;
        writeln!(writer, "Used:        {}", self.runs_used)?;
        writeln!(writer, "Limit:       {}", self.runs_limit)?;
        writeln!(writer, "Remaining:   {}", self.runs_remaining)?;
        match self.tier {
            Tier::Anonymous => {
                writeln!(writer)?;
                writeln!(
                    writer,
                    "Sign up with 'mockfactory signup' for a higher daily quota."
                )?;
            }
            Tier::Free => {
                writeln!(writer)?;
                writeln!(writer, "Upgrade to Pro for a higher daily quota.")?;
            }
            Tier::Pro => {}
        }
        Ok(())
    }
}

impl<'a> StatusCommand<'a> {
    /// Creates a new status command handler.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Show API URL, session state, and usage counters.
    ///
    /// A rejected stored token renders as an expired session rather than a
    /// hard failure.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the backend is unreachable.
    pub async fn status<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let (session, email) = if self.client.is_authenticated() {
            match self.client.profile().await {
                Ok(profile) => (SessionState::Authenticated, profile.email),
                Err(ApiError::Auth(_)) => (SessionState::Expired, None),
                Err(e) => return Err(e.into()),
            }
        } else {
            (SessionState::Anonymous, None)
        };

        let usage = self.client.usage().await?;
        let report = StatusReport {
            api_url: self.client.base_url().to_string(),
            session,
            email,
            tier: usage.tier,
            runs_used: usage.runs_used,
            runs_limit: usage.runs_limit,
            runs_remaining: usage.remaining(),
        };
        format.write(out, &report)?;
        Ok(())
    }

    /// Show usage counters for the current session.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the backend is unreachable.
    pub async fn usage<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let usage = self.client.usage().await?;
        format.write(out, &UsageReport::from(&usage))?;
        Ok(())
    }
}
