//! Authentication commands: login, signup, logout.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use mockfactory_client::ApiClient;
use mockfactory_config::CredentialStore;

use crate::cli::CredentialsArgs;
use crate::commands::prompt_line;
use crate::error::CliError;
use crate::output::{Message, OutputFormat, TableDisplay};

/// Handler for login, signup, and logout.
pub struct AuthCommand<'a> {
    client: &'a ApiClient,
    credentials: &'a CredentialStore,
}

/// Rendered outcome of a successful login or signup.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Account email.
    pub email: String,
    /// Subscription tier, when the profile endpoint reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Whether this session came from a fresh signup.
    pub new_account: bool,
}

impl TableDisplay for SessionReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.new_account {
            writeln!(writer, "✓ Account created for {}", self.email)?;
        } else {
            writeln!(writer, "✓ Logged in as {}", self.email)?;
        }
        if let Some(ref tier) = self.tier {
            writeln!(writer, "Tier: {tier}")?;
        }
        Ok(())
    }
}

impl<'a> AuthCommand<'a> {
    /// Creates a new auth command handler.
    #[must_use]
    pub const fn new(client: &'a ApiClient, credentials: &'a CredentialStore) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Sign in with existing credentials and store the returned token.
    ///
    /// Missing email or password is prompted for on the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the backend rejects the credentials and
    /// [`CliError::Config`] when the token cannot be stored.
    pub async fn login<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &CredentialsArgs,
    ) -> Result<(), CliError> {
        let (email, password) = resolve_credentials(args)?;
        let token = self.client.signin(&email, &password).await?;
        self.finish_session(out, format, email, token, false).await
    }

    /// Create an account and store the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the backend rejects the profile.
    pub async fn signup<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &CredentialsArgs,
    ) -> Result<(), CliError> {
        let (email, password) = resolve_credentials(args)?;
        let token = self.client.signup(&email, &password).await?;
        self.finish_session(out, format, email, token, true).await
    }

    /// Clear the stored session. Logging out twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when the token file cannot be removed.
    pub fn logout<W: Write>(&self, out: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        self.credentials.clear()?;
        format.write(out, &Message::success("Logged out"))?;
        Ok(())
    }

    async fn finish_session<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        email: String,
        token: String,
        new_account: bool,
    ) -> Result<(), CliError> {
        self.credentials.store(&token)?;
        debug!(%email, "session token stored");

        // Tier lookup is best-effort; the session is already established.
        let tier = self
            .client
            .clone()
            .with_token(Some(token))
            .profile()
            .await
            .ok()
            .map(|p| p.tier.to_string());

        format.write(
            out,
            &SessionReport {
                email,
                tier,
                new_account,
            },
        )?;
        Ok(())
    }
}

/// Resolve email and password from flags, prompting for whichever is missing.
fn resolve_credentials(args: &CredentialsArgs) -> Result<(String, String), CliError> {
    let email = match &args.email {
        Some(email) => email.clone(),
        None => prompt_line("Email")?,
    };
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_line("Password")?,
    };
    if email.is_empty() {
        return Err(CliError::Usage("email must not be empty".into()));
    }
    if password.is_empty() {
        return Err(CliError::Usage("password must not be empty".into()));
    }
    Ok((email, password))
}
