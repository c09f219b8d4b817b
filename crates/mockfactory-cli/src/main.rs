//! MockFactory CLI binary entrypoint.
//!
//! This is the main entry point for the `mockfactory` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mockfactory_cli::cli::{Cli, Commands};
use mockfactory_cli::commands::{
    ApiCommand, AuthCommand, CloudCommand, ConfigCommand, ContainerCommand, DomainCommand,
    GenerateCommand, GroupCommand, IamCommand, MailClientCommand, MailServerCommand,
    MailboxCommand, NetworkCommand, OrganizationCommand, ProfileCommand, ProjectCommand,
    RunCommand, SmsCommand, StatusCommand, UserCommand, UtilitiesCommand, WorkflowCommand,
};
use mockfactory_cli::output::OutputFormat;
use mockfactory_client::ApiClient;
use mockfactory_config::{ClientConfig, ConfigStore, CredentialStore};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Build a backend client from stored config, the session token, and any
/// per-invocation URL override.
fn build_client(
    api_url: Option<&str>,
    config: &ClientConfig,
    credentials: &CredentialStore,
) -> Result<ApiClient, mockfactory_cli::CliError> {
    let base_url = api_url.unwrap_or(&config.api_url);
    let token = credentials.load().map(|session| session.token);
    Ok(ApiClient::new(
        base_url,
        config.timeout_secs,
        token,
        config.session_id.clone(),
    )?)
}

async fn run(cli: Cli) -> Result<u8, mockfactory_cli::CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    let config_store = ConfigStore::open_default()?;
    let config = config_store.load();
    let credentials = CredentialStore::open_default()?;

    match cli.command {
        Commands::Run(args) => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = RunCommand::new(&client, config.timeout_secs);
            return cmd.execute(&mut stdout, &format, &args).await;
        }
        Commands::Execute(args) => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = RunCommand::new(&client, config.timeout_secs);
            return cmd.execute_file(&mut stdout, &format, &args).await;
        }
        Commands::Login(args) => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = AuthCommand::new(&client, &credentials);
            cmd.login(&mut stdout, &format, &args).await?;
        }
        Commands::Signup(args) => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = AuthCommand::new(&client, &credentials);
            cmd.signup(&mut stdout, &format, &args).await?;
        }
        Commands::Logout => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = AuthCommand::new(&client, &credentials);
            cmd.logout(&mut stdout, &format)?;
        }
        Commands::Status => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = StatusCommand::new(&client);
            cmd.status(&mut stdout, &format).await?;
        }
        Commands::Usage => {
            let client = build_client(cli.api_url.as_deref(), &config, &credentials)?;
            let cmd = StatusCommand::new(&client);
            cmd.usage(&mut stdout, &format).await?;
        }
        Commands::Config { command } => {
            let cmd = ConfigCommand::new(&config_store);
            cmd.execute(&mut stdout, &format, &command)?;
        }
        Commands::Organization { command } => {
            OrganizationCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Domain { command } => {
            DomainCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Project { command } => {
            ProjectCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Cloud { command } => {
            CloudCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::User { command } => {
            UserCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Group { command } => {
            GroupCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Container { command } => {
            ContainerCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Network { command } => {
            NetworkCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Profile { command } => {
            ProfileCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::MailServer { command } => {
            MailServerCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::MailClient { command } => {
            MailClientCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Mailbox { command } => {
            MailboxCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Sms { command } => {
            SmsCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Workflow { command } => {
            WorkflowCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Api { command } => {
            ApiCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Iam { command } => {
            IamCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Generate { command } => {
            GenerateCommand.execute(&mut stdout, &format, &command)?;
        }
        Commands::Utilities { command } => {
            UtilitiesCommand.execute(&mut stdout, &format, &command)?;
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockfactory_cli::cli::Format;

    #[test]
    fn cli_parses_status() {
        let cli = Cli::parse_from(["mockfactory", "status"]);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn cli_respects_format_flag() {
        let cli = Cli::parse_from(["mockfactory", "--format", "json", "status"]);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn cli_respects_api_url_flag() {
        let cli = Cli::parse_from([
            "mockfactory",
            "--api-url",
            "http://localhost:8000",
            "status",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn build_client_prefers_the_override_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let credentials = CredentialStore::open(dir.path());
        let config = ClientConfig::default();

        let client = build_client(Some("http://localhost:9999/"), &config, &credentials)
            .expect("client");
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn build_client_attaches_stored_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let credentials = CredentialStore::open(dir.path());
        credentials.store("tok_123").expect("store");
        let config = ClientConfig::default();

        let client = build_client(None, &config, &credentials).expect("client");
        assert!(client.is_authenticated());
    }
}
