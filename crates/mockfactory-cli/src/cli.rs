//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// MockFactory CLI - secure code execution sandbox and mock infrastructure.
#[derive(Parser, Debug, Clone)]
#[command(name = "mockfactory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL override for this invocation.
    #[arg(long, env = "MOCKFACTORY_API_URL")]
    pub api_url: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Execute code in the sandbox with an explicit language.
    Run(RunArgs),

    /// Execute a code file, inferring the language from its extension.
    Execute(ExecuteArgs),

    /// Sign in to your MockFactory account.
    Login(CredentialsArgs),

    /// Create a new MockFactory account.
    Signup(CredentialsArgs),

    /// Sign out and clear the stored session.
    Logout,

    /// Show authentication status and usage information.
    Status,

    /// Show current usage statistics.
    Usage,

    /// Manage CLI configuration.
    Config {
        /// Config subcommand to execute.
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage mock organizations.
    Organization {
        /// Organization subcommand to execute.
        #[command(subcommand)]
        command: OrganizationCommands,
    },

    /// Manage mock domains.
    Domain {
        /// Domain subcommand to execute.
        #[command(subcommand)]
        command: DomainCommands,
    },

    /// Manage mock projects.
    Project {
        /// Project subcommand to execute.
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Manage mock cloud environments.
    Cloud {
        /// Cloud subcommand to execute.
        #[command(subcommand)]
        command: CloudCommands,
    },

    /// Manage mock users.
    User {
        /// User subcommand to execute.
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage mock groups.
    Group {
        /// Group subcommand to execute.
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Manage mock containers.
    Container {
        /// Container subcommand to execute.
        #[command(subcommand)]
        command: ContainerCommands,
    },

    /// Manage mock networks.
    Network {
        /// Network subcommand to execute.
        #[command(subcommand)]
        command: NetworkCommands,
    },

    /// Manage mock user profiles.
    Profile {
        /// Profile subcommand to execute.
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage mock mail servers.
    MailServer {
        /// Mail server subcommand to execute.
        #[command(subcommand)]
        command: MailServerCommands,
    },

    /// Manage mock mail clients.
    MailClient {
        /// Mail client subcommand to execute.
        #[command(subcommand)]
        command: MailClientCommands,
    },

    /// Manage mock mailboxes and messages.
    Mailbox {
        /// Mailbox subcommand to execute.
        #[command(subcommand)]
        command: MailboxCommands,
    },

    /// Manage mock SMS providers, numbers, and messages.
    Sms {
        /// SMS subcommand to execute.
        #[command(subcommand)]
        command: SmsCommands,
    },

    /// Manage mock verification workflows.
    Workflow {
        /// Workflow subcommand to execute.
        #[command(subcommand)]
        command: WorkflowCommands,
    },

    /// Manage mock APIs and webhooks.
    Api {
        /// API subcommand to execute.
        #[command(subcommand)]
        command: ApiCommands,
    },

    /// Manage mock IAM users, groups, roles, and policies.
    Iam {
        /// IAM subcommand to execute.
        #[command(subcommand)]
        command: IamCommands,
    },

    /// Generate realistic test data for mock resources.
    Generate {
        /// Generator subcommand to execute.
        #[command(subcommand)]
        command: GenerateCommands,
    },

    /// Utility helpers for common transformations.
    Utilities {
        /// Utility subcommand to execute.
        #[command(subcommand)]
        command: UtilitiesCommands,
    },
}

/// Arguments for the run command.
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Programming language (python, javascript, php, perl, go, shell, html).
    #[arg(required = true)]
    pub language: String,

    /// Code to execute (inline).
    #[arg(short, long)]
    pub code: Option<String>,

    /// File containing code to execute.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Execution timeout in seconds.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub timeout: Option<u32>,

    /// Output raw result without formatting.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the execute command.
#[derive(Parser, Debug, Clone)]
pub struct ExecuteArgs {
    /// Path to the code file (.py, .js, .php, .pl, .go, .sh, .html).
    #[arg(required = true)]
    pub file: PathBuf,

    /// Execution timeout in seconds.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub timeout: Option<u32>,

    /// Output raw result without formatting.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for login and signup.
#[derive(Parser, Debug, Clone)]
pub struct CredentialsArgs {
    /// Your email address (prompted when omitted).
    #[arg(long)]
    pub email: Option<String>,

    /// Your password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value (keys: api_url, timeout, session_id).
    Set {
        /// Configuration key.
        key: String,
        /// New value.
        value: String,
    },

    /// Reset configuration to defaults.
    Reset,
}

/// Organization plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PlanArg {
    /// Free plan.
    #[default]
    Free,
    /// Pro plan.
    Pro,
    /// Enterprise plan.
    Enterprise,
}

impl PlanArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Role of a user inside an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OrgRoleArg {
    /// Regular member.
    #[default]
    Member,
    /// Administrator.
    Admin,
    /// Owner.
    Owner,
}

impl OrgRoleArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }
}

/// Organization subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum OrganizationCommands {
    /// Create a new mock organization.
    Create {
        /// Organization name.
        name: String,
        /// Organization description.
        #[arg(long)]
        description: Option<String>,
        /// Owner user ID.
        #[arg(long)]
        owner: Option<String>,
        /// Organization plan.
        #[arg(long, value_enum, default_value_t = PlanArg::Free)]
        plan: PlanArg,
    },
    /// List all mock organizations.
    List {
        /// Filter by plan.
        #[arg(long, value_enum)]
        plan: Option<PlanArg>,
    },
    /// Get details of a mock organization.
    Get {
        /// Organization name.
        name: String,
    },
    /// Delete a mock organization.
    Delete {
        /// Organization name.
        name: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Add a user to an organization.
    AddUser {
        /// Organization name.
        org_name: String,
        /// Username to add.
        username: String,
        /// User role in the organization.
        #[arg(long, value_enum, default_value_t = OrgRoleArg::Member)]
        role: OrgRoleArg,
    },
    /// Remove a user from an organization.
    RemoveUser {
        /// Organization name.
        org_name: String,
        /// Username to remove.
        username: String,
    },
}

/// Domain subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum DomainCommands {
    /// Create a new mock domain.
    Create {
        /// Domain name.
        domain_name: String,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Mark domain as verified.
        #[arg(long)]
        verified: bool,
        /// Comma-separated DNS records to create.
        #[arg(long)]
        dns_records: Option<String>,
    },
    /// List all mock domains.
    List {
        /// Filter by organization.
        #[arg(long)]
        organization: Option<String>,
        /// Show only verified domains.
        #[arg(long)]
        verified: bool,
    },
    /// Get details of a mock domain.
    Get {
        /// Domain name.
        domain_name: String,
    },
    /// Mark a mock domain as verified.
    Verify {
        /// Domain name.
        domain_name: String,
    },
    /// Delete a mock domain.
    Delete {
        /// Domain name.
        domain_name: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Project environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum EnvironmentArg {
    /// Development environment.
    #[default]
    Development,
    /// Staging environment.
    Staging,
    /// Production environment.
    Production,
}

impl EnvironmentArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Project subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ProjectCommands {
    /// Create a new mock project.
    Create {
        /// Project name.
        name: String,
        /// Organization to create the project under.
        #[arg(long)]
        organization: Option<String>,
        /// Project description.
        #[arg(long)]
        description: Option<String>,
        /// Project environment.
        #[arg(long, value_enum, default_value_t = EnvironmentArg::Development)]
        environment: EnvironmentArg,
    },
    /// List all mock projects.
    List {
        /// Filter by organization.
        #[arg(long)]
        organization: Option<String>,
        /// Filter by environment.
        #[arg(long, value_enum)]
        environment: Option<EnvironmentArg>,
    },
    /// Get details of a mock project.
    Get {
        /// Project ID.
        project_id: String,
    },
    /// Bind a resource to a project.
    BindResource {
        /// Project ID.
        project_id: String,
        /// Resource type (user, network, container, ...).
        resource_type: String,
        /// Resource identifier.
        resource_id: String,
    },
    /// Unbind a resource from a project.
    UnbindResource {
        /// Project ID.
        project_id: String,
        /// Resource type.
        resource_type: String,
        /// Resource identifier.
        resource_id: String,
    },
    /// Delete a mock project.
    Delete {
        /// Project ID.
        project_id: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
        /// Also delete all bound resources.
        #[arg(long)]
        delete_resources: bool,
    },
}

/// Cloud provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CloudProviderArg {
    /// Amazon Web Services.
    #[default]
    Aws,
    /// Google Cloud Platform.
    Gcp,
    /// Microsoft Azure.
    Azure,
    /// Custom provider.
    Custom,
}

impl CloudProviderArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
            Self::Custom => "custom",
        }
    }
}

/// Cloud subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum CloudCommands {
    /// Create a new mock cloud environment.
    Create {
        /// Cloud environment name.
        name: String,
        /// Cloud provider type.
        #[arg(long, value_enum, default_value_t = CloudProviderArg::Aws)]
        provider: CloudProviderArg,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Default region.
        #[arg(long, default_value = "us-east-1")]
        region: String,
    },
    /// List all mock cloud environments.
    List {
        /// Filter by provider.
        #[arg(long, value_enum)]
        provider: Option<CloudProviderArg>,
        /// Filter by organization.
        #[arg(long)]
        organization: Option<String>,
    },
    /// Get details of a mock cloud environment.
    Get {
        /// Cloud environment name.
        name: String,
    },
    /// Delete a mock cloud environment.
    Delete {
        /// Cloud environment name.
        name: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// User subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum UserCommands {
    /// Create a new mock user.
    Create {
        /// Username.
        username: String,
        /// User email address.
        #[arg(long)]
        email: Option<String>,
        /// Full name of the user.
        #[arg(long)]
        full_name: Option<String>,
        /// User role (user, admin, developer).
        #[arg(long, default_value = "user")]
        role: String,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Bind to cloud environment.
        #[arg(long)]
        cloud: Option<String>,
        /// Email domain.
        #[arg(long)]
        domain: Option<String>,
        /// UUID-based project ID to group resources.
        #[arg(long)]
        project_id: Option<String>,
    },
    /// List all mock users.
    List {
        /// Filter by role.
        #[arg(long)]
        role: Option<String>,
    },
    /// Get details of a mock user.
    Get {
        /// Username.
        username: String,
    },
    /// Delete a mock user.
    Delete {
        /// Username.
        username: String,
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Group subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum GroupCommands {
    /// Create a new mock group.
    Create {
        /// Group name.
        name: String,
        /// Group description.
        #[arg(long)]
        description: Option<String>,
    },
    /// List all mock groups.
    List,
    /// Add a user to a group.
    AddUser {
        /// Group name.
        group_name: String,
        /// Username to add.
        username: String,
    },
    /// Remove a user from a group.
    RemoveUser {
        /// Group name.
        group_name: String,
        /// Username to remove.
        username: String,
    },
}

/// Container subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ContainerCommands {
    /// Create a new mock container.
    Create {
        /// Container name.
        name: String,
        /// Container image.
        #[arg(long, default_value = "alpine")]
        image: String,
        /// Network to attach to.
        #[arg(long)]
        network: Option<String>,
        /// Bind to mock user.
        #[arg(long)]
        user: Option<String>,
        /// Bind to mock group.
        #[arg(long)]
        group: Option<String>,
    },
    /// List all mock containers.
    List {
        /// Filter by network.
        #[arg(long)]
        network: Option<String>,
        /// Filter by bound user.
        #[arg(long)]
        user: Option<String>,
    },
    /// Bind a mock user to a container.
    BindUser {
        /// Container name.
        container_name: String,
        /// Username to bind.
        username: String,
    },
    /// Unbind a mock user from a container.
    UnbindUser {
        /// Container name.
        container_name: String,
        /// Username to unbind.
        username: String,
    },
}

/// Network subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum NetworkCommands {
    /// Create a new mock network.
    Create {
        /// Network name.
        name: String,
        /// Network CIDR block.
        #[arg(long, default_value = "10.0.0.0/24")]
        cidr: String,
        /// Create an isolated network.
        #[arg(long)]
        isolated: bool,
    },
    /// List all mock networks.
    List,
}

/// Profile subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommands {
    /// Create a profile for a mock user.
    Create {
        /// Username the profile belongs to.
        username: String,
        /// User biography.
        #[arg(long)]
        bio: Option<String>,
        /// Avatar URL.
        #[arg(long)]
        avatar: Option<String>,
        /// JSON preferences string.
        #[arg(long)]
        preferences: Option<String>,
    },
    /// Get a mock user's profile.
    Get {
        /// Username.
        username: String,
    },
}

/// Mail protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum MailProtocolArg {
    /// SMTP.
    #[default]
    Smtp,
    /// IMAP.
    Imap,
    /// POP3.
    Pop3,
}

impl MailProtocolArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smtp => "smtp",
            Self::Imap => "imap",
            Self::Pop3 => "pop3",
        }
    }
}

/// Mail server subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum MailServerCommands {
    /// Create a new mock mail server.
    Create {
        /// Mail server name.
        name: String,
        /// Mail server host.
        #[arg(long, default_value = "localhost")]
        host: String,
        /// Mail server port.
        #[arg(long, default_value_t = 25)]
        port: u16,
        /// Mail protocol.
        #[arg(long, value_enum, default_value_t = MailProtocolArg::Smtp)]
        protocol: MailProtocolArg,
        /// Enable TLS encryption.
        #[arg(long)]
        tls: bool,
    },
    /// List all mock mail servers.
    List {
        /// Filter by protocol.
        #[arg(long, value_enum)]
        protocol: Option<MailProtocolArg>,
    },
    /// Get details of a mock mail server.
    Get {
        /// Mail server name.
        name: String,
    },
    /// Delete a mock mail server.
    Delete {
        /// Mail server name.
        name: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Mail client subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum MailClientCommands {
    /// Create a new mock mail client.
    Create {
        /// Mail client name.
        name: String,
        /// Bind to mock user.
        #[arg(long)]
        user: Option<String>,
        /// Connect to mail server.
        #[arg(long)]
        server: Option<String>,
        /// Default mailbox.
        #[arg(long)]
        mailbox: Option<String>,
    },
    /// List all mock mail clients.
    List {
        /// Filter by bound user.
        #[arg(long)]
        user: Option<String>,
        /// Filter by mail server.
        #[arg(long)]
        server: Option<String>,
    },
    /// Delete a mock mail client.
    Delete {
        /// Mail client name.
        name: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Mailbox folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum FolderArg {
    /// Inbox folder.
    #[default]
    Inbox,
    /// Outbox folder.
    Outbox,
    /// Sent folder.
    Sent,
    /// Bulk mail folder.
    Bulk,
    /// Drafts folder.
    Drafts,
}

impl FolderArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Outbox => "outbox",
            Self::Sent => "sent",
            Self::Bulk => "bulk",
            Self::Drafts => "drafts",
        }
    }
}

/// Mailbox subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum MailboxCommands {
    /// Create a new mock mailbox.
    Create {
        /// Mailbox email address.
        email: String,
        /// Bind to mock user.
        #[arg(long)]
        user: Option<String>,
        /// Mailbox quota in MB.
        #[arg(long, default_value_t = 1000)]
        quota: u32,
    },
    /// List all mock mailboxes.
    List {
        /// Filter by bound user.
        #[arg(long)]
        user: Option<String>,
    },
    /// Get details of a mock mailbox.
    Get {
        /// Mailbox email address.
        email: String,
    },
    /// Delete a mock mailbox.
    Delete {
        /// Mailbox email address.
        email: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Send a mock email between mailboxes.
    Send {
        /// Sender address.
        from_email: String,
        /// Recipient address.
        to_email: String,
        /// Email subject.
        #[arg(long)]
        subject: String,
        /// Email body.
        #[arg(long)]
        body: String,
        /// Comma-separated list of attachment filenames.
        #[arg(long)]
        attachments: Option<String>,
    },
    /// List messages in a mailbox folder.
    ListMessages {
        /// Mailbox email address.
        email: String,
        /// Folder to list messages from.
        #[arg(long, value_enum, default_value_t = FolderArg::Inbox)]
        folder: FolderArg,
        /// Number of messages to show.
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
}

/// SMS provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SmsProviderArg {
    /// Twilio.
    #[default]
    Twilio,
    /// AWS SNS.
    AwsSns,
    /// Nexmo.
    Nexmo,
    /// Custom provider.
    Custom,
}

impl SmsProviderArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twilio => "twilio",
            Self::AwsSns => "aws-sns",
            Self::Nexmo => "nexmo",
            Self::Custom => "custom",
        }
    }
}

/// SMS subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SmsCommands {
    /// Create a new mock SMS provider.
    CreateProvider {
        /// Provider name.
        name: String,
        /// SMS provider type.
        #[arg(long, value_enum, default_value_t = SmsProviderArg::Twilio)]
        provider: SmsProviderArg,
        /// Provider API key.
        #[arg(long)]
        api_key: Option<String>,
    },
    /// List all mock SMS providers.
    ListProviders,
    /// Send a mock SMS message.
    Send {
        /// Sender phone number.
        from_number: String,
        /// Recipient phone number.
        to_number: String,
        /// SMS message text.
        #[arg(long)]
        message: String,
        /// SMS provider to use.
        #[arg(long)]
        provider: Option<String>,
    },
    /// List mock SMS messages.
    ListMessages {
        /// Filter by phone number.
        #[arg(long)]
        phone_number: Option<String>,
        /// Filter by provider.
        #[arg(long)]
        provider: Option<String>,
        /// Number of messages to show.
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Create a new mock phone number.
    CreateNumber {
        /// Phone number.
        phone_number: String,
        /// Bind to mock user.
        #[arg(long)]
        user: Option<String>,
        /// SMS provider.
        #[arg(long)]
        provider: Option<String>,
    },
    /// List mock phone numbers.
    ListNumbers {
        /// Filter by bound user.
        #[arg(long)]
        user: Option<String>,
        /// Filter by provider.
        #[arg(long)]
        provider: Option<String>,
    },
}

/// Workflow subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum WorkflowCommands {
    /// Create a registration workflow.
    CreateRegistration {
        /// Workflow name.
        name: String,
        /// Enable email verification.
        #[arg(long)]
        email_verification: bool,
        /// Enable SMS verification.
        #[arg(long)]
        sms_verification: bool,
        /// Mail server to use for verification emails.
        #[arg(long)]
        mail_server: Option<String>,
        /// SMS provider to use for verification.
        #[arg(long)]
        sms_provider: Option<String>,
    },
    /// Run a registration workflow with a test user.
    TestRegistration {
        /// Workflow name.
        workflow_name: String,
        /// Username to register.
        #[arg(long)]
        username: String,
        /// User email address.
        #[arg(long)]
        email: Option<String>,
        /// User phone number.
        #[arg(long)]
        phone: Option<String>,
    },
    /// List all mock workflows.
    List,
}

/// API type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ApiTypeArg {
    /// REST API.
    #[default]
    Rest,
    /// GraphQL API.
    Graphql,
    /// Webhook receiver.
    Webhook,
}

impl ApiTypeArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Graphql => "graphql",
            Self::Webhook => "webhook",
        }
    }
}

/// API authentication type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ApiAuthArg {
    /// No authentication.
    #[default]
    None,
    /// HTTP basic authentication.
    Basic,
    /// Bearer token.
    Bearer,
    /// API key header.
    ApiKey,
}

impl ApiAuthArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Bearer => "bearer",
            Self::ApiKey => "api-key",
        }
    }
}

/// HTTP method for mock endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum HttpMethodArg {
    /// GET.
    #[default]
    Get,
    /// POST.
    Post,
    /// PUT.
    Put,
    /// PATCH.
    Patch,
    /// DELETE.
    Delete,
}

impl HttpMethodArg {
    /// Uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// API subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ApiCommands {
    /// Create a new mock API.
    Create {
        /// API name.
        name: String,
        /// API type.
        #[arg(long = "type", value_enum, default_value_t = ApiTypeArg::Rest)]
        api_type: ApiTypeArg,
        /// Base URL for the API.
        #[arg(long)]
        base_url: Option<String>,
        /// Authentication type.
        #[arg(long, value_enum, default_value_t = ApiAuthArg::None)]
        auth: ApiAuthArg,
    },
    /// Add a mock endpoint to an API.
    AddEndpoint {
        /// API name.
        api_name: String,
        /// Endpoint path.
        path: String,
        /// HTTP method.
        #[arg(long, value_enum, default_value_t = HttpMethodArg::Get)]
        method: HttpMethodArg,
        /// JSON response body.
        #[arg(long)]
        response: Option<String>,
        /// HTTP status code.
        #[arg(long, default_value_t = 200)]
        status: u16,
    },
    /// List all mock APIs.
    List {
        /// Filter by API type.
        #[arg(long = "type", value_enum)]
        api_type: Option<ApiTypeArg>,
    },
    /// List captured requests for a mock API.
    ListRequests {
        /// API name.
        api_name: String,
        /// Number of requests to show.
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Delete a mock API.
    Delete {
        /// API name.
        name: String,
        /// Skip confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Create a mock webhook.
    CreateWebhook {
        /// Webhook name.
        name: String,
        /// Webhook URL to receive events.
        #[arg(long)]
        url: String,
        /// Comma-separated list of events to listen for.
        #[arg(long)]
        events: Option<String>,
        /// Webhook signing secret.
        #[arg(long)]
        secret: Option<String>,
    },
    /// Trigger a mock webhook with an event.
    TriggerWebhook {
        /// Webhook name.
        webhook_name: String,
        /// Event name to trigger.
        #[arg(long)]
        event: String,
        /// JSON payload to send.
        #[arg(long)]
        payload: Option<String>,
    },
}

/// IAM subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum IamCommands {
    /// Create a mock IAM user.
    CreateUser {
        /// Username.
        username: String,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Bind to cloud environment.
        #[arg(long)]
        cloud: Option<String>,
        /// IAM user path.
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Create a mock IAM group.
    CreateGroup {
        /// Group name.
        group_name: String,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Bind to cloud environment.
        #[arg(long)]
        cloud: Option<String>,
        /// Group description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Create a mock IAM role.
    CreateRole {
        /// Role name.
        role_name: String,
        /// Trust policy JSON.
        #[arg(long)]
        trust_policy: String,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Bind to cloud environment.
        #[arg(long)]
        cloud: Option<String>,
        /// Role description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Create a mock IAM policy.
    CreatePolicy {
        /// Policy name.
        policy_name: String,
        /// Policy document JSON (or @file.json).
        #[arg(long)]
        policy_document: String,
        /// Policy description.
        #[arg(long)]
        description: Option<String>,
        /// Bind to organization.
        #[arg(long)]
        organization: Option<String>,
        /// Bind to cloud environment.
        #[arg(long)]
        cloud: Option<String>,
    },
    /// Attach a policy to an IAM user.
    AttachUserPolicy {
        /// Username.
        username: String,
        /// Policy name.
        policy_name: String,
    },
    /// Attach a policy to an IAM group.
    AttachGroupPolicy {
        /// Group name.
        group_name: String,
        /// Policy name.
        policy_name: String,
    },
    /// Attach a policy to an IAM role.
    AttachRolePolicy {
        /// Role name.
        role_name: String,
        /// Policy name.
        policy_name: String,
    },
    /// Add an IAM user to a group.
    AddUserToGroup {
        /// Username.
        username: String,
        /// Group name.
        group_name: String,
    },
    /// Create an access key for an IAM user.
    CreateAccessKey {
        /// Username.
        username: String,
        /// Access key description.
        #[arg(long)]
        description: Option<String>,
    },
    /// List mock IAM users.
    ListUsers {
        /// Filter by organization.
        #[arg(long)]
        organization: Option<String>,
        /// Filter by cloud.
        #[arg(long)]
        cloud: Option<String>,
    },
    /// List mock IAM policies.
    ListPolicies {
        /// Filter by organization.
        #[arg(long)]
        organization: Option<String>,
        /// Filter by cloud.
        #[arg(long)]
        cloud: Option<String>,
    },
    /// Get IAM policy details and document.
    GetPolicy {
        /// Policy name.
        policy_name: String,
    },
    /// Simulate IAM policy evaluation.
    SimulatePolicy {
        /// Policy name.
        policy_name: String,
        /// Action to test (e.g. s3:GetObject).
        #[arg(long)]
        action: String,
        /// Resource ARN or name.
        #[arg(long)]
        resource: String,
        /// Test as a specific user.
        #[arg(long)]
        user: Option<String>,
    },
    /// Attach a resource-based policy to a resource.
    CreateResourcePolicy {
        /// Resource type (vpc, lambda, ...).
        resource_type: String,
        /// Resource identifier.
        resource_id: String,
        /// Resource policy JSON (or @file.json).
        #[arg(long)]
        policy_document: String,
    },
    /// Check whether a user may perform an action on a resource.
    CheckPermission {
        /// Username.
        username: String,
        /// Action to check.
        #[arg(long)]
        action: String,
        /// Resource to access.
        #[arg(long)]
        resource: String,
        /// Cloud environment.
        #[arg(long)]
        cloud: Option<String>,
    },
}

/// Role distribution for generated users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum GenRoleArg {
    /// Only regular users.
    User,
    /// Only admins.
    Admin,
    /// Only developers.
    Developer,
    /// Mixed distribution.
    #[default]
    Mixed,
}

/// Output mode for record generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum GenOutputArg {
    /// Emit records as JSON.
    #[default]
    Json,
    /// Emit records as CSV.
    Csv,
    /// Render records as applied mock resources.
    Apply,
}

/// Output mode for structure generators (no CSV form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ApplyOutputArg {
    /// Emit the structure as JSON.
    #[default]
    Json,
    /// Render the structure as applied mock resources.
    Apply,
}

/// Output mode for the IAM policy generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PolicyOutputArg {
    /// Emit policy documents as JSON.
    #[default]
    Json,
    /// List per-policy template filenames.
    Files,
}

/// IAM policy kind for the policy generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PolicyKindArg {
    /// Read-only policies.
    ReadOnly,
    /// Read-write policies.
    ReadWrite,
    /// Administrative policies.
    Admin,
    /// Service role policies.
    ServiceRole,
    /// All policy kinds.
    #[default]
    All,
}

/// Prebuilt test scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    /// Small startup: one org, a handful of users.
    Startup,
    /// Enterprise: departments, many users, IAM structure.
    Enterprise,
    /// Multi-cloud: several cloud environments with networks.
    MultiCloud,
    /// Development team: users, containers, projects.
    DevTeam,
}

impl ScenarioArg {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Enterprise => "enterprise",
            Self::MultiCloud => "multi-cloud",
            Self::DevTeam => "dev-team",
        }
    }
}

/// Generator subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum GenerateCommands {
    /// Generate realistic test users.
    Users {
        /// Number of users to generate.
        #[arg(long, default_value_t = 10)]
        count: u32,
        /// User role distribution.
        #[arg(long, value_enum, default_value_t = GenRoleArg::Mixed)]
        role: GenRoleArg,
        /// Organization to bind users to.
        #[arg(long)]
        organization: Option<String>,
        /// Cloud environment to bind to.
        #[arg(long)]
        cloud: Option<String>,
        /// Email domain.
        #[arg(long)]
        domain: Option<String>,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = GenOutputArg::Json)]
        output: GenOutputArg,
    },
    /// Generate employees for an organization.
    Employees {
        /// Number of employees to generate.
        #[arg(long, default_value_t = 20)]
        count: u32,
        /// Organization for the employees.
        #[arg(long)]
        organization: String,
        /// Comma-separated departments.
        #[arg(long)]
        departments: Option<String>,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = GenOutputArg::Json)]
        output: GenOutputArg,
    },
    /// Generate mock organizations.
    Organizations {
        /// Number of organizations to generate.
        #[arg(long, default_value_t = 5)]
        count: u32,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = ApplyOutputArg::Json)]
        output: ApplyOutputArg,
    },
    /// Generate a network configuration for a cloud environment.
    NetworkConfig {
        /// Cloud environment.
        #[arg(long)]
        cloud: String,
        /// Number of subnets.
        #[arg(long, default_value_t = 3)]
        subnets: u32,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = ApplyOutputArg::Json)]
        output: ApplyOutputArg,
    },
    /// Generate IAM policy documents.
    IamPolicies {
        /// Policy kind.
        #[arg(long = "type", value_enum, default_value_t = PolicyKindArg::All)]
        policy_type: PolicyKindArg,
        /// Comma-separated services (e.g. s3,dynamodb,lambda).
        #[arg(long)]
        services: Option<String>,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = PolicyOutputArg::Json)]
        output: PolicyOutputArg,
    },
    /// Generate a complete prebuilt test scenario.
    TestScenario {
        /// Scenario to generate.
        #[arg(value_enum)]
        scenario: ScenarioArg,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = ApplyOutputArg::Json)]
        output: ApplyOutputArg,
    },
}

/// Hash algorithm for the hash utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum HashAlgorithmArg {
    /// SHA-256.
    #[default]
    Sha256,
    /// SHA-512.
    Sha512,
}

impl HashAlgorithmArg {
    /// Uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

/// Character set for random string generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CharsetArg {
    /// Letters and digits.
    #[default]
    Alphanumeric,
    /// Letters only.
    Alpha,
    /// Digits only.
    Numeric,
    /// Lowercase hex digits.
    Hex,
}

/// Timestamp output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum TimestampFormatArg {
    /// Seconds since the Unix epoch.
    #[default]
    Unix,
    /// ISO 8601.
    Iso8601,
    /// RFC 3339.
    Rfc3339,
}

/// Utility subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum UtilitiesCommands {
    /// Convert binary to hexadecimal.
    #[command(name = "bin2hex")]
    Bin2Hex {
        /// Binary digits.
        binary: String,
    },
    /// Convert hexadecimal to binary.
    #[command(name = "hex2bin")]
    Hex2Bin {
        /// Hex digits.
        hex_string: String,
    },
    /// Convert an IPv4 address to binary.
    #[command(name = "ip2bin")]
    Ip2Bin {
        /// IPv4 address.
        ip: String,
    },
    /// Convert 32 binary digits to an IPv4 address.
    #[command(name = "bin2ip")]
    Bin2Ip {
        /// Binary digits (dots and spaces ignored).
        binary: String,
    },
    /// Convert an IPv4 address to a long integer.
    #[command(name = "ip2long")]
    Ip2Long {
        /// IPv4 address.
        ip: String,
    },
    /// Convert a long integer to an IPv4 address.
    #[command(name = "long2ip")]
    Long2Ip {
        /// Long integer.
        long_int: u32,
    },
    /// Expand a CIDR block into its address range.
    CidrToRange {
        /// CIDR block (e.g. 10.0.0.0/24).
        cidr: String,
    },
    /// Check whether an IP address falls inside a CIDR block.
    IpInCidr {
        /// IPv4 address.
        ip: String,
        /// CIDR block.
        cidr: String,
    },
    /// Encode a string to Base64.
    Base64Encode {
        /// Data to encode.
        data: String,
    },
    /// Decode a Base64 string.
    Base64Decode {
        /// Base64 data.
        encoded: String,
    },
    /// Percent-encode a string.
    UrlEncode {
        /// Data to encode.
        data: String,
    },
    /// Decode a percent-encoded string.
    UrlDecode {
        /// Encoded data.
        encoded: String,
    },
    /// Hash a string.
    Hash {
        /// Data to hash.
        data: String,
        /// Hash algorithm.
        #[arg(long, value_enum, default_value_t = HashAlgorithmArg::Sha256)]
        algorithm: HashAlgorithmArg,
    },
    /// Generate random UUIDs.
    Uuid {
        /// Number of UUIDs to generate.
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Convert text to a URL-friendly slug.
    Slugify {
        /// Text to slugify.
        text: String,
    },
    /// Generate a random string.
    RandomString {
        /// Length of the string.
        #[arg(long, default_value_t = 16)]
        length: usize,
        /// Character set.
        #[arg(long, value_enum, default_value_t = CharsetArg::Alphanumeric)]
        charset: CharsetArg,
    },
    /// Generate a random password.
    RandomPassword {
        /// Password length.
        #[arg(long, default_value_t = 16)]
        length: usize,
        /// Exclude symbols.
        #[arg(long)]
        no_symbols: bool,
        /// Exclude numbers.
        #[arg(long)]
        no_numbers: bool,
    },
    /// Print the current timestamp.
    Timestamp {
        /// Timestamp format.
        #[arg(long = "format", value_enum, default_value_t = TimestampFormatArg::Unix)]
        format: TimestampFormatArg,
    },
    /// Minify a JSON file.
    JsonMinify {
        /// Path to the JSON file.
        json_file: PathBuf,
    },
    /// Pretty-print a JSON file.
    JsonPretty {
        /// Path to the JSON file.
        json_file: PathBuf,
        /// Indentation level.
        #[arg(long, default_value_t = 2)]
        indent: u16,
    },
    /// Validate a JSON file.
    JsonValidate {
        /// Path to the JSON file.
        json_file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_help_does_not_panic() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_with_inline_code() {
        let cli = Cli::parse_from(["mockfactory", "run", "python", "-c", "print('hi')"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.language, "python");
                assert_eq!(args.code.as_deref(), Some("print('hi')"));
                assert!(args.file.is_none());
                assert!(!args.raw);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn parse_run_with_file_and_timeout() {
        let cli = Cli::parse_from([
            "mockfactory", "run", "javascript", "-f", "app.js", "--timeout", "60", "--raw",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.language, "javascript");
                assert_eq!(args.file.as_deref(), Some(std::path::Path::new("app.js")));
                assert_eq!(args.timeout, Some(60));
                assert!(args.raw);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn zero_timeout_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["mockfactory", "run", "python", "-c", "1", "-t", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_execute_command() {
        let cli = Cli::parse_from(["mockfactory", "execute", "hello.py"]);
        match cli.command {
            Commands::Execute(args) => {
                assert_eq!(args.file, PathBuf::from("hello.py"));
                assert!(args.timeout.is_none());
            }
            _ => panic!("expected execute command"),
        }
    }

    #[test]
    fn parse_login_with_flags() {
        let cli = Cli::parse_from([
            "mockfactory", "login", "--email", "dev@example.com", "--password", "hunter2",
        ]);
        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.email.as_deref(), Some("dev@example.com"));
                assert_eq!(args.password.as_deref(), Some("hunter2"));
            }
            _ => panic!("expected login command"),
        }
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::parse_from(["mockfactory", "config", "set", "timeout", "60"]);
        match cli.command {
            Commands::Config {
                command: ConfigCommands::Set { key, value },
            } => {
                assert_eq!(key, "timeout");
                assert_eq!(value, "60");
            }
            _ => panic!("expected config set command"),
        }
    }

    #[test]
    fn parse_api_url_and_format_flags() {
        let cli = Cli::parse_from([
            "mockfactory",
            "--api-url",
            "http://localhost:8000",
            "--format",
            "json",
            "status",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cli.format, Format::Json);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn parse_organization_create_with_plan() {
        let cli = Cli::parse_from([
            "mockfactory", "organization", "create", "acme-corp", "--plan", "pro",
        ]);
        match cli.command {
            Commands::Organization {
                command: OrganizationCommands::Create { name, plan, .. },
            } => {
                assert_eq!(name, "acme-corp");
                assert_eq!(plan, PlanArg::Pro);
            }
            _ => panic!("expected organization create command"),
        }
    }

    #[test]
    fn parse_organization_delete_with_yes() {
        let cli = Cli::parse_from(["mockfactory", "organization", "delete", "acme", "--yes"]);
        match cli.command {
            Commands::Organization {
                command: OrganizationCommands::Delete { name, yes },
            } => {
                assert_eq!(name, "acme");
                assert!(yes);
            }
            _ => panic!("expected organization delete command"),
        }
    }

    #[test]
    fn parse_domain_create_with_records() {
        let cli = Cli::parse_from([
            "mockfactory", "domain", "create", "example.com",
            "--verified", "--dns-records", "A,MX,TXT",
        ]);
        match cli.command {
            Commands::Domain {
                command: DomainCommands::Create { domain_name, verified, dns_records, .. },
            } => {
                assert_eq!(domain_name, "example.com");
                assert!(verified);
                assert_eq!(dns_records.as_deref(), Some("A,MX,TXT"));
            }
            _ => panic!("expected domain create command"),
        }
    }

    #[test]
    fn parse_container_create_defaults_to_alpine() {
        let cli = Cli::parse_from(["mockfactory", "container", "create", "web-1"]);
        match cli.command {
            Commands::Container {
                command: ContainerCommands::Create { name, image, .. },
            } => {
                assert_eq!(name, "web-1");
                assert_eq!(image, "alpine");
            }
            _ => panic!("expected container create command"),
        }
    }

    #[test]
    fn parse_mailbox_send_requires_subject_and_body() {
        let result = Cli::try_parse_from([
            "mockfactory", "mailbox", "send", "a@x.com", "b@x.com",
        ]);
        assert!(result.is_err());

        let cli = Cli::parse_from([
            "mockfactory", "mailbox", "send", "a@x.com", "b@x.com",
            "--subject", "Hi", "--body", "Hello there",
        ]);
        match cli.command {
            Commands::Mailbox {
                command: MailboxCommands::Send { from_email, to_email, subject, .. },
            } => {
                assert_eq!(from_email, "a@x.com");
                assert_eq!(to_email, "b@x.com");
                assert_eq!(subject, "Hi");
            }
            _ => panic!("expected mailbox send command"),
        }
    }

    #[test]
    fn parse_sms_create_provider() {
        let cli = Cli::parse_from([
            "mockfactory", "sms", "create-provider", "main-sms", "--provider", "aws-sns",
        ]);
        match cli.command {
            Commands::Sms {
                command: SmsCommands::CreateProvider { name, provider, .. },
            } => {
                assert_eq!(name, "main-sms");
                assert_eq!(provider, SmsProviderArg::AwsSns);
            }
            _ => panic!("expected sms create-provider command"),
        }
    }

    #[test]
    fn parse_api_create_with_type_flag() {
        let cli = Cli::parse_from([
            "mockfactory", "api", "create", "billing", "--type", "graphql", "--auth", "bearer",
        ]);
        match cli.command {
            Commands::Api {
                command: ApiCommands::Create { name, api_type, auth, .. },
            } => {
                assert_eq!(name, "billing");
                assert_eq!(api_type, ApiTypeArg::Graphql);
                assert_eq!(auth, ApiAuthArg::Bearer);
            }
            _ => panic!("expected api create command"),
        }
    }

    #[test]
    fn parse_iam_simulate_policy() {
        let cli = Cli::parse_from([
            "mockfactory", "iam", "simulate-policy", "s3-read-only",
            "--action", "s3:GetObject", "--resource", "bucket/key",
        ]);
        match cli.command {
            Commands::Iam {
                command: IamCommands::SimulatePolicy { policy_name, action, resource, user },
            } => {
                assert_eq!(policy_name, "s3-read-only");
                assert_eq!(action, "s3:GetObject");
                assert_eq!(resource, "bucket/key");
                assert!(user.is_none());
            }
            _ => panic!("expected iam simulate-policy command"),
        }
    }

    #[test]
    fn parse_generate_users_with_output() {
        let cli = Cli::parse_from([
            "mockfactory", "generate", "users", "--count", "50", "--output", "csv",
        ]);
        match cli.command {
            Commands::Generate {
                command: GenerateCommands::Users { count, output, role, .. },
            } => {
                assert_eq!(count, 50);
                assert_eq!(output, GenOutputArg::Csv);
                assert_eq!(role, GenRoleArg::Mixed);
            }
            _ => panic!("expected generate users command"),
        }
    }

    #[test]
    fn parse_generate_test_scenario() {
        let cli = Cli::parse_from(["mockfactory", "generate", "test-scenario", "multi-cloud"]);
        match cli.command {
            Commands::Generate {
                command: GenerateCommands::TestScenario { scenario, .. },
            } => {
                assert_eq!(scenario, ScenarioArg::MultiCloud);
            }
            _ => panic!("expected generate test-scenario command"),
        }
    }

    #[test]
    fn parse_utilities_numeric_names() {
        let cli = Cli::parse_from(["mockfactory", "utilities", "bin2hex", "11010101"]);
        match cli.command {
            Commands::Utilities {
                command: UtilitiesCommands::Bin2Hex { binary },
            } => assert_eq!(binary, "11010101"),
            _ => panic!("expected utilities bin2hex command"),
        }

        let cli = Cli::parse_from(["mockfactory", "utilities", "ip2long", "192.168.1.1"]);
        assert!(matches!(
            cli.command,
            Commands::Utilities {
                command: UtilitiesCommands::Ip2Long { .. }
            }
        ));
    }

    #[test]
    fn parse_utilities_hash_algorithm() {
        let cli = Cli::parse_from([
            "mockfactory", "utilities", "hash", "Hello", "--algorithm", "sha512",
        ]);
        match cli.command {
            Commands::Utilities {
                command: UtilitiesCommands::Hash { data, algorithm },
            } => {
                assert_eq!(data, "Hello");
                assert_eq!(algorithm, HashAlgorithmArg::Sha512);
            }
            _ => panic!("expected utilities hash command"),
        }
    }

    #[test]
    fn parse_workflow_create_registration() {
        let cli = Cli::parse_from([
            "mockfactory", "workflow", "create-registration", "signup-flow",
            "--email-verification", "--mail-server", "mail-1",
        ]);
        match cli.command {
            Commands::Workflow {
                command:
                    WorkflowCommands::CreateRegistration {
                        name,
                        email_verification,
                        sms_verification,
                        mail_server,
                        ..
                    },
            } => {
                assert_eq!(name, "signup-flow");
                assert!(email_verification);
                assert!(!sms_verification);
                assert_eq!(mail_server.as_deref(), Some("mail-1"));
            }
            _ => panic!("expected workflow create-registration command"),
        }
    }

    #[test]
    fn format_default_is_table() {
        assert_eq!(Format::default(), Format::Table);
    }
}
