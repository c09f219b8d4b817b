//! Test-data generators: users, employees, organizations, network
//! configurations, IAM policy templates, and prebuilt scenarios.

use std::io::Write;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use serde_json::{Value, json};

use crate::cli::{
    ApplyOutputArg, GenOutputArg, GenRoleArg, GenerateCommands, PolicyKindArg, PolicyOutputArg,
    ScenarioArg,
};
use crate::error::CliError;
use crate::output::{OutputFormat, TableDisplay};

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry",
    "Iris", "Jack", "Kate", "Leo", "Mary", "Noah", "Olivia", "Peter", "Quinn", "Rachel",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez",
];
const DEFAULT_DEPARTMENTS: &[&str] =
    &["engineering", "sales", "marketing", "hr", "finance", "operations"];
const COMPANY_PREFIXES: &[&str] = &[
    "Tech", "Global", "Digital", "Cloud", "Smart", "Quantum", "Cyber", "Mega", "Super", "Ultra",
];
const COMPANY_SUFFIXES: &[&str] = &[
    "Corp", "Inc", "Systems", "Solutions", "Industries", "Technologies", "Enterprises", "Group",
];
const INDUSTRIES: &[&str] = &["technology", "finance", "healthcare", "retail", "manufacturing"];
const PLANS: &[&str] = &["free", "pro", "enterprise"];
const DEFAULT_SERVICES: &[&str] = &["s3", "dynamodb", "lambda", "sqs", "ec2"];

/// Handler for generate subcommands.
pub struct GenerateCommand;

/// A generated test user.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedUser {
    /// Unique username derived from the generated name.
    pub username: String,
    /// Email under the requested domain.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Assigned role.
    pub role: String,
    /// Organization binding, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Cloud binding, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<String>,
}

/// A generated employee with department and title.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedEmployee {
    /// Unique username derived from the generated name.
    pub username: String,
    /// Email under the organization's domain.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Department assignment.
    pub department: String,
    /// Job title within the department.
    pub job_title: String,
    /// Stable employee identifier.
    pub employee_id: String,
    /// Owning organization.
    pub organization: String,
    /// Derived role: managers and directors become admins.
    pub role: String,
}

/// A generated organization.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedOrganization {
    /// Lowercase organization name.
    pub name: String,
    /// Generated description.
    pub description: String,
    /// Subscription plan.
    pub plan: String,
    /// Industry label.
    pub industry: String,
}

/// JSON payload that prints as pretty JSON in either output format.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
struct JsonPayload(Value);

impl TableDisplay for JsonPayload {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        let text = serde_json::to_string_pretty(&self.0)
            .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
        writeln!(writer, "{text}")?;
        Ok(())
    }
}

/// Narration of an `--output apply` run.
#[derive(Debug, Clone, Serialize)]
struct ApplyReport {
    lead: String,
    steps: Vec<String>,
    done: String,
}

impl TableDisplay for ApplyReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "✓ {}", self.lead)?;
        for step in &self.steps {
            writeln!(writer, "{step}")?;
        }
        writeln!(writer, "✓ {}", self.done)?;
        Ok(())
    }
}

impl GenerateCommand {
    /// Executes the generate subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing output fails.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &GenerateCommands,
    ) -> Result<(), CliError> {
        match command {
            GenerateCommands::Users {
                count,
                role,
                organization,
                cloud,
                domain,
                output,
            } => {
                let users = generate_users(
                    *count,
                    *role,
                    organization.as_deref(),
                    cloud.as_deref(),
                    domain.as_deref(),
                );
                match output {
                    GenOutputArg::Json => {
                        let payload = JsonPayload(json!({
                            "users": users,
                            "count": users.len(),
                        }));
                        format.write(out, &payload)?;
                    }
                    GenOutputArg::Csv => {
                        writeln!(out, "username,email,full_name,role,organization,cloud")?;
                        for u in &users {
                            writeln!(
                                out,
                                "{},{},{},{},{},{}",
                                u.username,
                                u.email,
                                u.full_name,
                                u.role,
                                u.organization.as_deref().unwrap_or(""),
                                u.cloud.as_deref().unwrap_or(""),
                            )?;
                        }
                    }
                    GenOutputArg::Apply => {
                        let report = ApplyReport {
                            lead: format!(
                                "Generated {} users - applying to system...",
                                users.len()
                            ),
                            steps: users
                                .iter()
                                .map(|u| format!("Creating user: {}", u.username))
                                .collect(),
                            done: format!("Created {} users successfully", users.len()),
                        };
                        format.write(out, &report)?;
                    }
                }
            }
            GenerateCommands::Employees {
                count,
                organization,
                departments,
                output,
            } => {
                let departments: Vec<String> = departments.as_deref().map_or_else(
                    || DEFAULT_DEPARTMENTS.iter().map(ToString::to_string).collect(),
                    |d| d.split(',').map(|s| s.trim().to_string()).collect(),
                );
                let employees = generate_employees(*count, organization, &departments);
                match output {
                    GenOutputArg::Json => {
                        let payload = JsonPayload(json!({
                            "employees": employees,
                            "count": employees.len(),
                        }));
                        format.write(out, &payload)?;
                    }
                    GenOutputArg::Csv => {
                        writeln!(
                            out,
                            "username,email,full_name,department,job_title,employee_id,organization,role"
                        )?;
                        for e in &employees {
                            writeln!(
                                out,
                                "{},{},{},{},{},{},{},{}",
                                e.username,
                                e.email,
                                e.full_name,
                                e.department,
                                e.job_title,
                                e.employee_id,
                                e.organization,
                                e.role,
                            )?;
                        }
                    }
                    GenOutputArg::Apply => {
                        let mut counts: Vec<(String, usize)> = Vec::new();
                        for e in &employees {
                            match counts.iter_mut().find(|(d, _)| *d == e.department) {
                                Some((_, n)) => *n += 1,
                                None => counts.push((e.department.clone(), 1)),
                            }
                        }
                        let report = ApplyReport {
                            lead: format!(
                                "Generated {} employees - applying to system...",
                                employees.len()
                            ),
                            steps: counts
                                .iter()
                                .map(|(dept, n)| {
                                    format!("Creating {n} employees in {dept} department")
                                })
                                .collect(),
                            done: format!(
                                "Created {} employees successfully",
                                employees.len()
                            ),
                        };
                        format.write(out, &report)?;
                    }
                }
            }
            GenerateCommands::Organizations { count, output } => {
                let orgs = generate_organizations(*count);
                match output {
                    ApplyOutputArg::Json => {
                        let payload = JsonPayload(json!({
                            "organizations": orgs,
                            "count": orgs.len(),
                        }));
                        format.write(out, &payload)?;
                    }
                    ApplyOutputArg::Apply => {
                        let report = ApplyReport {
                            lead: format!(
                                "Generated {} organizations - applying to system...",
                                orgs.len()
                            ),
                            steps: orgs
                                .iter()
                                .map(|o| {
                                    format!(
                                        "Creating organization: {} ({} plan)",
                                        o.name, o.plan
                                    )
                                })
                                .collect(),
                            done: format!(
                                "Created {} organizations successfully",
                                orgs.len()
                            ),
                        };
                        format.write(out, &report)?;
                    }
                }
            }
            GenerateCommands::NetworkConfig {
                cloud,
                subnets,
                output,
            } => {
                let config = network_config(cloud, *subnets);
                match output {
                    ApplyOutputArg::Json => {
                        format.write(out, &JsonPayload(config))?;
                    }
                    ApplyOutputArg::Apply => {
                        let subnet_count = config["subnets"]
                            .as_array()
                            .map_or(0, Vec::len);
                        let sg_count = config["security_groups"]
                            .as_array()
                            .map_or(0, Vec::len);
                        let report = ApplyReport {
                            lead: format!("Generated network config - applying to {cloud}..."),
                            steps: vec![
                                "Creating VPC: 10.0.0.0/16".to_string(),
                                format!("Creating {subnet_count} subnets"),
                                format!("Creating {sg_count} security groups"),
                            ],
                            done: "Network configuration applied successfully".to_string(),
                        };
                        format.write(out, &report)?;
                    }
                }
            }
            GenerateCommands::IamPolicies {
                policy_type,
                services,
                output,
            } => {
                let services: Vec<String> = services.as_deref().map_or_else(
                    || DEFAULT_SERVICES.iter().map(ToString::to_string).collect(),
                    |s| s.split(',').map(|s| s.trim().to_string()).collect(),
                );
                let policies = iam_policy_templates(*policy_type, &services);
                match output {
                    PolicyOutputArg::Json => {
                        let payload = JsonPayload(json!({
                            "policies": policies,
                            "count": policies.len(),
                        }));
                        format.write(out, &payload)?;
                    }
                    PolicyOutputArg::Files => {
                        let report = ApplyReport {
                            lead: format!("Generated {} policy templates", policies.len()),
                            steps: policies
                                .keys()
                                .map(|name| format!("Policy template: {name}.json"))
                                .collect(),
                            done: "Policy templates ready".to_string(),
                        };
                        format.write(out, &report)?;
                    }
                }
            }
            GenerateCommands::TestScenario { scenario, output } => {
                let config = scenario_config(*scenario);
                match output {
                    ApplyOutputArg::Json => {
                        let payload = JsonPayload(json!({
                            "scenario": scenario.as_str(),
                            "config": config,
                        }));
                        format.write(out, &payload)?;
                    }
                    ApplyOutputArg::Apply => {
                        let clouds = config["clouds"].as_array().map_or(0, Vec::len);
                        let projects = config["projects"].as_array().map_or(0, Vec::len);
                        let groups = config["iam_groups"].as_array().map_or(0, Vec::len);
                        let report = ApplyReport {
                            lead: format!("Applying '{}' test scenario...", scenario.as_str()),
                            steps: vec![
                                format!(
                                    "Creating organization: {}",
                                    config["organization"]["name"]
                                        .as_str()
                                        .unwrap_or_default()
                                ),
                                format!("Generating {} employees", config["employees"]),
                                format!("Creating {clouds} cloud environments"),
                                format!("Creating {projects} projects"),
                                format!("Creating {} IAM users", config["iam_users"]),
                                format!("Creating {groups} IAM groups"),
                            ],
                            done: format!(
                                "Test scenario '{}' applied successfully!",
                                scenario.as_str()
                            ),
                        };
                        format.write(out, &report)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or("")
}

fn generate_users(
    count: u32,
    role: GenRoleArg,
    organization: Option<&str>,
    cloud: Option<&str>,
    domain: Option<&str>,
) -> Vec<GeneratedUser> {
    let roles: &[&str] = match role {
        GenRoleArg::User => &["user"],
        GenRoleArg::Admin => &["admin"],
        GenRoleArg::Developer => &["developer"],
        GenRoleArg::Mixed => &["user", "admin", "developer"],
    };
    let email_domain = domain.unwrap_or("example.com");
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let first = pick(&mut rng, FIRST_NAMES);
            let last = pick(&mut rng, LAST_NAMES);
            let suffix = if i > 0 { i.to_string() } else { String::new() };
            let username =
                format!("{}.{}{suffix}", first.to_lowercase(), last.to_lowercase());
            GeneratedUser {
                email: format!("{username}@{email_domain}"),
                username,
                full_name: format!("{first} {last}"),
                role: pick(&mut rng, roles).to_string(),
                organization: organization.map(ToString::to_string),
                cloud: cloud.map(ToString::to_string),
            }
        })
        .collect()
}

fn job_titles(department: &str) -> &'static [&'static str] {
    match department {
        "engineering" => &[
            "Software Engineer",
            "Senior Engineer",
            "Tech Lead",
            "Engineering Manager",
            "DevOps Engineer",
        ],
        "sales" => &["Sales Rep", "Account Executive", "Sales Manager", "VP Sales"],
        "marketing" => &["Marketing Specialist", "Content Manager", "Marketing Director"],
        "hr" => &["HR Specialist", "Recruiter", "HR Manager"],
        "finance" => &["Accountant", "Financial Analyst", "CFO"],
        "operations" => &["Operations Manager", "Project Manager", "COO"],
        _ => &["Employee"],
    }
}

fn generate_employees(
    count: u32,
    organization: &str,
    departments: &[String],
) -> Vec<GeneratedEmployee> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let first = pick(&mut rng, FIRST_NAMES);
            let last = pick(&mut rng, LAST_NAMES);
            let department = departments
                .choose(&mut rng)
                .cloned()
                .unwrap_or_else(|| "engineering".to_string());
            let title = pick(&mut rng, job_titles(&department)).to_string();
            let role = if title.contains("Manager") || title.contains("Director") {
                "admin"
            } else {
                "user"
            };
            let username =
                format!("{}.{}.{i}", first.to_lowercase(), last.to_lowercase());
            GeneratedEmployee {
                email: format!("{username}@{organization}.com"),
                username,
                full_name: format!("{first} {last}"),
                department,
                job_title: title,
                employee_id: format!("EMP{}", 1000 + i),
                organization: organization.to_string(),
                role: role.to_string(),
            }
        })
        .collect()
}

fn generate_organizations(count: u32) -> Vec<GeneratedOrganization> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let suffix = if i > 0 { i.to_string() } else { String::new() };
            let name = format!(
                "{}{}{suffix}",
                pick(&mut rng, COMPANY_PREFIXES),
                pick(&mut rng, COMPANY_SUFFIXES),
            )
            .to_lowercase();
            let industry = pick(&mut rng, INDUSTRIES).to_string();
            GeneratedOrganization {
                description: format!("{} - {} Company", title_case(&name), title_case(&industry)),
                name,
                plan: pick(&mut rng, PLANS).to_string(),
                industry,
            }
        })
        .collect()
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// A `/16` VPC carved into `/24` subnets, with one availability zone
/// per subnet and the first subnet public.
fn network_config(cloud: &str, subnets: u32) -> Value {
    let subnet_list: Vec<Value> = (0..subnets)
        .map(|i| {
            let az_letter = char::from(b'a' + u8::try_from(i % 26).unwrap_or(0));
            json!({
                "name": format!("subnet-{}", i + 1),
                "cidr_block": format!("10.0.{i}.0/24"),
                "availability_zone": format!("us-east-1{az_letter}"),
                "public": i == 0,
            })
        })
        .collect();

    json!({
        "cloud": cloud,
        "vpc": {
            "cidr_block": "10.0.0.0/16",
            "enable_dns": true,
            "enable_dns_hostnames": true,
        },
        "subnets": subnet_list,
        "security_groups": [
            {
                "name": "web-sg",
                "description": "Security group for web servers",
                "ingress": [
                    {"protocol": "tcp", "port": 80, "cidr": "0.0.0.0/0"},
                    {"protocol": "tcp", "port": 443, "cidr": "0.0.0.0/0"},
                ],
            },
            {
                "name": "app-sg",
                "description": "Security group for application servers",
                "ingress": [
                    {"protocol": "tcp", "port": 8080, "cidr": "10.0.0.0/16"},
                ],
            },
            {
                "name": "db-sg",
                "description": "Security group for databases",
                "ingress": [
                    {"protocol": "tcp", "port": 5432, "cidr": "10.0.0.0/16"},
                    {"protocol": "tcp", "port": 3306, "cidr": "10.0.0.0/16"},
                ],
            },
        ],
    })
}

fn iam_policy_templates(
    kind: PolicyKindArg,
    services: &[String],
) -> serde_json::Map<String, Value> {
    let mut policies = serde_json::Map::new();

    for service in services {
        if matches!(kind, PolicyKindArg::ReadOnly | PolicyKindArg::All) {
            policies.insert(
                format!("{service}-read-only"),
                json!({
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": [
                            format!("{service}:Get*"),
                            format!("{service}:List*"),
                            format!("{service}:Describe*"),
                        ],
                        "Resource": "*",
                    }],
                }),
            );
        }
        if matches!(kind, PolicyKindArg::ReadWrite | PolicyKindArg::All) {
            policies.insert(
                format!("{service}-read-write"),
                json!({
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": [format!("{service}:*")],
                        "Resource": "*",
                    }],
                }),
            );
        }
    }

    if matches!(kind, PolicyKindArg::Admin | PolicyKindArg::All) {
        policies.insert(
            "admin-access".to_string(),
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Action": "*",
                    "Resource": "*",
                }],
            }),
        );
    }

    if matches!(kind, PolicyKindArg::ServiceRole | PolicyKindArg::All) {
        policies.insert(
            "lambda-execution-role-policy".to_string(),
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Action": [
                        "logs:CreateLogGroup",
                        "logs:CreateLogStream",
                        "logs:PutLogEvents",
                    ],
                    "Resource": "arn:aws:logs:*:*:*",
                }],
            }),
        );
    }

    policies
}

fn scenario_config(scenario: ScenarioArg) -> Value {
    match scenario {
        ScenarioArg::Startup => json!({
            "organization": {"name": "startup-inc", "plan": "free"},
            "employees": 15,
            "clouds": [{"name": "prod", "provider": "aws", "region": "us-east-1"}],
            "projects": [{"name": "web-app", "environment": "production"}],
            "iam_users": 10,
            "iam_groups": ["developers", "ops"],
        }),
        ScenarioArg::Enterprise => json!({
            "organization": {"name": "enterprise-corp", "plan": "enterprise"},
            "employees": 500,
            "clouds": [
                {"name": "us-east", "provider": "aws", "region": "us-east-1"},
                {"name": "us-west", "provider": "aws", "region": "us-west-2"},
                {"name": "eu-west", "provider": "aws", "region": "eu-west-1"},
            ],
            "projects": [
                {"name": "core-services", "environment": "production"},
                {"name": "analytics", "environment": "production"},
                {"name": "staging", "environment": "staging"},
            ],
            "iam_users": 100,
            "iam_groups": ["admins", "developers", "analysts", "operations", "security"],
        }),
        ScenarioArg::MultiCloud => json!({
            "organization": {"name": "multi-cloud-co", "plan": "pro"},
            "employees": 50,
            "clouds": [
                {"name": "aws-primary", "provider": "aws", "region": "us-east-1"},
                {"name": "gcp-analytics", "provider": "gcp", "region": "us-central1"},
                {"name": "azure-backup", "provider": "azure", "region": "eastus"},
            ],
            "projects": [{"name": "unified-platform", "environment": "production"}],
            "iam_users": 30,
            "iam_groups": ["cloud-admins", "developers", "data-engineers"],
        }),
        ScenarioArg::DevTeam => json!({
            "organization": {"name": "dev-team", "plan": "pro"},
            "employees": 25,
            "clouds": [
                {"name": "dev", "provider": "aws", "region": "us-east-1"},
                {"name": "staging", "provider": "aws", "region": "us-east-1"},
                {"name": "prod", "provider": "aws", "region": "us-west-2"},
            ],
            "projects": [
                {"name": "api", "environment": "development"},
                {"name": "api", "environment": "staging"},
                {"name": "api", "environment": "production"},
            ],
            "iam_users": 20,
            "iam_groups": ["developers", "qa", "devops"],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn render(command: &GenerateCommands) -> String {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        GenerateCommand
            .execute(&mut buf, &fmt, command)
            .expect("execute");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn users_respect_role_and_domain() {
        let users = generate_users(5, GenRoleArg::Admin, Some("acme"), None, Some("acme.io"));
        assert_eq!(users.len(), 5);
        for u in &users {
            assert_eq!(u.role, "admin");
            assert!(u.email.ends_with("@acme.io"));
            assert_eq!(u.organization.as_deref(), Some("acme"));
            assert!(u.cloud.is_none());
        }
    }

    #[test]
    fn usernames_get_an_index_suffix_after_the_first() {
        let users = generate_users(3, GenRoleArg::User, None, None, None);
        assert!(!users[0].username.ends_with('0'));
        assert!(users[1].username.ends_with('1'));
        assert!(users[2].username.ends_with('2'));
    }

    #[test]
    fn employees_derive_admin_role_from_title() {
        let employees = generate_employees(50, "acme", &["sales".to_string()]);
        for e in &employees {
            assert!(e.employee_id.starts_with("EMP1"));
            assert!(e.email.ends_with("@acme.com"));
            let should_be_admin =
                e.job_title.contains("Manager") || e.job_title.contains("Director");
            assert_eq!(e.role == "admin", should_be_admin);
        }
    }

    #[test]
    fn network_config_makes_first_subnet_public() {
        let config = network_config("dev-cloud", 3);
        let subnets = config["subnets"].as_array().expect("subnets");
        assert_eq!(subnets.len(), 3);
        assert_eq!(subnets[0]["public"], true);
        assert_eq!(subnets[1]["public"], false);
        assert_eq!(subnets[1]["cidr_block"], "10.0.1.0/24");
        assert_eq!(subnets[2]["availability_zone"], "us-east-1c");
        assert_eq!(config["vpc"]["cidr_block"], "10.0.0.0/16");
    }

    #[test]
    fn iam_policy_templates_cover_all_kinds() {
        let services = vec!["s3".to_string(), "lambda".to_string()];
        let policies = iam_policy_templates(PolicyKindArg::All, &services);
        assert!(policies.contains_key("s3-read-only"));
        assert!(policies.contains_key("s3-read-write"));
        assert!(policies.contains_key("lambda-read-only"));
        assert!(policies.contains_key("admin-access"));
        assert!(policies.contains_key("lambda-execution-role-policy"));

        let read_only = iam_policy_templates(PolicyKindArg::ReadOnly, &services);
        assert_eq!(read_only.len(), 2);
    }

    #[test]
    fn csv_output_has_expected_header() {
        let output = render(&GenerateCommands::Users {
            count: 2,
            role: GenRoleArg::Mixed,
            organization: None,
            cloud: None,
            domain: None,
            output: GenOutputArg::Csv,
        });
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("username,email,full_name,role,organization,cloud")
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn apply_output_narrates_each_step() {
        let output = render(&GenerateCommands::TestScenario {
            scenario: ScenarioArg::Startup,
            output: ApplyOutputArg::Apply,
        });
        assert!(output.contains("Applying 'startup' test scenario..."));
        assert!(output.contains("Creating organization: startup-inc"));
        assert!(output.contains("Generating 15 employees"));
        assert!(output.contains("Test scenario 'startup' applied successfully!"));
    }

    #[test]
    fn scenario_configs_are_complete() {
        for scenario in [
            ScenarioArg::Startup,
            ScenarioArg::Enterprise,
            ScenarioArg::MultiCloud,
            ScenarioArg::DevTeam,
        ] {
            let config = scenario_config(scenario);
            assert!(config["organization"]["name"].is_string());
            assert!(config["employees"].is_u64());
            assert!(!config["clouds"].as_array().expect("clouds").is_empty());
            assert!(!config["iam_groups"].as_array().expect("groups").is_empty());
        }
    }
}
