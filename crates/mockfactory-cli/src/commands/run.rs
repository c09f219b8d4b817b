//! Code execution commands.
//!
//! `run` takes an explicit language token; `execute` infers the language from
//! the file extension. Both submit a single request to the backend sandbox
//! and surface the program's own exit code.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use mockfactory_client::{ApiClient, ExecutionRequest, ExecutionResult, Language, Tier};

use crate::cli::{ExecuteArgs, RunArgs};
use crate::error::CliError;
use crate::output::{OutputFormat, TableDisplay};

/// Handler for the run and execute commands.
pub struct RunCommand<'a> {
    client: &'a ApiClient,
    default_timeout: u32,
}

impl<'a> RunCommand<'a> {
    /// Creates a new run command handler.
    #[must_use]
    pub const fn new(client: &'a ApiClient, default_timeout: u32) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    /// Executes the run command (explicit language).
    ///
    /// Returns the executed program's exit code on success.
    ///
    /// # Errors
    ///
    /// Returns an error for conflicting source arguments, unsupported
    /// languages, unreadable files, or backend failures.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &RunArgs,
    ) -> Result<u8, CliError> {
        let language = Language::from_str(&args.language)?;
        let request = build_request(
            language,
            args.code.as_deref(),
            args.file.as_deref(),
            args.timeout,
            self.default_timeout,
        )?;
        self.submit(out, format, &request, args.raw).await
    }

    /// Executes the execute command (language inferred from the file).
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported extensions, unreadable files, or
    /// backend failures.
    pub async fn execute_file<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &ExecuteArgs,
    ) -> Result<u8, CliError> {
        let language = Language::from_path(&args.file)?;
        let request = build_request(
            language,
            None,
            Some(&args.file),
            args.timeout,
            self.default_timeout,
        )?;
        self.submit(out, format, &request, args.raw).await
    }

    async fn submit<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        request: &ExecutionRequest,
        raw: bool,
    ) -> Result<u8, CliError> {
        let result = self.client.execute(request).await?;
        debug!(exit_code = result.exit_code, duration_ms = result.duration_ms, "execution finished");

        if raw {
            // Raw mode: the program's streams pass through untouched.
            out.write_all(result.stdout.as_bytes())?;
            out.flush()?;
            if !result.stderr.is_empty() {
                let mut stderr = std::io::stderr().lock();
                stderr.write_all(result.stderr.as_bytes())?;
                stderr.flush()?;
            }
        } else {
            let report = ExecutionReport::from(&result);
            format.write(out, &report)?;
        }

        Ok(program_exit_code(result.exit_code))
    }
}

/// Assemble an execution request from command arguments.
///
/// Exactly one of `code`/`file` must be given; a user timeout overrides the
/// configured default.
///
/// # Errors
///
/// Returns [`CliError::Usage`] for conflicting or missing source arguments
/// and [`CliError::InvalidArgument`] for a non-positive timeout.
pub fn build_request(
    language: Language,
    code: Option<&str>,
    file: Option<&Path>,
    timeout: Option<u32>,
    default_timeout: u32,
) -> Result<ExecutionRequest, CliError> {
    let code = match (code, file) {
        (Some(_), Some(_)) => {
            return Err(CliError::Usage(
                "cannot specify both --code and --file".into(),
            ));
        }
        (None, None) => {
            return Err(CliError::Usage(
                "must specify either --code or --file".into(),
            ));
        }
        (Some(code), None) => code.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
    };

    if timeout == Some(0) {
        return Err(CliError::InvalidArgument(
            "timeout must be a positive number of seconds".into(),
        ));
    }

    Ok(ExecutionRequest {
        language,
        code,
        timeout: Some(timeout.unwrap_or(default_timeout)),
    })
}

/// Map the executed program's exit code onto the process exit code.
///
/// Codes outside `u8` range collapse to 1 so a failure never reads as
/// success.
fn program_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Rendered view of an execution result.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReport {
    /// Program stdout.
    pub stdout: String,
    /// Program stderr.
    pub stderr: String,
    /// Program exit code.
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Tier the execution ran under.
    pub tier: Tier,
    /// Executions remaining in the current window, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_executions: Option<u32>,
}

impl From<&ExecutionResult> for ExecutionReport {
    fn from(result: &ExecutionResult) -> Self {
        Self {
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            exit_code: result.exit_code,
            duration_ms: result.duration_ms,
            tier: result.tier,
            remaining_executions: result.remaining_executions,
        }
    }
}

impl TableDisplay for ExecutionReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.exit_code == 0 {
            writeln!(writer, "✓ Execution completed in {} ms", self.duration_ms)?;
        } else {
            writeln!(
                writer,
                "✗ Execution failed with exit code {} ({} ms)",
                self.exit_code, self.duration_ms
            )?;
        }
        writeln!(writer, "Tier: {}", self.tier)?;
        if let Some(remaining) = self.remaining_executions {
            writeln!(writer, "Remaining executions: {remaining}")?;
        }

        if !self.stdout.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "── stdout ──")?;
            write!(writer, "{}", self.stdout)?;
            if !self.stdout.ends_with('\n') {
                writeln!(writer)?;
            }
        }
        if !self.stderr.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "── stderr ──")?;
            write!(writer, "{}", self.stderr)?;
            if !self.stderr.ends_with('\n') {
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}
