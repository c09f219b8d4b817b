//! Mock network commands.

use std::io::Write;

use ipnet::Ipv4Net;

use crate::cli::NetworkCommands;
use crate::commands::{new_id, now_utc};
use crate::error::CliError;
use crate::output::{OutputFormat, RecordTable, ResourceRecord};

/// Handler for network subcommands.
pub struct NetworkCommand;

impl NetworkCommand {
    /// Executes the network subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for an unparseable CIDR block.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &NetworkCommands,
    ) -> Result<(), CliError> {
        match command {
            NetworkCommands::Create {
                name,
                cidr,
                isolated,
            } => {
                let net: Ipv4Net = cidr.parse().map_err(|_| {
                    CliError::InvalidArgument(format!("invalid CIDR block: {cidr}"))
                })?;
                let record = ResourceRecord::new(format!("Mock network '{name}' created"))
                    .field("network_id", new_id())
                    .field("name", name)
                    .field("cidr", net.to_string())
                    .field("hosts", host_count(&net).to_string())
                    .field("isolated", if *isolated { "yes" } else { "no" })
                    .field("created_at", now_utc());
                format.write(out, &record)?;
            }
            NetworkCommands::List => {
                let table = RecordTable::new(
                    vec!["NAME", "CIDR", "ISOLATED", "CONTAINERS"],
                    "network",
                );
                format.write(out, &table)?;
            }
        }
        Ok(())
    }
}

/// Usable host addresses in the block (network/broadcast excluded for
/// prefixes shorter than /31).
fn host_count(net: &Ipv4Net) -> u64 {
    let total = 1u64 << (32 - u32::from(net.prefix_len()));
    if total > 2 { total - 2 } else { total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;

    fn render(command: &NetworkCommands) -> Result<String, CliError> {
        let fmt = OutputFormat::new(Format::Table);
        let mut buf = Vec::new();
        NetworkCommand.execute(&mut buf, &fmt, command)?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn create_reports_host_count() {
        let output = render(&NetworkCommands::Create {
            name: "backend".into(),
            cidr: "10.0.0.0/24".into(),
            isolated: true,
        })
        .expect("render");
        assert!(output.contains("Mock network 'backend' created"));
        assert!(output.contains("254"));
        assert!(output.contains("yes"));
    }

    #[test]
    fn invalid_cidr_is_rejected() {
        let err = render(&NetworkCommands::Create {
            name: "bad".into(),
            cidr: "10.0.0.0/40".into(),
            isolated: false,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn host_count_handles_point_to_point() {
        let net: Ipv4Net = "10.0.0.0/31".parse().expect("net");
        assert_eq!(host_count(&net), 2);
    }
}
