//! Conversion and generation utilities: binary/hex/IP conversions, CIDR
//! math, encodings, hashing, and JSON tooling.

use std::io::Write;
use std::net::Ipv4Addr;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use sha2::{Digest, Sha256, Sha512};

use crate::cli::{CharsetArg, HashAlgorithmArg, TimestampFormatArg, UtilitiesCommands};
use crate::error::CliError;
use crate::output::{Message, OutputFormat, ResourceRecord};

#[allow(clippy::unwrap_used)]
static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
#[allow(clippy::unwrap_used)]
static SLUG_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

/// Handler for utility subcommands.
pub struct UtilitiesCommand;

impl UtilitiesCommand {
    /// Executes the utility subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for malformed input values
    /// and [`CliError::Io`] when a referenced file cannot be read.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        command: &UtilitiesCommands,
    ) -> Result<(), CliError> {
        match command {
            UtilitiesCommands::Bin2Hex { binary } => {
                let value = u128::from_str_radix(binary, 2)
                    .map_err(|e| CliError::InvalidArgument(format!("invalid binary: {e}")))?;
                writeln!(out, "Hex: {value:x}")?;
            }
            UtilitiesCommands::Hex2Bin { hex_string } => {
                let value = u128::from_str_radix(hex_string, 16)
                    .map_err(|e| CliError::InvalidArgument(format!("invalid hex: {e}")))?;
                writeln!(out, "Binary: {value:b}")?;
            }
            UtilitiesCommands::Ip2Bin { ip } => {
                let addr = parse_ipv4(ip)?;
                let octets: Vec<String> =
                    addr.octets().iter().map(|o| format!("{o:08b}")).collect();
                writeln!(out, "Binary: {}", octets.concat())?;
                writeln!(out, "Formatted: {}", octets.join("."))?;
            }
            UtilitiesCommands::Bin2Ip { binary } => {
                writeln!(out, "IP: {}", binary_to_ip(binary)?)?;
            }
            UtilitiesCommands::Ip2Long { ip } => {
                let addr = parse_ipv4(ip)?;
                writeln!(out, "Long: {}", u32::from(addr))?;
            }
            UtilitiesCommands::Long2Ip { long_int } => {
                writeln!(out, "IP: {}", Ipv4Addr::from(*long_int))?;
            }
            UtilitiesCommands::CidrToRange { cidr } => {
                format.write(out, &cidr_report(cidr)?)?;
            }
            UtilitiesCommands::IpInCidr { ip, cidr } => {
                let addr = parse_ipv4(ip)?;
                let network: ipnet::Ipv4Net = cidr
                    .parse()
                    .map_err(|e| CliError::InvalidArgument(format!("invalid CIDR: {e}")))?;
                if network.contains(&addr) {
                    format.write(
                        out,
                        &Message::success(format!("{ip} is IN the range {cidr}")),
                    )?;
                } else {
                    format.write(
                        out,
                        &Message::info(format!("✗ {ip} is NOT in the range {cidr}")),
                    )?;
                }
            }
            UtilitiesCommands::Base64Encode { data } => {
                writeln!(out, "Encoded: {}", BASE64.encode(data.as_bytes()))?;
            }
            UtilitiesCommands::Base64Decode { encoded } => {
                let bytes = BASE64.decode(encoded.as_bytes()).map_err(|e| {
                    CliError::InvalidArgument(format!("invalid Base64: {e}"))
                })?;
                let text = String::from_utf8(bytes).map_err(|e| {
                    CliError::InvalidArgument(format!("decoded data is not UTF-8: {e}"))
                })?;
                writeln!(out, "Decoded: {text}")?;
            }
            UtilitiesCommands::UrlEncode { data } => {
                writeln!(out, "Encoded: {}", percent_encode(data))?;
            }
            UtilitiesCommands::UrlDecode { encoded } => {
                writeln!(out, "Decoded: {}", percent_decode(encoded))?;
            }
            UtilitiesCommands::Hash { data, algorithm } => {
                let digest = match algorithm {
                    HashAlgorithmArg::Sha256 => {
                        hex::encode(Sha256::digest(data.as_bytes()))
                    }
                    HashAlgorithmArg::Sha512 => {
                        hex::encode(Sha512::digest(data.as_bytes()))
                    }
                };
                writeln!(out, "{}: {digest}", algorithm.as_str())?;
            }
            UtilitiesCommands::Uuid { count } => {
                for _ in 0..*count {
                    writeln!(out, "{}", uuid::Uuid::new_v4())?;
                }
            }
            UtilitiesCommands::Slugify { text } => {
                writeln!(out, "Slug: {}", slugify(text))?;
            }
            UtilitiesCommands::RandomString { length, charset } => {
                writeln!(out, "{}", random_string(*length, *charset))?;
            }
            UtilitiesCommands::RandomPassword {
                length,
                no_symbols,
                no_numbers,
            } => {
                writeln!(
                    out,
                    "Password: {}",
                    random_password(*length, *no_symbols, *no_numbers)
                )?;
            }
            UtilitiesCommands::Timestamp { format: ts_format } => {
                let now = chrono::Utc::now();
                match ts_format {
                    TimestampFormatArg::Unix => writeln!(out, "{}", now.timestamp())?,
                    TimestampFormatArg::Iso8601 | TimestampFormatArg::Rfc3339 => {
                        writeln!(out, "{}", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;
                    }
                }
            }
            UtilitiesCommands::JsonMinify { json_file } => {
                let value = load_json(json_file)?;
                let minified = serde_json::to_string(&value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(out, "{minified}")?;
            }
            UtilitiesCommands::JsonPretty { json_file, indent } => {
                let value = load_json(json_file)?;
                writeln!(out, "{}", pretty_json(&value, *indent)?)?;
            }
            UtilitiesCommands::JsonValidate { json_file } => {
                let value = load_json(json_file)?;
                let size = serde_json::to_string(&value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?
                    .len();
                format.write(
                    out,
                    &Message::success(format!("Valid JSON with {size} characters")),
                )?;
            }
        }
        Ok(())
    }
}

fn parse_ipv4(ip: &str) -> Result<Ipv4Addr, CliError> {
    ip.parse()
        .map_err(|e| CliError::InvalidArgument(format!("invalid IPv4 address: {e}")))
}

/// Parses 32 binary digits into a dotted-quad address. Dots and spaces
/// in the input are ignored.
fn binary_to_ip(binary: &str) -> Result<Ipv4Addr, CliError> {
    let digits: String = binary.chars().filter(|c| *c != '.' && *c != ' ').collect();
    if digits.len() != 32 {
        return Err(CliError::InvalidArgument(
            "Binary must be 32 bits for IPv4".to_string(),
        ));
    }
    let value = u32::from_str_radix(&digits, 2)
        .map_err(|e| CliError::InvalidArgument(format!("invalid binary: {e}")))?;
    Ok(Ipv4Addr::from(value))
}

fn cidr_report(cidr: &str) -> Result<ResourceRecord, CliError> {
    let network: ipnet::Ipv4Net = cidr
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("invalid CIDR: {e}")))?;

    let total: u64 = 1u64 << (32 - u32::from(network.prefix_len()));
    let network_addr = network.network();
    let broadcast = network.broadcast();
    let (first, last, usable) = if total > 2 {
        (
            Ipv4Addr::from(u32::from(network_addr) + 1),
            Ipv4Addr::from(u32::from(broadcast) - 1),
            total - 2,
        )
    } else {
        (network_addr, broadcast, total)
    };

    Ok(ResourceRecord::new(format!("CIDR: {cidr}"))
        .field("network_address", network_addr.to_string())
        .field("broadcast_address", broadcast.to_string())
        .field("first_usable_ip", first.to_string())
        .field("last_usable_ip", last.to_string())
        .field("total_ips", total.to_string())
        .field("usable_ips", usable.to_string())
        .field("netmask", network.netmask().to_string()))
}

/// Percent-encodes everything except unreserved characters and `/`.
fn percent_encode(data: &str) -> String {
    let mut encoded = String::with_capacity(data.len());
    for byte in data.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'~' | b'/' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    encoded
}

/// Decodes `%XX` escapes. Malformed escapes pass through unchanged.
fn percent_decode(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                decoded.push(u8::try_from(hi * 16 + lo).unwrap_or(b'%'));
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG.replace_all(&lowered, "");
    let joined = SLUG_SEPARATORS.replace_all(&cleaned, "-");
    joined.trim_matches('-').to_string()
}

fn random_string(length: usize, charset: CharsetArg) -> String {
    let chars: &[u8] = match charset {
        CharsetArg::Alphanumeric => {
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
        }
        CharsetArg::Alpha => b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        CharsetArg::Numeric => b"0123456789",
        CharsetArg::Hex => b"0123456789abcdef",
    };
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

fn random_password(length: usize, no_symbols: bool, no_numbers: bool) -> String {
    let mut chars: Vec<u8> =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz".to_vec();
    if !no_numbers {
        chars.extend_from_slice(b"0123456789");
    }
    if !no_symbols {
        chars.extend_from_slice(b"!@#$%^&*");
    }
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

fn load_json(path: &Path) -> Result<serde_json::Value, CliError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidArgument(format!("Invalid JSON: {e}")))
}

fn pretty_json(value: &serde_json::Value, indent: u16) -> Result<String, CliError> {
    use serde::Serialize;

    let indent_bytes = vec![b' '; usize::from(indent)];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
    String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
}
