//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats. Mock resources
//! are rendered through [`ResourceRecord`] (one record) and [`RecordTable`]
//! (a listing) so every subcommand prints the same shape.

use std::io::Write;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Simple message output.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
    /// Whether this is a success message.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,
}

impl Message {
    /// Create a success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create an informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl TableDisplay for Message {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.success {
            writeln!(writer, "✓ {}", self.message)?;
        } else {
            writeln!(writer, "{}", self.message)?;
        }
        Ok(())
    }
}

/// A single mock resource rendered as labeled fields.
///
/// Fields keep insertion order in both table and JSON output.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    title: String,
    fields: Vec<(String, Value)>,
}

impl ResourceRecord {
    /// Start a record with a table heading.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Append a string field.
    #[must_use]
    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((label.into(), Value::String(value.into())));
        self
    }

    /// Append a field with an arbitrary JSON value.
    #[must_use]
    pub fn field_value(mut self, label: impl Into<String>, value: Value) -> Self {
        self.fields.push((label.into(), value));
        self
    }

    /// Append a field only when the value is present.
    #[must_use]
    pub fn optional_field(self, label: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.field(label, v),
            None => self,
        }
    }

    /// Field value, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.fields.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }
}

impl Serialize for ResourceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Render a JSON value on a single table line.
fn value_line(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

impl TableDisplay for ResourceRecord {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "{}", self.title)?;
        writeln!(writer, "{}", "═".repeat(self.title.chars().count().max(34)))?;
        let width = self
            .fields
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.fields {
            writeln!(writer, "{label:<width$}  {}", value_line(value))?;
        }
        Ok(())
    }
}

/// A listing of mock resources with aligned columns.
#[derive(Debug, Clone)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    footer_noun: String,
    empty_message: String,
}

impl RecordTable {
    /// Start a table with column headers and the noun used in the footer
    /// ("Total: 3 user(s)").
    #[must_use]
    pub fn new<S: Into<String>>(columns: Vec<S>, footer_noun: impl Into<String>) -> Self {
        let footer_noun = footer_noun.into();
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            empty_message: format!("No {footer_noun}s found"),
            footer_noun,
        }
    }

    /// Replace the message printed when the table is empty.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Append a row; short rows are padded with "-".
    pub fn row<S: Into<String>>(&mut self, cells: Vec<S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.columns.len(), "-".to_string());
        self.rows.push(row);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Serialize for RecordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            let entry: serde_json::Map<String, Value> = self
                .columns
                .iter()
                .zip(row)
                .map(|(c, v)| (c.to_lowercase().replace(' ', "_"), Value::String(v.clone())))
                .collect();
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl TableDisplay for RecordTable {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.rows.is_empty() {
            writeln!(writer, "{}", self.empty_message)?;
            return Ok(());
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(col.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{col:<w$}"))
            .collect();
        writeln!(writer, "{}", header.join("  ").trim_end())?;
        writeln!(writer, "{}", "─".repeat(widths.iter().sum::<usize>() + 2 * (widths.len().saturating_sub(1))))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect();
            writeln!(writer, "{}", cells.join("  ").trim_end())?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} {}(s)", self.rows.len(), self.footer_noun)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_default_is_table() {
        let fmt = OutputFormat::default();
        assert_eq!(fmt.format(), Format::Table);
        assert!(!fmt.is_json());
    }

    #[test]
    fn message_success_table() {
        let msg = Message::success("Mock user created");
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&msg).expect("should format");
        assert!(output.contains("✓ Mock user created"));
    }

    #[test]
    fn message_info_has_no_check_mark() {
        let msg = Message::info("Nothing to do");
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&msg).expect("should format");
        assert!(output.contains("Nothing to do"));
        assert!(!output.contains("✓"));
    }

    #[test]
    fn resource_record_table_aligns_labels() {
        let record = ResourceRecord::new("Mock User: alice")
            .field("Username", "alice")
            .field("Role", "admin")
            .optional_field("Email", Some("alice@example.com"))
            .optional_field("Organization", None::<String>);

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&record).expect("should format");

        assert!(output.contains("Mock User: alice"));
        assert!(output.contains("Username"));
        assert!(output.contains("alice@example.com"));
        assert!(!output.contains("Organization"));
    }

    #[test]
    fn resource_record_json_preserves_field_order() {
        let record = ResourceRecord::new("Mock User: alice")
            .field("username", "alice")
            .field_value("quota_mb", serde_json::json!(1000));

        let fmt = OutputFormat::new(Format::Json);
        let output = fmt.to_string(&record).expect("should format");
        let parsed: Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(parsed["username"], "alice");
        assert_eq!(parsed["quota_mb"], 1000);
        // Title is table-only decoration.
        assert!(parsed.get("title").is_none());
    }

    #[test]
    fn record_table_empty_message() {
        let table = RecordTable::new(vec!["NAME", "PLAN"], "organization");
        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&table).expect("should format");
        assert!(output.contains("No organizations found"));
    }

    #[test]
    fn record_table_renders_rows_and_footer() {
        let mut table = RecordTable::new(vec!["NAME", "PLAN", "MEMBERS"], "organization");
        table.row(vec!["acme-corp", "pro", "12"]);
        table.row(vec!["initech", "free", "3"]);

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&table).expect("should format");

        assert!(output.contains("NAME"));
        assert!(output.contains("acme-corp"));
        assert!(output.contains("initech"));
        assert!(output.contains("Total: 2 organization(s)"));
    }

    #[test]
    fn record_table_pads_short_rows() {
        let mut table = RecordTable::new(vec!["NAME", "OWNER"], "domain");
        table.row(vec!["example.com"]);

        let fmt = OutputFormat::new(Format::Table);
        let output = fmt.to_string(&table).expect("should format");
        assert!(output.contains("example.com"));
        assert!(output.contains('-'));
    }

    #[test]
    fn record_table_json_is_array_of_objects() {
        let mut table = RecordTable::new(vec!["NAME", "PLAN"], "organization");
        table.row(vec!["acme-corp", "pro"]);

        let fmt = OutputFormat::new(Format::Json);
        let output = fmt.to_string(&table).expect("should format");
        let parsed: Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(parsed[0]["name"], "acme-corp");
        assert_eq!(parsed[0]["plan"], "pro");
    }
}
