use serde::Serialize;

use crate::types::OutputFormat;

pub const CSV_HEADER: &str = "identifier,hostname\n";

/// One accepted hostname and the identifier it was found under
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HostnameRecord<'a> {
    pub identifier: &'a str,
    pub hostname: &'a str,
}

/// Format a record for output, newline included
pub fn format_record(record: &HostnameRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format!("{}\n", record.hostname),
        OutputFormat::Jsonl => {
            let mut line = serde_json::to_string(record).unwrap_or_default();
            line.push('\n');
            line
        }
        OutputFormat::Csv => format!(
            "{},{}\n",
            csv_field(record.identifier),
            csv_field(record.hostname)
        ),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
