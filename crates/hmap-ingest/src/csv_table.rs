//! CSV reading and writing for [`CsvTable`].
//!
//! Headers are normalized on the way in: surrounding whitespace and a UTF-8
//! BOM are stripped, and internal runs of whitespace collapse to single
//! spaces. Cell values are trimmed but otherwise untouched.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, warn};

use hmap_model::CsvTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV document from any reader into a [`CsvTable`].
///
/// The first non-empty record is the header row. Short records are padded
/// with empty cells so every row has one cell per header; excess cells on a
/// record are dropped.
///
/// # Errors
///
/// Returns [`IngestError::MissingHeaderRow`] for inputs with no records and
/// [`IngestError::Csv`] for malformed CSV.
pub fn read_csv<R: Read>(reader: R) -> Result<CsvTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let headers = loop {
        let Some(record) = records.next() else {
            return Err(IngestError::MissingHeaderRow);
        };
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_header).collect();
        if row.iter().any(|value| !value.is_empty()) {
            break row;
        }
    };

    let distinct: BTreeSet<&str> = headers.iter().map(String::as_str).collect();
    if distinct.len() < headers.len() {
        warn!("duplicate header names in input; duplicates collapse to a single output column");
    }

    let mut table = CsvTable::new(headers);
    for record in records {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        table.push_row(row);
    }

    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

/// Reads a CSV file from disk.
pub fn read_csv_file(path: &Path) -> Result<CsvTable> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Reads template headers from a CSV file: the first record, one header per
/// field, normalized like data headers.
pub fn read_template_headers(path: &Path) -> Result<Vec<String>> {
    let table = read_csv_file(path)?;
    Ok(table.headers)
}

/// Serializes a [`CsvTable`] to a UTF-8 CSV string.
pub fn write_csv(table: &CsvTable) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| IngestError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff} Contract  Number "), "Contract Number");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn short_rows_are_padded() {
        let input = "a,b,c\n1,2\n";
        let table = read_csv(input.as_bytes()).unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2", ""]]);
    }
}
