use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::{ColumnInfo, Schema};

/// Marker that ends the header region of a dump.
pub const HEADER_SEPARATOR: &str = "---";

/// Minimum number of `|`-separated fields in a data row.
pub const MIN_FIELDS: usize = 7;

/// Result of parsing one dump, with row accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDump {
    pub schema: Schema,
    /// Rows that produced a column entry, duplicates included.
    pub data_rows: usize,
    /// Rows dropped for having fewer than [`MIN_FIELDS`] fields.
    pub skipped_rows: usize,
}

/// Parse the text of a column-listing dump into a [`Schema`].
pub fn parse(source: &str) -> Result<Schema> {
    parse_dump(source).map(|dump| dump.schema)
}

/// Parse the text of a dump and report how many rows were kept or skipped.
pub fn parse_dump(source: &str) -> Result<ParsedDump> {
    parse_source(source, "input")
}

/// Read and parse a dump file.
pub fn parse_file(path: &Path) -> Result<ParsedDump> {
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&source, &path.display().to_string())
}

fn parse_source(source: &str, origin: &str) -> Result<ParsedDump> {
    let mut lines = source.lines();
    if !lines.by_ref().any(|line| line.contains(HEADER_SEPARATOR)) {
        return Err(Error::MissingSeparator {
            origin: origin.to_string(),
        });
    }

    let mut dump = ParsedDump {
        schema: Schema::new(),
        data_rows: 0,
        skipped_rows: 0,
    };

    for line in lines {
        let line = line.trim();
        // `(42 rows)` style footers
        if line.is_empty() || line.starts_with('(') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < MIN_FIELDS {
            dump.skipped_rows += 1;
            continue;
        }

        let info = ColumnInfo {
            data_type: fields[2].to_string(),
            max_length: non_empty(fields[3]),
            default: non_empty(fields[4]),
            nullable: fields[5].to_string(),
            position: fields[6].to_string(),
        };
        dump.schema.insert_column(fields[0], fields[1], info);
        dump.data_rows += 1;
    }

    Ok(dump)
}

fn non_empty(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}
