use std::io::Write;
use std::path::Path;

use schemadrift_core::{Schema, compare, parse_file};
use schemadrift_report::{fix_statements, generate_fix_sql, render_report};

use crate::CliError;
use crate::config::PathSettings;
use crate::output::{append_report, write_bytes_atomic, write_json};

/// Outcome of one comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub local_tables: usize,
    pub remote_tables: usize,
    pub total_issues: usize,
    /// Number of statements in the fix script, when one was written.
    pub fix_statements: Option<usize>,
}

/// Parse both dumps, diff them, append the report and write the fix script.
///
/// Progress lines and the report go to `out`.
pub fn run_comparison<W: Write>(paths: &PathSettings, out: &mut W) -> Result<RunSummary, CliError> {
    writeln!(out, "Analyzing schemas...")?;

    let local = load_dump("local", &paths.local)?;
    let remote = load_dump("remote", &paths.remote)?;

    writeln!(out, "Tables in local: {}", local.table_count())?;
    writeln!(out, "Tables in remote: {}", remote.table_count())?;

    let diff = compare(&local, &remote);
    tracing::info!(
        event = "diff_computed",
        total_issues = diff.total_issues(),
        missing_in_remote = diff.missing_in_supabase.len(),
        missing_in_local = diff.missing_in_local.len(),
        type_differences = diff.type_differences.len(),
        nullable_differences = diff.nullable_differences.len()
    );

    let report = render_report(&diff);
    append_report(&paths.report, &report)?;
    tracing::info!(event = "report_appended", path = %paths.report.display());
    writeln!(out, "{report}")?;

    let mut written = None;
    if diff.has_remote_column_gaps() {
        writeln!(out, "\n\nGenerating SQL to fix remote...")?;
        let sql = generate_fix_sql(&diff, &local);
        write_bytes_atomic(&paths.fix_sql, sql.as_bytes())?;
        let count = fix_statements(&diff, &local).len();
        tracing::info!(
            event = "fix_sql_written",
            path = %paths.fix_sql.display(),
            statements = count
        );
        written = Some(count);
    }

    if let Some(json_path) = &paths.json {
        write_json(json_path, &diff)?;
        tracing::info!(event = "diff_json_written", path = %json_path.display());
    }

    Ok(RunSummary {
        local_tables: local.table_count(),
        remote_tables: remote.table_count(),
        total_issues: diff.total_issues(),
        fix_statements: written,
    })
}

fn load_dump(side: &str, path: &Path) -> Result<Schema, CliError> {
    let dump = parse_file(path)?;
    tracing::info!(
        event = "dump_parsed",
        side,
        path = %path.display(),
        tables = dump.schema.table_count(),
        columns = dump.schema.column_count(),
        rows = dump.data_rows
    );
    if dump.skipped_rows > 0 {
        tracing::debug!(event = "short_rows_skipped", side, skipped = dump.skipped_rows);
    }
    Ok(dump.schema)
}
