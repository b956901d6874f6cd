use schemadrift_core::{ColumnInfo, Diff, MissingEntry, Schema};

/// Comment line that opens every generated fix script.
pub const FIX_SQL_HEADER: &str = "-- SQL to add columns missing in remote";

/// Build the fix script for columns that exist locally but not remotely.
///
/// Tables missing as a whole get no statement. Attribute values are copied
/// from the local dump verbatim, without quoting or validation.
pub fn generate_fix_sql(diff: &Diff, local: &Schema) -> String {
    let mut sql = format!("{FIX_SQL_HEADER}\n\n");
    for statement in fix_statements(diff, local) {
        sql.push_str(&statement);
        sql.push('\n');
    }
    sql
}

/// One `ALTER TABLE ... ADD COLUMN` statement per missing remote column.
pub fn fix_statements(diff: &Diff, local: &Schema) -> Vec<String> {
    let mut statements = Vec::new();
    for (table, entry) in &diff.missing_in_supabase {
        let MissingEntry::Columns(columns) = entry else {
            continue;
        };
        for column in columns {
            if let Some(info) = local.column(table, column) {
                statements.push(add_column_sql(table, column, info));
            }
        }
    }
    statements
}

fn add_column_sql(table: &str, column: &str, info: &ColumnInfo) -> String {
    let length = info
        .max_length
        .as_ref()
        .map(|length| format!("({length})"))
        .unwrap_or_default();
    let default = info
        .default
        .as_ref()
        .map(|default| format!(" DEFAULT {default}"))
        .unwrap_or_default();
    let not_null = if info.is_not_null() { " NOT NULL" } else { "" };

    format!(
        "ALTER TABLE public.\"{table}\" ADD COLUMN IF NOT EXISTS \"{column}\" {}{length}{default}{not_null};",
        info.data_type
    )
}
