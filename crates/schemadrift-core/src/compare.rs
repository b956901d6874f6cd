use crate::diff::{Diff, MissingEntry, push_missing_column, record_difference};
use crate::schema::Schema;

/// Compare a local schema against a remote one.
///
/// Local tables are visited first, recording local-only tables and columns
/// plus type and nullability mismatches on shared columns. A second pass over
/// the remote schema records remote-only tables and columns. Column defaults
/// are not compared.
pub fn compare(local: &Schema, remote: &Schema) -> Diff {
    let mut diff = Diff::default();

    for (table, local_columns) in local.tables() {
        let Some(remote_columns) = remote.table(table) else {
            diff.missing_in_supabase
                .insert(table.clone(), MissingEntry::WholeTable);
            continue;
        };

        for (column, local_info) in local_columns {
            let Some(remote_info) = remote_columns.get(column) else {
                push_missing_column(&mut diff.missing_in_supabase, table, column);
                continue;
            };

            if local_info.data_type != remote_info.data_type {
                record_difference(
                    &mut diff.type_differences,
                    table,
                    column,
                    &local_info.data_type,
                    &remote_info.data_type,
                );
            }

            if local_info.nullable != remote_info.nullable {
                record_difference(
                    &mut diff.nullable_differences,
                    table,
                    column,
                    &local_info.nullable,
                    &remote_info.nullable,
                );
            }
        }
    }

    for (table, remote_columns) in remote.tables() {
        let Some(local_columns) = local.table(table) else {
            diff.missing_in_local
                .insert(table.clone(), MissingEntry::WholeTable);
            continue;
        };

        for column in remote_columns.keys() {
            if !local_columns.contains_key(column) {
                push_missing_column(&mut diff.missing_in_local, table, column);
            }
        }
    }

    diff
}
