use indexmap::IndexMap;
use schemadrift_core::{ColumnDifferences, Diff, MissingEntry};

/// Line emitted instead of an issue total when the schemas match.
pub const SUCCESS_MARKER: &str = "**NO DIFFERENCES - schemas are identical**";

/// Render a deterministic text report for a diff.
///
/// Sections follow the category order of [`Diff`] and appear only when the
/// category has findings. Within a section, tables and columns keep the
/// order in which they were discovered.
pub fn render_report(diff: &Diff) -> String {
    let mut lines = Vec::new();
    lines.push("\n## DIFFERENCES FOUND\n".to_string());

    push_missing_section(
        &mut lines,
        "Tables/columns missing in remote",
        "ENTIRE TABLE MISSING",
        &diff.missing_in_supabase,
    );
    push_missing_section(
        &mut lines,
        "Tables/columns in remote but NOT in local",
        "TABLE ONLY IN REMOTE",
        &diff.missing_in_local,
    );
    push_difference_section(&mut lines, "Data type differences", &diff.type_differences);
    push_difference_section(
        &mut lines,
        "Default value differences",
        &diff.default_differences,
    );
    push_difference_section(
        &mut lines,
        "NULL/NOT NULL differences",
        &diff.nullable_differences,
    );

    let total = diff.total_issues();
    if total == 0 {
        lines.push(format!("\n{SUCCESS_MARKER}\n"));
    } else {
        lines.push(format!("\n**TOTAL ISSUES: {total}**\n"));
    }

    lines.join("\n")
}

fn push_missing_section(
    lines: &mut Vec<String>,
    heading: &str,
    whole_table_note: &str,
    entries: &IndexMap<String, MissingEntry>,
) {
    if entries.is_empty() {
        return;
    }

    lines.push(format!("\n### {heading}:\n"));
    for (table, entry) in entries {
        match entry {
            MissingEntry::WholeTable => lines.push(format!("- **{table}**: {whole_table_note}")),
            MissingEntry::Columns(columns) => {
                lines.push(format!("- **{table}**:"));
                lines.extend(columns.iter().map(|column| format!("  - {column}")));
            }
        }
    }
}

fn push_difference_section(lines: &mut Vec<String>, heading: &str, tables: &ColumnDifferences) {
    if tables.is_empty() {
        return;
    }

    lines.push(format!("\n### {heading}:\n"));
    for (table, columns) in tables {
        lines.push(format!("- **{table}**:"));
        for (column, values) in columns {
            lines.push(format!(
                "  - {column}: local={} vs remote={}",
                values.local, values.remote
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemadrift_core::ValuePair;

    fn pair(local: &str, remote: &str) -> ValuePair {
        ValuePair {
            local: local.to_string(),
            remote: remote.to_string(),
        }
    }

    #[test]
    fn empty_diff_reports_success() {
        let report = render_report(&Diff::default());
        assert!(report.contains(SUCCESS_MARKER));
        assert!(!report.contains("TOTAL ISSUES"));
        assert!(!report.contains("###"));
    }

    #[test]
    fn renders_missing_entries() {
        let mut diff = Diff::default();
        diff.missing_in_supabase.insert(
            "users".to_string(),
            MissingEntry::Columns(vec!["legacy_flag".to_string(), "nickname".to_string()]),
        );
        diff.missing_in_supabase
            .insert("audit_log".to_string(), MissingEntry::WholeTable);
        diff.missing_in_local
            .insert("orders".to_string(), MissingEntry::WholeTable);

        let report = render_report(&diff);
        let expected = [
            "\n## DIFFERENCES FOUND\n",
            "\n### Tables/columns missing in remote:\n",
            "- **users**:",
            "  - legacy_flag",
            "  - nickname",
            "- **audit_log**: ENTIRE TABLE MISSING",
            "\n### Tables/columns in remote but NOT in local:\n",
            "- **orders**: TABLE ONLY IN REMOTE",
            "\n**TOTAL ISSUES: 3**\n",
        ]
        .join("\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn renders_value_differences() {
        let mut diff = Diff::default();
        diff.type_differences
            .entry("status_table".to_string())
            .or_default()
            .insert("status".to_string(), pair("varchar", "character varying"));
        diff.nullable_differences
            .entry("users".to_string())
            .or_default()
            .insert("email".to_string(), pair("YES", "NO"));

        let report = render_report(&diff);
        assert!(report.contains("\n### Data type differences:\n"));
        assert!(report.contains("- **status_table**:\n  - status: local=varchar vs remote=character varying"));
        assert!(report.contains("\n### NULL/NOT NULL differences:\n"));
        assert!(report.contains("  - email: local=YES vs remote=NO"));
        assert!(!report.contains("Default value differences"));
        assert!(report.ends_with("\n**TOTAL ISSUES: 2**\n"));
    }

    #[test]
    fn sections_follow_category_order() {
        let mut diff = Diff::default();
        diff.nullable_differences
            .entry("a".to_string())
            .or_default()
            .insert("x".to_string(), pair("YES", "NO"));
        diff.missing_in_local
            .insert("b".to_string(), MissingEntry::WholeTable);

        let report = render_report(&diff);
        let local_idx = report.find("NOT in local").unwrap();
        let nullable_idx = report.find("NULL/NOT NULL").unwrap();
        assert!(local_idx < nullable_idx);
    }
}
