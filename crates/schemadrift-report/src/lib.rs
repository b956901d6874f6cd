//! Rendering helpers for schema diffs: a sectioned text report and the
//! corrective SQL for columns missing on the remote side.

pub mod fix;
pub mod report;

pub use fix::{FIX_SQL_HEADER, fix_statements, generate_fix_sql};
pub use report::{SUCCESS_MARKER, render_report};
