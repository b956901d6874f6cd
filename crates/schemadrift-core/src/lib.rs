//! Core contracts and helpers for schemadrift.
//!
//! This crate defines the column-listing schema model, the dump parser, and
//! the comparator that turns two schemas into a categorized [`Diff`].

pub mod compare;
pub mod diff;
pub mod error;
pub mod parser;
pub mod schema;

pub use compare::compare;
pub use diff::{ColumnDifferences, Diff, ENTIRE_TABLE, MissingEntry, ValuePair};
pub use error::{Error, Result};
pub use parser::{HEADER_SEPARATOR, MIN_FIELDS, ParsedDump, parse, parse_dump, parse_file};
pub use schema::{ColumnInfo, Schema, TableColumns};
