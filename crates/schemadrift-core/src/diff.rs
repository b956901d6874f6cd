use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of [`MissingEntry::WholeTable`].
pub const ENTIRE_TABLE: &str = "entire table";

/// Gap recorded for one table in a "missing" category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingEntry {
    /// The table does not exist on the other side at all.
    WholeTable,
    /// The table exists on both sides but these columns exist only on one.
    Columns(Vec<String>),
}

impl MissingEntry {
    /// Missing column names; empty for a whole-table gap.
    pub fn columns(&self) -> &[String] {
        match self {
            MissingEntry::WholeTable => &[],
            MissingEntry::Columns(columns) => columns,
        }
    }
}

impl Serialize for MissingEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MissingEntry::WholeTable => serializer.serialize_str(ENTIRE_TABLE),
            MissingEntry::Columns(columns) => columns.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MissingEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Marker(String),
            Columns(Vec<String>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Marker(marker) if marker == ENTIRE_TABLE => Ok(MissingEntry::WholeTable),
            Repr::Marker(other) => Err(serde::de::Error::custom(format!(
                "expected \"{ENTIRE_TABLE}\" or a list of columns, found \"{other}\""
            ))),
            Repr::Columns(columns) => Ok(MissingEntry::Columns(columns)),
        }
    }
}

/// A local/remote pair of differing attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePair {
    pub local: String,
    pub remote: String,
}

/// table → column → differing values.
pub type ColumnDifferences = IndexMap<String, IndexMap<String, ValuePair>>;

/// Categorized differences between a local and a remote schema.
///
/// Each map keeps the order in which the comparator discovered its tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// Tables or columns that exist locally but not on the remote side.
    pub missing_in_supabase: IndexMap<String, MissingEntry>,
    /// Tables or columns that exist on the remote side but not locally.
    pub missing_in_local: IndexMap<String, MissingEntry>,
    pub type_differences: ColumnDifferences,
    /// Never populated by [`crate::compare`]; defaults are not compared.
    pub default_differences: ColumnDifferences,
    pub nullable_differences: ColumnDifferences,
}

impl Diff {
    /// Number of affected tables summed over all five categories.
    ///
    /// A table with several missing or differing columns counts once per
    /// category.
    pub fn total_issues(&self) -> usize {
        self.missing_in_supabase.len()
            + self.missing_in_local.len()
            + self.type_differences.len()
            + self.default_differences.len()
            + self.nullable_differences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_issues() == 0
    }

    /// Whether any table exists remotely but lacks some local columns.
    pub fn has_remote_column_gaps(&self) -> bool {
        self.missing_in_supabase
            .values()
            .any(|entry| !entry.columns().is_empty())
    }
}

pub(crate) fn push_missing_column(
    category: &mut IndexMap<String, MissingEntry>,
    table: &str,
    column: &str,
) {
    let entry = category
        .entry(table.to_string())
        .or_insert_with(|| MissingEntry::Columns(Vec::new()));
    // A whole-table gap already covers every column.
    if let MissingEntry::Columns(columns) = entry {
        columns.push(column.to_string());
    }
}

pub(crate) fn record_difference(
    category: &mut ColumnDifferences,
    table: &str,
    column: &str,
    local: &str,
    remote: &str,
) {
    category.entry(table.to_string()).or_default().insert(
        column.to_string(),
        ValuePair {
            local: local.to_string(),
            remote: remote.to_string(),
        },
    );
}
