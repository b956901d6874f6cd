use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Columns of one table keyed by column name, in dump order.
pub type TableColumns = IndexMap<String, ColumnInfo>;

/// Declared attributes of a single column, exactly as found in the dump.
///
/// Every value is the trimmed dump field; nothing is parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    #[serde(rename = "type")]
    pub data_type: String,
    pub max_length: Option<String>,
    pub default: Option<String>,
    /// Raw `is_nullable` flag, normally `YES` or `NO`.
    pub nullable: String,
    /// Raw ordinal position.
    pub position: String,
}

impl ColumnInfo {
    /// Whether the dump declares the column `NOT NULL`.
    ///
    /// Only the exact flag `NO` counts; anything else is treated as nullable.
    pub fn is_not_null(&self) -> bool {
        self.nullable == "NO"
    }
}

/// Parsed column listing of one database: table → column → [`ColumnInfo`].
///
/// Tables and columns keep the order in which the dump first mentioned them.
/// Equality ignores that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    tables: IndexMap<String, TableColumns>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column. A replaced column keeps its original slot.
    pub fn insert_column(
        &mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        info: ColumnInfo,
    ) {
        self.tables
            .entry(table.into())
            .or_default()
            .insert(column.into(), info);
    }

    pub fn table(&self, name: &str) -> Option<&TableColumns> {
        self.tables.get(name)
    }

    pub fn column(&self, table: &str, column: &str) -> Option<&ColumnInfo> {
        self.tables.get(table).and_then(|columns| columns.get(column))
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&String, &TableColumns)> {
        self.tables.iter()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn column_count(&self) -> usize {
        self.tables.values().map(|columns| columns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(data_type: &str, nullable: &str, position: &str) -> ColumnInfo {
        ColumnInfo {
            data_type: data_type.to_string(),
            max_length: None,
            default: None,
            nullable: nullable.to_string(),
            position: position.to_string(),
        }
    }

    #[test]
    fn replacing_a_column_keeps_its_slot() {
        let mut schema = Schema::new();
        schema.insert_column("users", "id", info("integer", "NO", "1"));
        schema.insert_column("users", "email", info("text", "YES", "2"));
        schema.insert_column("users", "id", info("bigint", "NO", "1"));

        let columns = schema.table("users").expect("users table");
        let names: Vec<&str> = columns.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["id", "email"]);
        assert_eq!(schema.column("users", "id").unwrap().data_type, "bigint");
        assert_eq!(schema.column_count(), 2);
    }

    #[test]
    fn only_exact_no_is_not_null() {
        assert!(info("integer", "NO", "1").is_not_null());
        assert!(!info("integer", "YES", "1").is_not_null());
        assert!(!info("integer", "no", "1").is_not_null());
        assert!(!info("integer", "", "1").is_not_null());
    }

    #[test]
    fn serializes_type_under_its_dump_name() {
        let mut schema = Schema::new();
        schema.insert_column("users", "id", info("integer", "NO", "1"));

        let json = serde_json::to_value(&schema).expect("serialize schema");
        assert_eq!(json["users"]["id"]["type"], "integer");
        assert_eq!(json["users"]["id"]["max_length"], serde_json::Value::Null);
    }
}
