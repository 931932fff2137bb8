//! Canonical schema metadata types.
//!
//! These types provide a database-agnostic representation of catalog metadata.
//! Each entity is created exactly once per catalog row during an execution and
//! is never mutated after being appended to the result collection.

use serde::{Deserialize, Serialize};

/// Column metadata, normalized across engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Schema/namespace that owns the table.
    pub schema_owner: String,

    /// Owning table name.
    pub table_name: String,

    /// Column name.
    pub name: String,

    /// Ordinal position (1-based); 0 when the catalog reports no value.
    pub ordinal: i32,

    /// Engine-native type name, annotated with the declared length for
    /// variable/fixed-length text types (e.g. `VARCHAR2(50)`).
    pub db_data_type: String,

    /// Declared character length for text types, falling back to byte length
    /// when the character length is absent or non-positive.
    pub length: Option<i32>,

    /// Numeric precision, when applicable.
    pub precision: Option<i32>,

    /// Numeric scale, when applicable.
    pub scale: Option<i32>,

    /// Whether the column allows NULL.
    pub nullable: bool,

    /// Stored default expression, trimmed of the catalog's decoration
    /// characters; absent when the catalog holds no default.
    pub default_value: Option<String>,
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema/namespace that owns the table.
    pub schema_owner: String,

    /// Table name.
    pub name: String,

    /// Column definitions, in ordinal order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Get the fully qualified table name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema_owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_full_name() {
        let table = Table {
            schema_owner: "HR".to_string(),
            name: "EMP".to_string(),
            columns: vec![],
        };
        assert_eq!(table.full_name(), "HR.EMP");
    }

    #[test]
    fn test_column_round_trips_through_serde() {
        let col = Column {
            schema_owner: "HR".to_string(),
            table_name: "EMP".to_string(),
            name: "ENAME".to_string(),
            ordinal: 2,
            db_data_type: "VARCHAR2(10)".to_string(),
            length: Some(10),
            precision: None,
            scale: None,
            nullable: true,
            default_value: None,
        };
        let json = serde_json::to_string(&col).unwrap();
        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(back, col);
    }
}
