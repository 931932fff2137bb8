//! PostgreSQL column metadata reader.

use crate::core::executor::{MetadataExecutor, RowMapper};
use crate::core::row::CatalogRow;
use crate::core::schema::Column;
use crate::error::Result;

/// Text types whose declared length lives in `character_maximum_length`.
/// `text` is unbounded and never carries one.
const SIZED_TEXT_TYPES: [&str; 4] = ["character varying", "character", "varchar", "char"];

// information_schema projects domain types (cardinal_number, yes_or_no); the
// casts keep concrete int4/varchar on the wire.
const COLUMNS_SQL: &str = r#"SELECT table_schema::varchar   AS owner,
  table_name::varchar              AS table_name,
  column_name::varchar             AS column_name,
  ordinal_position::int4           AS ordinal_position,
  data_type::varchar               AS data_type,
  character_maximum_length::int4   AS char_length,
  numeric_precision::int4          AS numeric_precision,
  numeric_scale::int4              AS numeric_scale,
  is_nullable::varchar             AS is_nullable,
  column_default::varchar          AS column_default
FROM information_schema.columns
WHERE table_schema NOT IN ('pg_catalog', 'information_schema')
AND (table_schema = :OWNER OR :OWNER IS NULL)
AND (table_name = :TABLENAME OR :TABLENAME IS NULL)
ORDER BY table_schema, table_name, ordinal_position"#;

/// Build an executor that reads column metadata from
/// `information_schema.columns`.
///
/// A `None` filter matches every schema or table.
pub fn columns(owner: Option<&str>, table_name: Option<&str>) -> MetadataExecutor<PgColumnMapper> {
    MetadataExecutor::new(COLUMNS_SQL, PgColumnMapper)
        .filter("OWNER", owner.map(str::to_string))
        .filter("TABLENAME", table_name.map(str::to_string))
}

/// Maps one `information_schema.columns` row to a canonical [`Column`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PgColumnMapper;

impl RowMapper for PgColumnMapper {
    type Entity = Column;

    fn map_row(&self, row: &CatalogRow, out: &mut Vec<Column>) -> Result<()> {
        let schema_owner = row.get_str("owner")?.to_string();
        let table_name = row.get_str("table_name")?.to_string();
        let name = row.get_str("column_name")?.to_string();

        let data_type = row.get_str("data_type")?;
        let char_length = row.get_opt_i32("char_length")?;

        let db_data_type = match char_length {
            Some(len) if SIZED_TEXT_TYPES.contains(&data_type) => format!("{}({})", data_type, len),
            _ => data_type.to_string(),
        };

        // PostgreSQL stores defaults as expressions, not quoted literals;
        // only surrounding whitespace is decoration.
        let default_value = row
            .get_opt_str("column_default")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        out.push(Column {
            schema_owner,
            table_name,
            name,
            ordinal: row.get_opt_i32("ordinal_position")?.unwrap_or(0),
            db_data_type,
            length: char_length.filter(|len| *len >= 1),
            precision: row.get_opt_i32("numeric_precision")?,
            scale: row.get_opt_i32("numeric_scale")?,
            nullable: row.get_bool("is_nullable")?,
            default_value,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::row::CatalogValue;

    fn title_row() -> CatalogRow {
        CatalogRow::new()
            .with("owner", "public")
            .with("table_name", "posts")
            .with("column_name", "title")
            .with("ordinal_position", 2)
            .with("data_type", "character varying")
            .with("char_length", 255)
            .with("numeric_precision", CatalogValue::Null)
            .with("numeric_scale", CatalogValue::Null)
            .with("is_nullable", "NO")
            .with("column_default", "'untitled'::character varying")
    }

    fn map_one(row: CatalogRow) -> Result<Column> {
        let mut out = Vec::new();
        PgColumnMapper.map_row(&row, &mut out)?;
        Ok(out.remove(0))
    }

    #[test]
    fn test_varchar_row_maps_to_canonical_column() {
        let col = map_one(title_row()).unwrap();
        assert_eq!(col.schema_owner, "public");
        assert_eq!(col.table_name, "posts");
        assert_eq!(col.name, "title");
        assert_eq!(col.ordinal, 2);
        assert_eq!(col.db_data_type, "character varying(255)");
        assert_eq!(col.length, Some(255));
        assert!(!col.nullable);
        assert_eq!(
            col.default_value.as_deref(),
            Some("'untitled'::character varying")
        );
    }

    #[test]
    fn test_yes_no_nullability_decodes() {
        let row = CatalogRow::new()
            .with("owner", "public")
            .with("table_name", "posts")
            .with("column_name", "body")
            .with("data_type", "text")
            .with("is_nullable", "YES");
        let col = map_one(row).unwrap();
        assert!(col.nullable);
    }

    #[test]
    fn test_unbounded_text_is_not_annotated() {
        let row = CatalogRow::new()
            .with("owner", "public")
            .with("table_name", "posts")
            .with("column_name", "body")
            .with("data_type", "text")
            .with("char_length", CatalogValue::Null)
            .with("is_nullable", "YES");
        let col = map_one(row).unwrap();
        assert_eq!(col.db_data_type, "text");
        assert_eq!(col.length, None);
    }

    #[test]
    fn test_numeric_keeps_precision_and_scale_only() {
        let row = CatalogRow::new()
            .with("owner", "public")
            .with("table_name", "orders")
            .with("column_name", "total")
            .with("ordinal_position", 4)
            .with("data_type", "numeric")
            .with("char_length", CatalogValue::Null)
            .with("numeric_precision", 12)
            .with("numeric_scale", 2)
            .with("is_nullable", "NO");
        let col = map_one(row).unwrap();
        assert_eq!(col.db_data_type, "numeric");
        assert_eq!(col.precision, Some(12));
        assert_eq!(col.scale, Some(2));
        assert_eq!(col.length, None);
    }

    #[test]
    fn test_query_template_shape() {
        assert!(COLUMNS_SQL.contains("FROM information_schema.columns"));
        assert!(COLUMNS_SQL.contains("NOT IN ('pg_catalog', 'information_schema')"));
        assert!(COLUMNS_SQL.contains("(table_schema = :OWNER OR :OWNER IS NULL)"));
        assert!(COLUMNS_SQL.contains("ORDER BY table_schema, table_name, ordinal_position"));
    }
}
