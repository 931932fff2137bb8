//! Oracle column metadata reader.

use crate::core::executor::{MetadataExecutor, RowMapper};
use crate::core::row::CatalogRow;
use crate::core::schema::Column;
use crate::error::Result;

use super::SYSTEM_SCHEMAS;

/// Text types whose declared length lives in `CHAR_LENGTH` rather than in the
/// type name itself.
const SIZED_TEXT_TYPES: [&str; 3] = ["NCHAR", "NVARCHAR2", "VARCHAR2"];

fn columns_sql() -> String {
    format!(
        r#"SELECT OWNER,
  TABLE_NAME,
  COLUMN_NAME,
  COLUMN_ID      AS ordinal_position,
  DATA_TYPE,
  CHAR_LENGTH,
  DATA_LENGTH,
  DATA_PRECISION,
  DATA_SCALE,
  NULLABLE,
  DATA_DEFAULT
FROM ALL_TAB_COLUMNS
WHERE
TABLE_NAME NOT LIKE 'BIN$%'
AND (OWNER = :OWNER OR :OWNER IS NULL)
AND OWNER NOT IN {SYSTEM_SCHEMAS}
AND (TABLE_NAME = :TABLENAME OR :TABLENAME IS NULL)
ORDER BY OWNER, TABLE_NAME, COLUMN_ID"#
    )
}

/// Build an executor that reads column metadata from `ALL_TAB_COLUMNS`.
///
/// A `None` filter matches every owner or table.
pub fn columns(
    owner: Option<&str>,
    table_name: Option<&str>,
) -> MetadataExecutor<OracleColumnMapper> {
    MetadataExecutor::new(columns_sql(), OracleColumnMapper)
        .filter("OWNER", owner.map(str::to_string))
        .filter("TABLENAME", table_name.map(str::to_string))
}

/// Maps one `ALL_TAB_COLUMNS` row to a canonical [`Column`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleColumnMapper;

impl RowMapper for OracleColumnMapper {
    type Entity = Column;

    fn map_row(&self, row: &CatalogRow, out: &mut Vec<Column>) -> Result<()> {
        let schema_owner = row.get_str("OWNER")?.to_string();
        let table_name = row.get_str("TABLE_NAME")?.to_string();
        let name = row.get_str("COLUMN_NAME")?.to_string();

        let data_type = row.get_str("DATA_TYPE")?;
        let char_length = row.get_opt_i32("CHAR_LENGTH")?;
        let data_length = row.get_opt_i32("DATA_LENGTH")?;

        // Text types carry their declared size in the display type. NUMBER is
        // left unannotated: DATA_LENGTH is its byte width, not its precision.
        let db_data_type = match char_length {
            Some(len) if SIZED_TEXT_TYPES.contains(&data_type) => format!("{}({})", data_type, len),
            _ => data_type.to_string(),
        };

        let default_value = row
            .get_opt_str("DATA_DEFAULT")
            .map(trim_default)
            .filter(|d| !d.is_empty());

        out.push(Column {
            schema_owner,
            table_name,
            name,
            ordinal: row.get_opt_i32("ordinal_position")?.unwrap_or(0),
            db_data_type,
            length: char_length.filter(|len| *len >= 1).or(data_length),
            precision: row.get_opt_i32("DATA_PRECISION")?,
            scale: row.get_opt_i32("DATA_SCALE")?,
            nullable: row.get_bool("NULLABLE")?,
            default_value,
        });
        Ok(())
    }
}

/// Strip the decoration Oracle stores around default expressions: newlines,
/// padding spaces, quote characters, and equals signs, trimmed repeatedly
/// from both ends.
fn trim_default(raw: &str) -> String {
    raw.trim_matches(|c| matches!(c, '\n' | ' ' | '\'' | '='))
        .to_string()
}
