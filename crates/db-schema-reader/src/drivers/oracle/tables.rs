//! Oracle table metadata reader.

use crate::core::executor::{MetadataExecutor, RowMapper};
use crate::core::row::CatalogRow;
use crate::core::schema::Table;
use crate::error::Result;

use super::SYSTEM_SCHEMAS;

fn tables_sql() -> String {
    format!(
        r#"SELECT OWNER,
  TABLE_NAME
FROM ALL_TABLES
WHERE
TABLE_NAME NOT LIKE 'BIN$%'
AND (OWNER = :OWNER OR :OWNER IS NULL)
AND OWNER NOT IN {SYSTEM_SCHEMAS}
AND (TABLE_NAME = :TABLENAME OR :TABLENAME IS NULL)
ORDER BY OWNER, TABLE_NAME"#
    )
}

/// Build an executor that reads table metadata from `ALL_TABLES`.
///
/// A `None` filter matches every owner or table.
pub fn tables(owner: Option<&str>, table_name: Option<&str>) -> MetadataExecutor<OracleTableMapper> {
    MetadataExecutor::new(tables_sql(), OracleTableMapper)
        .filter("OWNER", owner.map(str::to_string))
        .filter("TABLENAME", table_name.map(str::to_string))
}

/// Maps one `ALL_TABLES` row to a canonical [`Table`] with an empty column
/// list; columns are attached by a separate columns pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleTableMapper;

impl RowMapper for OracleTableMapper {
    type Entity = Table;

    fn map_row(&self, row: &CatalogRow, out: &mut Vec<Table>) -> Result<()> {
        out.push(Table {
            schema_owner: row.get_str("OWNER")?.to_string(),
            name: row.get_str("TABLE_NAME")?.to_string(),
            columns: Vec::new(),
        });
        Ok(())
    }
}
