//! Oracle catalog readers.
//!
//! Queries the `ALL_TAB_COLUMNS` and `ALL_TABLES` data-dictionary views,
//! excluding the engine's internal schemas and recycle-bin (`BIN$...`)
//! artifacts.
//!
//! Oracle drivers match named placeholders by position unless the command is
//! switched into bind-by-name mode, so adapters for this engine must report
//! [`BindStyle::PositionalByDefault`](crate::BindStyle::PositionalByDefault);
//! the binder then sets the explicit flag on every command.

mod columns;
mod tables;

pub use columns::{columns, OracleColumnMapper};
pub use tables::{tables, OracleTableMapper};

use tracing::debug;

use crate::core::adapter::ConnectionAdapter;
use crate::core::schema::Table;
use crate::error::Result;

/// Oracle schemas that hold the engine's own objects, excluded from every
/// catalog query.
pub(crate) const SYSTEM_SCHEMAS: &str = "('SYS', 'SYSMAN', 'CTXSYS', 'MDSYS', 'OLAPSYS', 'ORDSYS', 'OUTLN', 'WKSYS', 'WMSYS', 'XDB', 'ORDPLUGINS', 'SYSTEM')";

/// Read tables and their columns in one pass, grouping columns under their
/// owning tables in catalog order.
///
/// `owner = None` reads every non-system schema.
pub async fn read_schema(
    adapter: &mut dyn ConnectionAdapter,
    owner: Option<&str>,
) -> Result<Vec<Table>> {
    let mut tables = tables(owner, None).execute(adapter).await?;
    let columns = columns(owner, None).execute(adapter).await?;

    // Both result sets are ordered by owner then table, so columns for one
    // table arrive contiguously. Columns of views and other non-table objects
    // have no owning entry and are skipped.
    for col in columns {
        if let Some(table) = tables
            .iter_mut()
            .find(|t| t.schema_owner == col.schema_owner && t.name == col.table_name)
        {
            table.columns.push(col);
        }
    }

    debug!("Read {} tables from Oracle catalog", tables.len());
    Ok(tables)
}
