//! Generic, parameterized execution of one catalog query.
//!
//! One executor is configured per entity type per engine with a (query
//! template, row mapper) pair; the execute-bind-map loop itself is shared.

use std::time::Duration;

use tracing::debug;

use crate::core::adapter::ConnectionAdapter;
use crate::core::binder::bind_parameters;
use crate::core::command::{BoundParam, CatalogCommand};
use crate::core::row::CatalogRow;
use crate::error::Result;

/// Convert one raw catalog row into canonical entities.
///
/// Implementations read typed fields out of the row, apply engine-specific
/// normalization, and append to the executor's result collection. Every
/// successfully mapped row yields exactly one entity; mapping never merges or
/// drops rows.
pub trait RowMapper: Send + Sync {
    /// Canonical entity type this mapper produces.
    type Entity;

    /// Map one row, appending the result to `out`.
    ///
    /// A required field that is absent or of the wrong shape is a fatal
    /// failure for the whole execution.
    fn map_row(&self, row: &CatalogRow, out: &mut Vec<Self::Entity>) -> Result<()>;
}

/// Generic run of one catalog query against one [`ConnectionAdapter`],
/// producing a list of canonical entities.
///
/// The executor owns its query template, filter values, and result collection
/// for the duration of one call; no state is shared across executions.
#[derive(Debug, Clone)]
pub struct MetadataExecutor<M: RowMapper> {
    sql: String,
    filters: Vec<BoundParam>,
    timeout: Option<Duration>,
    mapper: M,
}

impl<M: RowMapper> MetadataExecutor<M> {
    /// Create an executor from a query template and a row mapper.
    pub fn new(sql: impl Into<String>, mapper: M) -> Self {
        Self {
            sql: sql.into(),
            filters: Vec::new(),
            timeout: None,
            mapper,
        }
    }

    /// Declare a named filter value. `None` means "match every value in the
    /// catalog for this dimension".
    #[must_use]
    pub fn filter(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.filters.push(BoundParam::new(name, value));
        self
    }

    /// Set a command timeout, passed straight through to the driver.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Bind parameters, run the query, and map every returned row, in the
    /// order the catalog returned them.
    ///
    /// A query failure propagates unchanged; a row-mapping failure aborts the
    /// whole execution and no partial collection is returned. The adapter
    /// materializes the row set before mapping runs, so the driver cursor is
    /// released even when mapping fails.
    pub async fn execute(&self, adapter: &mut dyn ConnectionAdapter) -> Result<Vec<M::Entity>> {
        let mut command = CatalogCommand::new(self.sql.clone());
        command.timeout = self.timeout;
        bind_parameters(&mut command, adapter.bind_style(), &self.filters);

        let rows = adapter.query(&command).await?;

        let mut entities = Vec::with_capacity(rows.len());
        for row in &rows {
            self.mapper.map_row(row, &mut entities)?;
        }

        debug!(
            "Mapped {} catalog rows into {} entities",
            rows.len(),
            entities.len()
        );
        Ok(entities)
    }
}
