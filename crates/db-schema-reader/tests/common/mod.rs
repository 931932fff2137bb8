//! In-memory connection adapter for driving executors in tests.
#![allow(dead_code)] // not every test binary uses every helper

use async_trait::async_trait;
use db_schema_reader::{
    BindStyle, CatalogCommand, CatalogRow, ConnectionAdapter, Result, SchemaError,
};

/// Fake adapter over a canned catalog.
///
/// Routes each query to a row set by substring match on the SQL, applies the
/// owner/table filter predicate the way the real catalog would, and records
/// every executed command for assertions.
pub struct FakeAdapter {
    bind_style: BindStyle,
    routes: Vec<(String, Vec<CatalogRow>)>,
    fail_with: Option<String>,
    pub commands: Vec<CatalogCommand>,
}

impl FakeAdapter {
    /// Adapter answering every query from one row set.
    pub fn new(bind_style: BindStyle, rows: Vec<CatalogRow>) -> Self {
        Self {
            bind_style,
            routes: vec![(String::new(), rows)],
            fail_with: None,
            commands: Vec::new(),
        }
    }

    /// Adapter answering each query from the first route whose needle occurs
    /// in the SQL.
    pub fn with_routes(bind_style: BindStyle, routes: Vec<(&str, Vec<CatalogRow>)>) -> Self {
        Self {
            bind_style,
            routes: routes
                .into_iter()
                .map(|(needle, rows)| (needle.to_string(), rows))
                .collect(),
            fail_with: None,
            commands: Vec::new(),
        }
    }

    /// Make every query fail, simulating a connectivity error.
    pub fn failing(bind_style: BindStyle, message: &str) -> Self {
        Self {
            bind_style,
            routes: Vec::new(),
            fail_with: Some(message.to_string()),
            commands: Vec::new(),
        }
    }

    fn matches(row: &CatalogRow, command: &CatalogCommand) -> bool {
        let owner_ok = match command.param("OWNER").and_then(|p| p.value.as_deref()) {
            Some(owner) => {
                row.get_opt_str("OWNER").or_else(|| row.get_opt_str("owner")) == Some(owner)
            }
            None => true,
        };
        let table_ok = match command.param("TABLENAME").and_then(|p| p.value.as_deref()) {
            Some(table) => {
                row.get_opt_str("TABLE_NAME")
                    .or_else(|| row.get_opt_str("table_name"))
                    == Some(table)
            }
            None => true,
        };
        owner_ok && table_ok
    }
}

#[async_trait]
impl ConnectionAdapter for FakeAdapter {
    fn bind_style(&self) -> BindStyle {
        self.bind_style
    }

    async fn query(&mut self, command: &CatalogCommand) -> Result<Vec<CatalogRow>> {
        self.commands.push(command.clone());
        if let Some(message) = &self.fail_with {
            return Err(SchemaError::execution(message.clone(), "fake adapter"));
        }
        let rows = self
            .routes
            .iter()
            .find(|(needle, _)| command.sql.contains(needle.as_str()))
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or_default();
        Ok(rows
            .iter()
            .filter(|row| Self::matches(row, command))
            .cloned()
            .collect())
    }
}
