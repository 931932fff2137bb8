//! Connection adapter over an open `tokio_postgres::Client`.

use async_trait::async_trait;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::Client;
use tracing::debug;

use crate::core::adapter::{BindStyle, ConnectionAdapter};
use crate::core::command::{BoundParam, CatalogCommand};
use crate::core::row::{CatalogRow, CatalogValue};
use crate::error::{Result, SchemaError};

/// Scoped wrapper around one already-open PostgreSQL connection.
///
/// Connection establishment, pooling, and TLS are the caller's concern: the
/// adapter borrows the client for the duration of the extraction and holds no
/// other state.
pub struct PgAdapter<'a> {
    client: &'a Client,
}

impl<'a> PgAdapter<'a> {
    /// Wrap an open client.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConnectionAdapter for PgAdapter<'_> {
    fn bind_style(&self) -> BindStyle {
        BindStyle::PositionalOnly
    }

    async fn query(&mut self, command: &CatalogCommand) -> Result<Vec<CatalogRow>> {
        let sql = rewrite_placeholders(&command.sql, &command.params)?;
        let params: Vec<&(dyn ToSql + Sync)> = command
            .params
            .iter()
            .map(|p| &p.value as &(dyn ToSql + Sync))
            .collect();

        let query = self.client.query(&sql, &params);
        let rows = match command.timeout {
            Some(limit) => tokio::time::timeout(limit, query).await.map_err(|_| {
                SchemaError::execution(
                    format!("timed out after {:?}", limit),
                    "executing catalog query",
                )
            })??,
            None => query.await?,
        };
        debug!("Catalog query returned {} rows", rows.len());

        rows.iter().map(convert_row).collect()
    }
}

/// Rewrite `:name` placeholders to the `$n` positional form, `n` being the
/// parameter's 1-based position in the command's parameter list. The same
/// name may appear any number of times (the `OR :p IS NULL` predicate shape
/// repeats each filter). Single-quoted literals and `::type` casts are left
/// untouched.
fn rewrite_placeholders(sql: &str, params: &[BoundParam]) -> Result<String> {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.char_indices().peekable();
    let mut in_string = false;

    while let Some((idx, c)) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\'' {
                // A doubled quote is an escape, not a terminator.
                if matches!(chars.peek(), Some((_, '\''))) {
                    let (_, q) = chars.next().unwrap();
                    out.push(q);
                } else {
                    in_string = false;
                }
            }
            continue;
        }
        match c {
            '\'' => {
                in_string = true;
                out.push(c);
            }
            ':' => {
                // `::` cast syntax.
                if matches!(chars.peek(), Some((_, ':'))) {
                    let (_, c2) = chars.next().unwrap();
                    out.push(c);
                    out.push(c2);
                    continue;
                }
                let rest = &sql[idx + 1..];
                let name_len = rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(rest.len());
                if name_len == 0 {
                    out.push(c);
                    continue;
                }
                let name = &rest[..name_len];
                let position = params
                    .iter()
                    .position(|p| p.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| {
                        SchemaError::execution(
                            format!("no parameter bound for placeholder :{}", name),
                            "rewriting placeholders for positional binding",
                        )
                    })?;
                out.push_str(&format!("${}", position + 1));
                for _ in 0..name_len {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Convert one driver row into a raw catalog row.
///
/// Catalog queries cast their projections to concrete types, so only the
/// types those casts can produce are supported here.
fn convert_row(row: &tokio_postgres::Row) -> Result<CatalogRow> {
    let mut out = CatalogRow::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let ty = column.type_();
        let value = if *ty == Type::INT2 {
            row.try_get::<_, Option<i16>>(idx)?
                .map(|v| CatalogValue::Int(v as i64))
        } else if *ty == Type::INT4 {
            row.try_get::<_, Option<i32>>(idx)?
                .map(|v| CatalogValue::Int(v as i64))
        } else if *ty == Type::INT8 {
            row.try_get::<_, Option<i64>>(idx)?.map(CatalogValue::Int)
        } else if *ty == Type::OID {
            row.try_get::<_, Option<u32>>(idx)?
                .map(|v| CatalogValue::Int(v as i64))
        } else if *ty == Type::BOOL {
            row.try_get::<_, Option<bool>>(idx)?.map(CatalogValue::Bool)
        } else if *ty == Type::VARCHAR || *ty == Type::TEXT || *ty == Type::BPCHAR || *ty == Type::NAME
        {
            row.try_get::<_, Option<String>>(idx)?
                .map(CatalogValue::Text)
        } else {
            return Err(SchemaError::execution(
                format!("unsupported catalog column type {}", ty),
                format!("reading field {}", column.name()),
            ));
        };
        out.push(column.name(), value.unwrap_or(CatalogValue::Null));
    }
    Ok(out)
}
