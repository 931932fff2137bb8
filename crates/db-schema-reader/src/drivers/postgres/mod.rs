//! PostgreSQL catalog readers and connection adapter.
//!
//! Reads `information_schema.columns`, excluding the engine's own
//! `pg_catalog` and `information_schema` namespaces. PostgreSQL drivers only
//! accept positional `$n` placeholders, so [`PgAdapter`] rewrites the named
//! placeholders of a command before execution and reports
//! [`BindStyle::PositionalOnly`](crate::BindStyle::PositionalOnly).

mod adapter;
mod columns;

pub use adapter::PgAdapter;
pub use columns::{columns, PgColumnMapper};
