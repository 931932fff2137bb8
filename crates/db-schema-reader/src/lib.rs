//! # db-schema-reader
//!
//! Extracts structural metadata (tables, columns, and their attributes) from a
//! relational database's system catalog and normalizes the per-engine
//! representations into one canonical schema model.
//!
//! The crate is organized around a single generic execution layer:
//!
//! - **Canonical entities** ([`Column`], [`Table`]) are engine-independent.
//! - **[`MetadataExecutor`]** owns one catalog query template plus its filter
//!   values, binds parameters, runs the query through a [`ConnectionAdapter`],
//!   and maps every returned row through a [`RowMapper`].
//! - **Driver modules** ([`drivers::oracle`], [`drivers::postgres`]) supply
//!   the engine-specific query templates and row mappers that absorb each
//!   catalog's type-encoding quirks.
//!
//! Connection establishment and pooling are out of scope: callers hand the
//! executor an adapter that already wraps a live connection.
//!
//! ## Example
//!
//! ```rust,no_run
//! use db_schema_reader::drivers::postgres::PgAdapter;
//!
//! # async fn example(client: tokio_postgres::Client) -> db_schema_reader::Result<()> {
//! let mut adapter = PgAdapter::new(&client);
//! let columns = db_schema_reader::drivers::postgres::columns(Some("public"), None)
//!     .execute(&mut adapter)
//!     .await?;
//! for col in &columns {
//!     println!("{}.{} {}", col.table_name, col.name, col.db_data_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use crate::core::adapter::{BindStyle, ConnectionAdapter};
pub use crate::core::command::{BoundParam, CatalogCommand};
pub use crate::core::executor::{MetadataExecutor, RowMapper};
pub use crate::core::row::{CatalogRow, CatalogValue};
pub use crate::core::schema::{Column, Table};
pub use error::{Result, SchemaError};
