//! Engine-specific catalog readers.
//!
//! Each driver module supplies, per entity type, a query template against the
//! engine's standard metadata views and a [`RowMapper`](crate::RowMapper) that
//! absorbs the engine's type-encoding quirks. The execute-bind-map loop is
//! shared ([`MetadataExecutor`](crate::MetadataExecutor)).
//!
//! # Adding New Engines
//!
//! 1. Create a new module under `drivers/` (e.g. `drivers/mysql/`)
//! 2. Write the catalog query with named `:placeholder` parameters and the
//!    `(col = :p OR :p IS NULL)` predicate shape for each filter
//! 3. Implement `RowMapper` for each entity type, normalizing into the
//!    canonical types in [`core::schema`](crate::core::schema)
//! 4. Expose constructor functions returning configured executors

pub mod oracle;
pub mod postgres;
