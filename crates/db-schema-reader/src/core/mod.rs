//! Core abstractions for engine-agnostic catalog extraction.
//!
//! This module provides the foundational types and traits implemented and
//! consumed by the driver modules:
//!
//! - [`schema`]: canonical column and table metadata types
//! - [`row`]: raw catalog row representation with typed, optional-aware accessors
//! - [`command`]: the parameterized catalog command
//! - [`adapter`]: the connection adapter trait and its binding-capability flag
//! - [`binder`]: filter-value to bound-parameter translation
//! - [`executor`]: the generic query-execute-map loop
//!
//! # Architecture
//!
//! One [`executor::MetadataExecutor`] is configured per entity type per engine
//! with a (query template, row mapper) pair selected at construction time.
//! Engine-specific binding quirks are modeled as a capability flag on the
//! adapter ([`adapter::BindStyle`]) consulted once by the binder, not as a
//! subclass override.

pub mod adapter;
pub mod binder;
pub mod command;
pub mod executor;
pub mod row;
pub mod schema;

// Re-export commonly used types for convenience
pub use adapter::{BindStyle, ConnectionAdapter};
pub use command::{BoundParam, CatalogCommand};
pub use executor::{MetadataExecutor, RowMapper};
pub use row::{CatalogRow, CatalogValue};
pub use schema::{Column, Table};
