//! Connection adapter abstraction.
//!
//! An adapter is a scoped wrapper around one already-open database connection,
//! exposing a command-execution surface without exposing raw driver objects.
//! Establishing and pooling connections is the caller's concern.

use async_trait::async_trait;

use crate::core::command::CatalogCommand;
use crate::core::row::CatalogRow;
use crate::error::Result;

/// How the underlying driver resolves the `:name` placeholders in a command.
///
/// Modeled as a capability flag consulted once by the parameter binder rather
/// than as a per-engine subclass override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStyle {
    /// Placeholders resolve by name with no extra step.
    Named,

    /// The driver matches named placeholders positionally unless the command
    /// is switched into explicit bind-by-name mode (Oracle drivers do this,
    /// and silently mis-bind otherwise).
    PositionalByDefault,

    /// The driver only accepts positional placeholders; the adapter itself
    /// rewrites named placeholders before execution.
    PositionalOnly,
}

/// Command-execution surface over one live database connection.
///
/// An adapter wraps exactly one command/cursor at a time and is not reentrant;
/// [`query`](Self::query) takes `&mut self` so two executors cannot share one
/// adapter concurrently. The driver cursor is released before `query` returns:
/// the row set comes back fully materialized.
#[async_trait]
pub trait ConnectionAdapter: Send {
    /// How this engine's driver resolves named placeholders.
    fn bind_style(&self) -> BindStyle;

    /// Execute a read-only catalog command and return every row it produced,
    /// in catalog order.
    async fn query(&mut self, command: &CatalogCommand) -> Result<Vec<CatalogRow>>;
}
