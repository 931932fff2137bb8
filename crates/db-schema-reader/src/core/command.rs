//! Parameterized catalog command.

use std::time::Duration;

/// One named bound parameter.
///
/// `None` is a true NULL parameter, never an empty string: every generated
/// query uses the `column = :param OR :param IS NULL` predicate shape, and the
/// `IS NULL` branch must activate when the filter is unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParam {
    /// Placeholder name as it appears in the SQL template (without `:`).
    pub name: String,
    /// Parameter value; `None` binds NULL.
    pub value: Option<String>,
}

impl BoundParam {
    /// Create a bound parameter.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A read-only catalog query ready for execution by a
/// [`ConnectionAdapter`](crate::core::adapter::ConnectionAdapter).
#[derive(Debug, Clone)]
pub struct CatalogCommand {
    /// SQL template with named `:placeholder` parameters.
    pub sql: String,

    /// Bound parameters, in declaration order.
    pub params: Vec<BoundParam>,

    /// Explicit named-binding mode, for drivers that otherwise match named
    /// placeholders by position.
    pub bind_by_name: bool,

    /// Optional command timeout, passed straight through to the driver.
    pub timeout: Option<Duration>,
}

impl CatalogCommand {
    /// Create a command from a SQL template, with no parameters bound yet.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            bind_by_name: false,
            timeout: None,
        }
    }

    /// Look up a bound parameter by name (case-insensitive).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&BoundParam> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
