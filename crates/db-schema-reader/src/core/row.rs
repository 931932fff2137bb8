//! Raw catalog row and value representation.
//!
//! Catalog fields are optional-aware at every layer: an absent value is
//! [`CatalogValue::Null`], never a sentinel such as an empty string, `-1`, or
//! `0`, so "absent" and "default value" stay distinguishable.

use crate::error::{Result, SchemaError};

/// One raw value read from a catalog row.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    /// SQL NULL or an absent field.
    Null,
    /// Integer value (any integral catalog column).
    Int(i64),
    /// Text value.
    Text(String),
    /// Boolean value (engines whose catalogs expose real booleans).
    Bool(bool),
}

impl CatalogValue {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CatalogValue::Null)
    }
}

impl From<i64> for CatalogValue {
    fn from(v: i64) -> Self {
        CatalogValue::Int(v)
    }
}

impl From<i32> for CatalogValue {
    fn from(v: i32) -> Self {
        CatalogValue::Int(v as i64)
    }
}

impl From<bool> for CatalogValue {
    fn from(v: bool) -> Self {
        CatalogValue::Bool(v)
    }
}

impl From<String> for CatalogValue {
    fn from(v: String) -> Self {
        CatalogValue::Text(v)
    }
}

impl From<&str> for CatalogValue {
    fn from(v: &str) -> Self {
        CatalogValue::Text(v.to_string())
    }
}

impl<T: Into<CatalogValue>> From<Option<T>> for CatalogValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CatalogValue::Null,
        }
    }
}

/// One raw row returned by a catalog query.
///
/// Field lookup is case-insensitive: engines disagree on the casing of
/// projection aliases (`ordinal_position` vs `ORDINAL_POSITION`).
#[derive(Debug, Clone, Default)]
pub struct CatalogRow {
    fields: Vec<(String, CatalogValue)>,
}

impl CatalogRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field to the row.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<CatalogValue>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CatalogValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Number of fields in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn find(&self, name: &str) -> Option<&CatalogValue> {
        self.fields
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Read a required text field.
    ///
    /// An absent, NULL, or non-text value is a malformed-row failure.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        match self.find(name) {
            Some(CatalogValue::Text(s)) => Ok(s),
            Some(CatalogValue::Null) | None => {
                Err(SchemaError::malformed_row(name, "required field is missing"))
            }
            Some(other) => Err(SchemaError::malformed_row(
                name,
                format!("expected text, got {:?}", other),
            )),
        }
    }

    /// Read an optional text field; absent and NULL both map to `None`.
    pub fn get_opt_str(&self, name: &str) -> Option<&str> {
        match self.find(name) {
            Some(CatalogValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Read an optional integer field; absent and NULL both map to `None`.
    ///
    /// Integral text is parsed (some catalogs project numbers as text); any
    /// other shape is a malformed-row failure.
    pub fn get_opt_i32(&self, name: &str) -> Result<Option<i32>> {
        match self.find(name) {
            Some(CatalogValue::Int(v)) => {
                let v = i32::try_from(*v).map_err(|_| {
                    SchemaError::malformed_row(name, format!("integer {} out of range", v))
                })?;
                Ok(Some(v))
            }
            Some(CatalogValue::Text(s)) => s.trim().parse::<i32>().map(Some).map_err(|_| {
                SchemaError::malformed_row(name, format!("expected integer, got {:?}", s))
            }),
            Some(CatalogValue::Null) | None => Ok(None),
            Some(other) => Err(SchemaError::malformed_row(
                name,
                format!("expected integer, got {:?}", other),
            )),
        }
    }

    /// Read a required boolean flag.
    ///
    /// Catalogs encode these as `Y`/`N`, `YES`/`NO`, `TRUE`/`FALSE`, `1`/`0`,
    /// or a real boolean depending on the engine.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        match self.find(name) {
            Some(CatalogValue::Bool(b)) => Ok(*b),
            Some(CatalogValue::Int(v)) => Ok(*v != 0),
            Some(CatalogValue::Text(s)) => match s.trim().to_ascii_uppercase().as_str() {
                "Y" | "YES" | "T" | "TRUE" | "1" => Ok(true),
                "N" | "NO" | "F" | "FALSE" | "0" => Ok(false),
                other => Err(SchemaError::malformed_row(
                    name,
                    format!("expected boolean flag, got {:?}", other),
                )),
            },
            Some(CatalogValue::Null) | None => {
                Err(SchemaError::malformed_row(name, "required field is missing"))
            }
        }
    }
}
