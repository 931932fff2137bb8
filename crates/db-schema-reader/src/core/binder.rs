//! Filter-value to bound-parameter translation.

use crate::core::adapter::BindStyle;
use crate::core::command::{BoundParam, CatalogCommand};

/// Attach the executor's filter values to a command.
///
/// A `None` filter value passes through as a true NULL parameter so the
/// `OR :param IS NULL` branch of the query predicate activates; it is never
/// coerced to an empty string or omitted.
///
/// For drivers that match named placeholders positionally by default, the
/// command is switched into explicit bind-by-name mode first.
pub fn bind_parameters(command: &mut CatalogCommand, style: BindStyle, filters: &[BoundParam]) {
    command.bind_by_name = matches!(style, BindStyle::PositionalByDefault);
    command.params.extend_from_slice(filters);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> Vec<BoundParam> {
        vec![
            BoundParam::new("OWNER", Some("HR".to_string())),
            BoundParam::new("TABLENAME", None),
        ]
    }

    #[test]
    fn test_null_filter_passes_through_as_null() {
        let mut cmd = CatalogCommand::new("SELECT 1");
        bind_parameters(&mut cmd, BindStyle::Named, &filters());

        assert_eq!(cmd.params.len(), 2);
        assert_eq!(cmd.param("OWNER").unwrap().value.as_deref(), Some("HR"));
        assert_eq!(cmd.param("TABLENAME").unwrap().value, None);
    }

    #[test]
    fn test_bind_by_name_only_for_positional_default_drivers() {
        let mut cmd = CatalogCommand::new("SELECT 1");
        bind_parameters(&mut cmd, BindStyle::PositionalByDefault, &filters());
        assert!(cmd.bind_by_name);

        let mut cmd = CatalogCommand::new("SELECT 1");
        bind_parameters(&mut cmd, BindStyle::Named, &filters());
        assert!(!cmd.bind_by_name);

        let mut cmd = CatalogCommand::new("SELECT 1");
        bind_parameters(&mut cmd, BindStyle::PositionalOnly, &filters());
        assert!(!cmd.bind_by_name);
    }
}
