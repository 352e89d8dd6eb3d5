//! Fixed translation tables for Bootstrap 3.
//!
//! The same hint means different things depending on the field kind:
//! `large` is a button size (`lg`) on buttons and a grid width
//! (`col-sm-9`) on every other field. The two tables are therefore kept
//! apart and never consulted for the other kind.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Size synonyms understood on buttons, mapped to Bootstrap 3 suffixes.
pub static BUTTON_SIZES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("large", "lg"), ("small", "sm"), ("mini", "xs")])
});

/// Legacy field sizes, mapped to explicit grid columns.
pub static FIELD_SIZES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("xlarge", "col-sm-12"),
        ("large", "col-sm-9"),
        ("medium", "col-sm-6"),
        ("small", "col-sm-4"),
        ("xsmall", "col-sm-2"),
    ])
});

/// The only classes a non-button field may receive from its hints.
pub const GRID_COLUMNS: &[&str] = &[
    "col-sm-1", "col-sm-2", "col-sm-3", "col-sm-4", "col-sm-5", "col-sm-6", "col-sm-7",
    "col-sm-8", "col-sm-9", "col-sm-10", "col-sm-11", "col-sm-12",
];

/// Validation states a form group can display.
pub const STATES: &[&str] = &["success", "warning", "error", "info"];

/// Prefix that legacy `spanN` hints carry instead of `col-sm-`.
pub(crate) const LEGACY_SPAN_PREFIX: &str = "span";

/// Grid prefix that replaces [`LEGACY_SPAN_PREFIX`].
pub(crate) const GRID_PREFIX: &str = "col-sm-";

/// Returns `true` if `token` is one of the twelve [`GRID_COLUMNS`].
pub fn is_grid_column(token: &str) -> bool {
    GRID_COLUMNS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_cover_one_to_twelve() {
        assert_eq!(GRID_COLUMNS.len(), 12);
        for n in 1..=12 {
            assert!(is_grid_column(&format!("col-sm-{}", n)));
        }
        assert!(!is_grid_column("col-sm-0"));
        assert!(!is_grid_column("col-sm-13"));
        assert!(!is_grid_column("col-md-4"));
    }

    #[test]
    fn test_field_sizes_map_into_grid() {
        for column in FIELD_SIZES.values() {
            assert!(is_grid_column(column), "{} is not a grid column", column);
        }
    }

    #[test]
    fn test_button_sizes() {
        assert_eq!(BUTTON_SIZES.get("large"), Some(&"lg"));
        assert_eq!(BUTTON_SIZES.get("small"), Some(&"sm"));
        assert_eq!(BUTTON_SIZES.get("mini"), Some(&"xs"));
        assert_eq!(BUTTON_SIZES.get("block"), None);
    }
}
