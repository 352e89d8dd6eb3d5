//! Pure hint-to-class resolution.
//!
//! Buttons and fields are resolved by two independent functions. Button
//! hints that are not size synonyms pass through untouched, since buttons
//! routinely carry arbitrary contextual classes (`primary`, `danger`,
//! `block`, ...). Field hints are constrained to the grid: anything that does
//! not end up as one of the twelve `col-sm-N` columns is dropped.

use tracing::{debug, trace};

use super::tables::{
    is_grid_column, BUTTON_SIZES, FIELD_SIZES, GRID_PREFIX, LEGACY_SPAN_PREFIX, STATES,
};

/// Prefix applied to every button hint.
pub const BUTTON_PREFIX: &str = "btn-";

/// Base class appended to every button.
pub const BUTTON_BASE: &str = "btn";

/// Maps a validation state to its form-group class.
///
/// Unknown states resolve to `None`; they are not an error.
///
/// ```rust
/// use formstrap::classes::resolve_state_class;
///
/// assert_eq!(resolve_state_class("success").as_deref(), Some("has-success"));
/// assert_eq!(resolve_state_class("bogus"), None);
/// ```
pub fn resolve_state_class(state: &str) -> Option<String> {
    if STATES.contains(&state) {
        Some(format!("has-{}", state))
    } else {
        debug!(state, "ignoring unknown field state");
        None
    }
}

/// Prefixes every class with `prefix`.
pub fn prepend_with<S: AsRef<str>>(classes: &[S], prefix: &str) -> Vec<String> {
    classes
        .iter()
        .map(|class| format!("{}{}", prefix, class.as_ref()))
        .collect()
}

/// Resolves button hints to Bootstrap 3 button classes.
///
/// Size synonyms are remapped (`large` → `lg`, `small` → `sm`,
/// `mini` → `xs`), every token is prefixed with `btn-`, and the base `btn`
/// class is appended last. Blank hints are skipped and the others are
/// trimmed before remapping, so no bare `btn-` is ever produced.
///
/// ```rust
/// use formstrap::classes::resolve_button_classes;
///
/// assert_eq!(
///     resolve_button_classes(&["large", "primary"]),
///     vec!["btn-lg", "btn-primary", "btn"],
/// );
/// ```
pub fn resolve_button_classes<S: AsRef<str>>(hints: &[S]) -> Vec<String> {
    let remapped: Vec<&str> = tokens(hints)
        .map(|hint| BUTTON_SIZES.get(hint).copied().unwrap_or(hint))
        .collect();

    let mut classes = prepend_with(&remapped, BUTTON_PREFIX);
    classes.push(BUTTON_BASE.to_string());
    classes
}

/// Resolves field hints to grid column classes.
///
/// Legacy sizes are remapped (`large` → `col-sm-9`, ...), `spanN` is
/// rewritten to `col-sm-N`, and the result is filtered against the twelve
/// valid grid columns. Input order is preserved, duplicates included.
/// Blank hints are skipped and the others are trimmed.
///
/// ```rust
/// use formstrap::classes::resolve_field_classes;
///
/// assert_eq!(
///     resolve_field_classes(&["span3", "inline", "xlarge"]),
///     vec!["col-sm-3", "col-sm-12"],
/// );
/// ```
pub fn resolve_field_classes<S: AsRef<str>>(hints: &[S]) -> Vec<String> {
    tokens(hints)
        .filter_map(|hint| {
            let class = match FIELD_SIZES.get(hint) {
                Some(column) => (*column).to_string(),
                None => match hint.strip_prefix(LEGACY_SPAN_PREFIX) {
                    Some(width) => format!("{}{}", GRID_PREFIX, width),
                    None => hint.to_string(),
                },
            };

            if is_grid_column(&class) {
                trace!(hint, %class, "resolved field hint");
                Some(class)
            } else {
                debug!(hint, "dropping field hint outside the grid");
                None
            }
        })
        .collect()
}

fn tokens<S: AsRef<str>>(hints: &[S]) -> impl Iterator<Item = &str> {
    hints
        .iter()
        .map(|hint| hint.as_ref().trim())
        .filter(|hint| !hint.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_classes() {
        for state in ["success", "warning", "error", "info"] {
            assert_eq!(resolve_state_class(state), Some(format!("has-{}", state)));
        }
        assert_eq!(resolve_state_class("bogus"), None);
        assert_eq!(resolve_state_class(""), None);
        assert_eq!(resolve_state_class("Success"), None);
    }

    #[test]
    fn test_prepend_with() {
        assert_eq!(prepend_with(&["a", "b"], "x-"), vec!["x-a", "x-b"]);
        assert!(prepend_with::<&str>(&[], "x-").is_empty());
    }

    #[test]
    fn test_button_sizes_are_remapped() {
        assert_eq!(
            resolve_button_classes(&["large", "small", "mini"]),
            vec!["btn-lg", "btn-sm", "btn-xs", "btn"]
        );
    }

    #[test]
    fn test_button_unknown_hints_pass_through() {
        assert_eq!(
            resolve_button_classes(&["danger", "block", "whatever"]),
            vec!["btn-danger", "btn-block", "btn-whatever", "btn"]
        );
    }

    #[test]
    fn test_button_without_hints() {
        assert_eq!(resolve_button_classes::<&str>(&[]), vec!["btn"]);
    }

    #[test]
    fn test_hints_are_trimmed() {
        assert_eq!(resolve_button_classes(&[" large "]), vec!["btn-lg", "btn"]);
        assert_eq!(resolve_field_classes(&[" span3 "]), vec!["col-sm-3"]);
    }

    #[test]
    fn test_button_skips_blank_hints() {
        assert_eq!(resolve_button_classes(&["", "  ", "link"]), vec!["btn-link", "btn"]);
    }

    #[test]
    fn test_field_sizes_are_remapped() {
        assert_eq!(
            resolve_field_classes(&["xlarge", "large", "medium", "small", "xsmall"]),
            vec!["col-sm-12", "col-sm-9", "col-sm-6", "col-sm-4", "col-sm-2"]
        );
    }

    #[test]
    fn test_field_span_is_rewritten() {
        assert_eq!(resolve_field_classes(&["span1"]), vec!["col-sm-1"]);
        assert_eq!(resolve_field_classes(&["span12"]), vec!["col-sm-12"]);
    }

    #[test]
    fn test_field_invalid_spans_are_dropped() {
        assert!(resolve_field_classes(&["span0", "span13", "spanfoo", "span"]).is_empty());
    }

    #[test]
    fn test_field_grid_columns_pass_unchanged() {
        assert_eq!(resolve_field_classes(&["col-sm-7"]), vec!["col-sm-7"]);
    }

    #[test]
    fn test_field_unknown_hints_are_dropped() {
        assert!(resolve_field_classes(&["danger", "inline", "mini", "col-md-4"]).is_empty());
    }

    #[test]
    fn test_same_hint_differs_by_kind() {
        assert_eq!(resolve_button_classes(&["large"]), vec!["btn-lg", "btn"]);
        assert_eq!(resolve_field_classes(&["large"]), vec!["col-sm-9"]);
    }
}
