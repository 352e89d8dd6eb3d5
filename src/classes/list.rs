//! Ordered class lists.

use std::fmt;

/// An ordered list of CSS class names.
///
/// Order is kept exactly as classes were added so rendered markup is
/// deterministic. Adding a class that is already present is a no-op.
///
/// # Example
///
/// ```rust
/// use formstrap::ClassList;
///
/// let mut classes = ClassList::new();
/// classes.add("form-control");
/// classes.add("col-sm-9 form-control");
/// assert_eq!(classes.to_string(), "form-control col-sm-9");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a space separated `class` attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        list.add(value);
        list
    }

    /// Adds one or more space separated classes, skipping duplicates.
    pub fn add(&mut self, value: &str) {
        for class in value.split_whitespace() {
            if !self.contains(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns the classes as owned strings.
    pub fn into_vec(self) -> Vec<String> {
        self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for class in iter {
            list.add(class.as_ref());
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order_and_skips_duplicates() {
        let mut list = ClassList::new();
        list.add("b");
        list.add("a b");
        list.add("c");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let list = ClassList::parse("  help-block \t  lead ");
        assert_eq!(list.to_string(), "help-block lead");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty() {
        let list = ClassList::parse("   ");
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_from_iter() {
        let list: ClassList = vec!["btn-lg", "btn"].into_iter().collect();
        assert_eq!(list.into_vec(), vec!["btn-lg".to_string(), "btn".to_string()]);
    }
}
