//! Field kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a form field.
///
/// Kinds round-trip through their lowercase HTML names; anything not listed
/// here is kept verbatim as [`FieldKind::Other`] and rendered as an
/// `<input>` of that type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Password,
    Email,
    Number,
    Url,
    Tel,
    Search,
    Date,
    File,
    Hidden,
    Textarea,
    Select,
    Checkbox,
    Radio,
    /// A group of checkboxes rendered together.
    Checkboxes,
    /// A group of radio buttons rendered together.
    Radios,
    Button,
    Submit,
    Reset,
    Other(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Url => "url",
            FieldKind::Tel => "tel",
            FieldKind::Search => "search",
            FieldKind::Date => "date",
            FieldKind::File => "file",
            FieldKind::Hidden => "hidden",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Checkboxes => "checkboxes",
            FieldKind::Radios => "radios",
            FieldKind::Button => "button",
            FieldKind::Submit => "submit",
            FieldKind::Reset => "reset",
            FieldKind::Other(name) => name,
        }
    }

    /// Kinds that are ticked rather than typed into.
    pub fn is_checkable(&self) -> bool {
        matches!(
            self,
            FieldKind::Checkbox | FieldKind::Radio | FieldKind::Checkboxes | FieldKind::Radios
        )
    }

    pub fn is_button(&self) -> bool {
        matches!(self, FieldKind::Button | FieldKind::Submit | FieldKind::Reset)
    }
}

impl From<&str> for FieldKind {
    fn from(name: &str) -> Self {
        match name {
            "text" => FieldKind::Text,
            "password" => FieldKind::Password,
            "email" => FieldKind::Email,
            "number" => FieldKind::Number,
            "url" => FieldKind::Url,
            "tel" => FieldKind::Tel,
            "search" => FieldKind::Search,
            "date" => FieldKind::Date,
            "file" => FieldKind::File,
            "hidden" => FieldKind::Hidden,
            "textarea" => FieldKind::Textarea,
            "select" => FieldKind::Select,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            "checkboxes" => FieldKind::Checkboxes,
            "radios" => FieldKind::Radios,
            "button" => FieldKind::Button,
            "submit" => FieldKind::Submit,
            "reset" => FieldKind::Reset,
            other => FieldKind::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        FieldKind::from(name.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_parse() {
        assert_eq!(FieldKind::from("checkbox"), FieldKind::Checkbox);
        assert_eq!(FieldKind::from("submit"), FieldKind::Submit);
        assert_eq!(FieldKind::from("textarea"), FieldKind::Textarea);
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let kind = FieldKind::from("color");
        assert_eq!(kind, FieldKind::Other("color".to_string()));
        assert_eq!(kind.as_str(), "color");
    }

    #[test]
    fn test_capabilities() {
        assert!(FieldKind::Radios.is_checkable());
        assert!(FieldKind::Reset.is_button());
        assert!(!FieldKind::Text.is_button());
        assert!(!FieldKind::Text.is_checkable());
    }

    #[test]
    fn test_serde_uses_html_names() {
        let json = serde_json::to_string(&FieldKind::Email).unwrap();
        assert_eq!(json, "\"email\"");

        let kind: FieldKind = serde_json::from_str("\"range\"").unwrap();
        assert_eq!(kind, FieldKind::Other("range".to_string()));
    }
}
