//! Field descriptors.

use serde::{Deserialize, Serialize};

use super::kind::FieldKind;
use crate::element::{Attributes, Element};
use crate::error::{ConfigError, RenderError};

/// A form field as seen by the style adapter.
///
/// Descriptors are owned by the form engine. The adapter only reads them,
/// marks checkables inline, and replaces their `class` attribute.
///
/// Capability flags default from the [`FieldKind`] and can be overridden,
/// for engines whose custom kinds behave like checkables or buttons.
///
/// # Example
///
/// ```rust
/// use formstrap::{FieldDescriptor, FieldKind};
///
/// let field = FieldDescriptor::new(FieldKind::Email, "email")
///     .with_value("ada@example.org")
///     .with_hints(["large"]);
///
/// assert!(!field.is_checkable());
/// assert_eq!(field.hints(), ["large"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    kind: FieldKind,
    name: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    hints: Vec<String>,
    #[serde(default)]
    checkable: Option<bool>,
    #[serde(default)]
    button: Option<bool>,
    #[serde(default)]
    inline: bool,
}

impl FieldDescriptor {
    pub fn new(kind: impl Into<FieldKind>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            value: String::new(),
            attributes: Attributes::new(),
            hints: Vec::new(),
            checkable: None,
            button: None,
            inline: false,
        }
    }

    /// Loads a descriptor from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a descriptor from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Sets the style hints requested for this field, in order.
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides whether the field is treated as checkable.
    pub fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = Some(checkable);
        self
    }

    /// Overrides whether the field is treated as a button.
    pub fn button(mut self, button: bool) -> Self {
        self.button = Some(button);
        self
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable.unwrap_or_else(|| self.kind.is_checkable())
    }

    pub fn is_button(&self) -> bool {
        self.button.unwrap_or_else(|| self.kind.is_button())
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Marks a checkable field to be laid out inline.
    pub fn inline(&mut self) -> &mut Self {
        self.inline = true;
        self
    }

    /// Returns the field's `class` attribute, if set.
    pub fn class(&self) -> Option<&str> {
        self.attributes.get("class")
    }

    /// Replaces the field's `class` attribute.
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.attributes.set("class", class);
        self
    }

    /// Builds the element for the field's own control.
    ///
    /// Textareas and selects get their own tags, buttons become
    /// `<button>` elements labelled by their value, and everything else is
    /// an `<input>` of the field's kind. Grouped checkables render as
    /// their single-input counterpart.
    pub fn to_element(&self) -> Element {
        let element = match &self.kind {
            FieldKind::Textarea => Element::new("textarea").with_text(self.value.as_str()),
            FieldKind::Select => Element::new("select"),
            kind if self.is_button() => Element::new("button")
                .with_attributes(Attributes::new().add("type", button_type(kind)))
                .with_text(self.value.as_str()),
            kind => {
                let input_type = match kind {
                    FieldKind::Checkboxes => "checkbox",
                    FieldKind::Radios => "radio",
                    other => other.as_str(),
                };
                let mut attributes = Attributes::new().add("type", input_type);
                if !self.value.is_empty() {
                    attributes.set("value", self.value.as_str());
                }
                Element::new("input").with_attributes(attributes)
            }
        };

        let mut attributes = self.attributes.clone();
        if !self.name.is_empty() && !attributes.has("name") {
            attributes.set("name", self.name.as_str());
        }
        element.with_attributes(attributes)
    }

    /// Renders the field's own control to HTML.
    pub fn render(&self) -> Result<String, RenderError> {
        self.to_element().render()
    }
}

fn button_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Submit => "submit",
        FieldKind::Reset => "reset",
        _ => "button",
    }
}
