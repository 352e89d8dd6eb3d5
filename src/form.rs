//! Enclosing form state.
//!
//! The adapter never reaches for a "current form". Callers pass a
//! [`FormLayout`] (or the [`FormContext`] it comes from) into every
//! operation whose output depends on it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ConfigError;

/// How the enclosing form lays out its groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormLayout {
    /// No explicit type; labels stack above fields.
    #[default]
    Basic,
    Vertical,
    /// Labels and fields share grid rows.
    Horizontal,
    Inline,
    Search,
}

impl FormLayout {
    /// Maps a form type string to a layout.
    ///
    /// Unknown and empty types fall back to [`FormLayout::Basic`].
    pub fn from_type(form_type: &str) -> Self {
        match form_type {
            "horizontal" => FormLayout::Horizontal,
            "vertical" => FormLayout::Vertical,
            "inline" => FormLayout::Inline,
            "search" => FormLayout::Search,
            other => {
                if !other.is_empty() {
                    trace!(form_type = other, "unrecognized form type, using basic layout");
                }
                FormLayout::Basic
            }
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == FormLayout::Horizontal
    }
}

/// The form a field is being rendered into.
///
/// # Example
///
/// ```rust
/// use formstrap::{FormContext, FormLayout};
///
/// let form = FormContext::from_yaml("type: horizontal").unwrap();
/// assert_eq!(form.layout(), FormLayout::Horizontal);
/// assert_eq!(form.form_type(), "horizontal");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormContext {
    #[serde(rename = "type", default)]
    form_type: String,
}

impl FormContext {
    pub fn new(form_type: impl Into<String>) -> Self {
        Self {
            form_type: form_type.into(),
        }
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// The raw form type, possibly empty.
    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub fn layout(&self) -> FormLayout {
        FormLayout::from_type(&self.form_type)
    }
}
