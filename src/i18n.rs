//! Localization seam for help text.
//!
//! The adapter never rewrites translated text; it only asks a
//! [`Translator`] for it and places the result inside an element.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ConfigError;

/// Looks up the localized text for a key.
pub trait Translator: Send + Sync {
    /// Returns the text for `key`, or the key itself when none is known.
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// A flat key → text message catalog.
///
/// # Example
///
/// ```rust
/// use formstrap::i18n::{Catalog, Translator};
///
/// let catalog = Catalog::from_yaml("email.help: We never share your address").unwrap();
/// assert_eq!(catalog.translate("email.help"), "We never share your address");
/// assert_eq!(catalog.translate("missing.key"), "missing.key");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Adds a message, returning the updated catalog for chaining.
    pub fn add(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.messages.get(key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => {
                trace!(key, "no translation, using key");
                Cow::Borrowed(key)
            }
        }
    }
}
