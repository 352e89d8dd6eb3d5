//! Styling frameworks.
//!
//! This module defines the [`Framework`] trait, the seam through which a form
//! engine asks a CSS framework for class names and small pieces of markup.
//! [`Bootstrap3`] is the implementation shipped with this crate.
//!
//! Every method is a pure function of its arguments. Anything that depends on
//! the enclosing form takes its [`FormLayout`] or form type explicitly.

mod bootstrap3;

pub use bootstrap3::Bootstrap3;

use crate::element::{Attributes, Element};
use crate::error::RenderError;
use crate::field::FieldDescriptor;
use crate::form::FormLayout;
use crate::i18n::Translator;

/// Maps abstract field styling requests to one framework's conventions.
pub trait Framework: Send + Sync {
    /// Human readable framework name.
    fn name(&self) -> &'static str;

    /// Returns the group class for a validation state, if the state is known.
    fn resolve_state_class(&self, state: &str) -> Option<String>;

    /// Resolves style hints for a button.
    fn resolve_button_classes(&self, hints: &[String]) -> Vec<String>;

    /// Resolves style hints for a non-button field.
    fn resolve_field_classes(&self, hints: &[String]) -> Vec<String>;

    /// Resolves `hints` for `field` and stores the result as its class
    /// attribute.
    fn apply_field_classes<'f>(
        &self,
        field: &'f mut FieldDescriptor,
        hints: &[String],
    ) -> &'f mut FieldDescriptor;

    /// Class of the element wrapping a label/field pair.
    fn group_wrapper_class(&self) -> &'static str;

    fn label_class(&self, layout: FormLayout) -> &'static str;

    fn uneditable_class(&self) -> &'static str;

    /// Class of the `<form>` element for a form type, if any.
    fn form_class(&self, form_type: &str) -> Option<String>;

    /// Class of the action bar holding the form buttons.
    fn actions_class(&self, layout: FormLayout) -> &'static str;

    /// Inline help text.
    fn render_help_text(&self, text: &str, attributes: Attributes) -> Element;

    /// Block-level help text.
    fn render_block_help_text(&self, text: &str, attributes: Attributes) -> Element;

    /// Read-only stand-in for a disabled field.
    fn render_disabled_field(&self, field: &FieldDescriptor) -> Element;

    /// Icon element, or `None` when the icon name is empty.
    fn render_icon(&self, icon: &str, attributes: Attributes) -> Option<Element>;

    /// Wraps the field's rendered control in its container.
    fn wrap_field(&self, field: &FieldDescriptor, layout: FormLayout)
        -> Result<Element, RenderError>;

    /// Inline help text looked up through `translator`.
    fn render_localized_help(
        &self,
        translator: &dyn Translator,
        key: &str,
        attributes: Attributes,
    ) -> Element {
        self.render_help_text(&translator.translate(key), attributes)
    }

    /// Block-level help text looked up through `translator`.
    fn render_localized_block_help(
        &self,
        translator: &dyn Translator,
        key: &str,
        attributes: Attributes,
    ) -> Element {
        self.render_block_help_text(&translator.translate(key), attributes)
    }
}
