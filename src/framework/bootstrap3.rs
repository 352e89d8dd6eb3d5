//! Twitter Bootstrap 3.

use tracing::debug;

use super::Framework;
use crate::classes;
use crate::element::{Attributes, Element};
use crate::error::RenderError;
use crate::field::FieldDescriptor;
use crate::form::FormLayout;

const INLINE_HINT: &str = "inline";
const FORM_CONTROL: &str = "form-control";
const HELP_BLOCK: &str = "help-block";
const ICON_PREFIX: &str = "glyphicon-";
const WHITE_MODIFIER: &str = "white";
const WHITE_ICON: &str = "glyphicon-white";

/// The Bootstrap 3 adapter.
///
/// Stateless; a single value can be shared between any number of
/// concurrent renders.
///
/// # Example
///
/// ```rust
/// use formstrap::{Bootstrap3, FieldDescriptor, FieldKind, FormLayout, Framework};
///
/// let framework = Bootstrap3;
/// let mut field = FieldDescriptor::new(FieldKind::Text, "name");
/// framework.apply_field_classes(&mut field, &["large".to_string()]);
///
/// assert_eq!(field.class(), Some("form-control col-sm-9"));
/// assert_eq!(framework.label_class(FormLayout::Horizontal), "control-label col-sm-4");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bootstrap3;

impl Framework for Bootstrap3 {
    fn name(&self) -> &'static str {
        "TwitterBootstrap3"
    }

    fn resolve_state_class(&self, state: &str) -> Option<String> {
        classes::resolve_state_class(state)
    }

    fn resolve_button_classes(&self, hints: &[String]) -> Vec<String> {
        classes::resolve_button_classes(hints)
    }

    fn resolve_field_classes(&self, hints: &[String]) -> Vec<String> {
        classes::resolve_field_classes(hints)
    }

    fn apply_field_classes<'f>(
        &self,
        field: &'f mut FieldDescriptor,
        hints: &[String],
    ) -> &'f mut FieldDescriptor {
        if field.is_checkable() && hints.iter().any(|hint| hint == INLINE_HINT) {
            field.inline();
        }

        let mut classes = if field.is_button() {
            self.resolve_button_classes(hints)
        } else {
            self.resolve_field_classes(hints)
        };

        let check_input = matches!(field.kind().as_str(), "checkbox" | "radio");
        if !field.is_checkable() && !field.is_button() && !check_input {
            classes.insert(0, FORM_CONTROL.to_string());
        }

        if !classes.is_empty() {
            field.set_class(classes.join(" "));
        }
        field
    }

    fn group_wrapper_class(&self) -> &'static str {
        "form-group"
    }

    fn label_class(&self, layout: FormLayout) -> &'static str {
        if layout.is_horizontal() {
            "control-label col-sm-4"
        } else {
            "control-label"
        }
    }

    fn uneditable_class(&self) -> &'static str {
        "uneditable-input"
    }

    fn form_class(&self, form_type: &str) -> Option<String> {
        (!form_type.is_empty()).then(|| format!("form-{}", form_type))
    }

    fn actions_class(&self, layout: FormLayout) -> &'static str {
        if layout.is_horizontal() {
            "col-sm-8 col-sm-offset-4"
        } else {
            ""
        }
    }

    fn render_help_text(&self, text: &str, attributes: Attributes) -> Element {
        Element::new("span")
            .with_text(text)
            .with_attributes(attributes)
            .with_class(HELP_BLOCK)
    }

    fn render_block_help_text(&self, text: &str, attributes: Attributes) -> Element {
        Element::new("p")
            .with_text(text)
            .with_attributes(attributes)
            .with_class(HELP_BLOCK)
    }

    fn render_disabled_field(&self, field: &FieldDescriptor) -> Element {
        Element::new("span")
            .with_text(field.value())
            .with_attributes(field.attributes().clone())
    }

    fn render_icon(&self, icon: &str, attributes: Attributes) -> Option<Element> {
        let mut element = Element::new("i").with_attributes(attributes);

        let mut name = icon;
        let stripped;
        if icon.contains(WHITE_MODIFIER) {
            stripped = icon.replace(WHITE_MODIFIER, "");
            name = stripped.trim_matches('-');
            element.add_class(WHITE_ICON);
        }

        if name.is_empty() {
            debug!(icon, "icon name is empty, nothing to render");
            return None;
        }

        element.add_class(&format!("{}{}", ICON_PREFIX, name));
        Some(element)
    }

    fn wrap_field(
        &self,
        field: &FieldDescriptor,
        layout: FormLayout,
    ) -> Result<Element, RenderError> {
        let mut wrapper = Element::new("div").with_html(field.render()?);
        if layout.is_horizontal() {
            wrapper.add_class("col-sm-8");
        }
        Ok(wrapper)
    }
}
