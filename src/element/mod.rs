//! HTML element builder.
//!
//! This is the small element layer the adapter hands its output to:
//!
//! - [`Element`]: a tag with attributes, classes and optional content
//! - [`Attributes`]: a sorted attribute map
//!
//! Markup is produced by [`Element::render`], which escapes text and
//! attribute values and inserts trusted child markup verbatim.

mod attributes;
mod markup;

use minijinja::Value;

pub use attributes::Attributes;

use crate::classes::ClassList;
use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Empty,
    Text(String),
    Html(String),
}

/// An HTML element under construction.
///
/// # Example
///
/// ```rust
/// use formstrap::{Attributes, Element};
///
/// let help = Element::new("span")
///     .with_text("Required")
///     .with_attributes(Attributes::new().add("id", "name-help"))
///     .with_class("help-block");
///
/// assert_eq!(
///     help.render().unwrap(),
///     r#"<span class="help-block" id="name-help">Required</span>"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    content: Content,
    attributes: Attributes,
    classes: ClassList,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: Content::Empty,
            attributes: Attributes::new(),
            classes: ClassList::new(),
        }
    }

    /// Sets plain text content, escaped on render.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Sets trusted markup content, inserted verbatim on render.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.content = Content::Html(html.into());
        self
    }

    /// Merges `attributes` into the element.
    ///
    /// A `class` attribute is split into the element's class list so later
    /// [`add_class`](Self::add_class) calls append to it.
    pub fn with_attributes(mut self, mut attributes: Attributes) -> Self {
        if let Some(class) = attributes.remove("class") {
            self.classes.add(&class);
        }
        for (name, value) in attributes.iter() {
            self.attributes.set(name, value);
        }
        self
    }

    /// Adds one or more space separated classes, returning the element.
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Adds one or more space separated classes.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.classes.add(class);
        self
    }

    /// Sets an attribute. Setting `class` replaces the class list.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if name == "class" {
            self.classes = ClassList::parse(&value);
        } else {
            self.attributes.set(name, value);
        }
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns an attribute value. `class` is read from the class list.
    pub fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            (!self.classes.is_empty()).then(|| self.classes.to_string())
        } else {
            self.attributes.get(name).map(str::to_string)
        }
    }

    /// Returns the text or markup content, if any.
    pub fn content(&self) -> Option<&str> {
        match &self.content {
            Content::Empty => None,
            Content::Text(text) | Content::Html(text) => Some(text),
        }
    }

    /// Renders the element to HTML.
    ///
    /// The `class` attribute comes first, followed by the remaining
    /// attributes in name order.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup template fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut attributes = Vec::with_capacity(self.attributes.len() + 1);
        if !self.classes.is_empty() {
            attributes.push(("class".to_string(), self.classes.to_string()));
        }
        attributes.extend(
            self.attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );

        let content = match &self.content {
            Content::Empty => Value::from(""),
            Content::Text(text) => Value::from(text.as_str()),
            Content::Html(html) => Value::from_safe_string(html.clone()),
        };

        markup::render_element(&self.tag, attributes, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_element() {
        assert_eq!(Element::new("div").render().unwrap(), "<div></div>");
    }

    #[test]
    fn test_class_attribute_is_merged() {
        let mut element = Element::new("p")
            .with_attributes(Attributes::new().add("class", "lead").add("id", "x"));
        element.add_class("help-block");

        assert_eq!(element.attribute("class").as_deref(), Some("lead help-block"));
        assert_eq!(
            element.render().unwrap(),
            r#"<p class="lead help-block" id="x"></p>"#
        );
    }

    #[test]
    fn test_set_class_attribute_replaces() {
        let mut element = Element::new("input").with_class("old");
        element.set_attribute("class", "form-control col-sm-9");
        assert!(!element.has_class("old"));
        assert_eq!(
            element.attribute("class").as_deref(),
            Some("form-control col-sm-9")
        );
    }

    #[test]
    fn test_no_class_attribute_when_empty() {
        let element = Element::new("span").with_text("x");
        assert_eq!(element.attribute("class"), None);
        assert_eq!(element.render().unwrap(), "<span>x</span>");
    }

    #[test]
    fn test_text_is_escaped_html_is_not() {
        let text = Element::new("span").with_text("<b>bold</b>");
        assert!(text.render().unwrap().contains("&lt;b&gt;"));

        let html = Element::new("div").with_html("<b>bold</b>");
        assert_eq!(html.render().unwrap(), "<div><b>bold</b></div>");
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let element = Element::new("input")
            .with_attributes(Attributes::new().add("type", "text").add("name", "email"));
        assert_eq!(
            element.render().unwrap(),
            r#"<input name="email" type="text">"#
        );
    }

    #[test]
    fn test_content_accessor() {
        assert_eq!(Element::new("i").content(), None);
        assert_eq!(Element::new("p").with_text("hi").content(), Some("hi"));
        assert_eq!(Element::new("p").with_html("<br>").content(), Some("<br>"));
    }
}
