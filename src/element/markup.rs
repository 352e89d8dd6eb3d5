//! MiniJinja environment used to turn elements into markup.
//!
//! The template name ends in `.html`, so MiniJinja's default auto-escape
//! callback HTML-escapes every interpolated value. Pre-rendered child markup
//! is passed as a safe string and inserted verbatim.

use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;
use tracing::error;

use crate::error::RenderError;

const ELEMENT_TEMPLATE: &str = "element.html";

const ELEMENT_SOURCE: &str = r#"<{{ tag }}{% for name, value in attributes %} {{ name }}="{{ value }}"{% endfor %}>{% if not void %}{{ content }}</{{ tag }}>{% endif %}"#;

/// Tags that never carry content or a closing tag.
pub(crate) const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    // A failure here resurfaces as a missing template on every render.
    if let Err(err) = env.add_template(ELEMENT_TEMPLATE, ELEMENT_SOURCE) {
        error!(%err, "element template failed to compile");
    }
    env
});

/// Renders one element.
///
/// `attributes` must already be in output order. `content` is either a
/// plain string (escaped) or a safe string (inserted as-is).
pub(crate) fn render_element(
    tag: &str,
    attributes: Vec<(String, String)>,
    content: Value,
) -> Result<String, RenderError> {
    let void = VOID_TAGS.contains(&tag);
    let attributes: Vec<Value> = attributes
        .into_iter()
        .map(|(name, value)| Value::from(vec![Value::from(name), Value::from(value)]))
        .collect();

    ENV.get_template(ELEMENT_TEMPLATE)
        .and_then(|template| {
            template.render(context! {
                tag => tag,
                attributes => attributes,
                content => content,
                void => void,
            })
        })
        .map_err(|source| RenderError::Template {
            tag: tag.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_element() {
        let html = render_element("span", vec![], Value::from("hi")).unwrap();
        assert_eq!(html, "<span>hi</span>");
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let html = render_element(
            "p",
            vec![("title".to_string(), "a \"quoted\" <b>".to_string())],
            Value::from("1 < 2 & 3"),
        )
        .unwrap();
        assert!(html.contains("1 &lt; 2 &amp; 3"));
        assert!(!html.contains("\"quoted\""));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_safe_content_is_verbatim() {
        let html = render_element(
            "div",
            vec![],
            Value::from_safe_string("<input type=\"text\">".to_string()),
        )
        .unwrap();
        assert_eq!(html, "<div><input type=\"text\"></div>");
    }

    #[test]
    fn test_render_void_tag() {
        let html = render_element(
            "input",
            vec![("type".to_string(), "text".to_string())],
            Value::from(""),
        )
        .unwrap();
        assert_eq!(html, "<input type=\"text\">");
    }
}
