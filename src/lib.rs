//! # Formstrap - Bootstrap 3 styling for server-side forms
//!
//! `formstrap` translates framework-agnostic form field descriptors into the
//! class names and small markup fragments Bootstrap 3 expects. A form engine
//! builds a [`FieldDescriptor`], asks a [`Framework`] for each rendering
//! concern (field classes, group wrapper, label, help text, icons, action
//! bar) and splices the results into its own markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use formstrap::{Attributes, Bootstrap3, FieldDescriptor, FieldKind, FormContext, Framework};
//!
//! let form = FormContext::new("horizontal");
//! let framework = Bootstrap3;
//!
//! let mut field = FieldDescriptor::new(FieldKind::Text, "name").with_hints(["large"]);
//! let hints = field.hints().to_vec();
//! framework.apply_field_classes(&mut field, &hints);
//!
//! let wrapped = framework.wrap_field(&field, form.layout()).unwrap();
//! assert_eq!(
//!     wrapped.render().unwrap(),
//!     r#"<div class="col-sm-8"><input class="form-control col-sm-9" name="name" type="text"></div>"#,
//! );
//!
//! let help = framework.render_help_text("Your full name", Attributes::new());
//! assert!(help.has_class("help-block"));
//! ```
//!
//! ## Class resolution policy
//!
//! Nothing here fails on odd input. Unknown validation states are ignored,
//! unknown button hints pass through as `btn-<hint>`, unknown field hints are
//! dropped, and an icon whose name is empty after removing the `white`
//! modifier yields no element. See [`classes`] for the tables involved.
//!
//! ## Logging
//!
//! Policy decisions (dropped hints, ignored states, empty icons) are reported
//! through [`tracing`] at `debug`/`trace` level. The crate never installs a
//! subscriber.

pub mod classes;
pub mod element;
mod error;
pub mod field;
pub mod form;
pub mod framework;
pub mod i18n;

pub use classes::ClassList;
pub use element::{Attributes, Element};
pub use error::{ConfigError, RenderError};
pub use field::{FieldDescriptor, FieldKind};
pub use form::{FormContext, FormLayout};
pub use framework::{Bootstrap3, Framework};
pub use i18n::{Catalog, Passthrough, Translator};
