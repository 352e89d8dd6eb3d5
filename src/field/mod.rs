//! Field descriptors handed to the adapter by the form engine.
//!
//! - [`FieldKind`]: the HTML kind of a field
//! - [`FieldDescriptor`]: kind, value, attributes, capability flags and hints

mod descriptor;
mod kind;

pub use descriptor::FieldDescriptor;
pub use kind::FieldKind;
