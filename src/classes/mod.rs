//! Class name resolution for Bootstrap 3.
//!
//! - [`tables`]: the fixed translation tables and whitelists
//! - [`ClassList`]: an ordered, de-duplicated class list
//! - resolver functions turning style hints into framework classes

mod list;
mod resolve;
pub mod tables;

pub use list::ClassList;
pub use resolve::{
    prepend_with, resolve_button_classes, resolve_field_classes, resolve_state_class,
    BUTTON_BASE, BUTTON_PREFIX,
};
