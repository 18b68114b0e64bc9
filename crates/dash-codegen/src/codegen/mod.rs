//! Source generation for the Python and R bindings.
//!
//! Renderers are pure: each takes a [`ComponentDescriptor`](crate::ComponentDescriptor)
//! or package data and returns file contents. Writing is done by the
//! [`Generator`](crate::Generator).

mod py_types;
mod r_types;
pub mod help;
pub mod python;
pub mod r;
pub mod rpackage;

pub use py_types::to_py_type;
pub use r_types::to_r_type;

/// First lines of every generated Python and R source file.
pub const AUTO_GENERATED_HEADER: &str = "# AUTO GENERATED FILE - DO NOT EDIT\n\n";
