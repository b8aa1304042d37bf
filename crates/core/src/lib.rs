//! # promptgrab core
//!
//! Domain types for the template catalog: templates, categories, user
//! templates, and the built-in template set. This crate has no I/O; every
//! other crate in the workspace builds on these types.

pub mod builtin;
pub mod error;
pub mod template;

// Re-export key types at crate root for ergonomics
pub use builtin::builtin_templates;
pub use error::{Error, Result};
pub use template::{
    Category, Template, TemplateGroup, TemplateId, USER_TEMPLATE_CATEGORY_ID,
    USER_TEMPLATE_CATEGORY_NAME, UserTemplate, to_catalog_entry, user_template_category,
};
