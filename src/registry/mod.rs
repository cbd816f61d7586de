//! Template registry.
//!
//! The set of templates is closed: each [`TemplateKey`] variant maps to one
//! static [`TemplateDescriptor`], so adding or removing a template is a
//! compile-time-checked change.
//!
//! # Example
//!
//! ```
//! use create_smithery::registry::TemplateKey;
//! use create_smithery::config::Transport;
//!
//! let key = TemplateKey::select(true, Transport::Stdio);
//! assert_eq!(key, TemplateKey::Gpt);
//! assert!(key.descriptor().beta_warning.is_some());
//! ```

pub mod template;

pub use template::{
    lookup, TemplateDescriptor, TemplateKey, REPOSITORY_ROOT, TEMPLATE_REPOSITORY,
};
