//! # Storefront Registry
//!
//! Static catalog of the storefront templates a seller can pick from. Each
//! template maps its id to the component that renders the storefront and the
//! component that renders its settings editor.
//!
//! Templates are registered once at startup and never change afterwards.
//! Lookups for unknown ids return `None` rather than failing.
//!
//! ```rust
//! use storefront_registry::{get_template, get_template_component};
//!
//! let classic = get_template("classic").unwrap();
//! assert_eq!(classic.name, "Classic");
//! assert!(get_template_component("no-such-template").is_none());
//! ```

pub mod catalog;
pub mod error;
pub mod registry;

pub use catalog::{BUILTIN_TEMPLATES, ComponentRef, DEFAULT_TEMPLATE_ID, TemplateMetadata};
pub use error::{RegistryError, Result};
pub use registry::{
    TemplateRegistry, get_template, get_template_component, get_template_or_default,
    get_template_settings, list_templates,
};
