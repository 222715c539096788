//! Storefront normalizes persisted template settings so that any storefront
//! template can render from one standard field set.
//!
//! The pipeline is: raw versioned settings → [`migrate`] → universal template
//! data ([`UniversalTemplateData`]) → responsive resolution for a
//! [`Breakpoint`] → renderer. Every step is a pure function over its input.

#[macro_use]
mod macros;

pub mod document;
pub mod edit_path;
pub mod error;
pub mod migrate;
pub mod responsive;
pub mod universal;

pub use document::{StoreSettings, TemplateId, VersionedDocument};
pub use edit_path::{
    EDIT_PATH_ATTRIBUTE, apply_edit, edit_attribute, edit_path, edit_path_for, field_for_edit_path,
    field_spec,
};
pub use error::{DataError, EditPathError, Result, StorefrontError};
pub use migrate::{CURRENT_SCHEMA_VERSION, Migration, migrate};
pub use responsive::{
    Breakpoint, BreakpointMap, ResponsiveValue, is_breakpoint_map, resolve_responsive_number,
    resolve_responsive_style, resolve_value,
};
pub use universal::{Color, FieldKind, FieldSpec, UNIVERSAL_FIELDS, UniversalTemplateData};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
