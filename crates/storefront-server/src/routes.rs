pub mod fields;
pub mod settings;
pub mod styles;
pub mod templates;
