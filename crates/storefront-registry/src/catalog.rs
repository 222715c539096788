use serde::Serialize;

use crate::error::RegistryError;

/// Reference to a frontend component bundle, e.g. `templates/classic/Storefront`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(pub &'static str);

impl ComponentRef {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Descriptive information about a storefront template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    /// Unique identifier, stored alongside each store's settings
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub description: &'static str,
    /// Component that renders the storefront
    pub component: ComponentRef,
    /// Component that renders the seller-side settings editor
    pub settings_component: ComponentRef,
}

impl TemplateMetadata {
    /// Validate metadata fields
    pub fn validate(&self) -> Result<(), RegistryError> {
        validate_id(self.id)?;

        if self.name.trim().is_empty() {
            return Err(RegistryError::InvalidMetadata {
                id: self.id.to_string(),
                reason: "Name cannot be empty".into(),
            });
        }

        for (label, component) in [("component", self.component), ("settings component", self.settings_component)] {
            if component.0.trim().is_empty() {
                return Err(RegistryError::InvalidMetadata {
                    id: self.id.to_string(),
                    reason: format!("{} reference cannot be empty", label),
                });
            }
        }

        Ok(())
    }
}

/// Validate template id format (lowercase letters, digits and dashes)
pub fn validate_id(id: &str) -> Result<(), RegistryError> {
    if id.is_empty() || id.len() > 64 {
        return Err(RegistryError::InvalidId {
            id: id.to_string(),
            reason: "Id length must be 1-64 characters".to_string(),
        });
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars {
        return Err(RegistryError::InvalidId {
            id: id.to_string(),
            reason: "Id can only contain lowercase letters, digits and dashes".to_string(),
        });
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(RegistryError::InvalidId {
            id: id.to_string(),
            reason: "Id cannot start or end with '-'".to_string(),
        });
    }

    Ok(())
}

/// Template used when a store has none selected or references a removed one
pub const DEFAULT_TEMPLATE_ID: &str = "classic";

macro_rules! template {
    ($id:literal, $name:literal, $description:literal) => {
        TemplateMetadata {
            id: $id,
            name: $name,
            description: $description,
            component: ComponentRef(concat!("templates/", $id, "/Storefront")),
            settings_component: ComponentRef(concat!("templates/", $id, "/Settings")),
        }
    };
}

/// Templates shipped with the storefront builder
pub static BUILTIN_TEMPLATES: &[TemplateMetadata] = &[
    template!("classic", "Classic", "Timeless layout with a full-width hero and product grid"),
    template!("modern", "Modern", "Bold typography and edge-to-edge imagery"),
    template!("minimal", "Minimal", "Plenty of white space, products front and center"),
    template!("boutique", "Boutique", "Elegant layout for curated collections"),
    template!("fashion", "Fashion", "Lookbook-style hero with large product cards"),
    template!("electronics", "Electronics", "Dense grid with specs-forward product cards"),
    template!("food", "Food & Grocery", "Warm palette and category shortcuts for daily shopping"),
    template!("beauty", "Beauty", "Soft colors and close-up product imagery"),
    template!("handmade", "Handmade", "Story-driven layout for makers and artisans"),
    template!("sports", "Sports", "High-contrast layout for gear and apparel"),
    template!("books", "Books", "List-friendly layout for catalogs with long titles"),
    template!("jewelry", "Jewelry", "Dark, luxurious layout with zoomable hero"),
];
