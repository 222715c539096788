//! Universal template data
//!
//! Stores saved their settings under keys that changed over time and differed
//! between templates. This module maps any such layout onto one fixed field
//! set, so a template only ever reads `UniversalTemplateData` and never
//! branches on where a value used to live.
//!
//! The field table below is the single source of truth: each entry names the
//! field, the raw settings path the editor writes to (its edit path), older
//! paths still honored when reading, and the default used when nothing usable
//! is stored.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::{StoreSettings, VersionedDocument, lookup_path};
use crate::migrate::{Migration, migrate};
use crate::responsive::{Breakpoint, ResponsiveValue};

/// What kind of value a universal field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Number,
    Toggle,
    Color,
    ResponsiveNumber,
}

impl FieldKind {
    /// Whether edit paths for this field may carry a breakpoint suffix
    pub fn is_responsive(&self) -> bool {
        matches!(self, FieldKind::ResponsiveNumber)
    }
}

/// Declaration of one universal field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Wire name, e.g. `heroTitle`
    pub name: &'static str,
    /// Dot-delimited path into the layout that the editor writes to
    pub edit_path: &'static str,
    /// Older paths read when the edit path holds nothing usable
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
}

/// A hex color such as `#fff`, `#1f2937` or `#1f293780`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Parse a hex color, returning `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#')?;
        let valid = matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
        valid.then(|| Color(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    /// Build a color from a trusted literal; only used for field defaults
    fn from(s: &str) -> Self {
        Color(s.to_string())
    }
}

/// A type a universal field can hold
///
/// Reading is permissive: anything that cannot be interpreted yields `None`
/// and the field falls back to its default.
pub trait FieldValue: Sized + Serialize {
    const KIND: FieldKind;

    fn from_json(value: &Value) -> Option<Self>;

    /// The concrete value shown at `breakpoint`
    ///
    /// Only responsive values depend on the breakpoint; `fallback` is the
    /// field's default and covers maps with no usable entry.
    fn resolved(&self, _breakpoint: Breakpoint, _fallback: &Self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Number;

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Toggle;

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FieldValue for Color {
    const KIND: FieldKind = FieldKind::Color;

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().and_then(Color::parse)
    }
}

impl FieldValue for ResponsiveValue<f64> {
    const KIND: FieldKind = FieldKind::ResponsiveNumber;

    fn from_json(value: &Value) -> Option<Self> {
        if let Some(scalar) = f64::from_json(value) {
            return Some(ResponsiveValue::Scalar(scalar));
        }

        let map = value.as_object()?;
        if map.is_empty() || !map.keys().all(|k| Breakpoint::is_key(k)) {
            return None;
        }

        let mut parsed = crate::responsive::BreakpointMap::default();
        for bp in Breakpoint::ALL {
            if let Some(n) = map.get(bp.as_str()).and_then(f64::from_json) {
                parsed.set(bp, n);
            }
        }

        if parsed == crate::responsive::BreakpointMap::default() {
            None
        } else {
            Some(ResponsiveValue::Breakpoints(parsed))
        }
    }

    fn resolved(&self, breakpoint: Breakpoint, fallback: &Self) -> Value {
        let default = fallback.resolve(breakpoint).copied().unwrap_or_default();
        Value::from(self.resolve_or(breakpoint, default))
    }
}

/// Read a field from its edit path, falling back to aliases in order
pub fn extract<T: FieldValue>(layout: &Map<String, Value>, path: &str, aliases: &[&str]) -> Option<T> {
    std::iter::once(path)
        .chain(aliases.iter().copied())
        .find_map(|p| lookup_path(layout, p).and_then(T::from_json))
}

universal_fields! {
    /// Hero banner background image URL
    hero_image: String => "heroImage" at "hero.imageUrl"
        aliases ["hero.image", "hero.backgroundImage", "heroImage"]
        default "";
    /// Main hero heading
    hero_title: String => "heroTitle" at "hero.title"
        aliases ["hero.heading", "hero.headline"]
        default "Welcome to our store";
    hero_subtitle: String => "heroSubtitle" at "hero.subtitle"
        aliases ["hero.subheading", "hero.description"]
        default "";
    hero_button_text: String => "heroButtonText" at "hero.buttonText"
        aliases ["hero.ctaText"]
        default "Shop now";
    /// Scale factor applied to the hero image, 1.0 is unscaled
    hero_image_zoom: f64 => "heroImageZoom" at "hero.imageZoom"
        aliases ["hero.zoom"]
        default 1.0_f64;
    /// Hero image height in pixels
    hero_image_height: ResponsiveValue<f64> => "heroImageHeight" at "hero.imageHeight"
        default ResponsiveValue::split(240.0, 420.0);
    /// Hero heading font size in pixels
    hero_title_size: ResponsiveValue<f64> => "heroTitleSize" at "hero.titleSize"
        default ResponsiveValue::split(28.0, 48.0);
    hero_subtitle_size: ResponsiveValue<f64> => "heroSubtitleSize" at "hero.subtitleSize"
        default ResponsiveValue::split(16.0, 20.0);
    hero_visible: bool => "heroVisible" at "hero.visible" default true;

    primary_color: Color => "primaryColor" at "colors.primary"
        aliases ["theme.primaryColor", "primaryColor"]
        default "#111111";
    secondary_color: Color => "secondaryColor" at "colors.secondary"
        aliases ["theme.secondaryColor"]
        default "#6b7280";
    accent_color: Color => "accentColor" at "colors.accent"
        aliases ["theme.accentColor"]
        default "#f59e0b";
    background_color: Color => "backgroundColor" at "colors.background"
        aliases ["theme.backgroundColor"]
        default "#ffffff";
    text_color: Color => "textColor" at "colors.text"
        aliases ["theme.textColor"]
        default "#111111";

    store_name: String => "storeName" at "header.storeName"
        aliases ["header.title", "storeName"]
        default "My Store";
    logo_url: String => "logoUrl" at "header.logoUrl"
        aliases ["header.logo", "logo"]
        default "";
    logo_height: ResponsiveValue<f64> => "logoHeight" at "header.logoHeight"
        default ResponsiveValue::split(32.0, 48.0);

    announcement_text: String => "announcementText" at "announcement.text"
        aliases ["announcementBar.text"]
        default "";
    announcement_visible: bool => "announcementVisible" at "announcement.visible"
        aliases ["announcementBar.enabled"]
        default false;

    products_title: String => "productsTitle" at "products.title"
        aliases ["products.heading"]
        default "Our products";
    /// Number of product grid columns
    product_columns: ResponsiveValue<f64> => "productColumns" at "products.columns"
        default ResponsiveValue::split(2.0, 4.0);
    show_prices: bool => "showPrices" at "products.showPrices" default true;

    footer_text: String => "footerText" at "footer.text"
        aliases ["footer.copyright"]
        default "";
    footer_visible: bool => "footerVisible" at "footer.visible" default true;
}

impl UniversalTemplateData {
    pub fn from_document(doc: &VersionedDocument) -> Self {
        Self::from_layout(&doc.layout)
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::from_layout(&settings.document.layout)
    }

    /// Migrate a raw persisted document and normalize it in one go
    pub fn from_raw(raw: &Value) -> (Self, Migration) {
        let migration = migrate(raw);
        (Self::from_document(&migration.doc), migration)
    }

}
