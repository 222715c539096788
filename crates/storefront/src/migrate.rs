//! Schema migration for persisted template settings
//!
//! Settings documents carry an integer `version`. Migration walks the ordered
//! chain of steps from the document's version up to [`CURRENT_SCHEMA_VERSION`].
//! Every step checks whether its target already has the post-migration shape
//! and leaves it alone if so, which makes migration idempotent.
//!
//! Migration never fails. Malformed input degrades to the closest renderable
//! document and is left for the universal adapter to default.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::document::VersionedDocument;
use crate::responsive::is_breakpoint_map;

/// Schema version produced by [`migrate`]
pub const CURRENT_SCHEMA_VERSION: u32 = 3;

/// Outcome of migrating one document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Migration {
    pub doc: VersionedDocument,
    /// True iff at least one step ran (`from_version != to_version`)
    pub migrated: bool,
    pub from_version: u32,
    pub to_version: u32,
}

/// A scalar size field promoted to a `{mobile, desktop}` map in v2
///
/// v1 stored the mobile size in `field` and the desktop size in a separate
/// `legacy_desktop` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsivePromotion {
    pub section: &'static str,
    pub field: &'static str,
    pub legacy_desktop: &'static str,
}

pub const RESPONSIVE_PROMOTIONS: &[ResponsivePromotion] = &[
    ResponsivePromotion {
        section: "hero",
        field: "imageHeight",
        legacy_desktop: "imageHeightMd",
    },
    ResponsivePromotion {
        section: "hero",
        field: "titleSize",
        legacy_desktop: "titleSizeMd",
    },
    ResponsivePromotion {
        section: "hero",
        field: "subtitleSize",
        legacy_desktop: "subtitleSizeMd",
    },
    ResponsivePromotion {
        section: "header",
        field: "logoHeight",
        legacy_desktop: "logoHeightMd",
    },
    ResponsivePromotion {
        section: "products",
        field: "columns",
        legacy_desktop: "columnsMd",
    },
];

struct MigrationStep {
    /// Version this step upgrades from; it produces `from + 1`
    from: u32,
    name: &'static str,
    apply: fn(&mut Map<String, Value>),
}

const STEPS: &[MigrationStep] = &[
    MigrationStep {
        from: 1,
        name: "responsive-sizes",
        apply: promote_responsive_sizes,
    },
    MigrationStep {
        from: 2,
        name: "section-visibility",
        apply: visibility_flags,
    },
];

/// Migrate a raw persisted document to the current schema version
///
/// The input is never modified. A document already at the current version
/// comes back unchanged with `migrated: false`. Documents written by a newer
/// schema are also passed through untouched, reporting their own version on
/// both ends.
pub fn migrate(raw: &Value) -> Migration {
    let Some(root) = raw.as_object() else {
        warn!(
            "settings document is not an object, using an empty document at version {}",
            CURRENT_SCHEMA_VERSION
        );
        return Migration {
            doc: VersionedDocument::new(),
            migrated: false,
            from_version: CURRENT_SCHEMA_VERSION,
            to_version: CURRENT_SCHEMA_VERSION,
        };
    };

    let from_version = infer_version(root.get("version"));

    let mut layout = match root.get("layout") {
        Some(Value::Object(layout)) => layout.clone(),
        Some(other) => {
            warn!("layout is {}, treating it as empty", crate::error::value_type_name(other));
            Map::new()
        }
        None => Map::new(),
    };

    let extra: Map<String, Value> = root
        .iter()
        .filter(|(key, _)| key.as_str() != "version" && key.as_str() != "layout")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if from_version > CURRENT_SCHEMA_VERSION {
        warn!(
            "settings document version {} is newer than {}, leaving it untouched",
            from_version, CURRENT_SCHEMA_VERSION
        );
        return Migration {
            doc: VersionedDocument {
                version: from_version,
                layout,
                extra,
            },
            migrated: false,
            from_version,
            to_version: from_version,
        };
    }

    let mut version = from_version;
    for step in STEPS.iter().skip_while(|step| step.from < from_version) {
        (step.apply)(&mut layout);
        version = step.from + 1;
        debug!(step = step.name, to = version, "applied migration step");
    }

    Migration {
        doc: VersionedDocument {
            version,
            layout,
            extra,
        },
        migrated: from_version != version,
        from_version,
        to_version: version,
    }
}

/// Read the `version` field, treating anything unusable as version 1
fn infer_version(value: Option<&Value>) -> u32 {
    let version = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|_| 1))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    version
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(1)
        .max(1)
}

/// v1 -> v2: promote scalar sizes plus their `*Md` desktop twin into maps
fn promote_responsive_sizes(layout: &mut Map<String, Value>) {
    for promotion in RESPONSIVE_PROMOTIONS {
        if let Some(Value::Object(section)) = layout.get_mut(promotion.section) {
            promote_field(section, promotion.field, promotion.legacy_desktop);
        }
    }
}

fn promote_field(section: &mut Map<String, Value>, field: &str, legacy_desktop: &str) {
    let legacy = section.get(legacy_desktop).filter(|v| v.is_number()).cloned();

    match section.get(field) {
        Some(current) if is_breakpoint_map(current) => {
            // Already responsive; the legacy twin must not override it.
            section.remove(legacy_desktop);
        }
        Some(current) if current.is_number() => {
            let mobile = current.clone();
            let desktop = legacy.unwrap_or_else(|| mobile.clone());
            section.insert(field.to_string(), json!({ "mobile": mobile, "desktop": desktop }));
            section.remove(legacy_desktop);
        }
        None | Some(Value::Null) => {
            if let Some(desktop) = legacy {
                section.insert(field.to_string(), json!({ "desktop": desktop }));
                section.remove(legacy_desktop);
            }
        }
        Some(_) => {}
    }
}

/// v2 -> v3: sections store `visible` instead of `hidden`
fn visibility_flags(layout: &mut Map<String, Value>) {
    for section in layout.values_mut().filter_map(Value::as_object_mut) {
        let Some(hidden) = section.get("hidden").and_then(Value::as_bool) else {
            continue;
        };
        if !section.contains_key("visible") {
            section.insert("visible".to_string(), Value::Bool(!hidden));
        }
        section.remove("hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_form_contiguous_chain() {
        let mut expected = 1;
        for step in STEPS {
            assert_eq!(step.from, expected, "step {} out of order", step.name);
            expected += 1;
        }
        assert_eq!(expected, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_infer_version() {
        assert_eq!(infer_version(None), 1);
        assert_eq!(infer_version(Some(&json!(2))), 2);
        assert_eq!(infer_version(Some(&json!("2"))), 2);
        assert_eq!(infer_version(Some(&json!(" 3 "))), 3);
        assert_eq!(infer_version(Some(&json!(2.0))), 2);
        assert_eq!(infer_version(Some(&json!(2.5))), 1);
        assert_eq!(infer_version(Some(&json!(-4))), 1);
        assert_eq!(infer_version(Some(&json!(0))), 1);
        assert_eq!(infer_version(Some(&json!("v2"))), 1);
        assert_eq!(infer_version(Some(&json!(null))), 1);
        assert_eq!(infer_version(Some(&json!(5_000_000_000u64))), u32::MAX);
        assert_eq!(infer_version(Some(&json!(5e9))), u32::MAX);
    }

    #[test]
    fn test_promote_field_without_legacy_twin() {
        let mut section = json!({"titleSize": 24}).as_object().cloned().unwrap();
        promote_field(&mut section, "titleSize", "titleSizeMd");
        assert_eq!(section["titleSize"], json!({"mobile": 24, "desktop": 24}));
    }

    #[test]
    fn test_promote_field_only_legacy_twin() {
        let mut section = json!({"imageHeightMd": 500}).as_object().cloned().unwrap();
        promote_field(&mut section, "imageHeight", "imageHeightMd");
        assert_eq!(section["imageHeight"], json!({"desktop": 500}));
        assert!(!section.contains_key("imageHeightMd"));
    }

    #[test]
    fn test_promote_field_leaves_malformed_value() {
        let mut section = json!({"imageHeight": "tall", "imageHeightMd": 500})
            .as_object()
            .cloned()
            .unwrap();
        promote_field(&mut section, "imageHeight", "imageHeightMd");
        assert_eq!(section["imageHeight"], json!("tall"));
        assert_eq!(section["imageHeightMd"], json!(500));
    }
}
