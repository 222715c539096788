//! Property-based tests for migration and responsive resolution.
//!
//! - Idempotence: migrating an already migrated document changes nothing
//! - Monotonicity: every document at or below the current version ends there
//! - Totality: the adapter yields the full field set for any layout, and so
//!   do its resolved props at every breakpoint

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use storefront::{
    Breakpoint, CURRENT_SCHEMA_VERSION, ResponsiveValue, UNIVERSAL_FIELDS, UniversalTemplateData,
    migrate,
};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (0u32..2000).prop_map(Value::from),
        "[a-z#0-9]{0,8}".prop_map(Value::String),
    ]
}

fn field_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar_strategy(),
        (0u32..2000, 0u32..2000).prop_map(|(m, d)| json!({"mobile": m, "desktop": d})),
        (0u32..2000).prop_map(|d| json!({"desktop": d})),
        (0u32..2000).prop_map(|m| json!({"mobile": m})),
        (0u32..2000).prop_map(|t| json!({"tablet": t})),
    ]
}

fn section_strategy() -> impl Strategy<Value = Value> {
    let keys = prop::sample::select(vec![
        "imageHeight",
        "imageHeightMd",
        "titleSize",
        "titleSizeMd",
        "columns",
        "columnsMd",
        "logoHeight",
        "logoHeightMd",
        "hidden",
        "visible",
        "title",
        "primary",
    ]);
    prop_oneof![
        prop::collection::btree_map(keys, field_value_strategy(), 0..6)
            .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k.to_string(), v)).collect())),
        scalar_strategy(),
    ]
}

fn layout_strategy() -> impl Strategy<Value = Map<String, Value>> {
    let sections = prop::sample::select(vec!["hero", "header", "products", "colors", "footer"]);
    prop::collection::btree_map(sections, section_strategy(), 0..5)
        .prop_map(|m| m.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn document_strategy() -> impl Strategy<Value = Value> {
    (
        prop::option::of(prop_oneof![
            (0u32..=CURRENT_SCHEMA_VERSION + 2).prop_map(Value::from),
            "[0-9a-z]{0,2}".prop_map(Value::String),
        ]),
        layout_strategy(),
    )
        .prop_map(|(version, layout)| {
            let mut root = Map::new();
            if let Some(version) = version {
                root.insert("version".to_string(), version);
            }
            root.insert("layout".to_string(), Value::Object(layout));
            Value::Object(root)
        })
}

// =============================================================================
// MIGRATION PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn migration_is_idempotent(raw in document_strategy()) {
        let once = migrate(&raw);
        let twice = migrate(&once.doc.to_value());

        prop_assert!(!twice.migrated);
        prop_assert_eq!(twice.doc, once.doc);
    }

    #[test]
    fn migration_reaches_current_version(raw in document_strategy()) {
        let result = migrate(&raw);

        prop_assert!(result.to_version >= result.from_version);
        prop_assert_eq!(result.doc.version, result.to_version);
        prop_assert_eq!(result.migrated, result.from_version != result.to_version);
        if result.from_version <= CURRENT_SCHEMA_VERSION {
            prop_assert_eq!(result.to_version, CURRENT_SCHEMA_VERSION);
        }
    }

    #[test]
    fn adapter_is_total(layout in layout_strategy()) {
        let data = UniversalTemplateData::from_layout(&layout);
        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();

        for field in UNIVERSAL_FIELDS {
            prop_assert!(object.get(field.name).is_some_and(|v| !v.is_null()));
        }
    }

    #[test]
    fn resolved_props_are_total(layout in layout_strategy()) {
        let data = UniversalTemplateData::from_layout(&layout);

        for bp in Breakpoint::ALL {
            let props = data.resolve(bp);
            prop_assert_eq!(props.len(), UNIVERSAL_FIELDS.len());
            for field in UNIVERSAL_FIELDS {
                prop_assert!(props.get(field.name).is_some_and(|v| !v.is_null()));
            }
        }
    }
}

// =============================================================================
// RESOLVER PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn scalar_resolves_uniformly(value in -1.0e6f64..1.0e6) {
        let responsive = ResponsiveValue::uniform(value);
        for bp in Breakpoint::ALL {
            prop_assert_eq!(responsive.resolve(bp), Some(&value));
        }
    }

    #[test]
    fn split_resolves_own_then_desktop(mobile in 0.0f64..100.0, desktop in 0.0f64..100.0) {
        let responsive = ResponsiveValue::split(mobile, desktop);
        prop_assert_eq!(responsive.resolve(Breakpoint::Mobile), Some(&mobile));
        prop_assert_eq!(responsive.resolve(Breakpoint::Tablet), Some(&desktop));
        prop_assert_eq!(responsive.resolve(Breakpoint::Desktop), Some(&desktop));
    }
}
