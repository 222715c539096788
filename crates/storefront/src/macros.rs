//! Macro for declaring the universal field table
//!
//! Every universal field is declared exactly once. The macro expands one
//! declaration list into the `UniversalTemplateData` struct, its `Default`,
//! the adapter that reads it out of a raw layout, the per-breakpoint props
//! resolver, and the `UNIVERSAL_FIELDS` metadata slice the editor uses for
//! edit paths.
//!
//! ```ignore
//! universal_fields! {
//!     /// Large heading in the hero banner
//!     hero_title: String => "heroTitle" at "hero.title"
//!         aliases ["hero.heading"]
//!         default "Welcome";
//! }
//! ```

macro_rules! universal_fields {
    (
        $(
            $(#[$meta:meta])*
            $field:ident: $ty:ty => $name:literal at $path:literal
                $(aliases [$($alias:literal),* $(,)?])?
                default $default:expr;
        )*
    ) => {
        /// Template-agnostic field set every storefront template renders from
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct UniversalTemplateData {
            $(
                $(#[$meta])*
                #[serde(rename = $name)]
                pub $field: $ty,
            )*
        }

        impl Default for UniversalTemplateData {
            fn default() -> Self {
                Self {
                    $( $field: ($default).into(), )*
                }
            }
        }

        /// Metadata for every documented universal field, in declaration order
        pub const UNIVERSAL_FIELDS: &[$crate::universal::FieldSpec] = &[
            $(
                $crate::universal::FieldSpec {
                    name: $name,
                    edit_path: $path,
                    aliases: &[$($($alias),*)?],
                    kind: <$ty as $crate::universal::FieldValue>::KIND,
                },
            )*
        ];

        impl UniversalTemplateData {
            /// Normalize a raw layout into the universal field set
            ///
            /// For each field the edit path is tried first, then its historical
            /// aliases; the first well-typed value wins. Absent or malformed
            /// values fall back to the field's default.
            pub fn from_layout(layout: &serde_json::Map<String, serde_json::Value>) -> Self {
                Self {
                    $(
                        $field: $crate::universal::extract::<$ty>(
                            layout,
                            $path,
                            &[$($($alias),*)?],
                        )
                        .unwrap_or_else(|| ($default).into()),
                    )*
                }
            }

            /// Flat props for one breakpoint, every responsive field resolved
            ///
            /// A responsive value with nothing usable for `breakpoint` falls
            /// back to the field's default at that breakpoint, so every field
            /// is always present.
            pub fn resolve(
                &self,
                breakpoint: $crate::responsive::Breakpoint,
            ) -> serde_json::Map<String, serde_json::Value> {
                let mut props = serde_json::Map::new();
                $(
                    props.insert(
                        $name.to_string(),
                        <$ty as $crate::universal::FieldValue>::resolved(
                            &self.$field,
                            breakpoint,
                            &($default).into(),
                        ),
                    );
                )*
                props
            }
        }
    };
}
