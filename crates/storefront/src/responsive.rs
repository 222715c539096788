//! Breakpoints and responsive values
//!
//! A responsive value is either a bare value that applies to every breakpoint,
//! or a per-breakpoint map. Resolution is two-tier: a breakpoint's own value,
//! then `desktop`. Mobile never falls back to tablet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A named viewport tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// All breakpoints, smallest viewport first
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    /// The lowercase key used in persisted maps and edit paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// Whether `key` names a breakpoint
    pub fn is_key(key: &str) -> bool {
        key.parse::<Breakpoint>().is_ok()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown breakpoint: {0}")]
pub struct ParseBreakpointError(pub String);

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "desktop" => Ok(Breakpoint::Desktop),
            other => Err(ParseBreakpointError(other.to_string())),
        }
    }
}

/// Per-breakpoint values; any tier may be absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<T>,
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            mobile: None,
            tablet: None,
            desktop: None,
        }
    }
}

impl<T> BreakpointMap<T> {
    /// The value stored for exactly this breakpoint, without fallback
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Mobile => self.mobile.as_ref(),
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Desktop => self.desktop.as_ref(),
        }
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        match breakpoint {
            Breakpoint::Mobile => self.mobile = Some(value),
            Breakpoint::Tablet => self.tablet = Some(value),
            Breakpoint::Desktop => self.desktop = Some(value),
        }
    }
}

/// A value that is either uniform or varies per breakpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// Legacy bare value, applies to every breakpoint
    Scalar(T),
    /// Per-breakpoint values with desktop as the fallback tier
    Breakpoints(BreakpointMap<T>),
}

impl<T> ResponsiveValue<T> {
    /// A value that applies to every breakpoint
    pub fn uniform(value: T) -> Self {
        ResponsiveValue::Scalar(value)
    }

    /// A mobile/desktop split, the shape produced by schema migration
    pub fn split(mobile: T, desktop: T) -> Self {
        ResponsiveValue::Breakpoints(BreakpointMap {
            mobile: Some(mobile),
            tablet: None,
            desktop: Some(desktop),
        })
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, ResponsiveValue::Breakpoints(_))
    }

    /// Resolve the effective value for a breakpoint
    ///
    /// Scalars apply uniformly. Maps yield the breakpoint's own value, then
    /// `desktop`, then nothing.
    pub fn resolve(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            ResponsiveValue::Scalar(value) => Some(value),
            ResponsiveValue::Breakpoints(map) => {
                map.get(breakpoint).or(map.desktop.as_ref())
            }
        }
    }

    /// Resolve with a caller-supplied default for unresolvable maps
    pub fn resolve_or(&self, breakpoint: Breakpoint, default: T) -> T
    where
        T: Clone,
    {
        self.resolve(breakpoint).cloned().unwrap_or(default)
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Scalar(value)
    }
}

/// Resolve a responsive number for a breakpoint
pub fn resolve_responsive_number(value: &ResponsiveValue<f64>, breakpoint: Breakpoint) -> Option<f64> {
    value.resolve(breakpoint).copied()
}

/// Whether a JSON value has the breakpoint-map shape
///
/// Only non-empty objects whose keys are all breakpoint names qualify; any
/// other object is an ordinary value.
pub fn is_breakpoint_map(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty() && map.keys().all(|k| Breakpoint::is_key(k)),
        _ => false,
    }
}

/// Resolve one JSON value for a breakpoint
///
/// Non-responsive values are returned unchanged. `null` entries inside a map
/// count as absent. Returns `None` when a map has neither the breakpoint's own
/// value nor a desktop value.
pub fn resolve_value(value: &Value, breakpoint: Breakpoint) -> Option<Value> {
    if !is_breakpoint_map(value) {
        return Some(value.clone());
    }

    let present = |key: &str| value.get(key).filter(|v| !v.is_null());
    present(breakpoint.as_str())
        .or_else(|| present(Breakpoint::Desktop.as_str()))
        .cloned()
}

/// Resolve every entry of a style map for a breakpoint
///
/// Keys holding plain values pass through; keys holding breakpoint maps are
/// resolved independently. Keys that resolve to nothing are left out, so the
/// output only carries concrete values.
pub fn resolve_responsive_style(style: &Map<String, Value>, breakpoint: Breakpoint) -> Map<String, Value> {
    style
        .iter()
        .filter_map(|(key, value)| resolve_value(value, breakpoint).map(|v| (key.clone(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breakpoint_parse_and_display() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.as_str().parse::<Breakpoint>().unwrap(), bp);
            assert_eq!(bp.to_string(), bp.as_str());
        }
        assert!("Desktop".parse::<Breakpoint>().is_err());
        assert!("md".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn test_deserialize_scalar_and_map() {
        let scalar: ResponsiveValue<f64> = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(scalar, ResponsiveValue::Scalar(7.0));

        let map: ResponsiveValue<f64> =
            serde_json::from_value(json!({"mobile": 1, "desktop": 3})).unwrap();
        assert_eq!(map, ResponsiveValue::split(1.0, 3.0));

        let unknown: Result<ResponsiveValue<f64>, _> =
            serde_json::from_value(json!({"mobile": 1, "wide": 3}));
        assert!(unknown.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_tiers() {
        let value = ResponsiveValue::split(220.0, 420.0);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"mobile": 220.0, "desktop": 420.0})
        );
    }

    #[test]
    fn test_deserialize_partial_maps() {
        let mobile_only: ResponsiveValue<f64> = serde_json::from_value(json!({"mobile": 2})).unwrap();
        assert_eq!(mobile_only.resolve(Breakpoint::Mobile), Some(&2.0));
        assert_eq!(mobile_only.resolve(Breakpoint::Desktop), None);

        let labels: ResponsiveValue<String> =
            serde_json::from_value(json!({"tablet": "wide"})).unwrap();
        assert_eq!(labels.resolve(Breakpoint::Tablet).map(String::as_str), Some("wide"));
    }

    #[test]
    fn test_empty_map_uses_default() {
        let value: ResponsiveValue<f64> = ResponsiveValue::Breakpoints(BreakpointMap::default());
        assert_eq!(value.resolve(Breakpoint::Mobile), None);
        assert_eq!(value.resolve_or(Breakpoint::Mobile, 5.0), 5.0);
    }

    #[test]
    fn test_null_entry_counts_as_absent() {
        let value = json!({"mobile": null, "desktop": 4});
        assert_eq!(resolve_value(&value, Breakpoint::Mobile), Some(json!(4)));
    }
}
