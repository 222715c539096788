//! Edit paths for the visual editor
//!
//! An edit path is the dot-delimited location of a raw layout value, with an
//! optional breakpoint suffix for responsive fields (`hero.imageHeight.mobile`).
//! Rendered elements carry it in a `data-edit-path` attribute; a click in the
//! editor resolves it back to the universal field and writes the new value
//! there with [`apply_edit`].

use serde_json::{Map, Value, json};

use crate::document::VersionedDocument;
use crate::error::{EditPathError, value_type_name};
use crate::responsive::Breakpoint;
use crate::universal::{FieldSpec, UNIVERSAL_FIELDS};

/// Attribute the editor overlay looks for on rendered elements
pub const EDIT_PATH_ATTRIBUTE: &str = "data-edit-path";

/// Look up a documented universal field by its wire name
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    UNIVERSAL_FIELDS.iter().find(|f| f.name == name)
}

/// Edit path of a universal field
///
/// Every documented field has one. Unknown names are an editor wiring bug and
/// fail with [`EditPathError::UnknownField`].
pub fn edit_path(name: &str) -> Result<&'static str, EditPathError> {
    field_spec(name)
        .map(|f| f.edit_path)
        .ok_or_else(|| EditPathError::UnknownField {
            name: name.to_string(),
        })
}

/// Edit path targeting one breakpoint
///
/// The breakpoint suffix only applies to responsive fields; other fields get
/// their plain edit path whatever the breakpoint.
pub fn edit_path_for(name: &str, breakpoint: Option<Breakpoint>) -> Result<String, EditPathError> {
    let spec = field_spec(name).ok_or_else(|| EditPathError::UnknownField {
        name: name.to_string(),
    })?;

    Ok(match breakpoint {
        Some(bp) if spec.kind.is_responsive() => format!("{}.{}", spec.edit_path, bp),
        _ => spec.edit_path.to_string(),
    })
}

/// Render the attribute injected on an element showing `name`
pub fn edit_attribute(name: &str, breakpoint: Option<Breakpoint>) -> Result<String, EditPathError> {
    let path = edit_path_for(name, breakpoint)?;
    Ok(format!("{}=\"{}\"", EDIT_PATH_ATTRIBUTE, path))
}

/// Reverse lookup from an edit path to its field
///
/// Accepts a trailing breakpoint segment on responsive fields.
pub fn field_for_edit_path(path: &str) -> Option<&'static FieldSpec> {
    if let Some(spec) = UNIVERSAL_FIELDS.iter().find(|f| f.edit_path == path) {
        return Some(spec);
    }

    let (base, suffix) = path.rsplit_once('.')?;
    if !Breakpoint::is_key(suffix) {
        return None;
    }
    UNIVERSAL_FIELDS
        .iter()
        .find(|f| f.edit_path == base && f.kind.is_responsive())
}

/// Split a path into segments, rejecting empty ones
fn segments(path: &str) -> Result<Vec<&str>, EditPathError> {
    if path.trim().is_empty() {
        return Err(EditPathError::InvalidPath {
            path: path.to_string(),
            reason: "path is empty".to_string(),
        });
    }

    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(EditPathError::InvalidPath {
            path: path.to_string(),
            reason: "path contains an empty segment".to_string(),
        });
    }
    Ok(segments)
}

/// Write `value` at an edit path, returning the updated document
///
/// The input document is not modified. Missing sections are created. A
/// breakpoint write onto a responsive field still holding a bare number
/// first spreads that number to `{mobile, desktop}` so the other breakpoints
/// keep rendering as before.
pub fn apply_edit(
    doc: &VersionedDocument,
    path: &str,
    value: Value,
) -> Result<VersionedDocument, EditPathError> {
    let segments = segments(path)?;
    let mut updated = doc.clone();

    if let Some((base, _)) = path.rsplit_once('.') {
        let targets_breakpoint = field_for_edit_path(path).is_some_and(|f| f.edit_path == base);
        if targets_breakpoint {
            spread_scalar(&mut updated.layout, base);
        }
    }

    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| EditPathError::InvalidPath {
            path: path.to_string(),
            reason: "path is empty".to_string(),
        })?;

    let mut current: &mut Map<String, Value> = &mut updated.layout;
    for (i, segment) in parents.iter().enumerate() {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
        current = match slot {
            Value::Object(map) => map,
            other => {
                return Err(EditPathError::NotAnObject {
                    path: path.to_string(),
                    segment: parents[..=i].join("."),
                    found: value_type_name(other),
                });
            }
        };
    }

    current.insert(last.to_string(), value);
    Ok(updated)
}

/// Replace a bare number at `base` with `{mobile: n, desktop: n}`
fn spread_scalar(layout: &mut Map<String, Value>, base: &str) {
    let mut segments = base.split('.');
    let Some(first) = segments.next() else {
        return;
    };
    let mut current = match layout.get_mut(first) {
        Some(value) => value,
        None => return,
    };
    for segment in segments {
        current = match current.as_object_mut().and_then(|m| m.get_mut(segment)) {
            Some(value) => value,
            None => return,
        };
    }

    if !current.is_number() {
        return;
    }
    let scalar = current.clone();
    *current = json!({ "mobile": scalar.clone(), "desktop": scalar });
}
