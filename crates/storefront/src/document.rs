//! Persisted settings documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DataError, Result};
use crate::migrate::{CURRENT_SCHEMA_VERSION, Migration, migrate};

/// Identifier of a storefront template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TemplateId(pub String);

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        TemplateId(s)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        TemplateId(s.to_string())
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A store's template settings as persisted
///
/// `layout` maps section keys (`hero`, `colors`, ...) to section configs.
/// Top-level keys this layer does not know about are carried in `extra` so
/// nothing is lost on a round trip through the migrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedDocument {
    pub version: u32,

    #[serde(default)]
    pub layout: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VersionedDocument {
    /// An empty document at the current schema version
    pub fn new() -> Self {
        Self {
            version: CURRENT_SCHEMA_VERSION,
            layout: Map::new(),
            extra: Map::new(),
        }
    }

    /// Get a section config if it is an object
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.layout.get(key).and_then(Value::as_object)
    }

    /// Look up a dot-delimited path inside the layout
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        lookup_path(&self.layout, path)
    }

    /// Parse a document that is already in schema shape
    ///
    /// Unlike [`migrate`] this is strict: a missing or malformed `version` is
    /// an error rather than a guess.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize for persistence
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.to_value()).map_err(|e| {
            DataError::Serialization {
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn to_value(&self) -> Value {
        let mut root = self.extra.clone();
        root.insert("version".to_string(), Value::from(self.version));
        root.insert("layout".to_string(), Value::Object(self.layout.clone()));
        Value::Object(root)
    }
}

impl Default for VersionedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings of one store, tagged with the template they were saved for
///
/// This is the only place template identity travels with raw data; everything
/// downstream works on the normalized shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub template: TemplateId,
    pub document: VersionedDocument,
}

impl StoreSettings {
    /// Read raw persisted settings, migrating them to the current schema
    pub fn load(template: impl Into<TemplateId>, raw: &Value) -> (Self, Migration) {
        let migration = migrate(raw);
        let settings = StoreSettings {
            template: template.into(),
            document: migration.doc.clone(),
        };
        (settings, migration)
    }
}

/// Walk a dot-delimited path through nested objects
pub(crate) fn lookup_path<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
