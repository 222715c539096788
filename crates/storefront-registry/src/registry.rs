//! Template lookup by id

use std::collections::HashMap;

use once_cell::sync::Lazy;
use storefront::StoreSettings;
use tracing::warn;

use crate::catalog::{BUILTIN_TEMPLATES, ComponentRef, DEFAULT_TEMPLATE_ID, TemplateMetadata};
use crate::error::{RegistryError, Result};

/// Immutable index over a static list of templates
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: &'static [TemplateMetadata],
    by_id: HashMap<&'static str, &'static TemplateMetadata>,
}

static BUILTIN: Lazy<TemplateRegistry> = Lazy::new(|| TemplateRegistry::index(BUILTIN_TEMPLATES));

impl TemplateRegistry {
    /// Build a registry, rejecting invalid metadata and duplicate ids
    pub fn new(templates: &'static [TemplateMetadata]) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(templates.len());
        for template in templates {
            template.validate()?;
            if by_id.insert(template.id, template).is_some() {
                return Err(RegistryError::DuplicateTemplate(template.id.to_string()));
            }
        }
        Ok(Self { templates, by_id })
    }

    /// Index without validation; on duplicate ids the first entry wins
    fn index(templates: &'static [TemplateMetadata]) -> Self {
        let mut by_id = HashMap::with_capacity(templates.len());
        for template in templates {
            if by_id.contains_key(template.id) {
                warn!(id = template.id, "duplicate template id ignored");
                continue;
            }
            by_id.insert(template.id, template);
        }
        Self { templates, by_id }
    }

    /// The process-wide registry of built-in templates
    pub fn builtin() -> &'static TemplateRegistry {
        &BUILTIN
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&'static TemplateMetadata> {
        self.by_id.get(id.as_ref()).copied()
    }

    pub fn component(&self, id: impl AsRef<str>) -> Option<ComponentRef> {
        self.get(id).map(|t| t.component)
    }

    pub fn settings_component(&self, id: impl AsRef<str>) -> Option<ComponentRef> {
        self.get(id).map(|t| t.settings_component)
    }

    /// Like [`get`](Self::get) but with a typed error for unknown ids
    pub fn require(&self, id: impl AsRef<str>) -> Result<&'static TemplateMetadata> {
        let id = id.as_ref();
        self.get(id)
            .ok_or_else(|| RegistryError::TemplateNotFound(id.to_string()))
    }

    /// Look up a template, falling back to `fallback` and then the first entry
    pub fn get_or(&self, id: impl AsRef<str>, fallback: &str) -> Option<&'static TemplateMetadata> {
        self.get(id)
            .or_else(|| self.get(fallback))
            .or_else(|| self.templates.first())
    }

    /// Template selected by a store, or the default one if it was removed
    pub fn for_settings(&self, settings: &StoreSettings) -> Option<&'static TemplateMetadata> {
        let template = self.get_or(&settings.template, DEFAULT_TEMPLATE_ID);
        if template.is_some_and(|t| t.id != settings.template.as_ref()) {
            warn!(template = %settings.template, "store references unknown template, using fallback");
        }
        template
    }

    /// All templates in registration order
    pub fn list(&self) -> &'static [TemplateMetadata] {
        self.templates
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Get a built-in template by id
pub fn get_template(id: impl AsRef<str>) -> Option<&'static TemplateMetadata> {
    TemplateRegistry::builtin().get(id)
}

/// Get the storefront component of a built-in template
pub fn get_template_component(id: impl AsRef<str>) -> Option<ComponentRef> {
    TemplateRegistry::builtin().component(id)
}

/// Get the settings editor component of a built-in template
pub fn get_template_settings(id: impl AsRef<str>) -> Option<ComponentRef> {
    TemplateRegistry::builtin().settings_component(id)
}

/// Get a built-in template, falling back to the default one for unknown ids
pub fn get_template_or_default(id: impl AsRef<str>) -> &'static TemplateMetadata {
    TemplateRegistry::builtin()
        .get_or(id, DEFAULT_TEMPLATE_ID)
        .unwrap_or(&BUILTIN_TEMPLATES[0])
}

/// All built-in templates
pub fn list_templates() -> &'static [TemplateMetadata] {
    BUILTIN_TEMPLATES
}
