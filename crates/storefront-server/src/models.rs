//! Request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use storefront::{Breakpoint, Migration, UniversalTemplateData};
use storefront_registry::TemplateMetadata;

/// Optional `?breakpoint=` query parameter
#[derive(Debug, Deserialize)]
pub struct BreakpointQuery {
    pub breakpoint: Option<Breakpoint>,
}

/// Required `?breakpoint=` query parameter
#[derive(Debug, Deserialize)]
pub struct RequiredBreakpointQuery {
    pub breakpoint: Breakpoint,
}

/// Normalized data for one template
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDataResponse {
    pub template: &'static TemplateMetadata,
    pub migration: Migration,
    pub data: UniversalTemplateData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<Breakpoint>,
    /// Flat props resolved for `breakpoint`, when one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<Map<String, Value>>,
}

/// Editor write-back request
#[derive(Debug, Deserialize)]
pub struct EditRequest {
    /// Raw settings document, migrated before the edit is applied
    pub document: Value,
    pub path: String,
    pub value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    pub document: Value,
    /// Universal field the path belongs to, if any
    pub field: Option<&'static str>,
    pub migrated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPathResponse {
    pub field: &'static str,
    pub edit_path: String,
    pub attribute: String,
}
