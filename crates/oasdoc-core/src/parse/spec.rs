use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::schema::SchemaDefinition;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,
}

/// A prose guide section carried in the `x-documentation` extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub content: String,
}

/// Top-level Swagger 2.0 API document.
///
/// Paths, definitions, and every nested mapping preserve the source
/// document's own key order; emitted document order is a user-visible
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    pub swagger: String,

    pub info: Info,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, SchemaDefinition>,

    #[serde(
        rename = "x-documentation",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub documentation: Vec<GuideSection>,
}
