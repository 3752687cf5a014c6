pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod spec;

use crate::error::ParseError;
use spec::ApiDocument;

/// Parse an API document from YAML.
pub fn from_yaml(input: &str) -> Result<ApiDocument, ParseError> {
    let doc: ApiDocument = serde_yaml_ng::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Parse an API document from JSON.
pub fn from_json(input: &str) -> Result<ApiDocument, ParseError> {
    let doc: ApiDocument = serde_json::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

fn validate_version(doc: &ApiDocument) -> Result<(), ParseError> {
    if !doc.swagger.starts_with('2') {
        return Err(ParseError::UnsupportedVersion(doc.swagger.clone()));
    }
    Ok(())
}
