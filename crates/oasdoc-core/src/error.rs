use thiserror::Error;

/// The single modeled failure: the source document could not be parsed.
/// Everything else (missing descriptions, empty parameter lists, absent
/// guides) is normal and simply omitted from output.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported Swagger version: {0}")]
    UnsupportedVersion(String),
}
