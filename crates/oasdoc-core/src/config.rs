use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::parse::operation::HttpMethod;

/// Source document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

/// Which markup dialect the rendered document uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Confluence,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Confluence => "confluence",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Override for the per-operation heading text, replacing the default
/// `` `METHOD /path` `` form.
pub type MethodPathRenderer = Box<dyn Fn(HttpMethod, &str) -> String>;

/// Options recognized by the assembler. API-only; the heading renderer is
/// a closure and never comes from a config file.
#[derive(Default)]
pub struct ConvertOptions {
    /// Emit a table-of-contents table before the operation details.
    pub toc: bool,
    pub method_path: Option<MethodPathRenderer>,
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("toc", &self.toc)
            .field("method_path", &self.method_path.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Top-level project configuration loaded from `.oasdoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OasdocConfig {
    pub input: String,
    /// Output file; `None` means stdout.
    pub output: Option<String>,
    pub format: OutputFormat,
    pub toc: bool,
}

impl Default for OasdocConfig {
    fn default() -> Self {
        Self {
            input: "swagger.yaml".to_string(),
            output: None,
            format: OutputFormat::Markdown,
            toc: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oasdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OasdocConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OasdocConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# oasdoc configuration
input: swagger.yaml
format: markdown      # markdown | confluence
toc: false            # emit a table of contents before operation details
# output: api.md      # omit to print to stdout
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OasdocConfig::default();
        assert_eq!(config.input, "swagger.yaml");
        assert_eq!(config.output, None);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert!(!config.toc);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: petstore.yaml
output: docs/api.wiki
format: confluence
toc: true
"#;
        let config: OasdocConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "petstore.yaml");
        assert_eq!(config.output.as_deref(), Some("docs/api.wiki"));
        assert_eq!(config.format, OutputFormat::Confluence);
        assert!(config.toc);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: api.yaml\n";
        let config: OasdocConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.yaml");
        // Defaults applied
        assert_eq!(config.format, OutputFormat::Markdown);
        assert!(!config.toc);
    }

    #[test]
    fn test_default_content_round_trips() {
        let config: OasdocConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "swagger.yaml");
        assert!(!config.toc);
    }
}
