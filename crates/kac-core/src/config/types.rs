//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{DIALECT_GENERIC, DIALECT_KEEP_A_CHANGELOG, FORMAT_GENERIC};

/// Main configuration for kac
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Parser configuration
    pub parser: ParserConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Order in which parsed releases are returned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseOrder {
    /// Oldest release first (reverse of a Keep a Changelog document)
    #[default]
    OldestFirst,
    /// Releases in the order they appear in the document
    DocumentOrder,
}

/// Parser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Order of releases in the parsed changelog
    pub release_order: ReleaseOrder,

    /// Dialects tried during detection, in priority order
    pub dialects: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            release_order: ReleaseOrder::default(),
            dialects: vec![
                DIALECT_KEEP_A_CHANGELOG.to_string(),
                DIALECT_GENERIC.to_string(),
            ],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default render format (generic, markdown)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: FORMAT_GENERIC.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dialect_order() {
        let config = Config::default();
        assert_eq!(
            config.parser.dialects,
            vec!["keep-a-changelog".to_string(), "generic".to_string()]
        );
        assert_eq!(config.parser.release_order, ReleaseOrder::OldestFirst);
    }

    #[test]
    fn test_release_order_from_toml() {
        let config: Config = toml::from_str("[parser]\nrelease_order = \"document-order\"\n").unwrap();
        assert_eq!(config.parser.release_order, ReleaseOrder::DocumentOrder);
        assert_eq!(config.output.format, "generic");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("output:\n  format: markdown\n").unwrap();
        assert_eq!(config.output.format, "markdown");
        assert_eq!(config.parser.dialects.len(), 2);
    }
}
