//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "kac.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "kac.yaml";

/// Keep a Changelog markdown dialect
pub const DIALECT_KEEP_A_CHANGELOG: &str = "keep-a-changelog";

/// Generic line-oriented changelog grammar
pub const DIALECT_GENERIC: &str = "generic";

/// Generic grammar render format
pub const FORMAT_GENERIC: &str = "generic";

/// Keep a Changelog markdown render format
pub const FORMAT_MARKDOWN: &str = "markdown";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML, ".kac.toml", ".kac.yaml"]
}

/// Dialect names the parser registry understands
pub fn known_dialects() -> &'static [&'static str] {
    &[DIALECT_KEEP_A_CHANGELOG, DIALECT_GENERIC]
}

/// Render formats the formatter registry understands
pub fn known_formats() -> &'static [&'static str] {
    &[FORMAT_GENERIC, FORMAT_MARKDOWN]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# kac configuration

[parser]
release_order = "oldest-first"
dialects = ["keep-a-changelog", "generic"]

[output]
format = "generic"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let defaults = Config::default();
        assert_eq!(config.parser.dialects, defaults.parser.dialects);
        assert_eq!(config.parser.release_order, defaults.parser.release_order);
        assert_eq!(config.output.format, defaults.output.format);
    }

    #[test]
    fn test_default_config_toml_round_trips() {
        let rendered = default_config_toml();
        let config: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(config.output.format, FORMAT_GENERIC);
    }
}
