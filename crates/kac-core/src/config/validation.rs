//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::{known_dialects, known_formats};
use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_parser(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_parser(config: &Config) -> Result<()> {
    if config.parser.dialects.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "parser.dialects".to_string(),
            message: "at least one dialect is required".to_string(),
        }
        .into());
    }

    let known = known_dialects();
    let mut seen = HashSet::new();
    for (i, dialect) in config.parser.dialects.iter().enumerate() {
        if !known.contains(&dialect.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("parser.dialects[{}]", i),
                message: format!("must be one of: {}", known.join(", ")),
            }
            .into());
        }

        if !seen.insert(dialect.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("parser.dialects[{}]", i),
                message: format!("dialect '{}' is listed more than once", dialect),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let valid_formats = known_formats();
    if !valid_formats.contains(&config.output.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "output.format".to_string(),
            message: format!("must be one of: {}", valid_formats.join(", ")),
        }
        .into());
    }

    Ok(())
}
