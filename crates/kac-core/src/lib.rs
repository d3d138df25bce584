//! kac Core - Shared foundations for the kac changelog tools
//!
//! This crate provides the error types and configuration loading used by the
//! changelog transducer and the command-line interface.

pub mod config;
pub mod error;

pub use config::{Config, OutputConfig, ParserConfig, ReleaseOrder};
pub use error::{ChangelogError, ConfigError, KacError, Result};
