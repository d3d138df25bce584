//! Exit codes for the CLI

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Document not recognized as any supported dialect
pub const NOT_RECOGNIZED: u8 = 3;

/// Recognized document failed to parse
pub const PARSE_ERROR: u8 = 4;
