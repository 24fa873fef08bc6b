//! Filesystem path constants.

/// Default function configuration file, relative to the function root.
pub const DEFAULT_FUNCTION_CONFIG: &str = "func.yaml";
