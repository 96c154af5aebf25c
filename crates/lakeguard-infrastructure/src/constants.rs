//! Infrastructure layer constants
//!
//! Domain defaults (thresholds, property names, patterns) live in
//! `lakeguard_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lakeguard.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "lakeguard";

/// Environment variable prefix for configuration
///
/// Variables take the form `LAKEGUARD__SECTION__KEY`.
pub const CONFIG_ENV_PREFIX: &str = "LAKEGUARD";

/// Separator between prefix, section and key in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "LAKEGUARD_LOG";

/// Log file prefix when the configured path has no file stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "lakeguard";
