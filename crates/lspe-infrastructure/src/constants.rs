//! Infrastructure layer constants
//!
//! Domain constants live in `lspe_domain::constants`.

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lspe.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "lspe";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "LSPE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING
// ============================================================================

/// Environment variable holding an `EnvFilter` directive that overrides the
/// configured level
pub const LOG_ENV_VAR: &str = "LSPE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// SNAPSHOTS
// ============================================================================

/// Version written into new rank set documents
pub const RANK_SET_FORMAT_VERSION: u32 = 1;
