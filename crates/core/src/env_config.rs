//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Resolve the SQLite pool size from `LAUREATES_DB_POOL_SIZE`.
///
/// Zero is rejected by r2d2, so it falls back to the default as well.
#[must_use]
pub fn db_pool_size() -> u32 {
    match env_parse_with_default(DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE) {
        0 => {
            tracing::warn!(var = DB_POOL_SIZE_ENV, "pool size 0 is invalid, using default");
            DEFAULT_DB_POOL_SIZE
        },
        n => n,
    }
}
