//! Shared constants for laureates.

/// SQLite file used when neither `--db` nor `LAUREATES_DB_PATH` is given.
pub const DEFAULT_DB_FILE: &str = "nobeldata.db";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "LAUREATES_DB_PATH";

/// Environment variable for the SQLite connection pool size.
pub const DB_POOL_SIZE_ENV: &str = "LAUREATES_DB_POOL_SIZE";

/// Connection pool size when `LAUREATES_DB_POOL_SIZE` is unset or invalid.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Date format used by the source dataset and by the JSON API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default HTTP port for `laureates serve`.
pub const DEFAULT_HTTP_PORT: u16 = 8000;
