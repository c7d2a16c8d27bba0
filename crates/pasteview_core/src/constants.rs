//! Shared constants used across PasteView crates.

/// Default HTTP port for the PasteView server.
pub const DEFAULT_PORT: u16 = 38417;

/// Prefix of the deep-link fragment that selects a line (`#L12`).
pub const LINE_FRAGMENT_PREFIX: &str = "#L";

/// Breakpoint below which paste controls move into the phone container.
pub const DEFAULT_NARROW_LAYOUT_QUERY: &str = "screen and (max-width: 767px)";

/// Upper bound on paste expiration (15 days).
pub const MAX_EXPIRATION_SECS: u64 = 15 * 24 * 60 * 60;

/// Form value meaning "never expire".
pub const NEVER_EXPIRE_VALUE: &str = "-1";

/// Identifier of the fallback language for unknown lookups.
pub const UNKNOWN_LANGUAGE_ID: &str = "unknown";

/// Cache lifetime advertised for the language list endpoint.
pub const LANGUAGES_CACHE_MAX_AGE_SECS: u64 = 3600;
