//! Scoped environment overrides for tests.
//!
//! Only built for tests and the `test-support` feature.

use std::sync::{Mutex, OnceLock};

/// Lock serializing environment mutation across test threads (config and bind tests).
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Set an environment variable, tolerating toolchains where this is `unsafe`.
#[allow(unused_unsafe)]
pub fn set_env_var(key: &str, value: &str) {
    // SAFETY: Callers must serialize mutation when test threads may run in parallel.
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Remove an environment variable, tolerating toolchains where this is `unsafe`.
#[allow(unused_unsafe)]
pub fn remove_env_var(key: &str) {
    // SAFETY: Callers must serialize mutation when test threads may run in parallel.
    unsafe {
        std::env::remove_var(key);
    }
}

/// Scoped override of one environment variable; the prior value returns on drop.
pub struct EnvGuard {
    key: String,
    previous: Option<String>,
}

impl EnvGuard {
    fn capture(key: &str) -> Self {
        Self {
            key: key.to_string(),
            previous: std::env::var(key).ok(),
        }
    }

    /// Set `key=value` for the lifetime of the guard.
    pub fn set(key: &str, value: &str) -> Self {
        let guard = Self::capture(key);
        set_env_var(key, value);
        guard
    }

    /// Unset `key` for the lifetime of the guard.
    pub fn remove(key: &str) -> Self {
        let guard = Self::capture(key);
        remove_env_var(key);
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(previous) => set_env_var(&self.key, &previous),
            None => remove_env_var(&self.key),
        }
    }
}
