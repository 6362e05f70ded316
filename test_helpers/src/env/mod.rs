//! Helpers for safely mutating environment variables in tests.
//!
//! Every mutation takes a global re-entrant mutex and returns an RAII guard
//! that restores the previous state when dropped, removing the variable if it
//! was previously absent. Guards for the same key restore in LIFO order.
//!
//! Use [`scope`] when a test sets or clears several variables and must keep
//! other tests from interleaving until it finishes.
//!
//! # Examples
//!
//! ```
//! use log_flags_test_helpers::env;
//!
//! let _g = env::set_var("KEY", "VALUE");
//! // `KEY` is set to `VALUE` for the duration of the guard.
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            Some(val) => unsafe { env::set_var(&self.key, val) },
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

fn mutate<K, F>(key: K, mutator: F) -> EnvVarGuard
where
    K: Into<String>,
    F: FnOnce(&str),
{
    let key_string = key.into();
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key_string);
    mutator(&key_string);
    EnvVarGuard {
        key: key_string,
        original,
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
/// ```
/// use log_flags_test_helpers::env;
/// let _g = env::set_var("FOO", "");
/// assert!(matches!(std::env::var("FOO"), Ok(ref value) if value.is_empty()));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key, |k| unsafe { env::set_var(k, value.as_ref()) })
}

/// Removes an environment variable and returns a guard restoring its prior
/// value.
///
/// # Examples
/// ```
/// use log_flags_test_helpers::env;
/// let _g = env::remove_var("FOO");
/// assert!(std::env::var_os("FOO").is_none());
/// ```
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key, |k| unsafe { env::remove_var(k) })
}

/// RAII scope holding the environment lock together with a set of guards.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

impl EnvScope {
    /// Add another guard to the scope.
    pub fn push(&mut self, guard: EnvVarGuard) {
        self.guards.push(guard);
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        // Restore in reverse order while the lock is still held.
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Take the environment lock and apply `vars`, where `Some(value)` sets the
/// variable and `None` removes it.
///
/// # Examples
/// ```
/// use log_flags_test_helpers::env;
///
/// let _scope = env::scope([("APP_LEVEL", Some("debug")), ("APP_FORMAT", None)]);
/// assert!(std::env::var_os("APP_FORMAT").is_none());
/// ```
pub fn scope<I, K, V>(vars: I) -> EnvScope
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Into<String>,
    V: AsRef<OsStr>,
{
    let lock = ENV_MUTEX.lock();
    let guards = vars
        .into_iter()
        .map(|(key, value)| match value {
            Some(v) => set_var(key, v),
            None => remove_var(key),
        })
        .collect();
    EnvScope {
        guards,
        _lock: lock,
    }
}

/// Take the environment lock and remove every variable in `keys`.
///
/// # Examples
/// ```
/// use log_flags_test_helpers::env;
///
/// let _scope = env::cleared(["APP_LEVEL", "APP_FORMAT"]);
/// assert!(std::env::var_os("APP_LEVEL").is_none());
/// ```
pub fn cleared<I, K>(keys: I) -> EnvScope
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    scope(keys.into_iter().map(|key| (key, None::<&str>)))
}
