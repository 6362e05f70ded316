//! Uniform lookup over the places a setting's value can come from.
//!
//! Both the flag registry and the process environment answer the same
//! question: "was a value supplied under this key, and if so, what is it?"
//! [`ValueSource`] captures that question so the resolver treats every layer
//! identically.

use std::env;

/// A read-only capability answering keyed lookups.
///
/// `Some(value)` means the key was supplied, even when `value` is empty.
/// `None` means the key was not supplied at all. Implementations must not
/// collapse an empty value into `None`; an explicit empty string is a real
/// value that outranks lower layers.
pub trait ValueSource {
    /// Look up `key`, returning the supplied value when present.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<F> ValueSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Environment source backed by the current process environment.
///
/// A variable set to the empty string is reported as present. Values that
/// are not valid Unicode are converted lossily.
///
/// # Examples
///
/// ```rust
/// use log_flags::{ProcessEnv, ValueSource};
///
/// let missing = ProcessEnv.lookup("LOG_FLAGS_DOC_SURELY_UNSET");
/// assert!(missing.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests;
