//! Fixed-order precedence resolution for a single setting.

use std::fmt;

use crate::settings::LogSetting;
use crate::source::ValueSource;

/// Layer that supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The flag was explicitly supplied on the command line.
    Flag,
    /// The environment variable was present.
    Env,
    /// The record already held a non-blank value.
    Config,
    /// No layer supplied a value; the setting's fallback was used.
    Fallback,
}

impl Origin {
    /// Short lowercase label used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Env => "env",
            Self::Config => "config",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Effective value.
    pub value: String,
    /// Layer the value came from.
    pub origin: Origin,
}

/// Resolves settings against a flag source and an environment source.
///
/// The provider holds borrowed sources for the duration of a single pass and
/// keeps no state between calls.
///
/// # Examples
///
/// ```rust
/// use log_flags::{Origin, ValuesProvider};
///
/// let flags = |_: &str| -> Option<String> { None };
/// let env = |key: &str| (key == "APP_LEVEL").then(|| "debug".to_owned());
/// let provider = ValuesProvider::new(&flags, &env);
///
/// let resolved = provider.resolve_with_origin("level", "APP_LEVEL", "warn", "info");
/// assert_eq!(resolved.value, "debug");
/// assert_eq!(resolved.origin, Origin::Env);
/// ```
#[derive(Clone, Copy)]
pub struct ValuesProvider<'a> {
    flags: &'a dyn ValueSource,
    env: &'a dyn ValueSource,
}

impl<'a> ValuesProvider<'a> {
    /// Bind a provider to its flag and environment sources.
    #[must_use]
    pub const fn new(flags: &'a dyn ValueSource, env: &'a dyn ValueSource) -> Self {
        Self { flags, env }
    }

    /// Pick the effective value for one setting.
    ///
    /// The first matching rule wins:
    ///
    /// 1. the flag under `flag_key`, when supplied, even if empty;
    /// 2. the environment variable under `env_key`, when present, even if
    ///    empty;
    /// 3. `current` with surrounding whitespace removed, when that is
    ///    non-empty;
    /// 4. `fallback`.
    #[must_use]
    pub fn resolve(&self, flag_key: &str, env_key: &str, current: &str, fallback: &str) -> String {
        self.resolve_with_origin(flag_key, env_key, current, fallback).value
    }

    /// Same as [`ValuesProvider::resolve`], also reporting the winning layer.
    #[must_use]
    pub fn resolve_with_origin(
        &self,
        flag_key: &str,
        env_key: &str,
        current: &str,
        fallback: &str,
    ) -> Resolved {
        let trimmed = current.trim();

        if let Some(value) = self.flags.lookup(flag_key) {
            return Resolved {
                value,
                origin: Origin::Flag,
            };
        }
        if let Some(value) = self.env.lookup(env_key) {
            return Resolved {
                value,
                origin: Origin::Env,
            };
        }
        if trimmed.is_empty() {
            Resolved {
                value: fallback.to_owned(),
                origin: Origin::Fallback,
            }
        } else {
            Resolved {
                value: trimmed.to_owned(),
                origin: Origin::Config,
            }
        }
    }

    /// Resolve the setting described by `setting` given the record's
    /// `current` value.
    #[must_use]
    pub fn resolve_setting(&self, setting: &LogSetting, current: &str) -> Resolved {
        self.resolve_with_origin(setting.flag_key, setting.env_key, current, setting.fallback)
    }
}

impl fmt::Debug for ValuesProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesProvider")
            .field("flags", &"<source>")
            .field("env", &"<source>")
            .finish()
    }
}
