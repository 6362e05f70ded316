//! Precedence resolution for the shared logging settings.
//!
//! Each logging setting can arrive from three competing places: an explicitly
//! supplied command-line flag, an environment variable, and a value already
//! present in the shared configuration record (typically parsed from a file).
//! This crate picks the effective value for each setting using a fixed order
//! and writes it back into the record:
//!
//! 1. a flag the user actually passed on the command line;
//! 2. an environment variable that is present, even when empty;
//! 3. the record's existing value, trimmed, when non-empty;
//! 4. the setting's fallback.
//!
//! Resolution is purely string-level. Values are neither validated nor
//! converted; downstream consumers interpret them.
//!
//! ```rust
//! use log_flags::{FlagRegistry, SharedConfig, add_log_flags, apply_log_settings};
//!
//! # fn main() -> Result<(), log_flags::LogFlagsError> {
//! let cmd = add_log_flags(clap::Command::new("server"));
//! let flags = FlagRegistry::try_parse_from(cmd, ["server", "--log-level", "trace"])?;
//! let mut config = SharedConfig {
//!     log_level: "warn".to_owned(),
//!     ..SharedConfig::default()
//! };
//! apply_log_settings(&flags, &mut config);
//! assert_eq!(config.log_level, "trace");
//! # Ok(())
//! # }
//! ```

mod error;
mod file;
mod flags;
mod resolve;
mod settings;
mod source;

pub use error::{LogFlagsError, LogFlagsResult};
pub use file::load_shared_config;
pub use flags::{FlagRegistry, LogArgs, add_log_flags};
pub use resolve::{Origin, Resolved, ValuesProvider};
pub use settings::{
    ENV_LOG_FILE, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_ROTATE_BYTES, ENV_LOG_ROTATE_DURATION,
    ENV_LOG_ROTATE_MAX_FILES, FLAG_LOG_FILE, FLAG_LOG_FORMAT, FLAG_LOG_LEVEL,
    FLAG_LOG_ROTATE_BYTES, FLAG_LOG_ROTATE_DURATION, FLAG_LOG_ROTATE_MAX_FILES, LOG_SETTINGS,
    LogField, LogSetting, SharedConfig, apply_log_settings, apply_log_settings_with,
};
pub use source::{ProcessEnv, ValueSource};
