//! The shared logging record, its setting descriptors, and the batch pass
//! that resolves every setting in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::flags::FlagRegistry;
use crate::resolve::ValuesProvider;
use crate::source::ProcessEnv;

/// Flag key for the log verbosity level.
pub const FLAG_LOG_LEVEL: &str = "log-level";
/// Flag key for the log output format.
pub const FLAG_LOG_FORMAT: &str = "log-format";
/// Flag key for the log file path.
pub const FLAG_LOG_FILE: &str = "log-file";
/// Flag key for the byte threshold that triggers log rotation.
pub const FLAG_LOG_ROTATE_BYTES: &str = "log-rotate-bytes";
/// Flag key for the duration that triggers log rotation.
pub const FLAG_LOG_ROTATE_DURATION: &str = "log-rotate-duration";
/// Flag key for the number of rotated log archives to keep.
pub const FLAG_LOG_ROTATE_MAX_FILES: &str = "log-rotate-max-files";

/// Environment variable for the log verbosity level.
pub const ENV_LOG_LEVEL: &str = "VAULT_LOG_LEVEL";
/// Environment variable for the log output format.
pub const ENV_LOG_FORMAT: &str = "VAULT_LOG_FORMAT";
/// Environment variable for the log file path.
pub const ENV_LOG_FILE: &str = "VAULT_LOG_FILE";
/// Environment variable for the byte threshold that triggers log rotation.
pub const ENV_LOG_ROTATE_BYTES: &str = "VAULT_LOG_ROTATE_BYTES";
/// Environment variable for the duration that triggers log rotation.
pub const ENV_LOG_ROTATE_DURATION: &str = "VAULT_LOG_ROTATE_DURATION";
/// Environment variable for the number of rotated log archives to keep.
pub const ENV_LOG_ROTATE_MAX_FILES: &str = "VAULT_LOG_ROTATE_MAX_FILES";

/// Logging fields of the shared configuration record.
///
/// The record is owned by the caller, usually after a file-parsing step has
/// populated it. Empty strings mean "not configured"; the batch pass replaces
/// them according to precedence. Values are kept as raw strings and are never
/// validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedConfig {
    /// Log verbosity level, such as `info` or `debug`.
    pub log_level: String,
    /// Log output format, such as `standard` or `json`.
    pub log_format: String,
    /// Path of the log file.
    pub log_file: String,
    /// Bytes written before the log file is rotated.
    pub log_rotate_bytes: String,
    /// Duration written before the log file is rotated, such as `30s`.
    pub log_rotate_duration: String,
    /// Number of rotated log archives to keep.
    pub log_rotate_max_files: String,
}

/// Names one logging field of [`SharedConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogField {
    /// [`SharedConfig::log_level`].
    Level,
    /// [`SharedConfig::log_format`].
    Format,
    /// [`SharedConfig::log_file`].
    File,
    /// [`SharedConfig::log_rotate_bytes`].
    RotateBytes,
    /// [`SharedConfig::log_rotate_duration`].
    RotateDuration,
    /// [`SharedConfig::log_rotate_max_files`].
    RotateMaxFiles,
}

impl SharedConfig {
    /// Borrow the field named by `field`.
    #[must_use]
    pub fn log_field(&self, field: LogField) -> &str {
        match field {
            LogField::Level => &self.log_level,
            LogField::Format => &self.log_format,
            LogField::File => &self.log_file,
            LogField::RotateBytes => &self.log_rotate_bytes,
            LogField::RotateDuration => &self.log_rotate_duration,
            LogField::RotateMaxFiles => &self.log_rotate_max_files,
        }
    }

    /// Mutably borrow the field named by `field`.
    pub const fn log_field_mut(&mut self, field: LogField) -> &mut String {
        match field {
            LogField::Level => &mut self.log_level,
            LogField::Format => &mut self.log_format,
            LogField::File => &mut self.log_file,
            LogField::RotateBytes => &mut self.log_rotate_bytes,
            LogField::RotateDuration => &mut self.log_rotate_duration,
            LogField::RotateMaxFiles => &mut self.log_rotate_max_files,
        }
    }
}

/// Keys and fallback for one logging setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSetting {
    /// Short human-readable name used in log output.
    pub name: &'static str,
    /// Command-line flag key.
    pub flag_key: &'static str,
    /// Environment variable name.
    pub env_key: &'static str,
    /// Value used when no layer supplies one.
    pub fallback: &'static str,
    /// Record field the resolved value is written to.
    pub field: LogField,
}

/// Every logging setting resolved by [`apply_log_settings`].
///
/// Only the level has a non-empty fallback. The remaining settings fall back
/// to the empty string, which downstream consumers read as "disabled" or
/// "no limit".
pub const LOG_SETTINGS: [LogSetting; 6] = [
    LogSetting {
        name: "level",
        flag_key: FLAG_LOG_LEVEL,
        env_key: ENV_LOG_LEVEL,
        fallback: "info",
        field: LogField::Level,
    },
    LogSetting {
        name: "format",
        flag_key: FLAG_LOG_FORMAT,
        env_key: ENV_LOG_FORMAT,
        fallback: "",
        field: LogField::Format,
    },
    LogSetting {
        name: "file",
        flag_key: FLAG_LOG_FILE,
        env_key: ENV_LOG_FILE,
        fallback: "",
        field: LogField::File,
    },
    LogSetting {
        name: "rotate_bytes",
        flag_key: FLAG_LOG_ROTATE_BYTES,
        env_key: ENV_LOG_ROTATE_BYTES,
        fallback: "",
        field: LogField::RotateBytes,
    },
    LogSetting {
        name: "rotate_duration",
        flag_key: FLAG_LOG_ROTATE_DURATION,
        env_key: ENV_LOG_ROTATE_DURATION,
        fallback: "",
        field: LogField::RotateDuration,
    },
    LogSetting {
        name: "rotate_max_files",
        flag_key: FLAG_LOG_ROTATE_MAX_FILES,
        env_key: ENV_LOG_ROTATE_MAX_FILES,
        fallback: "",
        field: LogField::RotateMaxFiles,
    },
];

/// Resolve every logging setting against `flags` and the process
/// environment, overwriting the matching fields of `config`.
///
/// Precedence per setting, highest first: explicitly supplied flag, present
/// environment variable, the record's existing value (trimmed), fallback.
///
/// # Examples
///
/// ```rust
/// use log_flags::{FlagRegistry, SharedConfig, apply_log_settings};
///
/// let flags: FlagRegistry = [("log-format", "json")].into_iter().collect();
/// let mut config = SharedConfig::default();
/// apply_log_settings(&flags, &mut config);
/// assert_eq!(config.log_format, "json");
/// ```
pub fn apply_log_settings(flags: &FlagRegistry, config: &mut SharedConfig) {
    let env = ProcessEnv;
    apply_log_settings_with(&ValuesProvider::new(flags, &env), config);
}

/// Resolve every logging setting with an explicit provider.
///
/// Each setting is resolved independently of the others, so repeated passes
/// over unchanged inputs leave the record unchanged.
pub fn apply_log_settings_with(provider: &ValuesProvider<'_>, config: &mut SharedConfig) {
    for setting in &LOG_SETTINGS {
        let slot = config.log_field_mut(setting.field);
        let resolved = provider.resolve_setting(setting, slot);
        debug!(
            setting = setting.name,
            origin = %resolved.origin,
            value = %resolved.value,
            "resolved log setting"
        );
        *slot = resolved.value;
    }
}

#[cfg(test)]
mod tests;
