//! Loading the shared record from a TOML configuration file.

use std::fs;
use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use tracing::debug;

use crate::error::{LogFlagsError, LogFlagsResult};
use crate::settings::SharedConfig;

/// Read `path` as TOML and extract the logging fields of a [`SharedConfig`].
///
/// Missing keys stay empty and unrelated keys are ignored. Values are taken
/// as strings without validation; surrounding whitespace is left for the
/// batch pass to trim.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// # fn main() -> Result<(), log_flags::LogFlagsError> {
/// let config = log_flags::load_shared_config(Path::new("server.toml"))?;
/// assert!(config.log_level.trim().len() <= config.log_level.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`LogFlagsError::File`] when the file cannot be read, and
/// [`LogFlagsError::Gathering`] when its contents cannot be extracted.
pub fn load_shared_config(path: &Path) -> LogFlagsResult<SharedConfig> {
    let contents = fs::read_to_string(path).map_err(|err| LogFlagsError::File {
        path: path.to_path_buf(),
        source: Box::new(err),
    })?;
    let config: SharedConfig = Figment::from(Serialized::defaults(SharedConfig::default()))
        .merge(Toml::string(&contents))
        .extract()?;
    debug!(path = %path.display(), "loaded shared config");
    Ok(config)
}
