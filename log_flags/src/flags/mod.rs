//! Registration of the shared `--log-*` flags and tracking of which flags
//! the user actually supplied.
//!
//! Options that merely hold a default must not outrank the environment or
//! the configuration file. Rather than relying on sentinel defaults, the
//! registry records, at parse time, every argument whose value came from the
//! command line and answers lookups from that set alone.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use clap::parser::ValueSource as ClapValueSource;
use clap::{ArgMatches, Args, Command};
use tracing::trace;

use crate::error::LogFlagsResult;
use crate::source::ValueSource;

/// The logging flags shared across commands.
///
/// Values are accepted verbatim; nothing here checks that a level or format
/// is one of the supported names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct LogArgs {
    /// Log verbosity level.
    #[arg(
        long = "log-level",
        id = "log-level",
        value_name = "LEVEL",
        help = "Log verbosity level. Supported values (in order of detail) are \
                \"trace\", \"debug\", \"info\", \"warn\", and \"error\". \
                [env: VAULT_LOG_LEVEL]"
    )]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(
        long = "log-format",
        id = "log-format",
        value_name = "FORMAT",
        help = "Log format. Supported values are \"standard\" and \"json\". \
                [env: VAULT_LOG_FORMAT]"
    )]
    pub log_format: Option<String>,

    /// Log file path.
    #[arg(
        long = "log-file",
        id = "log-file",
        value_name = "PATH",
        help = "Path to the log file to write to. [env: VAULT_LOG_FILE]"
    )]
    pub log_file: Option<String>,

    /// Byte threshold for rotation.
    #[arg(
        long = "log-rotate-bytes",
        id = "log-rotate-bytes",
        value_name = "BYTES",
        help = "Number of bytes that should be written to a log before it needs \
                to be rotated. Unless specified, there is no limit to the number \
                of bytes that can be written to a log file. \
                [env: VAULT_LOG_ROTATE_BYTES]"
    )]
    pub log_rotate_bytes: Option<String>,

    /// Duration threshold for rotation.
    #[arg(
        long = "log-rotate-duration",
        id = "log-rotate-duration",
        value_name = "DURATION",
        help = "The maximum duration a log should be written to before it needs \
                to be rotated. Must be a duration value such as 30s. \
                [env: VAULT_LOG_ROTATE_DURATION]"
    )]
    pub log_rotate_duration: Option<String>,

    /// Number of archives to keep.
    #[arg(
        long = "log-rotate-max-files",
        id = "log-rotate-max-files",
        value_name = "COUNT",
        help = "The maximum number of older log file archives to keep. \
                [env: VAULT_LOG_ROTATE_MAX_FILES]"
    )]
    pub log_rotate_max_files: Option<String>,
}

/// Add the shared logging flags to `cmd`.
///
/// # Examples
///
/// ```rust
/// use log_flags::add_log_flags;
///
/// let cmd = add_log_flags(clap::Command::new("server"));
/// assert!(cmd.get_arguments().any(|arg| arg.get_long() == Some("log-level")));
/// ```
#[must_use]
pub fn add_log_flags(cmd: Command) -> Command {
    LogArgs::augment_args(cmd)
}

/// Flags explicitly supplied on the command line, keyed by argument id.
///
/// Arguments that only carry a default, or that clap filled from another
/// source, are never recorded. Repeated flags keep their last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagRegistry {
    set: BTreeMap<String, String>,
}

impl FlagRegistry {
    /// Record every argument of `cmd` whose value in `matches` came from the
    /// command line.
    ///
    /// Argument groups, including the one `#[derive(Args)]` adds for
    /// [`LogArgs`], are not flags and are never recorded. Only the top-level
    /// matches are inspected. Pass a subcommand and its own [`ArgMatches`] to
    /// track that subcommand's flags.
    #[must_use]
    pub fn from_matches(cmd: &Command, matches: &ArgMatches) -> Self {
        let args: BTreeSet<&str> = cmd
            .get_arguments()
            .map(|arg| arg.get_id().as_str())
            .collect();
        let mut set = BTreeMap::new();
        for id in matches.ids() {
            let key = id.as_str();
            if !args.contains(key)
                || matches.value_source(key) != Some(ClapValueSource::CommandLine)
            {
                continue;
            }
            let value = matches
                .try_get_raw(key)
                .ok()
                .flatten()
                .and_then(Iterator::last)
                .map(|last| last.to_string_lossy().into_owned())
                .unwrap_or_default();
            trace!(flag = key, "flag explicitly set");
            set.insert(key.to_owned(), value);
        }
        Self { set }
    }

    /// Parse `args` with `cmd` and record the explicitly supplied flags.
    ///
    /// The first item of `args` is the binary name, as with
    /// [`Command::try_get_matches_from`].
    ///
    /// # Errors
    ///
    /// Returns [`LogFlagsError::CliParsing`](crate::LogFlagsError::CliParsing)
    /// when the arguments cannot be parsed.
    pub fn try_parse_from<I, T>(cmd: Command, args: I) -> LogFlagsResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = cmd.clone().try_get_matches_from(args)?;
        Ok(Self::from_matches(&cmd, &matches))
    }

    /// Whether the flag named `key` was explicitly supplied.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.set.contains_key(key)
    }

    /// Value of the flag named `key` when it was explicitly supplied.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.set.get(key).map(String::as_str)
    }

    /// Number of explicitly supplied flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether no flag was explicitly supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterate over the explicitly supplied flags in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.set.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ValueSource for FlagRegistry {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

impl<K, V> FromIterator<(K, V)> for FlagRegistry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            set: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
