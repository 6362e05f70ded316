//! Scratch-directory helpers built on [`figment::Jail`].
//!
//! A jail changes into a fresh temporary directory and snapshots the process
//! environment, restoring both once the closure returns. That makes it a
//! convenient home for configuration files written by a test.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// Errors raised by the closure or by jail setup are converted into
/// [`anyhow::Error`] so callers can use `?` directly.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Writes `contents` to `name` inside a fresh jail and runs `f` with the
/// file's absolute path.
///
/// # Errors
///
/// Returns an error if the file cannot be written or the closure fails.
pub fn with_config_file<F, T>(name: &str, contents: &str, f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail, PathBuf) -> figment::error::Result<T>,
{
    with_jail(|j| {
        j.create_file(name, contents)?;
        let path = j.directory().join(name);
        f(j, path)
    })
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
///
/// Lets closures passed to [`with_jail`] bubble up errors from other crates.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers usually own the error and passing by value avoids clones"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
