//! Test helpers shared across crates in the workspace.
//!
//! Provides serialised environment variable guards and a `figment::Jail`
//! wrapper for tests that need a scratch directory holding config files.

pub mod env;
pub mod jail;
