//! Unit tests for the value source implementations.

use anyhow::{Result, ensure};
use rstest::rstest;
use serial_test::serial;
use test_helpers::env;

use super::{ProcessEnv, ValueSource};

const KEY: &str = "LOG_FLAGS_SOURCE_TEST_VALUE";

fn lookup_via<S: ValueSource>(source: &S, key: &str) -> Option<String> {
    source.lookup(key)
}

#[rstest]
#[case::present("present", Some("value"))]
#[case::present_but_empty("empty", Some(""))]
#[case::absent("missing", None)]
fn closures_act_as_sources(#[case] key: &str, #[case] expected: Option<&str>) -> Result<()> {
    let source = |key: &str| match key {
        "present" => Some("value".to_owned()),
        "empty" => Some(String::new()),
        _ => None,
    };
    let found = lookup_via(&source, key);
    ensure!(
        found.as_deref() == expected,
        "expected {expected:?} for {key}, got {found:?}"
    );
    Ok(())
}

#[rstest]
#[case::set("debug")]
#[case::set_to_empty("")]
#[case::padded("  warn  ")]
#[serial]
fn process_env_reports_present_values_verbatim(#[case] raw: &str) -> Result<()> {
    let _guard = env::set_var(KEY, raw);
    let found = ProcessEnv.lookup(KEY);
    ensure!(
        found.as_deref() == Some(raw),
        "expected {raw:?} from environment, got {found:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn process_env_reports_absent_variables() -> Result<()> {
    let _guard = env::remove_var(KEY);
    let found = ProcessEnv.lookup(KEY);
    ensure!(found.is_none(), "expected absent variable, got {found:?}");
    Ok(())
}
