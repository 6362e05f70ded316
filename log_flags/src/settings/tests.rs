//! Unit tests for the settings table and the batch pass.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};

use super::{
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, FLAG_LOG_LEVEL, LOG_SETTINGS, LogField, SharedConfig,
    apply_log_settings_with,
};
use crate::resolve::ValuesProvider;

type Layer = BTreeMap<&'static str, &'static str>;

fn run_pass(flags: &Layer, env: &Layer, config: &mut SharedConfig) {
    let flag_source = |key: &str| flags.get(key).map(|v| (*v).to_owned());
    let env_source = |key: &str| env.get(key).map(|v| (*v).to_owned());
    apply_log_settings_with(&ValuesProvider::new(&flag_source, &env_source), config);
}

#[fixture]
fn file_config() -> SharedConfig {
    SharedConfig {
        log_level: "warn".to_owned(),
        log_format: "json".to_owned(),
        log_file: "/var/log/app.log".to_owned(),
        log_rotate_bytes: "1048576".to_owned(),
        log_rotate_duration: "24h".to_owned(),
        log_rotate_max_files: "5".to_owned(),
    }
}

#[test]
fn table_covers_each_field_once() -> Result<()> {
    let fields: HashSet<LogField> = LOG_SETTINGS.iter().map(|s| s.field).collect();
    ensure!(fields.len() == LOG_SETTINGS.len(), "duplicate field in table");
    let flags: HashSet<&str> = LOG_SETTINGS.iter().map(|s| s.flag_key).collect();
    ensure!(flags.len() == LOG_SETTINGS.len(), "duplicate flag key in table");
    let envs: HashSet<&str> = LOG_SETTINGS.iter().map(|s| s.env_key).collect();
    ensure!(envs.len() == LOG_SETTINGS.len(), "duplicate env key in table");
    Ok(())
}

#[test]
fn only_level_has_a_non_empty_fallback() -> Result<()> {
    for setting in &LOG_SETTINGS {
        let expected = if setting.field == LogField::Level { "info" } else { "" };
        ensure!(
            setting.fallback == expected,
            "{} fallback is {:?}",
            setting.name,
            setting.fallback
        );
    }
    Ok(())
}

#[test]
fn field_accessors_agree() -> Result<()> {
    let mut config = SharedConfig::default();
    for setting in &LOG_SETTINGS {
        *config.log_field_mut(setting.field) = setting.name.to_owned();
    }
    for setting in &LOG_SETTINGS {
        let value = config.log_field(setting.field);
        ensure!(value == setting.name, "{} read back {value:?}", setting.name);
    }
    Ok(())
}

#[test]
fn empty_record_takes_fallbacks() -> Result<()> {
    let mut config = SharedConfig::default();
    run_pass(&Layer::new(), &Layer::new(), &mut config);
    let expected = SharedConfig {
        log_level: "info".to_owned(),
        ..SharedConfig::default()
    };
    ensure!(config == expected, "unexpected record {config:?}");
    Ok(())
}

#[rstest]
fn file_values_survive_without_overrides(file_config: SharedConfig) -> Result<()> {
    let mut config = file_config.clone();
    run_pass(&Layer::new(), &Layer::new(), &mut config);
    ensure!(config == file_config, "file values changed: {config:?}");
    Ok(())
}

#[rstest]
fn file_values_are_trimmed(file_config: SharedConfig) -> Result<()> {
    let mut config = SharedConfig {
        log_level: "  debug  ".to_owned(),
        log_format: "\tjson\n".to_owned(),
        ..file_config
    };
    run_pass(&Layer::new(), &Layer::new(), &mut config);
    ensure!(config.log_level == "debug", "level was {:?}", config.log_level);
    ensure!(config.log_format == "json", "format was {:?}", config.log_format);
    Ok(())
}

#[rstest]
fn overrides_touch_only_their_setting(file_config: SharedConfig) -> Result<()> {
    let flags = Layer::from([(FLAG_LOG_LEVEL, "trace")]);
    let env = Layer::from([(ENV_LOG_FORMAT, "standard")]);
    let mut config = file_config.clone();
    run_pass(&flags, &env, &mut config);
    let expected = SharedConfig {
        log_level: "trace".to_owned(),
        log_format: "standard".to_owned(),
        ..file_config
    };
    ensure!(config == expected, "unexpected record {config:?}");
    Ok(())
}

#[rstest]
fn empty_flag_clears_level(file_config: SharedConfig) -> Result<()> {
    let flags = Layer::from([(FLAG_LOG_LEVEL, "")]);
    let env = Layer::from([(ENV_LOG_LEVEL, "debug")]);
    let mut config = file_config;
    run_pass(&flags, &env, &mut config);
    ensure!(config.log_level.is_empty(), "level was {:?}", config.log_level);
    Ok(())
}

#[rstest]
fn second_pass_is_a_no_op(file_config: SharedConfig) -> Result<()> {
    let flags = Layer::from([(FLAG_LOG_LEVEL, "error")]);
    let env = Layer::from([(ENV_LOG_FORMAT, "")]);
    let mut config = SharedConfig {
        log_file: "  /tmp/app.log ".to_owned(),
        ..file_config
    };
    run_pass(&flags, &env, &mut config);
    let first = config.clone();
    run_pass(&flags, &env, &mut config);
    ensure!(config == first, "second pass changed {first:?} into {config:?}");
    Ok(())
}
