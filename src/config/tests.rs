//! Configuration tests
//!
//! The round-trip tests guard `to_toml()`: when a field is added to `Config`
//! but not to the serializer (or the file layer), they fail.

use super::*;
use std::collections::HashMap;
use std::path::PathBuf;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn parse(toml_str: &str) -> FileConfig {
    match toml::from_str(toml_str) {
        Ok(file) => file,
        Err(e) => panic!("config should parse.\nTOML:\n{}\nError: {}", toml_str, e),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed, config);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        point: ",".to_string(),
        delimiter: "\u{202f}".to_string(),
        decimals: 4,
        show_decimal: false,
        decimal_units: false,
        joiner: " • ".to_string(),
        short_units: true,
        timezone: Some("+05:30".to_string()),
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/tmp/readable logs"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "fmt".to_string(),
        },
    };

    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed, config);
}

#[test]
fn test_config_roundtrip_quotes_in_strings() {
    let config = Config {
        delimiter: "'".to_string(),
        joiner: "\" and \"".to_string(),
        ..Config::default()
    };

    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed.delimiter, "'");
    assert_eq!(parsed.joiner, "\" and \"");
}

#[test]
fn test_unset_timezone_is_commented_out() {
    let toml_str = Config::default().to_toml();
    assert!(toml_str.contains("# timezone = \"UTC\""));
    assert!(parse(&toml_str).timezone.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config, Config::default());
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
point = ","
delimiter = "."
decimals = 0
short_units = true

[logging]
level = "debug"
"#,
    );

    let config = Config::resolve(file, no_env);
    assert_eq!(config.point, ",");
    assert_eq!(config.delimiter, ".");
    assert_eq!(config.decimals, 0);
    assert!(config.short_units);
    assert_eq!(config.logging.level, "debug");
    // untouched fields keep their defaults
    assert!(config.show_decimal);
    assert_eq!(config.logging.file_prefix, "readable");
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
point = ","
decimals = 1
timezone = "UTC"
"#,
    );
    let env = env_from(&[
        (ENV_POINT, "·"),
        (ENV_DECIMALS, "3"),
        (ENV_TIMEZONE, "-03:00"),
    ]);

    let config = Config::resolve(file, env);
    assert_eq!(config.point, "·");
    assert_eq!(config.decimals, 3);
    assert_eq!(config.timezone.as_deref(), Some("-03:00"));
}

#[test]
fn test_invalid_env_decimals_falls_through() {
    let file = parse("decimals = 5");
    let config = Config::resolve(file, env_from(&[(ENV_DECIMALS, "many")]));
    assert_eq!(config.decimals, 5);
}

#[test]
fn test_blank_timezone_means_none() {
    let config = Config::resolve(FileConfig::default(), env_from(&[(ENV_TIMEZONE, "  ")]));
    assert_eq!(config.timezone, None);
}

#[test]
fn test_invalid_file_is_rejected() {
    assert!(toml::from_str::<FileConfig>("decimals = -1").is_err());
    assert!(toml::from_str::<FileConfig>("show_decimal = \"yes\"").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_log_rotation_from_str() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("NEVER"), LogRotation::Never);
    assert_eq!(LogRotation::from_str("daily"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
}

#[test]
fn test_logging_from_file_defaults() {
    let logging = LoggingConfig::from_file(None);
    assert_eq!(logging, LoggingConfig::default());
    assert_eq!(logging.level, "warn");
    assert!(!logging.file_enabled);
}
