//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Timezone line; commented out when unset so the option stays discoverable
    fn timezone_to_toml(&self) -> String {
        match &self.timezone {
            Some(tz) => format!("timezone = {}", quoted(tz)),
            None => "# timezone = \"UTC\"".to_string(),
        }
    }

    /// Serialize the whole config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# readable configuration
#
# Defaults for the command line. Environment variables win over this file:
# READABLE_POINT, READABLE_DELIMITER, READABLE_DECIMALS, READABLE_TZ

# Decimal point and thousands delimiter
point = {point}
delimiter = {delimiter}

# Fractional digits for `decimal`, `dec-int` and `percent`
decimals = {decimals}

# Keep a decimal on abbreviated numbers (1.5K instead of 1K)
show_decimal = {show_decimal}

# Byte sizes in KB/MB (true) or KiB/MiB (false)
decimal_units = {decimal_units}

# Durations: separator between parts, and 1h/2m style labels
joiner = {joiner}
short_units = {short_units}

# Zone dates are shown in: UTC, GMT, Z, or an offset such as +02:00
{timezone}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            point = quoted(&self.point),
            delimiter = quoted(&self.delimiter),
            decimals = self.decimals,
            show_decimal = self.show_decimal,
            decimal_units = self.decimal_units,
            joiner = quoted(&self.joiner),
            short_units = self.short_units,
            timezone = self.timezone_to_toml(),
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
