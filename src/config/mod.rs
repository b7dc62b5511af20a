//! Configuration for the command-line front end
//!
//! The formatting helpers themselves take every option as a parameter; this
//! only supplies the CLI's defaults. Values are resolved in order of
//! precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/readable/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_POINT: &str = "READABLE_POINT";
pub const ENV_DELIMITER: &str = "READABLE_DELIMITER";
pub const ENV_DECIMALS: &str = "READABLE_DECIMALS";
pub const ENV_TIMEZONE: &str = "READABLE_TZ";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Decimal point placed between integer and fractional digits
    pub point: String,

    /// Thousands delimiter
    pub delimiter: String,

    /// Fractional digits for decimals and percentages
    pub decimals: usize,

    /// Keep one decimal on abbreviated numbers (`1.5K` rather than `1K`)
    pub show_decimal: bool,

    /// Byte sizes in kB/MB (true) or KiB/MiB (false)
    pub decimal_units: bool,

    /// Separator between duration parts
    pub joiner: String,

    /// `1h 2m` instead of `1 hour 2 minutes`
    pub short_units: bool,

    /// Zone that dates are shown in (`UTC`, `+02:00`); `None` keeps the input's zone
    pub timezone: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point: ".".to_string(),
            delimiter: ",".to_string(),
            decimals: 2,
            show_decimal: true,
            decimal_units: true,
            joiner: " ".to_string(),
            short_units: false,
            timezone: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub point: Option<String>,
    pub delimiter: Option<String>,
    pub decimals: Option<usize>,
    pub show_decimal: Option<bool>,
    pub decimal_units: Option<bool>,
    pub joiner: Option<String>,
    pub short_units: Option<bool>,
    pub timezone: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/readable/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("readable").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called on `config --show` so users can discover the options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed is fatal: the
    /// process prints the problem and exits with status 1 instead of quietly
    /// running on defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Negative or fractional `decimals`\n");
                    eprintln!("  To reset, run `readable config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Separators: env > file > default
        let point = env(ENV_POINT).or(file.point).unwrap_or(defaults.point);
        let delimiter = env(ENV_DELIMITER)
            .or(file.delimiter)
            .unwrap_or(defaults.delimiter);

        // Decimals: env (ignored when not a count) > file > default
        let decimals = env(ENV_DECIMALS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.decimals)
            .unwrap_or(defaults.decimals);

        // Timezone: env > file > none; blank means "keep the input's zone"
        let timezone = env(ENV_TIMEZONE)
            .or(file.timezone)
            .filter(|tz| !tz.trim().is_empty());

        Self {
            point,
            delimiter,
            decimals,
            show_decimal: file.show_decimal.unwrap_or(defaults.show_decimal),
            decimal_units: file.decimal_units.unwrap_or(defaults.decimal_units),
            joiner: file.joiner.unwrap_or(defaults.joiner),
            short_units: file.short_units.unwrap_or(defaults.short_units),
            timezone,
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
