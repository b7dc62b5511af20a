// CLI module - command-line argument parsing and handlers
//
// One subcommand per formatting helper, plus:
// - demo [--json]: Print the example gallery
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path
//
// Options left off the command line fall back to the loaded Config.

use crate::config::{Config, VERSION};
use crate::datetime::{self, DateInput, DateTimeProvider};
use crate::input::{Number, NumericInput};
use crate::size::UnitBase;
use crate::{demo, words};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// readable - numbers, sizes, dates and durations for humans
#[derive(Parser)]
#[command(name = "readable")]
#[command(version = VERSION)]
#[command(about = "Format numbers, byte sizes, dates and durations for humans", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Group an integer's digits: 1234567 -> 1,234,567
    Number {
        #[arg(allow_hyphen_values = true)]
        value: i64,

        /// Thousands delimiter
        #[arg(long)]
        delimiter: Option<String>,
    },

    /// Abbreviate with K/M/B/T: 1524999 -> 1.5M
    Human {
        /// Number or numeric string
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Drop the decimal (1524999 -> 1M)
        #[arg(long)]
        no_decimal: bool,

        /// Fractional digits to show
        #[arg(long, default_value_t = 0)]
        decimals: usize,
    },

    /// Spell a number out: 42 -> forty-two
    Words {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Fixed number of decimals: 1234.5 -> 1,234.50
    Decimal {
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        separators: Separators,
    },

    /// Like `decimal`, but whole floats drop their decimals: 200.0 -> 200
    DecInt {
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        separators: Separators,
    },

    /// Ordinal suffix: 22 -> 22nd
    Ordinal {
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Share of a total: 50 200 -> 25.00%
    Percent {
        #[arg(allow_hyphen_values = true)]
        value: String,

        total: String,

        #[command(flatten)]
        separators: Separators,
    },

    /// Byte count with units: 1500 -> 1.5 KB
    Size {
        #[arg(allow_hyphen_values = true)]
        bytes: i64,

        /// Use KiB/MiB (base 1024)
        #[arg(long)]
        binary: bool,
    },

    /// Seconds broken into units: 3661 -> 1 hour 1 minute 1 second
    Length {
        seconds: u64,

        #[command(flatten)]
        duration: DurationStyle,
    },

    /// Calendar date: 25 May 2003 (defaults to now)
    Date {
        input: Option<String>,

        /// Timezone to show the date in (UTC, +02:00)
        #[arg(long)]
        tz: Option<String>,
    },

    /// Clock time: 17:38 (defaults to now)
    Time {
        input: Option<String>,

        /// Include seconds
        #[arg(long)]
        seconds: bool,

        #[arg(long)]
        tz: Option<String>,
    },

    /// Weekday, date and time (defaults to now)
    Datetime {
        input: Option<String>,

        #[arg(long)]
        seconds: bool,

        #[arg(long)]
        tz: Option<String>,
    },

    /// Largest unit between two dates: 1 day before
    Diff {
        old: String,

        /// Defaults to now
        new: Option<String>,

        #[arg(long)]
        tz: Option<String>,
    },

    /// Every unit between two dates: 1 hour 30 minutes after
    Span {
        old: String,

        /// Defaults to now
        new: Option<String>,

        #[arg(long)]
        joiner: Option<String>,

        #[arg(long)]
        tz: Option<String>,
    },

    /// Show an example of every helper
    Demo {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Decimal point, delimiter and precision overrides
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct Separators {
    /// Fractional digits
    #[arg(long)]
    pub decimals: Option<usize>,

    /// Decimal point
    #[arg(long)]
    pub point: Option<String>,

    /// Thousands delimiter
    #[arg(long)]
    pub delimiter: Option<String>,
}

impl Separators {
    fn resolve<'a>(&'a self, config: &'a Config) -> (usize, &'a str, &'a str) {
        (
            self.decimals.unwrap_or(config.decimals),
            self.point.as_deref().unwrap_or(&config.point),
            self.delimiter.as_deref().unwrap_or(&config.delimiter),
        )
    }
}

/// Joiner and label overrides for durations
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct DurationStyle {
    /// Separator between parts
    #[arg(long)]
    pub joiner: Option<String>,

    /// Short labels (1h 1m 1s)
    #[arg(long)]
    pub short: bool,
}

/// Parse arguments and run the command, printing its output
pub fn handle_cli(config: &Config) -> Result<()> {
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "running");

    if let Some(output) = execute(&cli.command, config, &datetime::ChronoProvider)? {
        println!("{}", output);
    }
    Ok(())
}

/// Run one command; `None` means there is nothing to print
pub fn execute(
    command: &Commands,
    config: &Config,
    provider: &impl DateTimeProvider,
) -> Result<Option<String>> {
    let tz_or_default = |tz: &Option<String>| tz.clone().or_else(|| config.timezone.clone());
    // Missing date arguments mean "now"
    let date_input = |input: &Option<String>| DateInput::from(input.clone());

    let output = match command {
        Commands::Number { value, delimiter } => Some(crate::format_integer(
            *value,
            delimiter.as_deref().unwrap_or(&config.delimiter),
        )),

        Commands::Human {
            value,
            no_decimal,
            decimals,
        } => {
            let show_decimal = config.show_decimal && !no_decimal;
            let value = NumericInput::from(value.as_str());
            Some(
                crate::format_human_number(value, show_decimal, *decimals)
                    .context("human number")?,
            )
        }

        Commands::Words { value } => {
            let number = Number::parse_literal(value).context("words")?;
            Some(words::spell_out(number)?)
        }

        Commands::Decimal { value, separators } => {
            let (decimals, point, delimiter) = separators.resolve(config);
            let number = Number::parse_literal(value).context("decimal")?;
            Some(crate::format_decimal(number, decimals, point, delimiter)?)
        }

        Commands::DecInt { value, separators } => {
            let (decimals, point, delimiter) = separators.resolve(config);
            let number = Number::parse_literal(value).context("dec-int")?;
            Some(crate::format_decimal_or_integer(
                number, decimals, point, delimiter,
            )?)
        }

        Commands::Ordinal { value } => Some(crate::format_ordinal(*value)),

        Commands::Percent {
            value,
            total,
            separators,
        } => {
            let (decimals, point, delimiter) = separators.resolve(config);
            crate::format_percentage(value.as_str(), total.as_str(), decimals, point, delimiter)
                .context("percentage")?
        }

        Commands::Size { bytes, binary } => {
            let base = if *binary {
                UnitBase::Binary
            } else {
                UnitBase::from_decimal_flag(config.decimal_units)
            };
            crate::format_byte_size(*bytes, base)
        }

        Commands::Length { seconds, duration } => Some(datetime::format_time_length(
            *seconds,
            duration.joiner.as_deref().unwrap_or(&config.joiner),
            duration.short || config.short_units,
        )),

        Commands::Date { input, tz } => Some(
            datetime::format_date(provider, date_input(input), tz_or_default(tz).as_deref())
                .context("date")?,
        ),

        Commands::Time { input, seconds, tz } => Some(
            datetime::format_time(
                provider,
                date_input(input),
                *seconds,
                tz_or_default(tz).as_deref(),
            )
            .context("time")?,
        ),

        Commands::Datetime { input, seconds, tz } => Some(
            datetime::format_date_time(
                provider,
                date_input(input),
                *seconds,
                tz_or_default(tz).as_deref(),
            )
            .context("datetime")?,
        ),

        Commands::Diff { old, new, tz } => Some(
            datetime::format_diff(
                provider,
                old.as_str(),
                date_input(new),
                tz_or_default(tz).as_deref(),
            )
            .context("diff")?,
        ),

        Commands::Span {
            old,
            new,
            joiner,
            tz,
        } => Some(
            datetime::format_date_time_length(
                provider,
                old.as_str(),
                date_input(new),
                joiner.as_deref().unwrap_or(&config.joiner),
                tz_or_default(tz).as_deref(),
            )
            .context("span")?,
        ),

        Commands::Demo { json } => {
            let sections = demo::gallery(provider)?;
            if *json {
                Some(serde_json::to_string_pretty(&sections)?)
            } else {
                Some(demo::render_text(&sections).trim_end().to_string())
            }
        }

        Commands::Config { show, reset, path } => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show(config);
            } else if *reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: readable config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            None
        }
    };

    Ok(output)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    // Write a template on first use so the options are discoverable
    Config::ensure_config_exists();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
