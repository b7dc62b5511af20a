// readable - numbers, byte sizes, dates and durations for humans
//
// Thin binary over the library:
// - Config: ~/.config/readable/config.toml, env overrides (READABLE_*)
// - Logging: tracing to stderr, optional rolling JSON file
// - CLI (clap): one subcommand per formatting helper

use readable::{cli, config::Config, logging};

fn main() {
    // A broken config file exits here with its own message
    let config = Config::from_env();

    // The guard must stay alive for the duration of the program so file logs flush
    let file_guard = logging::init(&config.logging);

    if let Err(e) = cli::handle_cli(&config) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {:#}", e);
        // exit() skips destructors; flush the file writer first
        drop(file_guard);
        std::process::exit(1);
    }
}
