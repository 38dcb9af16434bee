use std::env;
use std::process;

use log::debug;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use logimin::command::{help_cmd, CommandContext, SelectedArgs};

/// Environment variable selecting the log level
static LOG_VAR: &str = "LOGIMIN_LOG";

fn log_level() -> LevelFilter {
    env::var(LOG_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn main() {
    if TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not initialise the logger");
    }

    let mut context = CommandContext::default();
    let mut args = SelectedArgs::new();

    if !args.has_next() {
        if let Err(e) = help_cmd(&mut context) {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
        return;
    }

    while args.has_next() {
        if let Err(e) = args.parse_next(&mut context) {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
    debug!("All commands completed");
}
